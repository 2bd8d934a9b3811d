//! Form validation and submission core shared by the sign-up and login routes.
//!
//! Forms are plain structs updated by `update(msg) -> effects`; nothing in
//! here performs I/O. Controllers in [`crate::routes`] execute the effects and
//! feed results back as messages.

pub mod field;
pub mod login;
pub mod matching;
pub mod signup;
pub mod submission;
pub mod uniqueness;
pub mod validators;

pub use field::{ErrorKind, Field, FieldState};
pub use login::{LoginEffect, LoginForm, LoginMsg};
pub use signup::{SignUpEffect, SignUpForm, SignUpMsg};
pub use submission::{SubmissionState, SubmitPhase};
pub use uniqueness::{CheckOutcome, CheckTicket, UniquenessCheck};

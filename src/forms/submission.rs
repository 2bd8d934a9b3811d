/// Form-level banner for failures that cannot be attributed to anything better.
pub const GENERIC_ERROR: &str = "Unexpected error, please try again";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitPhase {
    #[default]
    Ready,
    Submitting,
    Success,
    Failed,
}

/// Single-flight submission tracker: `Ready -> Submitting -> (Success | Failed)`,
/// with `Failed` as editable as `Ready`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SubmissionState {
    phase: SubmitPhase,
    last_error: Option<String>,
}

impl SubmissionState {
    #[must_use]
    pub fn phase(&self) -> SubmitPhase {
        self.phase
    }

    #[must_use]
    pub fn in_progress(&self) -> bool {
        self.phase == SubmitPhase::Submitting
    }

    #[must_use]
    pub fn succeeded(&self) -> bool {
        self.phase == SubmitPhase::Success
    }

    #[must_use]
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Moves to `Submitting`. Returns `false`, changing nothing, while a
    /// submission is in flight or after success.
    pub fn begin(&mut self) -> bool {
        if matches!(self.phase, SubmitPhase::Submitting | SubmitPhase::Success) {
            return false;
        }
        self.phase = SubmitPhase::Submitting;
        self.last_error = None;
        true
    }

    pub fn succeed(&mut self) {
        self.phase = SubmitPhase::Success;
        self.last_error = None;
    }

    /// Returns to an editable state, optionally with a form-level banner.
    pub fn fail(&mut self, banner: Option<String>) {
        self.phase = SubmitPhase::Failed;
        self.last_error = banner;
    }

    pub fn clear_error(&mut self) {
        self.last_error = None;
    }
}

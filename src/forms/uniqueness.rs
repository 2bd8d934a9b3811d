//! Remote uniqueness check bookkeeping for a single field.
//!
//! Every requested check gets the next sequence number. A check stays pending
//! until the result for the latest sequence number arrives; results carrying
//! any older number are stale and must be dropped. Cancelling bumps the
//! sequence so in-flight results for the old value can never apply.

/// Identifies one requested check and the value it was requested for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CheckTicket {
    pub seq: u64,
    pub value: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CheckOutcome {
    Taken,
    Available,
    /// Transport failure or unexpected status.
    Failed,
}

#[derive(Debug, Default)]
pub struct UniquenessCheck {
    latest: u64,
    pending: bool,
}

impl UniquenessCheck {
    /// Starts a check for `value`, superseding any outstanding one.
    pub fn request(&mut self, value: &str) -> CheckTicket {
        self.latest += 1;
        self.pending = true;
        CheckTicket {
            seq: self.latest,
            value: value.to_string(),
        }
    }

    /// Drops interest in any outstanding check.
    pub fn cancel(&mut self) {
        self.latest += 1;
        self.pending = false;
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Whether `ticket` is the check the field is still waiting for.
    #[must_use]
    pub fn is_current(&self, ticket: &CheckTicket) -> bool {
        self.pending && ticket.seq == self.latest
    }

    /// Accepts the outcome for `ticket` if it is current. Returns `None` for
    /// stale results, which leave the state untouched.
    pub fn resolve(&mut self, ticket: &CheckTicket, outcome: CheckOutcome) -> Option<CheckOutcome> {
        if !self.is_current(ticket) {
            return None;
        }
        self.pending = false;
        Some(outcome)
    }
}

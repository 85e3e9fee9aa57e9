#![forbid(unsafe_code)]

//! Contact form submission status.
//!
//! The host performs the request; the tracker only decides what the form
//! shows. Every submission gets a ticket, and a result is accepted only for
//! the ticket currently in flight, so a late response from an abandoned
//! submission cannot overwrite a newer one.
//!
//! # Invariants
//!
//! 1. At most one ticket is in flight, and only while `Submitting`.
//! 2. `begin` while `Submitting` is refused.

/// What the form shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Error,
}

impl SubmissionStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Submitting => "submitting",
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

/// Identifies one submission attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubmissionTicket(u64);

impl SubmissionTicket {
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// Result of relaying the form to the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RelayOutcome {
    /// 2xx response.
    Accepted,
    /// Non-success HTTP status.
    Rejected { status: u16 },
    /// The request never completed.
    Failed(String),
}

/// Contact form status machine.
#[derive(Debug, Clone, Default)]
pub struct SubmissionTracker {
    status: SubmissionStatus,
    in_flight: Option<SubmissionTicket>,
    next_ticket: u64,
}

impl SubmissionTracker {
    pub const SUCCESS_MESSAGE: &'static str = "Thank you! Your message has been sent.";
    pub const ERROR_MESSAGE: &'static str =
        "Something went wrong. Please try again or email us directly.";

    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.status == SubmissionStatus::Submitting
    }

    /// Start a submission. `None` while one is already in flight.
    pub fn begin(&mut self) -> Option<SubmissionTicket> {
        if self.is_busy() {
            return None;
        }
        let ticket = SubmissionTicket(self.next_ticket);
        self.next_ticket += 1;
        self.in_flight = Some(ticket);
        self.status = SubmissionStatus::Submitting;
        #[cfg(feature = "tracing")]
        tracing::debug!(message = "submission.begin", ticket = ticket.raw());
        Some(ticket)
    }

    /// Record the outcome for `ticket`. Returns `false` for stale tickets.
    ///
    /// On `Accepted` the host should clear the form fields.
    pub fn resolve(&mut self, ticket: SubmissionTicket, outcome: RelayOutcome) -> bool {
        if self.in_flight != Some(ticket) {
            return false;
        }
        self.in_flight = None;
        self.status = match &outcome {
            RelayOutcome::Accepted => SubmissionStatus::Success,
            RelayOutcome::Rejected { .. } | RelayOutcome::Failed(_) => SubmissionStatus::Error,
        };
        #[cfg(feature = "tracing")]
        tracing::debug!(
            message = "submission.resolve",
            ticket = ticket.raw(),
            status = self.status.as_str(),
            outcome = ?outcome
        );
        true
    }

    /// Back to Idle, abandoning any in-flight ticket.
    pub fn reset(&mut self) {
        self.in_flight = None;
        self.status = SubmissionStatus::Idle;
    }

    /// Submit button caption.
    #[must_use]
    pub fn button_label(&self) -> &'static str {
        if self.is_busy() {
            "Sending..."
        } else {
            "Send Message"
        }
    }

    /// Feedback line under the form.
    #[must_use]
    pub fn message(&self) -> Option<&'static str> {
        match self.status {
            SubmissionStatus::Success => Some(Self::SUCCESS_MESSAGE),
            SubmissionStatus::Error => Some(Self::ERROR_MESSAGE),
            SubmissionStatus::Idle | SubmissionStatus::Submitting => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepted_submission_succeeds() {
        let mut t = SubmissionTracker::new();
        let ticket = t.begin().expect("idle tracker accepts");
        assert!(t.is_busy());
        assert_eq!(t.button_label(), "Sending...");
        assert!(t.resolve(ticket, RelayOutcome::Accepted));
        assert_eq!(t.status(), SubmissionStatus::Success);
        assert_eq!(t.message(), Some(SubmissionTracker::SUCCESS_MESSAGE));
    }

    #[test]
    fn rejected_and_failed_are_errors() {
        let mut t = SubmissionTracker::new();
        let a = t.begin().expect("ticket");
        t.resolve(a, RelayOutcome::Rejected { status: 422 });
        assert_eq!(t.status(), SubmissionStatus::Error);
        let b = t.begin().expect("ticket");
        t.resolve(b, RelayOutcome::Failed("offline".into()));
        assert_eq!(t.status(), SubmissionStatus::Error);
    }

    #[test]
    fn double_submit_is_refused() {
        let mut t = SubmissionTracker::new();
        assert!(t.begin().is_some());
        assert!(t.begin().is_none());
    }

    #[test]
    fn stale_ticket_is_ignored() {
        let mut t = SubmissionTracker::new();
        let old = t.begin().expect("ticket");
        t.reset();
        let new = t.begin().expect("ticket");
        assert!(!t.resolve(old, RelayOutcome::Accepted));
        assert!(t.is_busy());
        assert!(t.resolve(new, RelayOutcome::Rejected { status: 500 }));
    }

    #[test]
    fn resolve_twice_is_ignored() {
        let mut t = SubmissionTracker::new();
        let ticket = t.begin().expect("ticket");
        assert!(t.resolve(ticket, RelayOutcome::Accepted));
        assert!(!t.resolve(ticket, RelayOutcome::Failed("late".into())));
        assert_eq!(t.status(), SubmissionStatus::Success);
    }
}

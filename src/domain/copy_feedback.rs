use std::time::{Duration, Instant};

/// How long a copy result stays visible before the label reverts.
pub const FEEDBACK_DURATION: Duration = Duration::from_secs(2);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CopyStatus {
    #[default]
    Idle,
    Copied,
    Failed,
}

/// Transient outcome of the last copy, shown on the copy action.
#[derive(Debug, Clone, Copy, Default)]
pub struct CopyFeedback {
    status: CopyStatus,
    until: Option<Instant>,
}

impl CopyFeedback {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a copy result observed at `now`.
    pub fn record(&mut self, succeeded: bool, now: Instant) {
        self.status = if succeeded { CopyStatus::Copied } else { CopyStatus::Failed };
        self.until = Some(now + FEEDBACK_DURATION);
    }

    /// Status as of `now`; reverts to `Idle` once the feedback expired.
    pub fn status(&self, now: Instant) -> CopyStatus {
        match self.until {
            Some(until) if now < until => self.status,
            _ => CopyStatus::Idle,
        }
    }

    pub fn label(&self, now: Instant) -> &'static str {
        match self.status(now) {
            CopyStatus::Idle => "Copy",
            CopyStatus::Copied => "Copied!",
            CopyStatus::Failed => "Copy failed",
        }
    }
}

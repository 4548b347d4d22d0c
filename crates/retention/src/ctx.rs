//! Maintenance context for dependency injection

use chrono::{DateTime, Utc};
use upkeep_notify::Notifier;

/// Context shared by every folder in a run: the notifier and the instant
/// the run started. One "now" for the whole run keeps age cutoffs and
/// report dates consistent across folders.
pub struct MaintenanceCtx {
    /// Report transport (Slack or console fallback)
    pub notifier: Notifier,
    /// Wall-clock start of the run
    pub now: DateTime<Utc>,
}

impl MaintenanceCtx {
    /// Create a context starting now
    #[must_use]
    pub fn new(notifier: Notifier) -> Self {
        Self {
            notifier,
            now: Utc::now(),
        }
    }

    /// Create a context with a fixed clock, for tests
    #[must_use]
    pub fn with_now(notifier: Notifier, now: DateTime<Utc>) -> Self {
        Self { notifier, now }
    }
}

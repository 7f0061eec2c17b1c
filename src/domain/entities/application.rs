//! Account-opening application entity.

use chrono::{DateTime, Utc};

/// Lifecycle of an application inside the portal.
///
/// `Received` applications have been stored and queued; the background
/// worker moves them to `Processed` once the hand-off completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplicationStatus {
    Received,
    Processed,
}

/// A stored account-opening application.
#[derive(Debug, Clone, PartialEq)]
pub struct OnboardingApplication {
    /// Customer-facing reference code, e.g. `SOL-3kTb92Xw`.
    pub code: String,
    pub name: String,
    pub document: String,
    pub email: String,
    pub status: ApplicationStatus,
    pub submitted_at: DateTime<Utc>,
}

impl OnboardingApplication {
    pub fn is_processed(&self) -> bool {
        self.status == ApplicationStatus::Processed
    }
}

/// Input data for storing a new application.
#[derive(Debug, Clone)]
pub struct NewApplication {
    pub code: String,
    pub name: String,
    pub document: String,
    pub email: String,
}

//! Account-opening submission service.

use std::sync::Arc;

use serde_json::json;
use tokio::sync::mpsc;

use crate::domain::entities::{NewApplication, OnboardingApplication};
use crate::domain::repositories::ApplicationRepository;
use crate::domain::submission_event::SubmissionEvent;
use crate::error::AppError;
use crate::utils::application_code::generate_application_code;

/// Service for accepting account-opening applications.
///
/// Stores the application, assigns the customer-facing reference code and
/// queues the hand-off for the background worker. The queue send is
/// non-blocking: a full queue leaves the application in `Received` state
/// rather than stalling the response.
pub struct OnboardingService<R: ApplicationRepository> {
    repository: Arc<R>,
    submission_tx: mpsc::Sender<SubmissionEvent>,
}

impl<R: ApplicationRepository> OnboardingService<R> {
    /// Creates a new onboarding service.
    pub fn new(repository: Arc<R>, submission_tx: mpsc::Sender<SubmissionEvent>) -> Self {
        Self {
            repository,
            submission_tx,
        }
    }

    /// Accepts an application.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if an application for the same document
    /// already exists. Returns [`AppError::Internal`] on storage errors.
    pub async fn submit(
        &self,
        name: String,
        document: String,
        email: String,
    ) -> Result<OnboardingApplication, AppError> {
        if let Some(existing) = self.repository.find_by_document(&document).await? {
            return Err(AppError::conflict(
                "An application for this document already exists",
                json!({ "code": existing.code }),
            ));
        }

        let application = self
            .repository
            .create(NewApplication {
                code: generate_application_code(),
                name,
                document,
                email,
            })
            .await?;

        let event = SubmissionEvent {
            code: application.code.clone(),
            email: application.email.clone(),
        };

        if self.submission_tx.try_send(event).is_err() {
            tracing::warn!(code = %application.code, "submission queue full, hand-off deferred");
        }

        Ok(application)
    }
}

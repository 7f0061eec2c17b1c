//! In-memory store for account-opening applications.

use async_trait::async_trait;
use chrono::Utc;
use serde_json::json;
use tokio::sync::RwLock;

use crate::domain::entities::{ApplicationStatus, NewApplication, OnboardingApplication};
use crate::domain::repositories::ApplicationRepository;
use crate::error::AppError;

/// Application store backed by a `RwLock`-guarded vector.
///
/// Enforces document uniqueness the way a database unique constraint would,
/// so the service-level duplicate check and the store agree under races.
#[derive(Default)]
pub struct MemoryApplicationRepository {
    applications: RwLock<Vec<OnboardingApplication>>,
}

impl MemoryApplicationRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ApplicationRepository for MemoryApplicationRepository {
    async fn create(
        &self,
        application: NewApplication,
    ) -> Result<OnboardingApplication, AppError> {
        let mut applications = self.applications.write().await;

        if applications
            .iter()
            .any(|stored| stored.document == application.document)
        {
            return Err(AppError::conflict(
                "Unique constraint violation",
                json!({ "field": "document" }),
            ));
        }

        let stored = OnboardingApplication {
            code: application.code,
            name: application.name,
            document: application.document,
            email: application.email,
            status: ApplicationStatus::Received,
            submitted_at: Utc::now(),
        };

        applications.push(stored.clone());
        Ok(stored)
    }

    async fn find_by_document(
        &self,
        document: &str,
    ) -> Result<Option<OnboardingApplication>, AppError> {
        Ok(self
            .applications
            .read()
            .await
            .iter()
            .find(|application| application.document == document)
            .cloned())
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<OnboardingApplication>, AppError> {
        Ok(self
            .applications
            .read()
            .await
            .iter()
            .find(|application| application.code == code)
            .cloned())
    }

    async fn mark_processed(&self, code: &str) -> Result<bool, AppError> {
        let mut applications = self.applications.write().await;

        match applications
            .iter_mut()
            .find(|application| application.code == code)
        {
            Some(application) => {
                application.status = ApplicationStatus::Processed;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

//! Repository trait for account-opening applications.

use crate::domain::entities::{NewApplication, OnboardingApplication};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for onboarding applications.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::MemoryApplicationRepository`]
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ApplicationRepository: Send + Sync {
    /// Stores a new application.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if an application with the same
    /// document already exists.
    /// Returns [`AppError::Internal`] on storage errors.
    async fn create(
        &self,
        application: NewApplication,
    ) -> Result<OnboardingApplication, AppError>;

    /// Finds an application by the customer's identity document.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn find_by_document(
        &self,
        document: &str,
    ) -> Result<Option<OnboardingApplication>, AppError>;

    /// Finds an application by its reference code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn find_by_code(&self, code: &str) -> Result<Option<OnboardingApplication>, AppError>;

    /// Marks an application as processed after the hand-off completes.
    ///
    /// Returns `Ok(true)` if the application was found and updated,
    /// `Ok(false)` if no application matches the code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn mark_processed(&self, code: &str) -> Result<bool, AppError>;
}

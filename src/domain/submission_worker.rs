//! Background worker that finalizes accepted onboarding applications.
//!
//! Drains the submission channel and marks each stored application as
//! processed once the hand-off completes. The hand-off is retried with
//! exponential backoff before the event is given up on.

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio_retry::Retry;
use tokio_retry::strategy::{ExponentialBackoff, jitter};

use crate::domain::repositories::ApplicationRepository;
use crate::domain::submission_event::SubmissionEvent;

/// Backoff retries per event before it is given up on with an error log.
const MAX_RETRIES: usize = 3;

/// Processes submission events until the channel closes.
pub async fn run_submission_worker<R: ApplicationRepository>(
    mut rx: mpsc::Receiver<SubmissionEvent>,
    repository: Arc<R>,
) {
    while let Some(event) = rx.recv().await {
        let strategy = ExponentialBackoff::from_millis(50)
            .map(jitter)
            .take(MAX_RETRIES);

        let outcome = Retry::spawn(strategy, || repository.mark_processed(&event.code)).await;

        match outcome {
            Ok(true) => {
                tracing::info!(code = %event.code, email = %event.email, "application handed off");
            }
            Ok(false) => {
                tracing::warn!(code = %event.code, "application vanished before hand-off");
            }
            Err(e) => {
                tracing::error!(code = %event.code, error = %e, "failed to hand off application");
            }
        }
    }

    tracing::info!("Submission worker stopped");
}

//! Submission event model for asynchronous onboarding hand-off.

/// An in-memory representation of an accepted application, queued for the
/// background worker.
///
/// Used to pass the hand-off from the HTTP handler to the worker via a
/// channel, so the submission response never waits on downstream systems.
///
/// # Design
///
/// - Denormalized (code + email) so the worker never goes back to the
///   request context
/// - Cloneable for sending across async boundaries
#[derive(Debug, Clone)]
pub struct SubmissionEvent {
    /// Reference code of the stored application.
    pub code: String,
    /// Address the acknowledgement goes out to.
    pub email: String,
}

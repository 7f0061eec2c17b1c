//! DTOs for the account-opening endpoint.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use validator::Validate;

/// Identity document: C.C. / C.E. style, digits with optional letters and
/// hyphens.
static DOCUMENT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9-]{5,20}$").unwrap());

/// Request body for `POST /onboarding`.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct OnboardingRequest {
    #[validate(length(min = 3, max = 120, message = "Name must have at least 3 characters"))]
    pub name: String,

    #[validate(regex(
        path = "*DOCUMENT_REGEX",
        message = "Document must be 5-20 letters, digits or hyphens"
    ))]
    pub document: String,

    #[validate(email(message = "Invalid email address"))]
    pub email: String,
}

/// Response body for an accepted application.
#[derive(Debug, Serialize)]
pub struct OnboardingResponse {
    /// Customer-facing reference code.
    pub id: String,
    pub message: String,
}

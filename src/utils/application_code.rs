//! Application reference-code generation.
//!
//! Every accepted account-opening application gets an opaque customer-facing
//! code the call center can look it up by.

use base64::Engine as _;

/// Length of random bytes before base64 encoding.
const CODE_LENGTH_BYTES: usize = 6;

/// Prefix shown to the customer ("solicitud").
const CODE_PREFIX: &str = "SOL";

/// Generates a reference code like `SOL-3kTb92Xw`.
///
/// Uses `getrandom` for entropy and encodes the result as URL-safe base64
/// without padding, producing an 8-character suffix.
///
/// # Panics
///
/// Panics if the system random number generator fails (extremely rare).
pub fn generate_application_code() -> String {
    let mut buffer = [0u8; CODE_LENGTH_BYTES];

    getrandom::fill(&mut buffer).expect("Failed to generate random bytes");

    format!(
        "{}-{}",
        CODE_PREFIX,
        base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(buffer)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_code_has_prefix_and_length() {
        let code = generate_application_code();
        assert!(code.starts_with("SOL-"));
        assert_eq!(code.len(), 12);
    }

    #[test]
    fn test_code_suffix_is_url_safe() {
        let code = generate_application_code();
        let suffix = code.strip_prefix("SOL-").unwrap();
        assert!(
            suffix
                .chars()
                .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
        );
        assert!(!suffix.contains('='));
    }

    #[test]
    fn test_codes_are_unique() {
        let mut codes = HashSet::new();

        for _ in 0..1000 {
            codes.insert(generate_application_code());
        }

        assert_eq!(codes.len(), 1000);
    }
}

//! Hostname validation for the address bar
//!
//! Validation happens before any network I/O so that a malformed address
//! is reported immediately and the UI stays in its pre-connect state.

use std::sync::OnceLock;

use regex::Regex;

use crate::error::{ClientError, ClientResult};

/// RFC 1123 host label grammar, with an optional trailing dot for FQDNs.
/// IPv4 literals happen to match the same grammar.
const HOSTNAME_PATTERN: &str =
    r"^[A-Za-z0-9]([A-Za-z0-9-]{0,61}[A-Za-z0-9])?(\.[A-Za-z0-9]([A-Za-z0-9-]{0,61}[A-Za-z0-9])?)*\.?$";

fn hostname_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(HOSTNAME_PATTERN).expect("hostname pattern is valid"))
}

/// Validates a hostname entered in the address bar.
///
/// Returns the trimmed hostname on success. Rejects empty input, embedded
/// whitespace, URL schemes/paths/ports, and anything outside the hostname
/// grammar.
///
/// # Errors
///
/// Returns [`ClientError::InvalidAddress`] with a user-facing message.
pub fn validate_hostname(input: &str) -> ClientResult<String> {
    let host = input.trim();

    if host.is_empty() {
        return Err(ClientError::InvalidAddress(
            "hostname must not be empty".into(),
        ));
    }
    if host.len() > 253 {
        return Err(ClientError::InvalidAddress(format!(
            "hostname is too long ({} characters)",
            host.len()
        )));
    }
    if host.contains("://") || host.contains('/') {
        return Err(ClientError::InvalidAddress(
            "enter a bare hostname, not a URL".into(),
        ));
    }
    if !hostname_regex().is_match(host) {
        return Err(ClientError::InvalidAddress(format!(
            "'{host}' is not a valid hostname"
        )));
    }

    Ok(host.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_hostnames() {
        assert_eq!(validate_hostname("vrops01").unwrap(), "vrops01");
        assert_eq!(
            validate_hostname("ops.example.com").unwrap(),
            "ops.example.com"
        );
        assert_eq!(validate_hostname("10.0.0.5").unwrap(), "10.0.0.5");
    }

    #[test]
    fn trims_surrounding_whitespace() {
        assert_eq!(validate_hostname("  host1  ").unwrap(), "host1");
    }

    #[test]
    fn rejects_empty_and_blank() {
        assert!(validate_hostname("").is_err());
        assert!(validate_hostname("   ").is_err());
    }

    #[test]
    fn rejects_urls_and_paths() {
        assert!(validate_hostname("https://ops.example.com").is_err());
        assert!(validate_hostname("ops.example.com/suite-api").is_err());
    }

    #[test]
    fn rejects_bad_characters() {
        assert!(validate_hostname("host name").is_err());
        assert!(validate_hostname("host_1").is_err());
        assert!(validate_hostname("-leading.example.com").is_err());
        assert!(validate_hostname("trailing-.example.com").is_err());
    }

    #[test]
    fn error_is_invalid_address() {
        let err = validate_hostname("no spaces allowed").unwrap_err();
        assert!(matches!(err, ClientError::InvalidAddress(_)));
    }
}

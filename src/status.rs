//! SAML 2.0 status code taxonomy
//!
//! URN constants for the status and sub-status values carried in an
//! authentication response, plus small classification helpers. These are
//! advisory: [`crate::AuthnResponse`] stores status strings verbatim and the
//! taxonomy is open-ended, so unknown URNs pass through untouched.

/// Top-level status: the request succeeded
pub const SUCCESS: &str = "urn:oasis:names:tc:SAML:2.0:status:Success";

/// Top-level status: the request could not be performed due to the requester
pub const REQUESTER: &str = "urn:oasis:names:tc:SAML:2.0:status:Requester";

/// Top-level status: the responder could not perform the request
pub const RESPONDER: &str = "urn:oasis:names:tc:SAML:2.0:status:Responder";

/// Top-level status: protocol version mismatch
pub const VERSION_MISMATCH: &str = "urn:oasis:names:tc:SAML:2.0:status:VersionMismatch";

/// Sub-status: the authentication of the subject failed
pub const AUTHN_FAILED: &str = "urn:oasis:names:tc:SAML:2.0:status:AuthnFailed";

/// Sub-status: an attribute name or value was invalid
pub const INVALID_ATTR_NAME_OR_VALUE: &str =
    "urn:oasis:names:tc:SAML:2.0:status:InvalidAttrNameOrValue";

/// Sub-status: the requested name identifier policy cannot be satisfied
pub const INVALID_NAMEID_POLICY: &str =
    "urn:oasis:names:tc:SAML:2.0:status:InvalidNameIDPolicy";

/// Sub-status: the responder refuses to perform the request
pub const REQUEST_DENIED: &str = "urn:oasis:names:tc:SAML:2.0:status:RequestDenied";

/// Whether a status code URN denotes success
#[must_use]
pub fn is_success(status_code: &str) -> bool {
    status_code == SUCCESS
}

/// Whether a status code URN denotes a failure outcome.
///
/// Anything that is not the success URN counts as failure, including
/// unknown or empty codes; the taxonomy is open-ended and this helper
/// takes the conservative reading.
#[must_use]
pub fn is_failure(status_code: &str) -> bool {
    !is_success(status_code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_urn_classifies_as_success() {
        assert!(is_success(SUCCESS));
        assert!(!is_failure(SUCCESS));
    }

    #[test]
    fn non_success_urns_classify_as_failure() {
        assert!(is_failure(REQUESTER));
        assert!(is_failure(AUTHN_FAILED));
        assert!(is_failure(""));
        assert!(is_failure("urn:example:custom:Outcome"));
    }
}

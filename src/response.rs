//! The decoded authentication-response entity
//!
//! [`AuthnResponse`] holds the field set produced by decoding one
//! authentication-response assertion. It is a transparent carrier: scalar
//! setters accept and store any value so a dedicated policy collaborator can
//! apply configurable validation later. The two reference-typed fields are
//! the only aliasing hazard, and both follow a strict copy discipline:
//! token bytes are copied on the way in and on the way out, and the
//! attribute collection is handed out only as an independent copy obtained
//! through its own clone capability. No locks are held; correctness under
//! sharing relies entirely on this copy discipline.

use std::fmt;

use base64::Engine as _;
use chrono::{DateTime, Utc};

use crate::attributes::{AttributeCopyError, PersonalAttributeCollection, PersonalAttributeList};

/// A decoded authentication-response assertion.
///
/// Constructed once by the assertion-decoding collaborator (after
/// decryption, for encrypted responses), populated field by field, and
/// treated as read-only by downstream consumers. Absence of asserted
/// attributes is an empty collection, never an unset one.
#[derive(Debug)]
pub struct AuthnResponse {
    response_id: String,
    in_response_to: String,
    issuer: String,
    country: String,
    fail: bool,
    status_code: String,
    sub_status_code: String,
    message: Option<String>,
    audience_restriction: String,
    not_before: Option<DateTime<Utc>>,
    not_on_or_after: Option<DateTime<Utc>>,
    assurance_level: String,
    encrypted: bool,
    token_bytes: Vec<u8>,
    attributes: Box<dyn PersonalAttributeCollection>,
}

impl Default for AuthnResponse {
    fn default() -> Self {
        Self {
            response_id: String::new(),
            in_response_to: String::new(),
            issuer: String::new(),
            country: String::new(),
            fail: false,
            status_code: String::new(),
            sub_status_code: String::new(),
            message: None,
            audience_restriction: String::new(),
            not_before: None,
            not_on_or_after: None,
            assurance_level: String::new(),
            encrypted: false,
            token_bytes: Vec::new(),
            attributes: Box::new(PersonalAttributeList::new()),
        }
    }
}

impl AuthnResponse {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Unique identifier of this response assertion
    #[must_use]
    pub fn response_id(&self) -> &str {
        &self.response_id
    }

    pub fn set_response_id(&mut self, response_id: impl Into<String>) {
        self.response_id = response_id.into();
    }

    /// Identifier of the request this response answers
    #[must_use]
    pub fn in_response_to(&self) -> &str {
        &self.in_response_to
    }

    pub fn set_in_response_to(&mut self, in_response_to: impl Into<String>) {
        self.in_response_to = in_response_to.into();
    }

    /// Entity that issued the response
    #[must_use]
    pub fn issuer(&self) -> &str {
        &self.issuer
    }

    pub fn set_issuer(&mut self, issuer: impl Into<String>) {
        self.issuer = issuer.into();
    }

    /// Origin country code of the responding identity provider
    #[must_use]
    pub fn country(&self) -> &str {
        &self.country
    }

    pub fn set_country(&mut self, country: impl Into<String>) {
        self.country = country.into();
    }

    /// Whether the authentication attempt failed.
    ///
    /// Expected to correlate with a failure-indicating status code, but the
    /// correlation is not checked here; the validation collaborator owns it.
    #[must_use]
    pub fn is_fail(&self) -> bool {
        self.fail
    }

    pub fn set_fail(&mut self, fail: bool) {
        self.fail = fail;
    }

    /// Primary outcome status (open-ended URN taxonomy, see [`crate::status`])
    #[must_use]
    pub fn status_code(&self) -> &str {
        &self.status_code
    }

    pub fn set_status_code(&mut self, status_code: impl Into<String>) {
        self.status_code = status_code.into();
    }

    /// Secondary, refined outcome status
    #[must_use]
    pub fn sub_status_code(&self) -> &str {
        &self.sub_status_code
    }

    pub fn set_sub_status_code(&mut self, sub_status_code: impl Into<String>) {
        self.sub_status_code = sub_status_code.into();
    }

    /// Human-readable error or status detail, if any
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn set_message(&mut self, message: Option<String>) {
        self.message = message;
    }

    /// Restriction on the intended recipient of the assertion
    #[must_use]
    pub fn audience_restriction(&self) -> &str {
        &self.audience_restriction
    }

    pub fn set_audience_restriction(&mut self, audience_restriction: impl Into<String>) {
        self.audience_restriction = audience_restriction.into();
    }

    /// Start of the validity window
    #[must_use]
    pub fn not_before(&self) -> Option<DateTime<Utc>> {
        self.not_before
    }

    /// Stored verbatim; ordering against `not_on_or_after` is not checked here
    pub fn set_not_before(&mut self, not_before: Option<DateTime<Utc>>) {
        self.not_before = not_before;
    }

    /// End of the validity window (exclusive)
    #[must_use]
    pub fn not_on_or_after(&self) -> Option<DateTime<Utc>> {
        self.not_on_or_after
    }

    pub fn set_not_on_or_after(&mut self, not_on_or_after: Option<DateTime<Utc>>) {
        self.not_on_or_after = not_on_or_after;
    }

    /// Level-of-assurance identifier for the authentication event
    #[must_use]
    pub fn assurance_level(&self) -> &str {
        &self.assurance_level
    }

    pub fn set_assurance_level(&mut self, assurance_level: impl Into<String>) {
        self.assurance_level = assurance_level.into();
    }

    /// Whether the original assertion payload was transported encrypted
    #[must_use]
    pub fn is_encrypted(&self) -> bool {
        self.encrypted
    }

    pub fn set_encrypted(&mut self, encrypted: bool) {
        self.encrypted = encrypted;
    }

    /// Independent copy of the raw encoded assertion payload.
    ///
    /// Empty (never absent) before any [`set_token_bytes`] call. Mutating
    /// the returned buffer has no effect on the entity.
    ///
    /// [`set_token_bytes`]: Self::set_token_bytes
    #[must_use]
    pub fn token_bytes(&self) -> Vec<u8> {
        self.token_bytes.clone()
    }

    /// Store an independent copy of the raw token.
    ///
    /// `None` leaves the existing buffer unchanged (ignore-null policy, not
    /// an error); the caller's buffer is never retained, so mutating it
    /// after this call cannot corrupt the entity.
    pub fn set_token_bytes(&mut self, token_bytes: Option<&[u8]>) {
        if let Some(bytes) = token_bytes {
            self.token_bytes = bytes.to_vec();
        }
    }

    /// Base64 rendering of the raw token, for audit logging
    #[must_use]
    pub fn token_base64(&self) -> String {
        base64::engine::general_purpose::STANDARD.encode(&self.token_bytes)
    }

    /// Independent copy of the asserted attribute collection.
    ///
    /// The copy is obtained through the collection's own clone capability;
    /// the caller may mutate it freely. If the copy cannot be produced the
    /// failure is logged as a trace diagnostic and `None` is returned —
    /// callers must read `None` as "could not safely expose attributes",
    /// not "no attributes" (absence is an empty collection). Callers that
    /// need to distinguish the two use [`try_clone_attributes`].
    ///
    /// [`try_clone_attributes`]: Self::try_clone_attributes
    #[must_use]
    pub fn attributes(&self) -> Option<Box<dyn PersonalAttributeCollection>> {
        match self.attributes.try_clone() {
            Ok(copy) => Some(copy),
            Err(err) => {
                log::trace!("personal attribute copy unavailable: {err}");
                None
            }
        }
    }

    /// Independent copy of the asserted attribute collection, surfacing the
    /// copy failure instead of swallowing it.
    ///
    /// # Errors
    ///
    /// Returns [`AttributeCopyError`] when the collection's clone capability
    /// cannot produce an independent copy.
    pub fn try_clone_attributes(
        &self,
    ) -> Result<Box<dyn PersonalAttributeCollection>, AttributeCopyError> {
        self.attributes.try_clone()
    }

    /// Replace the internal attribute collection.
    ///
    /// Ownership of further mutation transfers to the entity; `None` is a
    /// no-op and preserves the prior collection.
    pub fn set_attributes(&mut self, attributes: Option<Box<dyn PersonalAttributeCollection>>) {
        if let Some(collection) = attributes {
            self.attributes = collection;
        }
    }
}

/// Deterministic labeled field dump for audit logging, one field per line.
///
/// Token bytes and attribute contents are deliberately omitted: the token is
/// sensitive and both are reachable through their accessors.
impl fmt::Display for AuthnResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let not_on_or_after = self.not_on_or_after.map(|t| t.to_rfc3339());
        let not_before = self.not_before.map(|t| t.to_rfc3339());
        writeln!(f, "AuthnResponse [")?;
        writeln!(f, "{:<22}{},", "response_id", self.response_id)?;
        writeln!(f, "{:<22}{},", "fail", self.fail)?;
        writeln!(f, "{:<22}{},", "status_code", self.status_code)?;
        writeln!(f, "{:<22}{},", "sub_status_code", self.sub_status_code)?;
        writeln!(f, "{:<22}{},", "audience_restriction", self.audience_restriction)?;
        writeln!(f, "{:<22}{},", "message", self.message.as_deref().unwrap_or(""))?;
        writeln!(f, "{:<22}{},", "in_response_to", self.in_response_to)?;
        writeln!(f, "{:<22}{},", "not_on_or_after", not_on_or_after.as_deref().unwrap_or(""))?;
        writeln!(f, "{:<22}{},", "not_before", not_before.as_deref().unwrap_or(""))?;
        writeln!(f, "{:<22}{},", "country", self.country)?;
        writeln!(f, "{:<22}{},", "issuer", self.issuer)?;
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attributes::PersonalAttribute;

    #[test]
    fn token_bytes_default_is_empty_not_absent() {
        let response = AuthnResponse::new();
        assert_eq!(response.token_bytes(), Vec::<u8>::new());
    }

    #[test]
    fn set_token_bytes_none_preserves_previous_value() {
        let mut response = AuthnResponse::new();
        response.set_token_bytes(Some(&[0xAA, 0xBB]));
        response.set_token_bytes(None);
        assert_eq!(response.token_bytes(), vec![0xAA, 0xBB]);
    }

    #[test]
    fn second_set_token_bytes_leaves_no_residue() {
        let mut response = AuthnResponse::new();
        response.set_token_bytes(Some(&[0x01, 0x02, 0x03, 0x04]));
        response.set_token_bytes(Some(&[0x05]));
        assert_eq!(response.token_bytes(), vec![0x05]);
    }

    #[test]
    fn mutating_returned_token_buffer_does_not_affect_entity() {
        let mut response = AuthnResponse::new();
        response.set_token_bytes(Some(&[1, 2, 3]));
        let mut leaked = response.token_bytes();
        leaked[0] = 99;
        assert_eq!(response.token_bytes(), vec![1, 2, 3]);
    }

    #[test]
    fn mutating_input_buffer_after_set_does_not_affect_entity() {
        let mut response = AuthnResponse::new();
        let mut input = vec![1, 2, 3];
        response.set_token_bytes(Some(&input));
        input[0] = 99;
        assert_eq!(response.token_bytes(), vec![1, 2, 3]);
    }

    #[test]
    fn attributes_default_is_empty_not_absent() {
        let response = AuthnResponse::new();
        let attrs = response.attributes().expect("copy of empty list succeeds");
        assert!(attrs.is_empty());
    }

    #[test]
    fn set_attributes_none_is_a_no_op() {
        let mut response = AuthnResponse::new();
        let mut list = PersonalAttributeList::new();
        list.push(PersonalAttribute::simple("given_name", ["Ana"]));
        response.set_attributes(Some(Box::new(list)));
        response.set_attributes(None);
        assert_eq!(response.attributes().unwrap().len(), 1);
    }

    #[test]
    fn token_base64_renders_stored_bytes() {
        let mut response = AuthnResponse::new();
        response.set_token_bytes(Some(b"saml"));
        assert_eq!(response.token_base64(), "c2FtbA==");
    }

    #[test]
    fn display_dumps_labeled_fields_with_closing_delimiter() {
        let mut response = AuthnResponse::new();
        response.set_response_id("_resp1");
        response.set_country("PT");
        let dump = response.to_string();
        assert!(dump.starts_with("AuthnResponse [\n"));
        assert!(dump.contains(&format!("{:<22}{},\n", "response_id", "_resp1")));
        assert!(dump.contains(&format!("{:<22}{},\n", "country", "PT")));
        assert!(dump.ends_with(']'));
    }
}

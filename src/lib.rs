#![warn(clippy::pedantic)]
#![warn(clippy::cargo)]
#![deny(warnings)]
#![allow(clippy::multiple_crate_versions)]

//! In-memory model of an authentication-response assertion exchanged in a
//! cross-border identity federation (SAML-style single sign-on).
//!
//! The crate receives already-decoded field values from an assertion-decoding
//! collaborator and exposes them to validation, session-issuance, and audit
//! consumers. It performs no parsing, no signature verification, and no
//! temporal validation itself; its one hard guarantee is the defensive-copy
//! contract on the two reference-typed fields (the raw token bytes and the
//! personal attribute collection), which keeps internal state unreachable
//! through returned values.

/// Version of the authn-commons crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod attributes;
pub mod response;
pub mod status;

/// Re-export commonly used items
pub use attributes::{
    AttributeCopyError, AttributeValue, PersonalAttribute, PersonalAttributeCollection,
    PersonalAttributeList,
};
pub use response::AuthnResponse;

//! Personal attribute collections asserted about an authenticated subject
//!
//! This module defines the capability contract that [`crate::AuthnResponse`]
//! depends on — enumerate, look up by name, and produce an independent copy —
//! together with the concrete attribute data types and a `Vec`-backed
//! reference implementation. The entity never depends on a concrete
//! collection type, only on this trait.

mod attribute;
mod list;

pub use attribute::{AttributeValue, PersonalAttribute};
pub use list::PersonalAttributeList;

use std::fmt;

use thiserror::Error;

/// Failure to produce a structurally independent copy of an attribute
/// collection.
///
/// Raised by [`PersonalAttributeCollection::try_clone`] when a contained
/// attribute cannot be duplicated. Implementations must signal this instead
/// of returning a partial or aliased copy.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cannot produce an independent copy of attribute `{attribute}`")]
pub struct AttributeCopyError {
    /// Name of the attribute that could not be duplicated
    pub attribute: String,
}

impl AttributeCopyError {
    #[must_use]
    pub fn new(attribute: impl Into<String>) -> Self {
        Self {
            attribute: attribute.into(),
        }
    }
}

/// Capability set for a collection of asserted personal attributes.
///
/// Iteration order is the implementation's choice but must be stable within
/// a single copy. Copying is explicit and fallible: consumers that need
/// their own mutable view call [`try_clone`](Self::try_clone) and never
/// receive a reference into shared state.
pub trait PersonalAttributeCollection: fmt::Debug {
    /// Enumerate the contained attributes
    fn iter(&self) -> Box<dyn Iterator<Item = &PersonalAttribute> + '_>;

    /// Look up an attribute by name
    fn get(&self, name: &str) -> Option<&PersonalAttribute>;

    /// Number of contained attributes
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Produce a structurally independent copy of this collection.
    ///
    /// # Errors
    ///
    /// Returns [`AttributeCopyError`] if any contained attribute cannot be
    /// duplicated. A failed copy leaves nothing aliased: implementations
    /// must not hand back a partial result.
    fn try_clone(&self) -> Result<Box<dyn PersonalAttributeCollection>, AttributeCopyError>;
}

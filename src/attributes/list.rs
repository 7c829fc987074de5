//! Reference implementation of the attribute collection contract

use super::{AttributeCopyError, PersonalAttribute, PersonalAttributeCollection};

/// Insertion-ordered attribute collection backed by a `Vec`.
///
/// Lookup by name returns the first attribute with that name. Copying
/// cannot fail for this implementation, so [`try_clone`] always succeeds;
/// the fallible signature exists for implementations holding values that
/// cannot be duplicated.
///
/// [`try_clone`]: PersonalAttributeCollection::try_clone
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersonalAttributeList {
    attributes: Vec<PersonalAttribute>,
}

impl PersonalAttributeList {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an attribute, keeping insertion order
    pub fn push(&mut self, attribute: PersonalAttribute) {
        self.attributes.push(attribute);
    }
}

impl From<Vec<PersonalAttribute>> for PersonalAttributeList {
    fn from(attributes: Vec<PersonalAttribute>) -> Self {
        Self { attributes }
    }
}

impl FromIterator<PersonalAttribute> for PersonalAttributeList {
    fn from_iter<I: IntoIterator<Item = PersonalAttribute>>(iter: I) -> Self {
        Self {
            attributes: iter.into_iter().collect(),
        }
    }
}

impl PersonalAttributeCollection for PersonalAttributeList {
    fn iter(&self) -> Box<dyn Iterator<Item = &PersonalAttribute> + '_> {
        Box::new(self.attributes.iter())
    }

    fn get(&self, name: &str) -> Option<&PersonalAttribute> {
        self.attributes.iter().find(|attr| attr.name == name)
    }

    fn len(&self) -> usize {
        self.attributes.len()
    }

    fn try_clone(&self) -> Result<Box<dyn PersonalAttributeCollection>, AttributeCopyError> {
        Ok(Box::new(self.clone()))
    }
}

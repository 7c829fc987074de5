//! Attribute data types

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Value of a single asserted attribute.
///
/// Identity providers assert either flat multi-valued attributes (e.g. a
/// list of given names) or structured ones (e.g. a postal address broken
/// into named parts).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AttributeValue {
    /// Flat list of string values
    Simple(Vec<String>),
    /// Structured value keyed by part name
    Complex(BTreeMap<String, String>),
}

impl AttributeValue {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            AttributeValue::Simple(values) => values.is_empty(),
            AttributeValue::Complex(parts) => parts.is_empty(),
        }
    }

    /// First value of a simple attribute, if any
    #[must_use]
    pub fn first(&self) -> Option<&str> {
        match self {
            AttributeValue::Simple(values) => values.first().map(String::as_str),
            AttributeValue::Complex(_) => None,
        }
    }
}

/// One attribute asserted about the authenticated subject
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct PersonalAttribute {
    /// Attribute name as carried in the assertion
    pub name: String,
    /// Whether the relying service marked this attribute as required
    pub required: bool,
    pub value: AttributeValue,
}

impl PersonalAttribute {
    /// Create a simple multi-valued attribute
    #[must_use]
    pub fn simple(
        name: impl Into<String>,
        values: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            name: name.into(),
            required: false,
            value: AttributeValue::Simple(values.into_iter().map(Into::into).collect()),
        }
    }

    /// Create a structured attribute from named parts
    #[must_use]
    pub fn complex(
        name: impl Into<String>,
        parts: impl IntoIterator<Item = (impl Into<String>, impl Into<String>)>,
    ) -> Self {
        Self {
            name: name.into(),
            required: false,
            value: AttributeValue::Complex(
                parts
                    .into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        }
    }

    /// Mark the attribute as required by the relying service
    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_attribute_exposes_first_value() {
        let attr = PersonalAttribute::simple("given_name", ["Ana", "Maria"]);
        assert_eq!(attr.value.first(), Some("Ana"));
        assert!(!attr.value.is_empty());
        assert!(!attr.required);
    }

    #[test]
    fn complex_attribute_has_no_first_value() {
        let attr =
            PersonalAttribute::complex("current_address", [("town", "Lisboa"), ("post_code", "1000")])
                .required();
        assert_eq!(attr.value.first(), None);
        assert!(attr.required);
    }

    #[test]
    fn attribute_serializes_with_tagged_value() {
        let attr = PersonalAttribute::simple("date_of_birth", ["1990-01-01"]);
        let json = serde_json::to_value(&attr).unwrap();
        assert_eq!(json["name"], "date_of_birth");
        assert_eq!(json["value"]["simple"][0], "1990-01-01");
    }
}

use serde::Serialize;

use super::{Category, Validity};

/// A candidate address with its rationale and declared label.
///
/// The label comes from the category, never from inspecting `address`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TestCase {
    pub address: String,
    pub description: String,
    pub validity: Validity,
    pub category: Category,
}

impl TestCase {
    /// Builds a case for `category` with the given address.
    pub fn new(category: Category, address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            description: category.description().to_string(),
            validity: category.validity(),
            category,
        }
    }

    /// Builds a case for a category with a fixed address.
    /// Returns `None` for randomized categories.
    pub fn literal(category: Category) -> Option<Self> {
        category.literal().map(|address| Self::new(category, address))
    }

    pub fn expected_valid(&self) -> bool {
        self.validity.expected_valid()
    }

    /// The part before the last `@`, if any.
    pub fn local_part(&self) -> Option<&str> {
        self.address.rsplit_once('@').map(|(local, _)| local)
    }

    /// The part after the last `@`, if any.
    pub fn domain(&self) -> Option<&str> {
        self.address.rsplit_once('@').map(|(_, domain)| domain)
    }
}

impl AsRef<str> for TestCase {
    fn as_ref(&self) -> &str {
        &self.address
    }
}

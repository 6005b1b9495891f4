use serde::{Deserialize, Serialize};

use super::normalize::normalize;

/// A caller-supplied keyword with its URL-comparable form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Keyword {
    /// Keyword exactly as imported.
    pub original: String,
    /// `normalize(original)`.
    pub formatted: String,
}

impl Keyword {
    /// Build a keyword from its raw form, normalizing once.
    #[must_use]
    pub fn new(original: impl Into<String>) -> Self {
        let original = original.into();
        let formatted = normalize(&original);
        Self {
            original,
            formatted,
        }
    }
}

impl From<&str> for Keyword {
    fn from(original: &str) -> Self {
        Self::new(original)
    }
}

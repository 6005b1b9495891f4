//! Caller-owned set of keywords picked for export.

use serde::{Deserialize, Serialize};

use super::keyword::Keyword;

/// Insertion-ordered keyword set.
///
/// Adding a keyword already present is a no-op, as is removing one that is
/// absent. Equality is by value on both `original` and `formatted`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SelectedKeywords {
    items: Vec<Keyword>,
}

impl SelectedKeywords {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the keyword was newly added.
    pub fn insert(&mut self, keyword: Keyword) -> bool {
        if self.contains(&keyword) {
            return false;
        }
        self.items.push(keyword);
        true
    }

    /// Returns `true` if the keyword was present.
    pub fn remove(&mut self, keyword: &Keyword) -> bool {
        let before = self.items.len();
        self.items.retain(|k| k != keyword);
        self.items.len() != before
    }

    /// Add every keyword not yet selected, keeping their order.
    pub fn extend<I: IntoIterator<Item = Keyword>>(&mut self, keywords: I) {
        for keyword in keywords {
            self.insert(keyword);
        }
    }

    #[must_use]
    pub fn contains(&self, keyword: &Keyword) -> bool {
        self.items.contains(keyword)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Keyword> {
        self.items.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Keyword] {
        &self.items
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

impl FromIterator<Keyword> for SelectedKeywords {
    fn from_iter<I: IntoIterator<Item = Keyword>>(iter: I) -> Self {
        let mut selected = Self::new();
        selected.extend(iter);
        selected
    }
}

impl<'a> IntoIterator for &'a SelectedKeywords {
    type Item = &'a Keyword;
    type IntoIter = std::slice::Iter<'a, Keyword>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

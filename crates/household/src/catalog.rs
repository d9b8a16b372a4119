//! Known category and store names.

use serde::{Deserialize, Serialize};

/// Insertion-ordered set of names.
///
/// Removing a name never touches records already tagged with it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KnownNames(Vec<String>);

impl KnownNames {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.iter().any(|n| n == name)
    }

    /// Returns `false` if the name was already known.
    pub fn insert(&mut self, name: impl Into<String>) -> bool {
        let name = name.into();
        if self.contains(&name) {
            return false;
        }
        self.0.push(name);
        true
    }

    /// Returns `false` if the name was not known.
    pub fn remove(&mut self, name: &str) -> bool {
        let before = self.0.len();
        self.0.retain(|n| n != name);
        self.0.len() != before
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for KnownNames {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut names = KnownNames::new();
        for name in iter {
            names.insert(name);
        }
        names
    }
}

/// Categories offered when a household has none yet.
pub const DEFAULT_CATEGORIES: [&str; 6] = ["Pantry", "Fridge", "Freezer", "Cleaning", "Hygiene", "Other"];

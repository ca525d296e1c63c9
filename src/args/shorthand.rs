//! Shorthand table — single letters mapped to long option names.

use std::collections::HashMap;

/// Maps letters of short option clusters to canonical option names.
///
/// Letters without an entry resolve to themselves, so `-v` becomes `v`
/// unless the table says otherwise.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Shorthand {
    map: HashMap<char, String>,
}

impl Shorthand {
    /// An empty table: every letter is its own name.
    pub fn new() -> Self {
        Self::default()
    }

    /// The table used by the closure shim (`-o` → `output`).
    pub fn closure() -> Self {
        Self::new().with('o', "output")
    }

    /// Add (or replace) a mapping.
    pub fn with(mut self, letter: char, name: impl Into<String>) -> Self {
        self.map.insert(letter, name.into());
        self
    }

    /// Resolve a letter to its option name.
    pub fn resolve(&self, letter: char) -> String {
        self.map
            .get(&letter)
            .cloned()
            .unwrap_or_else(|| letter.to_string())
    }
}

impl<S: Into<String>> FromIterator<(char, S)> for Shorthand {
    fn from_iter<I: IntoIterator<Item = (char, S)>>(iter: I) -> Self {
        Self {
            map: iter
                .into_iter()
                .map(|(letter, name)| (letter, name.into()))
                .collect(),
        }
    }
}

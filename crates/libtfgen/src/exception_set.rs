use indexmap::IndexSet;
use serde::Serialize;

/// Names known to contain [`SEPARATOR`](crate::SEPARATOR) as part of the name
/// itself rather than as a join between nesting levels.
///
/// The set is collected while parsing (block prefixes and leaf names that
/// contain the separator) and consulted while re-segmenting flat names. It
/// only ever grows; entries cannot be removed.
/// Insertion order is preserved so that iteration is deterministic.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct ExceptionSet(IndexSet<String>);

impl ExceptionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `name` to the set. Returns `false` if it was already present.
    pub fn insert(&mut self, name: impl Into<String>) -> bool {
        self.0.insert(name.into())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains(name)
    }

    /// Whether some member starts with `word` and is longer than it, i.e.
    /// `word` is an incomplete piece of a known multi-word name.
    pub fn has_strict_extension(&self, word: &str) -> bool {
        self.0.iter().any(|name| {
            name.len() > word.len() && name.starts_with(word)
        })
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

impl<S: Into<String>> FromIterator<S> for ExceptionSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

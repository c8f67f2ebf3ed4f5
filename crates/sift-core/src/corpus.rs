use crate::CandidateId;

/// An immutable, ordered snapshot of the strings a query session runs
/// against.
///
/// A corpus is assembled once per session (a file listing, the open buffer
/// names, a command palette) and is read-only afterwards. Candidates are
/// addressed by position; see [`CandidateId`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Corpus {
    items: Vec<String>,
}

impl Corpus {
    pub fn new(items: Vec<String>) -> Self {
        Self { items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the candidate with the given id, or `None` when the id is out
    /// of range.
    pub fn get(&self, id: CandidateId) -> Option<&str> {
        self.items.get(id as usize).map(String::as_str)
    }

    /// Iterates candidates in corpus order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(String::as_str)
    }
}

impl From<Vec<String>> for Corpus {
    fn from(items: Vec<String>) -> Self {
        Self::new(items)
    }
}

impl FromIterator<String> for Corpus {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> FromIterator<&'a str> for Corpus {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(str::to_owned).collect())
    }
}

//! The set of message-type tags currently accepted for processing.

use colsync_types::MessageKind;
use std::collections::BTreeSet;

/// Tags the dispatcher currently accepts. Anything else is dropped.
///
/// Tags are plain strings because the set is configured from outside the
/// routing layer and may name kinds the router does not know.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListeningSet {
    tags: BTreeSet<String>,
}

impl ListeningSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if messages tagged `tag` should be processed.
    pub fn includes(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }

    /// Adds a tag. Returns false if it was already present.
    pub fn listen(&mut self, tag: impl Into<String>) -> bool {
        self.tags.insert(tag.into())
    }

    /// Adds a known kind by its wire tag.
    pub fn listen_kind(&mut self, kind: MessageKind) -> bool {
        self.listen(kind.as_tag())
    }

    /// Removes a tag. Returns false if it was not present.
    pub fn unlisten(&mut self, tag: &str) -> bool {
        self.tags.remove(tag)
    }

    /// Replaces the whole set.
    pub fn replace<I, S>(&mut self, tags: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    /// Iterates over the tags in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for ListeningSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            tags: iter.into_iter().map(Into::into).collect(),
        }
    }
}

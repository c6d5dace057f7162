use serde::{Deserialize, Serialize};

/// One dream journal entry as served by the feed backend.
///
/// The record is display input, not domain state: every field is shown
/// verbatim and nothing here is validated or normalized. `published_at` in
/// particular is opaque display text — whatever representation the backend
/// serialized is what the card shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DreamLogRecord {
    pub title: String,

    pub published_at: String,

    pub text_content: String,

    /// The backend serializes this under the legacy key `user`.
    #[serde(alias = "user")]
    pub author: Author,

    /// Absent and empty collapse to the same state at the decode boundary.
    #[serde(default)]
    pub tags: Vec<Tag>,
}

impl DreamLogRecord {
    /// Single predicate for the fallback path: no tags means no chips.
    pub fn has_tags(&self) -> bool {
        !self.tags.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub username: String,
}

/// A tag label. Tags carry no identity of their own; chip identity is
/// synthesized at render time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub name: String,
}

impl Tag {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

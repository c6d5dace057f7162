use serde::Serialize;

/// Literal shown in the tag region when the record carries no tags.
pub const NO_TAGS_FALLBACK: &str = "No tags available";

/// Label prefixing the tag region, with or without chips.
pub const TAG_REGION_LABEL: &str = "Tags:";

/// Glyph prefixing the author name in the attribution region.
pub const AUTHOR_GLYPH: &str = "👤";

/// One rendered card: four regions in fixed order.
///
/// The tree is an owned value; the source record is only borrowed while it
/// is built. Field text is carried verbatim from the record.
#[derive(Debug, Clone, Serialize)]
pub struct DreamCard {
    pub header: CardHeader,
    pub body: CardBody,
    pub attribution: CardAttribution,
    pub tags: TagRegion,
}

impl DreamCard {
    /// Visual equivalence: every displayed field, ignoring chip keys.
    ///
    /// Chip keys are regenerated on every render pass, so two passes over
    /// the same record compare equal here while their keys differ.
    pub fn same_appearance(&self, other: &DreamCard) -> bool {
        self.header == other.header
            && self.body == other.body
            && self.attribution == other.attribution
            && self.tags.same_appearance(&other.tags)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardHeader {
    pub title: String,
    /// Opaque display text; the renderer never parses or reformats it.
    pub published_at: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardBody {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardAttribution {
    pub glyph: String,
    pub username: String,
}

/// The tag region is either a run of chips or the fallback message, never
/// both and never neither.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum TagRegion {
    Chips { chips: Vec<TagChip> },
    Fallback { message: String },
}

impl TagRegion {
    pub fn chip_count(&self) -> usize {
        match self {
            TagRegion::Chips { chips } => chips.len(),
            TagRegion::Fallback { .. } => 0,
        }
    }

    fn same_appearance(&self, other: &TagRegion) -> bool {
        match (self, other) {
            (TagRegion::Chips { chips: a }, TagRegion::Chips { chips: b }) => {
                a.len() == b.len()
                    && a.iter()
                        .zip(b)
                        .all(|(x, y)| x.label == y.label && x.accent == y.accent)
            }
            (TagRegion::Fallback { message: a }, TagRegion::Fallback { message: b }) => a == b,
            _ => false,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TagChip {
    /// Synthetic reconciliation key, unique within one render pass.
    pub key: String,
    pub label: String,
    pub accent: ChipAccent,
}

/// Chip coloring. Every chip gets the same fixed accent; this is a visual
/// constant, not per-tag data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChipAccent {
    Blue,
}

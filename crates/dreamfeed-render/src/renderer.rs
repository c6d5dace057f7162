use dreamfeed_types::DreamLogRecord;

use crate::identity::{ChipKeyProvider, UuidKeyProvider};
use crate::layout::{
    AUTHOR_GLYPH, CardAttribution, CardBody, CardHeader, ChipAccent, DreamCard, NO_TAGS_FALLBACK,
    TagChip, TagRegion,
};

/// Projects one `DreamLogRecord` into a `DreamCard` layout tree.
///
/// The projection is total and side-effect free: same record in, same
/// appearance out, with only the synthetic chip keys varying between
/// passes. The renderer holds no state besides the injected key provider.
pub struct RecordRenderer<K: ChipKeyProvider = UuidKeyProvider> {
    keys: K,
}

impl RecordRenderer<UuidKeyProvider> {
    pub fn new() -> Self {
        Self::with_key_provider(UuidKeyProvider::new())
    }
}

impl Default for RecordRenderer<UuidKeyProvider> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: ChipKeyProvider> RecordRenderer<K> {
    pub fn with_key_provider(keys: K) -> Self {
        Self { keys }
    }

    pub fn render(&mut self, record: &DreamLogRecord) -> DreamCard {
        DreamCard {
            header: CardHeader {
                title: record.title.clone(),
                published_at: record.published_at.clone(),
            },
            body: CardBody {
                text: record.text_content.clone(),
            },
            attribution: CardAttribution {
                glyph: AUTHOR_GLYPH.to_string(),
                username: record.author.username.clone(),
            },
            tags: self.render_tag_region(record),
        }
    }

    fn render_tag_region(&mut self, record: &DreamLogRecord) -> TagRegion {
        if !record.has_tags() {
            return TagRegion::Fallback {
                message: NO_TAGS_FALLBACK.to_string(),
            };
        }

        let chips = record
            .tags
            .iter()
            .map(|tag| TagChip {
                key: self.keys.next_key(),
                label: tag.name.clone(),
                accent: ChipAccent::Blue,
            })
            .collect();

        TagRegion::Chips { chips }
    }
}

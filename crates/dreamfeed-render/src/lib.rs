// NOTE: Rendering Rationale
//
// Why a layout tree (not direct string output)?
// - The card is consumed by more than one surface (text view modes, JSON dump)
// - Views decide styling and density; the projection decides structure only
// - Visual assertions in tests read typed regions instead of scraping text
//
// Why synthetic chip keys (not tag name or index)?
// - Tags carry no identity field and duplicate names are legal
// - Keys are reconciliation handles for list consumers, not data; they are
//   regenerated every render and excluded from visual equivalence
// - The key source is injected so tests can substitute a deterministic one

pub mod identity;
pub mod layout;
pub mod renderer;

pub use identity::{ChipKeyProvider, UuidKeyProvider};
pub use layout::{
    AUTHOR_GLYPH, CardAttribution, CardBody, CardHeader, ChipAccent, DreamCard, NO_TAGS_FALLBACK,
    TAG_REGION_LABEL, TagChip, TagRegion,
};
pub use renderer::RecordRenderer;

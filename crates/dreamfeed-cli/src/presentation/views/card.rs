use std::fmt;

use dreamfeed_render::{ChipAccent, DreamCard, TAG_REGION_LABEL, TagChip, TagRegion};
use owo_colors::OwoColorize;

use crate::presentation::formatters::text;
use crate::presentation::view_models::{FeedViewModel, ViewMode};

// Display constants
const CARD_RULE_WIDTH: usize = 80;
const TITLE_COLUMN_WIDTH: usize = 28;
const AUTHOR_COLUMN_WIDTH: usize = 15;
const SNIPPET_MAX_LENGTH: usize = 40;

// --------------------------------------------------------
// Feed View
// --------------------------------------------------------

pub struct FeedView<'a> {
    data: &'a FeedViewModel,
    mode: ViewMode,
}

impl<'a> FeedView<'a> {
    pub fn new(data: &'a FeedViewModel, mode: ViewMode) -> Self {
        Self { data, mode }
    }

    fn render_minimal(&self, f: &mut fmt::Formatter) -> fmt::Result {
        // Minimal: just titles, one per line (for pipes/scripts)
        for card in &self.data.cards {
            writeln!(f, "{}", card.header.title)?;
        }
        Ok(())
    }

    fn render_compact(&self, f: &mut fmt::Formatter) -> fmt::Result {
        // Compact: one line per card with key info
        if self.data.cards.is_empty() {
            writeln!(f, "No dream logs found.")?;
            return Ok(());
        }

        writeln!(
            f,
            "{:<28}  {:<12}  {:<15}  {:>7}  SNIPPET",
            "TITLE", "PUBLISHED", "AUTHOR", "TAGS"
        )?;
        writeln!(f, "{}", "-".repeat(CARD_RULE_WIDTH + 20))?;

        for card in &self.data.cards {
            let title = text::truncate(&card.header.title, TITLE_COLUMN_WIDTH);
            let published = text::truncate(&card.header.published_at, 12);
            let author = text::truncate(&card.attribution.username, AUTHOR_COLUMN_WIDTH);

            let tag_count = match &card.tags {
                TagRegion::Chips { chips } => format!("{} tags", chips.len()),
                TagRegion::Fallback { .. } => "--".to_string(),
            };

            let snippet = text::snippet(&card.body.text, SNIPPET_MAX_LENGTH);

            writeln!(
                f,
                "{:<28}  {:<12}  {:<15}  {:>7}  {}",
                title, published, author, tag_count, snippet
            )?;
        }
        Ok(())
    }

    fn render_cards(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.data.cards.is_empty() {
            writeln!(f, "No dream logs found.")?;
            return Ok(());
        }

        for card in &self.data.cards {
            write!(f, "{}", CardView::new(card, self.mode))?;
        }
        Ok(())
    }
}

impl<'a> fmt::Display for FeedView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.mode {
            ViewMode::Minimal => self.render_minimal(f),
            ViewMode::Compact => self.render_compact(f),
            ViewMode::Standard | ViewMode::Verbose => self.render_cards(f),
        }
    }
}

// --------------------------------------------------------
// Card View
// --------------------------------------------------------

pub struct CardView<'a> {
    data: &'a DreamCard,
    mode: ViewMode,
}

impl<'a> CardView<'a> {
    pub fn new(data: &'a DreamCard, mode: ViewMode) -> Self {
        Self { data, mode }
    }

    fn write_tag_region(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.data.tags {
            TagRegion::Chips { chips } => {
                let rendered: Vec<String> = chips.iter().map(format_chip).collect();
                writeln!(f, "{} {}", TAG_REGION_LABEL, rendered.join(" "))?;

                // Verbose only: surface the synthetic reconciliation keys
                if matches!(self.mode, ViewMode::Verbose) {
                    for chip in chips {
                        writeln!(f, "  {:<20} key={}", chip.label, chip.key)?;
                    }
                }
            }
            TagRegion::Fallback { message } => {
                writeln!(f, "{} {}", TAG_REGION_LABEL, message)?;
            }
        }
        Ok(())
    }
}

impl<'a> fmt::Display for CardView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}", "=".repeat(CARD_RULE_WIDTH))?;

        // Header region: title above publish date, both verbatim
        writeln!(f, "{}", self.data.header.title)?;
        writeln!(f, "{}", self.data.header.published_at)?;
        writeln!(f, "{}", "-".repeat(CARD_RULE_WIDTH))?;

        // Body region
        writeln!(f, "{}", self.data.body.text)?;
        writeln!(f, "{}", "-".repeat(CARD_RULE_WIDTH))?;

        // Attribution region
        writeln!(
            f,
            "{} {}",
            self.data.attribution.glyph, self.data.attribution.username
        )?;

        // Tag region
        self.write_tag_region(f)?;

        writeln!(f, "{}", "=".repeat(CARD_RULE_WIDTH))?;
        writeln!(f)?;

        Ok(())
    }
}

fn format_chip(chip: &TagChip) -> String {
    match chip.accent {
        ChipAccent::Blue => format!("[{}]", chip.label.blue()),
    }
}

use anyhow::{Context, Result};
use dreamfeed_types::DreamLogRecord;

use crate::args::OutputFormat;
use crate::presentation::presenters::present_feed;
use crate::presentation::views::FeedView;
use crate::presentation::{ConsoleRenderer, ViewMode};

pub fn handle(
    input: &str,
    mode: ViewMode,
    format: OutputFormat,
    limit: Option<usize>,
) -> Result<()> {
    let raw = read_feed(input)?;

    let records: Vec<DreamLogRecord> = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse dream log feed from {}", describe(input)))?;

    let result = present_feed(&records, limit);
    let renderer = ConsoleRenderer::new(format.is_json());
    renderer.render(&result, FeedView::new(&result.content, mode))
}

fn read_feed(input: &str) -> Result<String> {
    if input == "-" {
        std::io::read_to_string(std::io::stdin()).context("failed to read feed from stdin")
    } else {
        std::fs::read_to_string(input)
            .with_context(|| format!("failed to read feed file '{}'", input))
    }
}

fn describe(input: &str) -> String {
    if input == "-" {
        "stdin".to_string()
    } else {
        format!("'{}'", input)
    }
}

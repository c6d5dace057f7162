use dreamfeed_render::{DreamCard, RecordRenderer};
use dreamfeed_types::DreamLogRecord;

use crate::presentation::view_models::{
    CommandResultViewModel, FeedViewModel, Guidance, StatusBadge,
};

pub fn present_feed(
    records: &[DreamLogRecord],
    limit: Option<usize>,
) -> CommandResultViewModel<FeedViewModel> {
    let view = build_feed_view(records, limit);
    let result = CommandResultViewModel::new(view);
    add_feed_guidance(result)
}

fn build_feed_view(records: &[DreamLogRecord], limit: Option<usize>) -> FeedViewModel {
    let total_count = records.len();
    let mut renderer = RecordRenderer::new();

    let cards: Vec<DreamCard> = records
        .iter()
        .take(limit.unwrap_or(usize::MAX))
        .map(|record| renderer.render(record))
        .collect();

    FeedViewModel {
        shown_count: cards.len(),
        total_count,
        cards,
    }
}

fn add_feed_guidance(
    mut result: CommandResultViewModel<FeedViewModel>,
) -> CommandResultViewModel<FeedViewModel> {
    let total_count = result.content.total_count;
    let shown_count = result.content.shown_count;

    if total_count == 0 {
        result = result
            .with_badge(StatusBadge::info("No dream logs in feed"))
            .with_suggestion(
                Guidance::new("Point dreamfeed at a JSON array of dream log records")
                    .with_command("dreamfeed render feed.json"),
            );
    } else {
        let label = if total_count == 1 {
            "1 dream log rendered".to_string()
        } else if shown_count < total_count {
            format!("{} of {} dream logs rendered", shown_count, total_count)
        } else {
            format!("{} dream logs rendered", total_count)
        };
        result = result.with_badge(StatusBadge::success(label));

        if shown_count < total_count {
            result = result.with_suggestion(
                Guidance::new("Raise or drop the limit to see the rest")
                    .with_command("dreamfeed render feed.json --limit N"),
            );
        }
    }

    result
}

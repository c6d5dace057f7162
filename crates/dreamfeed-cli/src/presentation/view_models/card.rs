use dreamfeed_render::DreamCard;
use serde::Serialize;

/// One rendered feed: the cards actually rendered plus counts describing
/// what the limit cut off. Raw data only; formatting lives in the views.
#[derive(Debug, Serialize)]
pub struct FeedViewModel {
    pub cards: Vec<DreamCard>,
    pub total_count: usize,
    pub shown_count: usize,
}

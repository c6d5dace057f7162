pub mod card;

pub use card::present_feed;

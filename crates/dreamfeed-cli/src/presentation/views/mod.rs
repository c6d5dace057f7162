// Views contain the layout logic that turns ViewModels into text.
// Styling, density filtering, and truncation all live here.

pub mod card;

pub use card::{CardView, FeedView};

pub mod card;
pub mod common;
pub mod result;

pub use card::*;
pub use common::*;
pub use result::*;

// NOTE: dreamfeed Architecture Rationale
//
// Why a layout tree between record and output?
// - The same card feeds the text views and the JSON dump
// - The core projection (dreamfeed-render) stays total and side-effect free;
//   the CLI owns input decoding and output formatting
// - Malformed feeds are rejected at the decode boundary, never inside the
//   renderer
//
// Why no validation layer here?
// - Records are display input; every field is shown verbatim
// - The only hard precondition (a present author) is enforced by the type
//   shape during deserialization

mod args;
mod commands;
mod handlers;
pub mod presentation;

pub use args::{Cli, Commands};
pub use commands::run;

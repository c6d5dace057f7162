//! # Presentation Layer
//!
//! MVVM-shaped output pipeline for the CLI. The data flow is strictly
//! unidirectional:
//!
//! ```text
//! [ Handler ] --> [ Presenter ] --> [ ViewModel ] --> [ Renderer ] ==(JSON)==> [ serde_json ] --> Output
//!                                                                 ==(Text)==> [ View ] --> Output
//! ```
//!
//! ## Rules
//!
//! 1. **ViewModels carry raw data, not formatted strings.** JSON output is
//!    an API; `--format json` always dumps the complete view model and
//!    ignores `ViewMode`.
//! 2. **`ViewMode` defines information density, not shape.**
//!    * Minimal: titles only (for pipes/scripts)
//!    * Compact: one line per card (for scanning feeds)
//!    * Standard: full four-region cards (default for humans)
//!    * Verbose: cards plus synthetic chip keys (for debugging)
//! 3. **Presenters calculate, views format.** Deciding when to attach a
//!    badge or tip belongs in `presenters/`; layout, colors, and truncation
//!    belong in `views/` and `formatters/`.

pub mod formatters;
pub mod presenters;
pub mod renderers;
pub mod view_models;
pub mod views;

// Re-exports for convenience
pub use renderers::ConsoleRenderer;
pub use view_models::ViewMode;

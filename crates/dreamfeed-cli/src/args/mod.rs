mod common;
mod enums;

pub use common::*;
pub use enums::*;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "dreamfeed")]
#[command(about = "Render dream journal entries as terminal cards", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render a JSON feed of dream logs as cards
    Render {
        #[arg(help = "Path to a JSON array of dream log records, or '-' for stdin")]
        input: String,

        #[command(flatten)]
        view: ViewModeArgs,

        #[arg(long, help = "Render at most N records")]
        limit: Option<usize>,
    },
}

use anyhow::Result;
use owo_colors::OwoColorize;
use serde::Serialize;
use std::fmt::Display;

use crate::presentation::view_models::CommandResultViewModel;

/// Output driver: dumps the full view model as JSON, or prints the badge,
/// the text view, and any tips.
pub struct ConsoleRenderer {
    json_mode: bool,
}

impl ConsoleRenderer {
    pub fn new(json_mode: bool) -> Self {
        Self { json_mode }
    }

    pub fn render<T, V>(&self, result: &CommandResultViewModel<T>, view: V) -> Result<()>
    where
        T: Serialize,
        V: Display,
    {
        if self.json_mode {
            println!("{}", serde_json::to_string_pretty(result)?);
            return Ok(());
        }

        if let Some(badge) = &result.badge {
            println!("{} {}", badge.icon(), badge.label.bold());
            println!();
        }

        print!("{}", view);

        if !result.suggestions.is_empty() {
            println!("\n{}", "💡 Tips:".yellow().bold());
            for tip in &result.suggestions {
                print!("  • {}", tip.description);
                if let Some(cmd) = &tip.command {
                    print!(": {}", cmd.cyan());
                }
                println!();
            }
        }

        Ok(())
    }
}

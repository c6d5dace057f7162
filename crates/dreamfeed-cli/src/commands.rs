use super::args::{Cli, Commands};
use super::handlers;
use anyhow::Result;

pub fn run(cli: Cli) -> Result<()> {
    let Some(command) = cli.command else {
        show_guidance();
        return Ok(());
    };

    match command {
        Commands::Render { input, view, limit } => {
            handlers::feed::handle(&input, view.resolve(), cli.format, limit)
        }
    }
}

fn show_guidance() {
    println!("dreamfeed - Dream journal card renderer\n");
    println!("Quick commands:");
    println!("  dreamfeed render feed.json            # Render a feed file as cards");
    println!("  cat feed.json | dreamfeed render -    # Render from stdin");
    println!("  dreamfeed render feed.json --compact  # One line per card");
    println!("  dreamfeed render feed.json --format json  # Full view model as JSON\n");
    println!("For more commands:");
    println!("  dreamfeed --help");
}

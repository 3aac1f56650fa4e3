use std::time::Instant;

use clap::{Parser, Subcommand};

use c4viz_cli::output::emit;
use c4viz_cli::{ElementOptions, ThemeOptions, run_element, run_theme};

#[derive(Parser, Debug)]
#[command(
    name = "c4viz",
    about = "c4viz: C4-model boxes and arrows for Graphviz",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render one C4 element as a DOT graph
    Element(ElementOptions),
    /// Print the default theme or check a theme file
    Theme(ThemeOptions),
}

pub fn run(args: Cli) -> anyhow::Result<()> {
    let start = Instant::now();

    // Initialize tracing subscriber for logging
    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_writer(std::io::stderr)
            .init();
    }

    match args.command {
        Command::Element(opts) => {
            let dot = run_element(&opts)?;
            emit(&dot, opts.output.as_deref())?;
        }
        Command::Theme(opts) => {
            let text = run_theme(&opts)?;
            if let Some(path) = &opts.check {
                eprintln!("{}: ok", path.display());
            }
            emit(&text, None)?;
        }
    }

    tracing::info!(secs = start.elapsed().as_secs_f64(), "complete");
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();
    run(args)
}

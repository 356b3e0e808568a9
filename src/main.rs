//! mdview - A terminal pager for markdown files.
//!
//! # Usage
//!
//! ```bash
//! mdview README.md
//! RUST_LOG=mdview=debug mdview --log-file /tmp/mdview.log README.md
//! ```

use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use mdview::app::App;
use mdview::ui::style::ColorSupport;

/// A terminal pager for markdown files
#[derive(Parser, Debug)]
#[command(name = "mdview", version, about, long_about = None)]
struct Cli {
    /// Markdown file to view
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Write log events to a file instead of stderr
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

fn init_logging(log_file: Option<&Path>) -> Result<()> {
    let filter =
        EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into());
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create log file {}", path.display()))?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        None => builder.with_writer(std::io::stderr).init(),
    }
    Ok(())
}

fn parse_cli() -> Cli {
    match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.exit()
        }
        Err(err) => {
            let _ = err.print();
            std::process::exit(1);
        }
    }
}

fn main() -> Result<()> {
    let cli = parse_cli();
    init_logging(cli.log_file.as_deref())?;

    // Verify file exists before the terminal switches screens
    if !cli.file.is_file() {
        eprintln!("Not found: {}\n", cli.file.display());
        eprintln!("{}", Cli::command().render_usage());
        std::process::exit(1);
    }

    // Run the application
    let mut app = App::new(cli.file).with_color_support(ColorSupport::detect());

    app.run().context("Application error")
}

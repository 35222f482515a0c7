//! lrush - line-oriented shell over an in-memory LRU cache

mod handler;
mod reply;

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::handler::CommandHandler;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Cache capacity (number of entries)
    #[arg(short, long, default_value_t = 128)]
    capacity: usize,

    /// Command script to run (reads stdin when omitted)
    #[arg(short, long)]
    script: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Logs go to stderr so replies on stdout stay clean
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    info!("Starting lrush v{}", env!("CARGO_PKG_VERSION"));
    info!("Cache capacity: {}", args.capacity);

    let mut handler = CommandHandler::new(args.capacity);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match &args.script {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open script {}", path.display()))?;
            run(BufReader::new(file), &mut out, &mut handler)?;
        }
        None => {
            run(io::stdin().lock(), &mut out, &mut handler)?;
        }
    }

    Ok(())
}

/// Execute every command in `input`, writing one reply per command
fn run<R: BufRead, W: Write>(input: R, out: &mut W, handler: &mut CommandHandler) -> Result<usize> {
    let mut executed = 0;

    for line in input.lines() {
        let line = line.context("failed to read command")?;
        if let Some(reply) = handler.handle(&line) {
            writeln!(out, "{}", reply)?;
            executed += 1;
        }
    }

    out.flush()?;
    info!("Executed {} command(s)", executed);
    Ok(executed)
}

//! PolicyCache shell - line-oriented command interpreter over a policy cache

mod handler;
mod reply;

use anyhow::{Context, Result};
use clap::Parser;
use policycache::{Cache, PolicyKind};
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{info, warn};

use crate::handler::CommandHandler;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Cache capacity (number of items)
    #[arg(short, long, default_value_t = 1024)]
    capacity: usize,

    /// Eviction policy: fifo, lru, lifo or random
    #[arg(short, long, default_value_t = PolicyKind::Lru)]
    policy: PolicyKind,

    /// Seed for the random policy (entropy when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Command script to run (reads stdin when omitted)
    script: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    info!("Starting pcsh v{}", env!("CARGO_PKG_VERSION"));
    info!("Cache capacity: {}", args.capacity);
    info!("Eviction policy: {}", args.policy);

    let policy = match args.seed {
        Some(seed) => args.policy.build_seeded(seed),
        None => args.policy.build(),
    };
    let cache = Arc::new(Cache::new(args.capacity, policy)?);
    let handler = CommandHandler::new(cache);

    let input = open_input(args.script.as_deref())?;
    let stdout = io::stdout();
    let errors = run(&handler, input, &mut stdout.lock())?;

    if errors > 0 {
        warn!("{} command(s) returned errors", errors);
    }
    Ok(())
}

fn open_input(script: Option<&Path>) -> Result<Box<dyn BufRead>> {
    match script {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open script {}", path.display()))?;
            info!("Running script: {}", path.display());
            Ok(Box::new(BufReader::new(file)))
        }
        None => Ok(Box::new(BufReader::new(io::stdin()))),
    }
}

/// Feed every input line to the handler, writing one reply per command
///
/// Returns the number of error replies.
fn run<R: BufRead, W: Write>(handler: &CommandHandler, input: R, out: &mut W) -> Result<usize> {
    let mut errors = 0;

    for line in input.lines() {
        let line = line.context("failed to read command")?;
        if let Some(reply) = handler.handle(&line) {
            if reply.is_error() {
                errors += 1;
            }
            writeln!(out, "{}", reply)?;
        }
    }

    out.flush()?;
    Ok(errors)
}

use std::io;

use streamdemo::{TrackingAllocator, parse_args, run};
use tracing_subscriber::EnvFilter;

// Feeds the memory columns of the report.
#[global_allocator]
static ALLOCATOR: TrackingAllocator = TrackingAllocator::system();

fn main() -> anyhow::Result<()> {
    let config = parse_args(std::env::args().skip(1))?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .with_ansi(false)
        .init();

    let stdout = io::stdout().lock();
    run(&config, io::BufWriter::new(stdout))?;

    Ok(())
}

//! wdc - a minimalist word counter
//!
//! wdc provides:
//! - Text statistics: word/character/sentence/paragraph counts and word
//!   frequency, with Flesch Reading Ease scoring
//! - A dual-backend counting engine (accelerated parallel path with a
//!   behaviorally identical serial fallback)
//! - Export to json/csv/html/md/txt

use anyhow::Result;
use clap::Parser;

mod backends;
mod cli;
mod core;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli::run(cli)
}

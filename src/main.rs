//! # Sales Cleaner entry point
//!
//! ```text
//! main()
//!   ├─> Parse CLI arguments (clap)
//!   ├─> Initialize tracing (stderr, optional log dir)
//!   └─> Load -> clean -> save, then print a preview
//! ```
//!
//! Any I/O failure ends the process with a non-zero exit code and the error
//! chain on stderr, printed once.

#![warn(clippy::all, rust_2018_idioms)]

mod cli;

use anyhow::Result;
use clap::Parser as _;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    sales_cleaner::logging::init(cli.log_dir.as_deref())?;

    // The error chain is printed once, by the `Result` returned from main
    cli::run(&cli)
}

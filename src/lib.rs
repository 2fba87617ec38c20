//! # Sales Cleaner
//!
//! Turns a raw sales export into an analysis-ready table. The cleaning is a
//! fixed sequence of stages over a Polars `DataFrame`:
//!
//! 1. Column names are trimmed, lowercased and underscored, and the short
//!    names `prodname`/`qty` become `product_name`/`quantity`.
//! 2. `product_name` and `category` are trimmed.
//! 3. `price` and `quantity` are parsed as numbers; rows where either can't be
//!    parsed are dropped.
//! 4. Rows with negative `price`/`quantity` and exact duplicate rows are dropped.
//!
//! ## Quick Start
//!
//! ```no_run
//! use sales_cleaner::config::PipelineConfig;
//! use sales_cleaner::pipeline;
//!
//! let report = pipeline::run_pipeline(&PipelineConfig::default())?;
//! println!("{}", report.preview);
//! # Ok::<(), sales_cleaner::error::CleanError>(())
//! ```
//!
//! Stages can also be applied to a frame that is already in memory:
//!
//! ```
//! use polars::prelude::*;
//! use sales_cleaner::pipeline::clean_df;
//!
//! let raw = df!("ProdName" => &[" Widget "], "qty" => &["5"], "price" => &["10"])?;
//! let (clean, _) = clean_df(raw)?;
//! assert_eq!(clean.height(), 1);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Core Modules
//!
//! - [`pipeline`]: the cleaning stages, file loading/saving and the runner
//! - [`config`]: source/sink paths and run options
//! - [`error`]: error types
//! - [`logging`]: `tracing` subscriber setup

#![warn(clippy::all, rust_2018_idioms)]

pub mod config;
pub mod error;
pub mod logging;
pub mod pipeline;

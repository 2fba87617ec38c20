//! The sales cleaning pipeline.
//!
//! A fixed, strictly ordered chain of four table-to-table stages:
//!
//! ```text
//! load ─> normalize columns ─> trim text ─> coerce numerics ─> drop invalid/duplicates ─> save
//! ```
//!
//! Each stage takes the whole `DataFrame` produced by the previous one and
//! returns a new one. Columns the pipeline does not know about pass through
//! untouched.
//!
//! # Example
//!
//! ```no_run
//! use sales_cleaner::config::PipelineConfig;
//! use sales_cleaner::pipeline::run_pipeline;
//!
//! let config = PipelineConfig::new("raw.csv", "clean.csv");
//! let report = run_pipeline(&config)?;
//! println!("{}", report.summary());
//! # Ok::<(), sales_cleaner::error::CleanError>(())
//! ```

pub mod columns;
pub mod executor;
pub mod io;
pub mod numeric;
pub mod text;
pub mod validity;

pub use columns::{apply_alias, normalize_column_name, normalize_columns, normalized_column_names};
pub use executor::{RunReport, Stage, StageReport, clean_df, run_pipeline};
pub use io::{load_df, save_df};
pub use numeric::{NUMERIC_COLUMNS, coerce_numeric_columns};
pub use text::{TEXT_COLUMNS, trim_text_columns};
pub use validity::remove_invalid_rows;

use polars::prelude::DataFrame;

/// Designated columns from `candidates` that actually exist in `df`, in
/// candidate order.
pub(crate) fn present_columns(df: &DataFrame, candidates: &[&'static str]) -> Vec<&'static str> {
    candidates
        .iter()
        .copied()
        .filter(|name| df.column(name).is_ok())
        .collect()
}

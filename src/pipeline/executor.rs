//! Pipeline execution engine.
//!
//! Runs the four cleaning stages in their fixed order, records the table shape
//! after each one, and wraps the whole thing with loading and saving.

use super::{columns, io, numeric, text, validity};
use crate::config::PipelineConfig;
use crate::error::Result;
use polars::prelude::DataFrame;
use std::fmt;

/// One step of the cleaning chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    NormalizeColumns,
    TrimText,
    CoerceNumeric,
    RemoveInvalid,
}

impl Stage {
    /// Every stage, in execution order.
    pub const ALL: [Self; 4] = [
        Self::NormalizeColumns,
        Self::TrimText,
        Self::CoerceNumeric,
        Self::RemoveInvalid,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::NormalizeColumns => "normalize_columns",
            Self::TrimText => "trim_text",
            Self::CoerceNumeric => "coerce_numeric",
            Self::RemoveInvalid => "remove_invalid",
        }
    }

    /// # Errors
    ///
    /// Propagates the stage's error; only column normalization has a failure
    /// mode of its own (name collisions).
    pub fn apply(self, df: DataFrame) -> Result<DataFrame> {
        match self {
            Self::NormalizeColumns => columns::normalize_columns(df),
            Self::TrimText => text::trim_text_columns(df),
            Self::CoerceNumeric => numeric::coerce_numeric_columns(df),
            Self::RemoveInvalid => validity::remove_invalid_rows(df),
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Row counts around a stage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageReport {
    pub stage: Stage,
    pub rows_in: usize,
    pub rows_out: usize,
}

impl StageReport {
    pub fn rows_removed(&self) -> usize {
        self.rows_in.saturating_sub(self.rows_out)
    }
}

/// Runs every stage over an already loaded table.
///
/// # Errors
///
/// Fails only on a column name collision or an engine error.
pub fn clean_df(df: DataFrame) -> Result<(DataFrame, Vec<StageReport>)> {
    let mut df = df;
    let mut reports = Vec::with_capacity(Stage::ALL.len());

    for stage in Stage::ALL {
        let rows_in = df.height();
        df = stage.apply(df)?;
        let report = StageReport {
            stage,
            rows_in,
            rows_out: df.height(),
        };
        tracing::debug!(
            "Stage {stage}: {} -> {} rows ({} removed)",
            report.rows_in,
            report.rows_out,
            report.rows_removed()
        );
        reports.push(report);
    }

    Ok((df, reports))
}

/// Report generated after a full run
#[derive(Debug, Clone)]
pub struct RunReport {
    /// Number of rows before processing
    pub rows_before: usize,

    /// Number of columns before processing
    pub columns_before: usize,

    /// Number of rows after processing
    pub rows_after: usize,

    /// Number of columns after processing
    pub columns_after: usize,

    /// Shape after each stage, in execution order
    pub stages: Vec<StageReport>,

    /// Leading rows of the cleaned table
    pub preview: DataFrame,

    /// Time taken for execution
    pub duration: std::time::Duration,
}

impl RunReport {
    pub fn rows_removed(&self) -> usize {
        self.rows_before.saturating_sub(self.rows_after)
    }

    /// Create a summary message
    pub fn summary(&self) -> String {
        format!(
            "Cleaned {} rows -> {} rows ({} removed), {} columns, {:.2}s",
            self.rows_before,
            self.rows_after,
            self.rows_removed(),
            self.columns_after,
            self.duration.as_secs_f64()
        )
    }
}

/// Loads the source, cleans it, and writes the sink.
///
/// # Errors
///
/// Returns [`crate::error::CleanError::SourceRead`] before any transformation
/// runs if the source can't be loaded, and
/// [`crate::error::CleanError::SinkWrite`] after cleaning if the sink can't be
/// written.
pub fn run_pipeline(config: &PipelineConfig) -> Result<RunReport> {
    let start = std::time::Instant::now();

    let raw = io::load_df(&config.source_path)?;
    let rows_before = raw.height();
    let columns_before = raw.width();

    let (mut cleaned, stages) = clean_df(raw)?;

    io::save_df(&mut cleaned, &config.sink_path, config.create_sink_dir)?;

    let report = RunReport {
        rows_before,
        columns_before,
        rows_after: cleaned.height(),
        columns_after: cleaned.width(),
        stages,
        preview: cleaned.head(Some(config.preview_rows)),
        duration: start.elapsed(),
    };
    tracing::info!("{}", report.summary());

    Ok(report)
}

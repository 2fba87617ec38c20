//! Range checks and duplicate removal.

use super::numeric::NUMERIC_COLUMNS;
use super::present_columns;
use crate::error::Result;
use polars::prelude::*;

/// Keeps rows where every present numeric column is `>= 0`, then drops exact
/// duplicate rows, keeping the first occurrence.
///
/// Both steps are stable: surviving rows keep their relative order.
///
/// # Errors
///
/// Only fails if the dataframe engine does.
pub fn remove_invalid_rows(df: DataFrame) -> Result<DataFrame> {
    if df.width() == 0 {
        return Ok(df);
    }

    let rows_before = df.height();
    let checked = present_columns(&df, &NUMERIC_COLUMNS);

    let mut lf = df.lazy();
    for name in checked {
        lf = lf.filter(col(name).gt_eq(lit(0.0)));
    }
    let in_range = lf.collect()?;
    let rows_in_range = in_range.height();

    let out = in_range
        .lazy()
        .unique_stable(None, UniqueKeepStrategy::First)
        .collect()?;

    tracing::debug!(
        "Dropped {} negative-value rows and {} duplicate rows",
        rows_before - rows_in_range,
        rows_in_range - out.height()
    );
    Ok(out)
}

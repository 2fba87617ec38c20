//! Whitespace trimming for the text columns.
//!
//! Every cell is first turned into text. Missing cells become the literal
//! text `nan`, the same thing stringifying an absent value produces, so after
//! this stage a text column holds no nulls at all. Trimming runs before
//! numeric coercion and only touches [`TEXT_COLUMNS`], which never overlap
//! with the numeric ones.

use super::present_columns;
use crate::error::Result;
use polars::prelude::*;

pub const TEXT_COLUMNS: [&str; 2] = ["product_name", "category"];

/// Text written in place of a missing cell.
pub const MISSING_TEXT: &str = "nan";

fn trimmed_text(name: &str) -> Expr {
    col(name)
        .cast(DataType::String)
        .fill_null(lit(MISSING_TEXT))
        .str()
        .strip_chars(lit(NULL))
        .alias(name)
}

/// Strips leading/trailing whitespace from `product_name` and `category`.
///
/// Absent columns are skipped.
///
/// # Errors
///
/// Only fails if the dataframe engine does.
pub fn trim_text_columns(df: DataFrame) -> Result<DataFrame> {
    let targets = present_columns(&df, &TEXT_COLUMNS);
    if targets.is_empty() {
        return Ok(df);
    }

    let exprs: Vec<Expr> = targets.into_iter().map(trimmed_text).collect();
    Ok(df.lazy().with_columns(exprs).collect()?)
}

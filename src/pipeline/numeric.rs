//! Numeric coercion and the completeness filter.
//!
//! `price` and `quantity` are parsed as numbers. A column where every cell is
//! an integer stays `Int64`; any other column becomes `Float64`, so a single
//! decimal or unparseable cell makes the whole column floating point. Coercion
//! never fails:
//! anything that isn't a number (`"abc"`, `"free"`, `NaN`, an empty cell)
//! becomes null, and rows holding a null in any present numeric column are
//! then removed. After this stage the numeric columns contain only numbers.

use super::present_columns;
use crate::error::Result;
use polars::prelude::*;

pub const NUMERIC_COLUMNS: [&str; 2] = ["price", "quantity"];

/// Whether every cell of `column` is present and an integer.
fn all_integers(column: &Column) -> Result<bool> {
    if column.null_count() > 0 {
        return Ok(false);
    }
    let dtype = column.dtype();
    if dtype.is_integer() {
        return Ok(true);
    }
    if dtype != &DataType::String {
        return Ok(false);
    }
    let values = column.as_materialized_series().str()?;
    Ok(values
        .into_iter()
        .all(|v| v.is_some_and(|s| s.trim().parse::<i64>().is_ok())))
}

fn coerced_number(name: &str, column: &Column) -> Result<Expr> {
    let dtype = column.dtype();
    let integral = all_integers(column)?;
    if integral && dtype.is_integer() {
        return Ok(col(name));
    }

    let expr = if dtype == &DataType::String {
        col(name).str().strip_chars(lit(NULL))
    } else {
        col(name)
    };

    if integral {
        return Ok(expr.cast(DataType::Int64).alias(name));
    }

    // Non-strict cast: unparseable text turns into null instead of an error
    Ok(expr
        .cast(DataType::Float64)
        .fill_nan(lit(NULL).cast(DataType::Float64))
        .alias(name))
}

/// Casts `price`/`quantity` to numbers and drops incomplete rows.
///
/// When neither column is present the frame is returned unchanged.
///
/// # Errors
///
/// Only fails if the dataframe engine does.
pub fn coerce_numeric_columns(df: DataFrame) -> Result<DataFrame> {
    let targets = present_columns(&df, &NUMERIC_COLUMNS);
    if targets.is_empty() {
        return Ok(df);
    }

    let mut exprs = Vec::with_capacity(targets.len());
    for name in &targets {
        exprs.push(coerced_number(name, df.column(name)?)?);
    }

    let complete = targets
        .iter()
        .map(|name| col(*name).is_not_null())
        .reduce(Expr::and)
        .unwrap_or_else(|| lit(true));

    let rows_before = df.height();
    let out = df.lazy().with_columns(exprs).filter(complete).collect()?;
    tracing::debug!(
        "Dropped {} incomplete rows (missing {})",
        rows_before - out.height(),
        targets.join(" or ")
    );
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn floats(df: &DataFrame, name: &str) -> anyhow::Result<Vec<Option<f64>>> {
        let series = df.column(name)?.as_materialized_series().clone();
        Ok(series.f64()?.into_iter().collect())
    }

    #[test]
    fn test_unparseable_rows_are_dropped() -> anyhow::Result<()> {
        let df = df!(
            "product_name" => &["Widget", "Gadget", "Gizmo", "Doohickey"],
            "quantity" => &["5", "abc", " 7 ", "2"],
            "price" => &["10", "3", "4.5", "free"]
        )?;

        let out = coerce_numeric_columns(df)?;

        assert_eq!(out.height(), 2);
        assert_eq!(floats(&out, "quantity")?, vec![Some(5.0), Some(7.0)]);
        assert_eq!(floats(&out, "price")?, vec![Some(10.0), Some(4.5)]);
        let products = out.column("product_name")?.as_materialized_series().clone();
        assert_eq!(products.str()?.get(1), Some("Gizmo"));
        Ok(())
    }

    #[test]
    fn test_integer_columns_are_cast() -> anyhow::Result<()> {
        let df = df!("price" => &[Some(1i64), None, Some(-3)])?;
        let out = coerce_numeric_columns(df)?;
        assert_eq!(out.column("price")?.dtype(), &DataType::Float64);
        // Negative values survive; they are the validity filter's concern
        assert_eq!(floats(&out, "price")?, vec![Some(1.0), Some(-3.0)]);
        Ok(())
    }

    #[test]
    fn test_integer_text_stays_integral() -> anyhow::Result<()> {
        let df = df!(
            "product_name" => &["Widget", "Gadget"],
            "quantity" => &["5", " 2 "],
            "price" => &["10", "3.5"]
        )?;

        let out = coerce_numeric_columns(df)?;

        let quantities = out.column("quantity")?.as_materialized_series().clone();
        assert_eq!(quantities.dtype(), &DataType::Int64);
        let kept: Vec<Option<i64>> = quantities.i64()?.into_iter().collect();
        assert_eq!(kept, vec![Some(5), Some(2)]);
        // One decimal makes the whole column floating point
        assert_eq!(floats(&out, "price")?, vec![Some(10.0), Some(3.5)]);
        Ok(())
    }

    #[test]
    fn test_unparseable_cell_makes_column_float() -> anyhow::Result<()> {
        let df = df!("quantity" => &["5", "abc"], "price" => &[10i64, 3])?;
        let out = coerce_numeric_columns(df)?;
        assert_eq!(floats(&out, "quantity")?, vec![Some(5.0)]);
        assert_eq!(out.column("price")?.dtype(), &DataType::Int64);
        Ok(())
    }

    #[test]
    fn test_nan_counts_as_missing() -> anyhow::Result<()> {
        let df = df!("quantity" => &[f64::NAN, 2.0], "price" => &["NaN", "1"])?;
        let out = coerce_numeric_columns(df)?;
        assert_eq!(out.height(), 1);
        assert_eq!(floats(&out, "quantity")?, vec![Some(2.0)]);
        Ok(())
    }

    #[test]
    fn test_without_quantity_only_price_is_required() -> anyhow::Result<()> {
        let df = df!(
            "product_name" => &["Widget", "Gadget"],
            "price" => &["10", "3"]
        )?;
        let out = coerce_numeric_columns(df)?;
        assert_eq!(out.height(), 2);
        assert!(out.column("quantity").is_err());
        Ok(())
    }

    #[test]
    fn test_no_numeric_columns_is_noop() -> anyhow::Result<()> {
        let df = df!("product_name" => &[Some("Widget"), None])?;
        let out = coerce_numeric_columns(df.clone())?;
        assert!(out.equals_missing(&df));
        Ok(())
    }

    #[test]
    fn test_column_order_is_kept() -> anyhow::Result<()> {
        let df = df!("quantity" => &["1"], "category" => &["Toys"], "price" => &["2"])?;
        let out = coerce_numeric_columns(df)?;
        let names: Vec<String> = out.get_columns().iter().map(|c| c.name().to_string()).collect();
        assert_eq!(names, vec!["quantity", "category", "price"]);
        Ok(())
    }
}

//! Loading the raw table and writing the cleaned one.
//!
//! CSV is the default format; `.parquet` and `.json` are picked by extension.
//! CSV cells holding one of the usual missing-value markers (`NA`, `N/A`,
//! `NULL`, `nan`, ...) load as null, as do empty cells.
//! Every failure is reported as [`CleanError::SourceRead`] or
//! [`CleanError::SinkWrite`] carrying the offending path.

use crate::error::{CleanError, Result};
use polars::prelude::*;
use std::path::Path;

/// Cell contents read as missing in CSV sources.
pub const MISSING_MARKERS: [&str; 18] = [
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

fn extension(path: &Path) -> String {
    path.extension()
        .and_then(|s| s.to_str())
        .unwrap_or("")
        .to_lowercase()
}

fn source_error(path: &Path, err: impl std::fmt::Display) -> CleanError {
    CleanError::SourceRead {
        path: path.to_path_buf(),
        message: err.to_string(),
    }
}

fn sink_error(path: &Path, err: impl std::fmt::Display) -> CleanError {
    CleanError::SinkWrite {
        path: path.to_path_buf(),
        message: err.to_string(),
    }
}

/// Reads a table with a header row.
///
/// # Errors
///
/// Returns [`CleanError::SourceRead`] when the file is missing, unreadable or
/// not parseable in its format.
pub fn load_df(path: &Path) -> Result<DataFrame> {
    if !path.is_file() {
        return Err(source_error(path, "file not found"));
    }

    let df = match extension(path).as_str() {
        "parquet" => {
            let file = std::fs::File::open(path).map_err(|e| source_error(path, e))?;
            ParquetReader::new(file)
                .finish()
                .map_err(|e| source_error(path, e))?
        }
        "json" => {
            let file = std::fs::File::open(path).map_err(|e| source_error(path, e))?;
            JsonReader::new(file)
                .finish()
                .map_err(|e| source_error(path, e))?
        }
        // Full-file schema inference so a late non-numeric cell can't break parsing
        _ => LazyCsvReader::new(path)
            .with_infer_schema_length(None)
            .with_has_header(true)
            .with_null_values(Some(NullValues::AllColumns(
                MISSING_MARKERS.iter().map(|m| (*m).into()).collect(),
            )))
            .finish()
            .and_then(LazyFrame::collect)
            .map_err(|e| source_error(path, e))?,
    };

    tracing::info!(
        "Loaded {} rows x {} columns from {}",
        df.height(),
        df.width(),
        path.display()
    );
    Ok(df)
}

/// Writes `df` with a header row and no index column.
///
/// The parent directory must exist unless `create_dirs` is set.
///
/// # Errors
///
/// Returns [`CleanError::SinkWrite`] when the destination cannot be created
/// or written.
pub fn save_df(df: &mut DataFrame, path: &Path, create_dirs: bool) -> Result<()> {
    if create_dirs
        && let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|e| sink_error(path, e))?;
    }

    let file = std::fs::File::create(path).map_err(|e| sink_error(path, e))?;
    match extension(path).as_str() {
        "parquet" => {
            ParquetWriter::new(file)
                .finish(df)
                .map_err(|e| sink_error(path, e))?;
        }
        "json" => {
            JsonWriter::new(file)
                .with_json_format(JsonFormat::Json)
                .finish(df)
                .map_err(|e| sink_error(path, e))?;
        }
        _ => {
            CsvWriter::new(file)
                .include_header(true)
                .finish(df)
                .map_err(|e| sink_error(path, e))?;
        }
    }

    tracing::info!("Wrote {} rows to {}", df.height(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csv_round_trip_has_header_and_no_index() -> anyhow::Result<()> {
        let tmp = tempfile::tempdir()?;
        let path = tmp.path().join("out.csv");
        let mut df = df!(
            "product_name" => &["Widget", "Gadget"],
            "price" => &[10.0, 3.5]
        )?;

        save_df(&mut df, &path, false)?;

        let text = std::fs::read_to_string(&path)?;
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("product_name,price"));
        assert_eq!(lines.next(), Some("Widget,10.0"));

        let loaded = load_df(&path)?;
        assert_eq!(loaded.shape(), (2, 2));
        Ok(())
    }

    #[test]
    fn test_missing_markers_load_as_null() -> anyhow::Result<()> {
        let tmp = tempfile::tempdir()?;
        let path = tmp.path().join("raw.csv");
        std::fs::write(
            &path,
            "product_name,category,price\nWidget,NA,10\nGadget,Toys,N/A\nGizmo,Tools,3\n",
        )?;

        let df = load_df(&path)?;

        let categories = df.column("category")?.as_materialized_series().clone();
        assert_eq!(
            categories.str()?.into_iter().collect::<Vec<_>>(),
            vec![None, Some("Toys"), Some("Tools")]
        );
        let prices = df.column("price")?.as_materialized_series().clone();
        assert_eq!(prices.dtype(), &DataType::Int64);
        assert_eq!(prices.null_count(), 1);

        // A missing category is then stringified like any other missing text
        let trimmed = crate::pipeline::text::trim_text_columns(df)?;
        let categories = trimmed.column("category")?.as_materialized_series().clone();
        assert_eq!(categories.str()?.get(0), Some("nan"));
        Ok(())
    }

    #[test]
    fn test_integral_column_written_without_decimals() -> anyhow::Result<()> {
        let tmp = tempfile::tempdir()?;
        let source = tmp.path().join("raw.csv");
        let sink = tmp.path().join("clean.csv");
        std::fs::write(&source, "product_name,quantity,price\nWidget,5,10\nGadget,2,3.5\n")?;

        let df = load_df(&source)?;
        let mut df = crate::pipeline::coerce_numeric_columns(df)?;
        save_df(&mut df, &sink, false)?;

        let text = std::fs::read_to_string(&sink)?;
        let mut lines = text.lines().skip(1);
        assert_eq!(lines.next(), Some("Widget,5,10.0"));
        assert_eq!(lines.next(), Some("Gadget,2,3.5"));
        Ok(())
    }

    #[test]
    fn test_missing_source() {
        let result = load_df(Path::new("no/such/sales.csv"));
        assert!(matches!(result, Err(CleanError::SourceRead { .. })));
    }

    #[test]
    fn test_missing_sink_directory() -> anyhow::Result<()> {
        let tmp = tempfile::tempdir()?;
        let path = tmp.path().join("processed").join("out.csv");
        let mut df = df!("price" => &[1.0])?;

        let result = save_df(&mut df, &path, false);
        assert!(matches!(result, Err(CleanError::SinkWrite { .. })));

        save_df(&mut df, &path, true)?;
        assert!(path.exists());
        Ok(())
    }

    #[test]
    fn test_other_formats_by_extension() -> anyhow::Result<()> {
        let tmp = tempfile::tempdir()?;
        let mut df = df!("category" => &["Toys", "Tools"], "quantity" => &[1.0, 2.0])?;

        for name in ["out.parquet", "out.json"] {
            let path = tmp.path().join(name);
            save_df(&mut df, &path, false)?;
            let loaded = load_df(&path)?;
            assert_eq!(loaded.shape(), (2, 2), "{name} should round trip");
        }
        Ok(())
    }
}

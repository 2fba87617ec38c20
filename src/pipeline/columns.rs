//! Column name normalization.
//!
//! Header names are trimmed, lowercased and have spaces replaced with
//! underscores; then the short export names are mapped to the canonical ones
//! (`prodname` -> `product_name`, `qty` -> `quantity`). Renaming never drops,
//! adds or reorders columns.

use crate::error::{CleanError, Result};
use polars::prelude::*;
use std::collections::HashMap;

/// Short names found in raw exports and the canonical names they map to.
pub const COLUMN_ALIASES: [(&str, &str); 2] = [("prodname", "product_name"), ("qty", "quantity")];

pub fn normalize_column_name(name: &str) -> String {
    name.trim().to_lowercase().replace(' ', "_")
}

pub fn apply_alias(name: String) -> String {
    COLUMN_ALIASES
        .iter()
        .find(|(alias, _)| *alias == name)
        .map_or(name, |(_, canonical)| (*canonical).to_owned())
}

/// Computes the final name of every column, in order.
///
/// Two columns ending up with the same name is treated as an error rather
/// than silently producing a frame with duplicate headers.
///
/// # Errors
///
/// Returns [`CleanError::ColumnCollision`] naming the first clashing target
/// and every source column that maps to it.
pub fn normalized_column_names(names: &[String]) -> Result<Vec<String>> {
    let targets: Vec<String> = names
        .iter()
        .map(|name| apply_alias(normalize_column_name(name)))
        .collect();

    let mut seen: HashMap<&str, usize> = HashMap::new();
    for (idx, target) in targets.iter().enumerate() {
        if let Some(&first) = seen.get(target.as_str()) {
            let sources = names
                .iter()
                .zip(&targets)
                .filter(|(_, t)| *t == target)
                .map(|(s, _)| s.clone())
                .collect();
            tracing::warn!("Column {first} and column {idx} both normalize to '{target}'");
            return Err(CleanError::ColumnCollision {
                name: target.clone(),
                sources,
            });
        }
        seen.insert(target.as_str(), idx);
    }

    Ok(targets)
}

/// Renames every column of `df` to its normalized name.
///
/// # Errors
///
/// Returns [`CleanError::ColumnCollision`] when two columns would share a
/// name; other errors come from the dataframe engine.
pub fn normalize_columns(df: DataFrame) -> Result<DataFrame> {
    if df.width() == 0 {
        return Ok(df);
    }

    let original: Vec<String> = df
        .get_columns()
        .iter()
        .map(|c| c.name().to_string())
        .collect();
    let renamed = normalized_column_names(&original)?;

    if original == renamed {
        return Ok(df);
    }

    let exprs: Vec<Expr> = original
        .iter()
        .zip(&renamed)
        .map(|(old, new)| {
            if old == new {
                col(old.as_str())
            } else {
                tracing::debug!("Renaming column '{old}' -> '{new}'");
                col(old.as_str()).alias(new.as_str())
            }
        })
        .collect();

    Ok(df.lazy().select(exprs).collect()?)
}

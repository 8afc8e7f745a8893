use std::io::Cursor;
use std::path::Path;

use anyhow::{Context, Result};
use polars::prelude::*;

use crate::models::{NutrientProfile, Recipe, NUTRIENT_COLUMNS};
use crate::services::text::{normalize_optional_instructions, normalize_optional_name};

pub const NAME_COLUMN: &str = "Name";
pub const INSTRUCTIONS_COLUMN: &str = "RecipeInstructions";

/// Immutable recipe dataset shared by every request
#[derive(Debug, Clone, Default)]
pub struct RecipeCatalog {
    recipes: Vec<Recipe>,
    skipped_rows: usize,
}

impl RecipeCatalog {
    /// Wraps recipes that are already normalized
    pub fn from_recipes(recipes: Vec<Recipe>) -> Self {
        Self {
            recipes,
            skipped_rows: 0,
        }
    }

    /// Loads and normalizes the recipes CSV.
    ///
    /// Records whose field count differs from the header are dropped before
    /// parsing. Every column is read as text and nutrient columns are cast
    /// afterwards, so an unparsable cell becomes null and its row is skipped.
    /// Skipped rows of both kinds are counted. A missing file or a missing
    /// required column is an error.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            anyhow::bail!("Recipe dataset not found: {}", path.display());
        }

        let raw = std::fs::read(path)
            .with_context(|| format!("Failed to read recipes CSV: {}", path.display()))?;
        let (records, ragged_rows) = drop_ragged_records(&String::from_utf8_lossy(&raw));

        let df = CsvReadOptions::default()
            .with_has_header(true)
            .with_ignore_errors(true)
            .with_infer_schema_length(Some(0))
            .into_reader_with_file_handle(Cursor::new(records.into_bytes()))
            .finish()
            .with_context(|| format!("Failed to load recipes CSV: {}", path.display()))?;

        let mut catalog = Self::from_dataframe(&df)?;
        catalog.skipped_rows += ragged_rows;

        if catalog.skipped_rows > 0 {
            tracing::warn!(
                path = %path.display(),
                skipped = catalog.skipped_rows,
                "Skipped malformed recipe rows"
            );
        }
        tracing::info!(
            path = %path.display(),
            recipes = catalog.recipes.len(),
            "Recipe catalog loaded"
        );

        Ok(catalog)
    }

    fn from_dataframe(df: &DataFrame) -> Result<Self> {
        let names = string_column(df, NAME_COLUMN)?;
        let instructions = string_column(df, INSTRUCTIONS_COLUMN)?;
        let nutrients = NUTRIENT_COLUMNS
            .iter()
            .map(|name| float_column(df, name))
            .collect::<Result<Vec<_>>>()?;

        let mut recipes = Vec::with_capacity(df.height());
        let mut skipped_rows = 0;

        for idx in 0..df.height() {
            let Some(values) = nutrient_row(&nutrients, idx) else {
                skipped_rows += 1;
                continue;
            };

            recipes.push(Recipe::new(
                normalize_optional_name(names.get(idx)),
                NutrientProfile::from_vector(values),
                normalize_optional_instructions(instructions.get(idx)),
            ));
        }

        Ok(Self {
            recipes,
            skipped_rows,
        })
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// Rows dropped at load time because a nutrient value was unusable
    pub fn skipped_rows(&self) -> usize {
        self.skipped_rows
    }
}

/// Keeps the header and every record with as many fields as the header.
///
/// Quoted fields may contain commas and newlines. Blank lines are dropped
/// without being counted. Returns the kept text and the number of dropped
/// records.
fn drop_ragged_records(contents: &str) -> (String, usize) {
    let mut kept = String::with_capacity(contents.len());
    let mut expected_fields = None;
    let mut dropped = 0;

    let mut record_start = 0;
    let mut fields = 1;
    let mut in_quotes = false;

    for (idx, ch) in contents.char_indices() {
        match ch {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => fields += 1,
            '\n' if !in_quotes => {
                let record = contents[record_start..idx].trim_end_matches('\r');
                keep_record(record, fields, &mut expected_fields, &mut kept, &mut dropped);
                record_start = idx + 1;
                fields = 1;
            }
            _ => {}
        }
    }
    let tail = contents[record_start..].trim_end_matches('\r');
    keep_record(tail, fields, &mut expected_fields, &mut kept, &mut dropped);

    (kept, dropped)
}

fn keep_record(
    record: &str,
    fields: usize,
    expected_fields: &mut Option<usize>,
    kept: &mut String,
    dropped: &mut usize,
) {
    if record.trim().is_empty() {
        return;
    }
    let expected = *expected_fields.get_or_insert(fields);
    if fields == expected {
        kept.push_str(record);
        kept.push('\n');
    } else {
        *dropped += 1;
    }
}

/// All nine nutrient values of a row, or `None` if any is missing, non-finite
/// or negative
fn nutrient_row(columns: &[Float64Chunked], idx: usize) -> Option<[f64; 9]> {
    let mut values = [0.0; 9];
    for (slot, column) in values.iter_mut().zip(columns) {
        let value = column.get(idx)?;
        if !value.is_finite() || value < 0.0 {
            return None;
        }
        *slot = value;
    }
    Some(values)
}

fn string_column(df: &DataFrame, name: &str) -> Result<StringChunked> {
    let column = df
        .column(name)
        .with_context(|| format!("Column '{}' not found", name))?
        .cast(&DataType::String)
        .with_context(|| format!("Column '{}' cannot be read as text", name))?;

    Ok(column
        .str()
        .with_context(|| format!("Column '{}' is not string type", name))?
        .clone())
}

fn float_column(df: &DataFrame, name: &str) -> Result<Float64Chunked> {
    let column = df
        .column(name)
        .with_context(|| format!("Column '{}' not found", name))?
        .cast(&DataType::Float64)
        .with_context(|| format!("Column '{}' cannot be read as numbers", name))?;

    Ok(column
        .f64()
        .with_context(|| format!("Column '{}' is not float type", name))?
        .clone())
}

use crate::error::{ImpurityError, Result};
use csv::ReaderBuilder;
use log::debug;
use std::path::Path;

/// Reads the `column`-th field of every record in a CSV file as a label.
///
/// Labels are kept as raw strings; no numeric parsing is attempted, so
/// `"1"` and `"1.0"` are different classes.
///
/// # Errors
///
/// Returns [`ImpurityError::Csv`] if the file can't be opened or parsed and
/// [`ImpurityError::MissingColumn`] if a record is shorter than `column + 1`.
pub fn read_label_column<P: AsRef<Path>>(
    path: P,
    column: usize,
    has_headers: bool,
) -> Result<Vec<String>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(has_headers)
        .from_path(path.as_ref())?;

    let mut labels = Vec::new();
    for (row, result) in reader.records().enumerate() {
        let record = result?;
        let label = record
            .get(column)
            .ok_or(ImpurityError::MissingColumn { row, column })?;
        labels.push(label.trim().to_string());
    }

    debug!(
        "Read {} labels from column {} of {}",
        labels.len(),
        column,
        path.as_ref().display()
    );
    Ok(labels)
}

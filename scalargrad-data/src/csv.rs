//! Plain-text persistence of labelled datasets.
//!
//! Format: a header line (`x,y,label` for 2-D points, `x0,...,xN,label`
//! otherwise) followed by one comma-separated line per sample, features
//! first and the label last.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use scalargrad_core::ScalarGradError;

use crate::datasets::{Dataset, LabeledDataset};

fn header(num_features: usize) -> String {
    if num_features == 2 {
        return "x,y,label".to_string();
    }
    let mut columns: Vec<String> = (0..num_features).map(|i| format!("x{}", i)).collect();
    columns.push("label".to_string());
    columns.join(",")
}

/// Writes `dataset` to `writer`.
pub fn write_csv<W: Write>(dataset: &LabeledDataset, writer: &mut W) -> Result<(), ScalarGradError> {
    writeln!(writer, "{}", header(dataset.num_features()))?;
    for (x, y) in dataset.features().iter().zip(dataset.labels()) {
        for value in x {
            write!(writer, "{},", value)?;
        }
        writeln!(writer, "{}", y)?;
    }
    Ok(())
}

/// Creates (or truncates) the file at `path` and writes `dataset` to it.
pub fn save_csv<P: AsRef<Path>>(dataset: &LabeledDataset, path: P) -> Result<(), ScalarGradError> {
    let path = path.as_ref();
    log::info!(
        "Saving dataset of {} samples to file {}",
        dataset.len(),
        path.display()
    );
    let mut writer = BufWriter::new(File::create(path)?);
    write_csv(dataset, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Parses a dataset written by [`write_csv`].
///
/// Blank lines are ignored. Line numbers in errors are 1-based and count
/// the header.
///
/// # Errors
/// * `ParseError` for a missing header, a non-numeric field, a line with
///   fewer than two fields or a line whose width differs from the first
///   sample's.
/// * `Io` if reading fails.
pub fn read_csv<R: BufRead>(reader: R) -> Result<LabeledDataset, ScalarGradError> {
    let mut lines = reader.lines();
    match lines.next() {
        Some(line) => {
            line?;
        }
        None => {
            return Err(ScalarGradError::ParseError {
                line: 1,
                message: "missing header".to_string(),
            })
        }
    }

    let mut features = Vec::new();
    let mut labels = Vec::new();
    let mut width: Option<usize> = None;

    for (index, line) in lines.enumerate() {
        let line_number = index + 2;
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let mut row = trimmed
            .split(',')
            .map(|field| {
                field.trim().parse::<f64>().map_err(|e| ScalarGradError::ParseError {
                    line: line_number,
                    message: format!("invalid number '{}': {}", field.trim(), e),
                })
            })
            .collect::<Result<Vec<f64>, _>>()?;

        if row.len() < 2 {
            return Err(ScalarGradError::ParseError {
                line: line_number,
                message: "expected at least one feature and a label".to_string(),
            });
        }
        match width {
            Some(w) if w != row.len() => {
                return Err(ScalarGradError::ParseError {
                    line: line_number,
                    message: format!("expected {} fields, found {}", w, row.len()),
                });
            }
            _ => width = Some(row.len()),
        }

        let label = row.pop().unwrap_or_default();
        features.push(row);
        labels.push(label);
    }

    LabeledDataset::new(features, labels)
}

/// Opens the file at `path` and parses it with [`read_csv`].
pub fn load_csv<P: AsRef<Path>>(path: P) -> Result<LabeledDataset, ScalarGradError> {
    let file = File::open(path.as_ref())?;
    let dataset = read_csv(BufReader::new(file))?;
    log::debug!(
        "Loaded {} samples from {}",
        dataset.len(),
        path.as_ref().display()
    );
    Ok(dataset)
}

#[cfg(test)]
#[path = "csv_test.rs"]
mod tests;

// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Huang Rui <vowstar@gmail.com>

//! Chip size report over a list of benchmarks.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use csv::Writer;
use serde::Serialize;

use crate::benchmark::BenchmarkLocator;
use crate::chip_size::{measure, BoundingBox};
use crate::error::{BookshelfError, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChipSizeEntry {
    pub name: String,
    pub bbox: BoundingBox,
}

#[derive(Debug)]
pub struct BatchFailure {
    pub name: String,
    pub error: BookshelfError,
}

/// Outcome of a batch run. Entries keep the input order.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub entries: Vec<ChipSizeEntry>,
    pub failures: Vec<BatchFailure>,
}

#[derive(Debug, Serialize)]
pub struct ChipSizeCsvRecord {
    #[serde(rename = "Benchmark")]
    pub name: String,
    #[serde(rename = "Width")]
    pub width: u64,
    #[serde(rename = "Height")]
    pub height: u64,
}

impl BatchReport {
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }

    /// One line per measured benchmark: `<name> width : <w> | height : <h>`.
    pub fn write_text<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for entry in &self.entries {
            writeln!(out, "{} {}", entry.name, entry.bbox)?;
        }
        out.flush()
    }
}

/// Measure each benchmark with `measure_one`, continuing past failures.
pub fn run_batch_with<S, F>(names: &[S], mut measure_one: F) -> BatchReport
where
    S: AsRef<str>,
    F: FnMut(&str) -> Result<BoundingBox>,
{
    let mut report = BatchReport::default();

    for name in names {
        let name = name.as_ref();
        match measure_one(name) {
            Ok(bbox) => {
                log::info!("{name} {bbox}");
                report.entries.push(ChipSizeEntry {
                    name: name.to_string(),
                    bbox,
                });
            }
            Err(error) => {
                log::error!("Skipping benchmark {name}: {error}");
                report.failures.push(BatchFailure {
                    name: name.to_string(),
                    error,
                });
            }
        }
    }

    log::info!(
        "Batch finished: {} measured, {} failed",
        report.entries.len(),
        report.failures.len()
    );
    report
}

/// Measure every named benchmark found under `locator`.
pub fn run_batch<S: AsRef<str>>(locator: &BenchmarkLocator, names: &[S]) -> BatchReport {
    run_batch_with(names, |name| measure(&locator.paths(name)?))
}

/// Export the text report to a file
pub fn export_report(report: &BatchReport, file_path: &Path) -> Result<()> {
    let file = File::create(file_path).map_err(|e| BookshelfError::io(file_path, e))?;
    let mut writer = BufWriter::new(file);
    report
        .write_text(&mut writer)
        .map_err(|e| BookshelfError::io(file_path, e))
}

/// Export the measured chip sizes to a CSV file
pub fn export_report_to_csv(report: &BatchReport, file_path: &Path) -> Result<()> {
    let file = File::create(file_path).map_err(|e| BookshelfError::io(file_path, e))?;
    let mut writer = Writer::from_writer(file);

    for entry in &report.entries {
        let record = ChipSizeCsvRecord {
            name: entry.name.clone(),
            width: entry.bbox.width,
            height: entry.bbox.height,
        };
        writer
            .serialize(record)
            .map_err(|e| BookshelfError::io(file_path, e.into()))?;
    }

    writer
        .flush()
        .map_err(|e| BookshelfError::io(file_path, e))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bbox(width: u64, height: u64) -> BoundingBox {
        BoundingBox { width, height }
    }

    #[test]
    fn test_failure_does_not_stop_batch() {
        let report = run_batch_with(&["a", "b", "c"], |name| match name {
            "b" => Err(BookshelfError::Format {
                path: "b.nodes".into(),
                line: 3,
                message: "bad record".to_string(),
            }),
            "a" => Ok(bbox(1, 2)),
            _ => Ok(bbox(3, 4)),
        });

        assert!(!report.is_complete());
        assert_eq!(report.entries.len(), 2);
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].name, "b");

        let mut buf = Vec::new();
        report.write_text(&mut buf).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "a width : 1 | height : 2\nc width : 3 | height : 4\n"
        );
    }

    #[test]
    fn test_empty_batch() {
        let names: [&str; 0] = [];
        let report = run_batch_with(&names, |_| Ok(bbox(0, 0)));
        assert!(report.is_complete());
        assert!(report.entries.is_empty());
    }
}

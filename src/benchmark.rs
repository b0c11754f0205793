// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Huang Rui <vowstar@gmail.com>

//! Location of benchmark files on disk.
//!
//! Benchmarks follow `<base>/<set>/<name>/<name>.nodes` and `.pl`.

use std::path::PathBuf;

use crate::error::{BookshelfError, Result};

pub const DEFAULT_BENCHMARK_SET: &str = "ispd2005";

/// The ISPD 2005 placement contest suite.
pub const ISPD2005_BENCHMARKS: [&str; 8] = [
    "adaptec1", "adaptec2", "adaptec3", "adaptec4", "bigblue1", "bigblue2", "bigblue3", "bigblue4",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchmarkPaths {
    pub name: String,
    pub nodes: PathBuf,
    pub pl: PathBuf,
}

impl BenchmarkPaths {
    /// Explicit file pair; the name is taken from the `.nodes` file stem.
    pub fn from_files(nodes: impl Into<PathBuf>, pl: impl Into<PathBuf>) -> Self {
        let nodes = nodes.into();
        let name = nodes
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self {
            name,
            nodes,
            pl: pl.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchmarkLocator {
    pub base: PathBuf,
    pub set: String,
}

impl BenchmarkLocator {
    pub fn new(base: impl Into<PathBuf>, set: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            set: set.into(),
        }
    }

    pub fn paths(&self, name: &str) -> Result<BenchmarkPaths> {
        validate_name(name)?;
        let dir = self.base.join(&self.set).join(name);
        Ok(BenchmarkPaths {
            name: name.to_string(),
            nodes: dir.join(format!("{name}.nodes")),
            pl: dir.join(format!("{name}.pl")),
        })
    }
}

fn validate_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(BookshelfError::Argument(
            "benchmark name must not be empty".to_string(),
        ));
    }
    if name.contains(['/', '\\']) || name == "." || name == ".." {
        return Err(BookshelfError::Argument(format!(
            "benchmark name '{name}' must be a plain directory name"
        )));
    }
    Ok(())
}

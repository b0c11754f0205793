// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Huang Rui <vowstar@gmail.com>

use std::fs;
use std::path::Path;

use super::nodes_parser::parse_nodes;
use super::pl_parser::parse_pl;
use super::{BookshelfNodes, BookshelfPls, ParseError};
use crate::benchmark::BenchmarkPaths;
use crate::error::{BookshelfError, Result};
use crate::layout::Layout;

pub struct BookshelfReader;

impl BookshelfReader {
    pub fn new() -> Self {
        Self
    }

    fn load(&self, path: &Path, kind: &str) -> Result<String> {
        log::info!("Loading {kind} file: {}", path.display());
        let bytes = fs::read(path).map_err(|e| BookshelfError::io(path, e))?;
        log::debug!("{kind} file size: {} bytes", bytes.len());
        String::from_utf8(bytes).map_err(|e| {
            let valid = &e.as_bytes()[..e.utf8_error().valid_up_to()];
            let line = valid.iter().filter(|b| **b == b'\n').count() + 1;
            Self::format_error(path, ParseError::new(line, "file is not valid UTF-8"))
        })
    }

    fn format_error(path: &Path, err: ParseError) -> BookshelfError {
        log::error!("Failed to parse {}: {err}", path.display());
        BookshelfError::Format {
            path: path.to_path_buf(),
            line: err.line,
            message: err.message,
        }
    }

    pub fn read_nodes<P: AsRef<Path>>(&self, path: P) -> Result<BookshelfNodes> {
        let path = path.as_ref();
        let content = self.load(path, ".nodes")?;
        let nodes = parse_nodes(&content).map_err(|e| Self::format_error(path, e))?;
        log::info!(
            "Parsed {} nodes ({} terminals)",
            nodes.nodes.len(),
            nodes.num_terminals
        );
        Ok(nodes)
    }

    pub fn read_pl<P: AsRef<Path>>(&self, path: P) -> Result<BookshelfPls> {
        let path = path.as_ref();
        let content = self.load(path, ".pl")?;
        let pls = parse_pl(&content).map_err(|e| Self::format_error(path, e))?;
        let fixed = pls.placements.iter().filter(|pl| pl.is_fixed).count();
        log::info!(
            "Parsed {} placements ({fixed} fixed)",
            pls.placements.len()
        );
        Ok(pls)
    }

    /// Read both files of a benchmark and pair their records by id.
    pub fn read_benchmark(&self, paths: &BenchmarkPaths) -> Result<Layout> {
        let nodes = self.read_nodes(&paths.nodes)?;
        let pls = self.read_pl(&paths.pl)?;
        Layout::match_by_name(&nodes, &pls, paths)
    }
}

impl Default for BookshelfReader {
    fn default() -> Self {
        Self::new()
    }
}

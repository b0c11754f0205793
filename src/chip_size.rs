// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Huang Rui <vowstar@gmail.com>

//! Bounding chip size of a placed layout.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::benchmark::BenchmarkPaths;
use crate::bookshelf::reader::BookshelfReader;
use crate::error::{BookshelfError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: u64,
    pub height: u64,
}

/// Lower-left corner of a placed cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: u64,
    pub y: u64,
}

/// Smallest origin-anchored rectangle containing every placed cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BoundingBox {
    pub width: u64,
    pub height: u64,
}

impl BoundingBox {
    /// Grow the box to cover a cell of `size` placed at `at`.
    ///
    /// Returns `None` when the cell's far edge overflows `u64`.
    pub fn include(self, size: Size, at: Point) -> Option<Self> {
        Some(Self {
            width: self.width.max(at.x.checked_add(size.width)?),
            height: self.height.max(at.y.checked_add(size.height)?),
        })
    }
}

impl fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "width : {} | height : {}", self.width, self.height)
    }
}

/// Fold aligned sizes and coordinates into a bounding box.
///
/// The i-th size belongs to the i-th coordinate; both slices must have the
/// same length. An empty layout yields `(0, 0)`.
pub fn bounding_box(sizes: &[Size], coordinates: &[Point]) -> Result<BoundingBox> {
    if sizes.len() != coordinates.len() {
        return Err(BookshelfError::LengthMismatch {
            sizes: sizes.len(),
            coordinates: coordinates.len(),
        });
    }

    sizes
        .iter()
        .zip(coordinates)
        .enumerate()
        .try_fold(BoundingBox::default(), |bbox, (i, (size, at))| {
            bbox.include(*size, *at).ok_or_else(|| BookshelfError::Overflow {
                cell: format!("#{i}"),
            })
        })
}

/// Read a benchmark from disk and compute its chip size.
pub fn measure(paths: &BenchmarkPaths) -> Result<BoundingBox> {
    let layout = BookshelfReader::new().read_benchmark(paths)?;
    let bbox = layout.bounding_box()?;
    log::debug!("{}: {} cells, {bbox}", paths.name, layout.len());
    Ok(bbox)
}

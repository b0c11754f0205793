// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Huang Rui <vowstar@gmail.com>

//! Pairing of `.nodes` and `.pl` records into a placed layout.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::benchmark::BenchmarkPaths;
use crate::bookshelf::{BookshelfNode, BookshelfNodes, BookshelfPl, BookshelfPls};
use crate::chip_size::{BoundingBox, Point, Size};
use crate::error::{BookshelfError, RecordSide, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacedCell {
    pub node: BookshelfNode,
    pub placement: BookshelfPl,
}

/// Cells paired with their placements, in `.nodes` file order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Layout {
    pub cells: Vec<PlacedCell>,
}

impl Layout {
    /// Pair every node with the placement of the same name.
    ///
    /// A node without a placement, or a placement naming no node, is an
    /// [`BookshelfError::UnmatchedId`] pointing at the file it appears in.
    pub fn match_by_name(
        nodes: &BookshelfNodes,
        pls: &BookshelfPls,
        paths: &BenchmarkPaths,
    ) -> Result<Self> {
        let mut by_name: HashMap<&str, &BookshelfPl> = pls
            .placements
            .iter()
            .map(|pl| (pl.name.as_str(), pl))
            .collect();

        let mut cells = Vec::with_capacity(nodes.nodes.len());
        for node in &nodes.nodes {
            let placement = by_name
                .remove(node.name.as_str())
                .ok_or_else(|| BookshelfError::UnmatchedId {
                    path: paths.nodes.clone(),
                    name: node.name.clone(),
                    side: RecordSide::Nodes,
                })?;
            cells.push(PlacedCell {
                node: node.clone(),
                placement: placement.clone(),
            });
        }

        // Report the first leftover in file order so the message is stable.
        if let Some(orphan) = pls
            .placements
            .iter()
            .find(|pl| by_name.contains_key(pl.name.as_str()))
        {
            return Err(BookshelfError::UnmatchedId {
                path: paths.pl.clone(),
                name: orphan.name.clone(),
                side: RecordSide::Pl,
            });
        }

        Ok(Self { cells })
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn sizes(&self) -> Vec<Size> {
        self.cells
            .iter()
            .map(|cell| Size {
                width: cell.node.width,
                height: cell.node.height,
            })
            .collect()
    }

    pub fn coordinates(&self) -> Vec<Point> {
        self.cells
            .iter()
            .map(|cell| Point {
                x: cell.placement.x,
                y: cell.placement.y,
            })
            .collect()
    }

    pub fn bounding_box(&self) -> Result<BoundingBox> {
        self.cells
            .iter()
            .try_fold(BoundingBox::default(), |bbox, cell| {
                let size = Size {
                    width: cell.node.width,
                    height: cell.node.height,
                };
                let at = Point {
                    x: cell.placement.x,
                    y: cell.placement.y,
                };
                bbox.include(size, at).ok_or_else(|| BookshelfError::Overflow {
                    cell: cell.node.name.clone(),
                })
            })
    }
}

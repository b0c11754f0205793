// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Huang Rui <vowstar@gmail.com>

use std::fmt;

use serde::{Deserialize, Serialize};

/// One line of a `.nodes` file: a cell footprint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookshelfNode {
    pub name: String,
    pub width: u64,
    pub height: u64,
    pub is_terminal: bool,
}

/// In-memory equivalent of a `.nodes` file.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BookshelfNodes {
    pub num_nodes: usize,
    pub num_terminals: usize,
    pub nodes: Vec<BookshelfNode>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Orientation {
    #[default]
    N,
    S,
    E,
    W,
    FN,
    FS,
    FE,
    FW,
}

impl Orientation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Orientation::N => "N",
            Orientation::S => "S",
            Orientation::E => "E",
            Orientation::W => "W",
            Orientation::FN => "FN",
            Orientation::FS => "FS",
            Orientation::FE => "FE",
            Orientation::FW => "FW",
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One line of a `.pl` file: the lower-left corner of a cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookshelfPl {
    pub name: String,
    pub x: u64,
    pub y: u64,
    pub orientation: Orientation,
    pub is_fixed: bool,
}

/// In-memory equivalent of a `.pl` file.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BookshelfPls {
    pub placements: Vec<BookshelfPl>,
}

impl fmt::Display for BookshelfNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:<8} {:>8} {:>8}", self.name, self.width, self.height)?;
        if self.is_terminal {
            write!(f, "\tterminal")?;
        }
        Ok(())
    }
}

impl fmt::Display for BookshelfPl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<8} {:>8} {:>8}\t: {}",
            self.name, self.x, self.y, self.orientation
        )?;
        if self.is_fixed {
            write!(f, " /FIXED")?;
        }
        Ok(())
    }
}

impl BookshelfNodes {
    pub fn terminal_count(&self) -> usize {
        self.nodes.iter().filter(|node| node.is_terminal).count()
    }
}

/// Parse failure inside a single file. The reader attaches the file path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub line: usize,
    pub message: String,
}

impl ParseError {
    pub fn new(line: usize, message: impl Into<String>) -> Self {
        Self {
            line,
            message: message.into(),
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Line {}: {}", self.line, self.message)
    }
}

impl std::error::Error for ParseError {}

pub type ParseResult<T> = Result<T, ParseError>;

pub mod common;
pub mod nodes_parser;
pub mod pl_parser;
pub mod reader;
pub mod writer;

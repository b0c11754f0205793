//! Bookshelf Chip Size Library
//!
//! This library parses ISPD bookshelf placement benchmarks (`.nodes` and `.pl`
//! files) and computes the bounding chip size of the placed cells.

pub mod benchmark;
pub mod bookshelf;
pub mod chip_size;
pub mod error;
pub mod layout;
pub mod report;

// Re-export commonly used types
pub use benchmark::{BenchmarkLocator, BenchmarkPaths};
pub use bookshelf::{BookshelfNode, BookshelfNodes, BookshelfPl, BookshelfPls, Orientation};
pub use chip_size::{bounding_box, BoundingBox, Point, Size};
pub use error::{BookshelfError, Result};
pub use layout::Layout;

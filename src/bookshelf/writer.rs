// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Huang Rui <vowstar@gmail.com>

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use super::BookshelfPls;
use crate::error::{BookshelfError, Result};

/// Write placement records in `.pl` syntax, one record per line.
pub fn write_pl<W: Write>(out: &mut W, pls: &BookshelfPls) -> std::io::Result<()> {
    writeln!(out, "UCLA pl 1.0")?;
    writeln!(out)?;
    for pl in &pls.placements {
        writeln!(out, "{pl}")?;
    }
    out.flush()
}

/// Export placement records to a `.pl` file
pub fn export_pl(pls: &BookshelfPls, file_path: &Path) -> Result<()> {
    let file = File::create(file_path).map_err(|e| BookshelfError::io(file_path, e))?;
    let mut writer = BufWriter::new(file);
    write_pl(&mut writer, pls).map_err(|e| BookshelfError::io(file_path, e))?;
    log::info!(
        "Wrote {} placements to {}",
        pls.placements.len(),
        file_path.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bookshelf::{pl_parser::parse_pl, BookshelfPl, Orientation};

    fn sample() -> BookshelfPls {
        BookshelfPls {
            placements: vec![
                BookshelfPl {
                    name: "o0".to_string(),
                    x: 459,
                    y: 7,
                    orientation: Orientation::N,
                    is_fixed: false,
                },
                BookshelfPl {
                    name: "p1".to_string(),
                    x: 0,
                    y: 120,
                    orientation: Orientation::FS,
                    is_fixed: true,
                },
            ],
        }
    }

    #[test]
    fn test_write_pl_layout() {
        let mut buf = Vec::new();
        write_pl(&mut buf, &sample()).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "UCLA pl 1.0");
        assert_eq!(lines[2], "o0            459        7\t: N");
        assert_eq!(lines[3], "p1              0      120\t: FS /FIXED");
    }

    #[test]
    fn test_written_pl_parses_back() {
        let mut buf = Vec::new();
        write_pl(&mut buf, &sample()).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(parse_pl(&text).unwrap(), sample());
    }

    #[test]
    fn test_wide_columns_stay_separated() {
        let wide = BookshelfPls {
            placements: vec![BookshelfPl {
                name: "abcdefgh".to_string(),
                x: 12345678,
                y: 87654321,
                orientation: Orientation::N,
                is_fixed: true,
            }],
        };
        let mut buf = Vec::new();
        write_pl(&mut buf, &wide).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("abcdefgh 12345678 87654321\t: N /FIXED"));
        assert_eq!(parse_pl(&text).unwrap(), wide);
    }
}

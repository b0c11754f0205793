// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Huang Rui <vowstar@gmail.com>

//! `.pl` file parser
//!
//! ```text
//! UCLA pl 1.0
//! # comments
//! <id> <x> <y> : <orient> [/FIXED]
//! ```

use std::collections::HashSet;

use nom::{
    branch::alt,
    bytes::complete::tag,
    character::complete::{char, space0, space1},
    combinator::value,
    sequence::{preceded, terminated},
    IResult, Parser,
};

use super::common::{
    check_unique, end_of_line, expect, next_token, parse_unsigned, split_header, token,
};
use super::{BookshelfPl, BookshelfPls, Orientation, ParseError, ParseResult};

fn orientation(input: &str) -> IResult<&str, Orientation> {
    alt((
        value(Orientation::FN, tag("FN")),
        value(Orientation::FS, tag("FS")),
        value(Orientation::FE, tag("FE")),
        value(Orientation::FW, tag("FW")),
        value(Orientation::N, tag("N")),
        value(Orientation::S, tag("S")),
        value(Orientation::E, tag("E")),
        value(Orientation::W, tag("W")),
    ))
    .parse(input)
}

/// ` : <orient>` marker following the coordinates.
fn orientation_marker(input: &str) -> IResult<&str, Orientation> {
    preceded(terminated(preceded(space1, char(':')), space0), orientation).parse(input)
}

fn fixed_marker(input: &str) -> IResult<&str, &str> {
    preceded(space1, alt((tag("/FIXED_NI"), tag("/FIXED")))).parse(input)
}

/// Parse one placement record: `<id> <x> <y> : <orient> [/FIXED]`.
pub fn parse_pl_record(text: &str) -> Result<BookshelfPl, String> {
    let (rest, name) = expect(token, text, "cell id")?;
    let (rest, x) = expect(next_token, rest, "x coordinate")?;
    let x = parse_unsigned(x, "x coordinate")?;
    let (rest, y) = expect(next_token, rest, "y coordinate")?;
    let y = parse_unsigned(y, "y coordinate")?;
    let (rest, orientation) = expect(orientation_marker, rest, "': <orientation>' marker")?;

    let (rest, is_fixed) = match fixed_marker(rest) {
        Ok((rest, _)) => (rest, true),
        Err(_) => (rest, false),
    };
    expect(end_of_line, rest, "end of placement record")
        .map_err(|msg| format!("{msg}, found '{}'", rest.trim()))?;

    Ok(BookshelfPl {
        name: name.to_string(),
        x,
        y,
        orientation,
        is_fixed,
    })
}

/// Parse the full content of a `.pl` file.
pub fn parse_pl(content: &str) -> ParseResult<BookshelfPls> {
    let (header, body) = split_header(content, "pl")?;

    let mut placements = Vec::with_capacity(body.len());
    let mut seen = HashSet::with_capacity(body.len());

    for line in &body {
        let pl = parse_pl_record(line.text).map_err(|msg| {
            ParseError::new(
                line.number,
                format!("malformed placement record '{}': {msg}", line.text),
            )
        })?;
        check_unique(&mut seen, &pl.name, line.number)?;
        placements.push(pl);
    }

    if placements.is_empty() {
        return Err(ParseError::new(
            header.number,
            "expected at least one placement record",
        ));
    }

    Ok(BookshelfPls { placements })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orientation() {
        assert_eq!(orientation("N"), Ok(("", Orientation::N)));
        assert_eq!(orientation("FS"), Ok(("", Orientation::FS)));
        assert!(orientation("X").is_err());
    }

    #[test]
    fn test_parse_pl_record() {
        let pl = parse_pl_record("o0\t459\t7\t: N").unwrap();
        assert_eq!(pl.name, "o0");
        assert_eq!((pl.x, pl.y), (459, 7));
        assert_eq!(pl.orientation, Orientation::N);
        assert!(!pl.is_fixed);

        let pl = parse_pl_record("p1 1 1 : N /FIXED").unwrap();
        assert!(pl.is_fixed);

        let pl = parse_pl_record("p2 3 4 :FS /FIXED_NI").unwrap();
        assert_eq!(pl.orientation, Orientation::FS);
        assert!(pl.is_fixed);
    }

    #[test]
    fn test_parse_pl_record_errors() {
        assert!(parse_pl_record("o0 1 2")
            .unwrap_err()
            .contains("orientation"));
        assert!(parse_pl_record("o0 1.5 2 : N")
            .unwrap_err()
            .contains("x coordinate"));
        assert!(parse_pl_record("o0 1 2 : N /MOVABLE").is_err());
        assert!(parse_pl_record("o0 1 2 : NX").is_err());
    }

    #[test]
    fn test_empty_pl_file() {
        let err = parse_pl("UCLA pl 1.0\n# nothing placed\n").unwrap_err();
        assert_eq!(err.line, 1);
    }
}

// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Huang Rui <vowstar@gmail.com>

//! `.nodes` file parser
//!
//! ```text
//! UCLA nodes 1.0
//! # comments
//! NumNodes : <n>
//! NumTerminals : <t>
//! <id> <width> <height> [terminal]
//! ```

use std::collections::HashSet;

use nom::{
    branch::alt,
    bytes::complete::tag,
    character::complete::{char, space0, space1, u64 as unsigned},
    sequence::{delimited, preceded},
    IResult, Parser,
};

use super::common::{
    check_unique, end_of_line, expect, next_token, parse_unsigned, split_header, token, SourceLine,
};
use super::{BookshelfNode, BookshelfNodes, ParseError, ParseResult};

fn count_declaration<'a>(input: &'a str, keyword: &str) -> IResult<&'a str, u64> {
    let (input, _) = tag(keyword)(input)?;
    let (input, _) = delimited(space0, char(':'), space0).parse(input)?;
    let (input, count) = unsigned(input)?;
    let (input, _) = end_of_line(input)?;
    Ok((input, count))
}

fn terminal_keyword(input: &str) -> IResult<&str, &str> {
    // Longest alternative first so "terminal_NI" is not cut short.
    alt((tag("terminal_NI"), tag("terminal"))).parse(input)
}

fn terminal_marker(input: &str) -> IResult<&str, &str> {
    preceded(space1, terminal_keyword).parse(input)
}

fn parse_declaration(
    line: Option<&SourceLine>,
    keyword: &str,
    previous_line: usize,
) -> ParseResult<(usize, usize)> {
    let line = line.ok_or_else(|| {
        ParseError::new(previous_line, format!("missing '{keyword} : <integer>' declaration"))
    })?;
    let (_, count) = count_declaration(line.text, keyword).map_err(|_| {
        ParseError::new(
            line.number,
            format!("expected '{keyword} : <integer>', found '{}'", line.text),
        )
    })?;
    let count = usize::try_from(count).map_err(|_| {
        ParseError::new(
            line.number,
            format!("{keyword} count {count} does not fit in memory"),
        )
    })?;
    Ok((count, line.number))
}

/// Parse one node record: `<id> <width> <height> [terminal]`.
pub fn parse_node_record(text: &str) -> Result<BookshelfNode, String> {
    let (rest, name) = expect(token, text, "node id")?;
    let (rest, width) = expect(next_token, rest, "node width")?;
    let width = parse_unsigned(width, "width")?;
    let (rest, height) = expect(next_token, rest, "node height")?;
    let height = parse_unsigned(height, "height")?;

    let (rest, is_terminal) = match terminal_marker(rest) {
        Ok((rest, _)) => (rest, true),
        Err(_) => (rest, false),
    };
    expect(end_of_line, rest, "end of node record")
        .map_err(|msg| format!("{msg}, found '{}'", rest.trim()))?;

    Ok(BookshelfNode {
        name: name.to_string(),
        width,
        height,
        is_terminal,
    })
}

/// Parse the full content of a `.nodes` file.
///
/// The declared `NumNodes`/`NumTerminals` counts must agree with the records
/// actually present, and ids must be unique.
pub fn parse_nodes(content: &str) -> ParseResult<BookshelfNodes> {
    let (header, body) = split_header(content, "nodes")?;
    let mut lines = body.iter();

    let (num_nodes, num_nodes_line) = parse_declaration(lines.next(), "NumNodes", header.number)?;
    let (num_terminals, num_terminals_line) =
        parse_declaration(lines.next(), "NumTerminals", num_nodes_line)?;

    // Declared counts are untrusted until checked below.
    let capacity = num_nodes.min(1 << 20);
    let mut nodes = Vec::with_capacity(capacity);
    let mut seen = HashSet::with_capacity(capacity);

    for line in lines {
        let node = parse_node_record(line.text).map_err(|msg| {
            ParseError::new(line.number, format!("malformed node record '{}': {msg}", line.text))
        })?;
        check_unique(&mut seen, &node.name, line.number)?;
        nodes.push(node);
    }

    if nodes.is_empty() {
        return Err(ParseError::new(
            num_terminals_line,
            "expected at least one node record",
        ));
    }
    if nodes.len() != num_nodes {
        return Err(ParseError::new(
            num_nodes_line,
            format!("NumNodes declares {num_nodes} but {} node records follow", nodes.len()),
        ));
    }

    let result = BookshelfNodes {
        num_nodes,
        num_terminals,
        nodes,
    };
    let terminals = result.terminal_count();
    if terminals != num_terminals {
        return Err(ParseError::new(
            num_terminals_line,
            format!("NumTerminals declares {num_terminals} but {terminals} terminal records follow"),
        ));
    }

    Ok(result)
}

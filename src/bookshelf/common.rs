// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Huang Rui <vowstar@gmail.com>

//! Common utilities for parsing bookshelf files

use std::collections::HashSet;

use nom::{
    bytes::complete::{tag, take_while1},
    character::complete::{space0, space1},
    combinator::eof,
    sequence::preceded,
    IResult, Parser,
};

use super::{ParseError, ParseResult};

/// A trimmed, non-blank line together with its 1-based number in the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLine<'a> {
    pub number: usize,
    pub text: &'a str,
}

pub fn is_comment(line: &str) -> bool {
    line.starts_with('#')
}

/// Whitespace-free token (cell names, keywords, numbers).
pub fn token(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| !c.is_whitespace())(input)
}

/// Next token after mandatory whitespace.
pub fn next_token(input: &str) -> IResult<&str, &str> {
    preceded(space1, token).parse(input)
}

/// Succeeds only if nothing but whitespace remains.
pub fn end_of_line(input: &str) -> IResult<&str, &str> {
    preceded(space0, eof).parse(input)
}

/// `UCLA <kind> <version>`, yielding the version token.
fn header<'a>(input: &'a str, kind: &str) -> IResult<&'a str, &'a str> {
    let (input, _) = tag("UCLA")(input)?;
    let (input, _) = space1(input)?;
    let (input, _) = tag(kind)(input)?;
    let (input, _) = space1(input)?;
    let (input, version) = token(input)?;
    let (input, _) = end_of_line(input)?;
    Ok((input, version))
}

/// Run a nom parser and turn its failure into a readable expectation message.
pub fn expect<'a, O, P>(mut parser: P, input: &'a str, what: &str) -> Result<(&'a str, O), String>
where
    P: Parser<&'a str, Output = O, Error = nom::error::Error<&'a str>>,
{
    parser
        .parse(input)
        .map_err(|_: nom::Err<nom::error::Error<&'a str>>| format!("expected {what}"))
}

/// Parse an unsigned integer field, naming the field on failure.
pub fn parse_unsigned(text: &str, what: &str) -> Result<u64, String> {
    text.parse::<u64>()
        .map_err(|_| format!("expected non-negative integer {what}, found '{text}'"))
}

/// Split `content` into its header line and the remaining significant lines.
///
/// The header must be the first non-blank line and read `UCLA <kind> <version>`.
/// Blank lines and `#` comments after it are dropped.
pub fn split_header<'a>(
    content: &'a str,
    kind: &str,
) -> ParseResult<(SourceLine<'a>, Vec<SourceLine<'a>>)> {
    let mut lines = content
        .lines()
        .enumerate()
        .map(|(i, raw)| SourceLine {
            number: i + 1,
            text: raw.trim(),
        })
        .filter(|line| !line.text.is_empty());

    let first = lines.next().ok_or_else(|| {
        ParseError::new(1, format!("missing 'UCLA {kind}' header: file is empty"))
    })?;

    header(first.text, kind).map_err(|_| {
        ParseError::new(
            first.number,
            format!("expected header 'UCLA {kind} <version>', found '{}'", first.text),
        )
    })?;

    let body = lines.filter(|line| !is_comment(line.text)).collect();
    Ok((first, body))
}

/// Reject a second record with an already seen name.
pub fn check_unique(seen: &mut HashSet<String>, name: &str, line: usize) -> ParseResult<()> {
    if seen.insert(name.to_string()) {
        Ok(())
    } else {
        Err(ParseError::new(line, format!("duplicate id '{name}'")))
    }
}

//! Test cases for the `.nodes` parser
//!
//! Tests cover:
//! - Header and count declarations
//! - Comment handling
//! - Terminal flags
//! - Malformed records

use bookshelf_chipsize::bookshelf::nodes_parser::parse_nodes;

#[test]
fn test_basic_nodes_parsing() {
    let nodes_content = r#"UCLA nodes 1.0
# Created	:	Jan  6 2005
# User   	:	Gi-Joon Nam & Mehmet Yildiz at IBM Austin Research({gnam, mcyildiz}@us.ibm.com)

NumNodes : 	4
NumTerminals : 	1

	o0	8	12
	o1	8	12
# a comment between records
	o2	16	12
	o3	120	240	terminal
"#;

    let result = parse_nodes(nodes_content);
    assert!(result.is_ok(), "Failed to parse nodes: {:?}", result);

    let nodes = result.unwrap();
    assert_eq!(nodes.num_nodes, 4);
    assert_eq!(nodes.num_terminals, 1);
    assert_eq!(nodes.nodes.len(), 4);

    let names: Vec<&str> = nodes.nodes.iter().map(|n| n.name.as_str()).collect();
    assert_eq!(names, vec!["o0", "o1", "o2", "o3"]);

    assert_eq!(nodes.nodes[2].width, 16);
    assert_eq!(nodes.nodes[2].height, 12);
    assert!(!nodes.nodes[2].is_terminal);
    assert!(nodes.nodes[3].is_terminal);
}

#[test]
fn test_single_node() {
    let nodes = parse_nodes("UCLA nodes 1.0\nNumNodes : 1\nNumTerminals : 0\nc1 10 20\n").unwrap();
    assert_eq!(nodes.nodes.len(), 1);
    assert_eq!(nodes.nodes[0].name, "c1");
    assert_eq!((nodes.nodes[0].width, nodes.nodes[0].height), (10, 20));
}

#[test]
fn test_parsing_is_repeatable() {
    let content = "UCLA nodes 1.0\nNumNodes : 2\nNumTerminals : 0\na 1 2\nb 3 4\n";
    let first = parse_nodes(content).unwrap();
    let second = parse_nodes(content).unwrap();
    assert_eq!(first, second);
    assert_eq!(second.nodes.len(), 2);
}

#[test]
fn test_missing_header() {
    let content = "NumNodes : 1\nNumTerminals : 0\nc1 10 20\n";
    let err = parse_nodes(content).unwrap_err();
    assert_eq!(err.line, 1);
    assert!(err.message.contains("header"), "unexpected: {err}");
}

#[test]
fn test_pl_header_in_nodes_file() {
    let content = "UCLA pl 1.0\nNumNodes : 1\nNumTerminals : 0\nc1 10 20\n";
    assert!(parse_nodes(content).is_err());
}

#[test]
fn test_missing_height() {
    let content = "UCLA nodes 1.0\nNumNodes : 2\nNumTerminals : 0\nc1 10 20\nc2 10\n";
    let err = parse_nodes(content).unwrap_err();
    assert_eq!(err.line, 5);
    assert!(err.message.contains("height"), "unexpected: {err}");
}

#[test]
fn test_non_numeric_width() {
    let content = "UCLA nodes 1.0\nNumNodes : 1\nNumTerminals : 0\nc1 ten 20\n";
    let err = parse_nodes(content).unwrap_err();
    assert_eq!(err.line, 4);
    assert!(err.message.contains("width"), "unexpected: {err}");
}

#[test]
fn test_missing_num_nodes() {
    let content = "UCLA nodes 1.0\nNumTerminals : 0\nc1 10 20\n";
    let err = parse_nodes(content).unwrap_err();
    assert_eq!(err.line, 2);
    assert!(err.message.contains("NumNodes"), "unexpected: {err}");
}

#[test]
fn test_declared_count_mismatch() {
    let content = "UCLA nodes 1.0\nNumNodes : 3\nNumTerminals : 0\na 1 1\nb 1 1\n";
    let err = parse_nodes(content).unwrap_err();
    assert_eq!(err.line, 2);
    assert!(err.message.contains("NumNodes declares 3"), "unexpected: {err}");
}

#[test]
fn test_declared_terminal_mismatch() {
    let content = "UCLA nodes 1.0\nNumNodes : 1\nNumTerminals : 1\na 1 1\n";
    let err = parse_nodes(content).unwrap_err();
    assert_eq!(err.line, 3);
}

#[test]
fn test_no_records() {
    let content = "UCLA nodes 1.0\nNumNodes : 0\nNumTerminals : 0\n";
    assert!(parse_nodes(content).is_err());
}

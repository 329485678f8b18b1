// Copyright 2025 Cardwall contributors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Parser module tests
//!
//! Tests for parsing board files:
//! - Group directive parsing
//! - Card directive parsing
//! - Comments and whitespace
//! - Back-reference resolution and error line numbers
//! - Round-tripping through the `Display` representation

use crate::core::parser::*;
use std::path::Path;

#[test]
fn test_parse_group_line() {
    let (_, group) = parse_group_line("group = todo, To Do").unwrap();
    assert_eq!(group.id, "todo");
    assert_eq!(group.title, "To Do");
    assert!(group.cards.is_empty());
}

#[test]
fn test_parse_card_line() {
    let (_, card) = parse_card_line("card = todo, launch-notes, Write the launch notes").unwrap();
    assert_eq!(card.group_id, "todo");
    assert_eq!(card.id, "launch-notes");
    assert_eq!(card.label, "Write the launch notes");
}

#[test]
fn test_card_label_may_contain_commas() {
    let (_, card) = parse_card_line("card = todo, a1, Ship it, then celebrate").unwrap();
    assert_eq!(card.label, "Ship it, then celebrate");
}

#[test]
fn test_parse_full_board() {
    let content = r#"
# A small board
group = todo, To Do
card = todo, a, First task
card = todo, b, Second task

group = doing, In Progress
card = doing, c, Current task
"#;

    let board = parse_board_file(content, Path::new("board.cards")).unwrap();

    assert_eq!(board.groups.len(), 2);
    assert_eq!(board.total_cards(), 3);
    assert_eq!(board.groups[0].cards[1].id, "b");
    assert_eq!(board.groups[1].title, "In Progress");
}

#[test]
fn test_comments_and_blank_lines_are_skipped() {
    let content = "# heading\n\n   \ngroup = todo, To Do\n# trailing note\n";
    let board = parse_board_file(content, Path::new("")).unwrap();
    assert_eq!(board.groups.len(), 1);
}

#[test]
fn test_unknown_directive_reports_line_number() {
    let content = "group = todo, To Do\nwidget = nope\n";
    let err = parse_board_file(content, Path::new("")).unwrap_err();

    match err {
        ParseError::InvalidSyntax { line, .. } => assert_eq!(line, 2),
        other => panic!("Expected InvalidSyntax, got: {:?}", other),
    }
}

#[test]
fn test_card_before_its_group_is_an_error() {
    let content = "card = todo, a, Task before its group\ngroup = todo, To Do\n";
    let err = parse_board_file(content, Path::new("")).unwrap_err();

    match err {
        ParseError::UnknownGroup { group, line } => {
            assert_eq!(group, "todo");
            assert_eq!(line, 1);
        }
        other => panic!("Expected UnknownGroup, got: {:?}", other),
    }
}

#[test]
fn test_card_naming_undeclared_group_is_an_error() {
    let content = "group = todo, To Do\ncard = ghost, a, Orphan\n";
    let err = parse_board_file(content, Path::new("")).unwrap_err();

    assert!(matches!(err, ParseError::UnknownGroup { .. }));
}

#[test]
fn test_malformed_group_line_reports_line_number() {
    let content = "group todo To Do\n";
    let err = parse_board_file(content, Path::new("")).unwrap_err();

    match err {
        ParseError::InvalidSyntax { line, .. } => assert_eq!(line, 1),
        other => panic!("Expected InvalidSyntax, got: {:?}", other),
    }
}

#[test]
fn test_board_round_trips_through_display() {
    let content = "group = todo, To Do\ncard = todo, a, First task\n\ngroup = done, Done\n";
    let board = parse_board_file(content, Path::new("")).unwrap();

    let rendered = format!("{}", board);
    let reparsed = parse_board_file(&rendered, Path::new("")).unwrap();

    assert_eq!(board, reparsed);
}

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

//! src/core/parser.rs
//!
//! Board file parser
//!
//! This module parses cardwall board files into a `Board`. It handles:
//! - `group = ID, TITLE` directives
//! - `card = GROUP_ID, CARD_ID, LABEL` directives
//! - Comments and whitespace
//! - Line numbers for error reporting
//!
//! # Architecture
//! The parser uses nom combinators for composable, type-safe parsing.
//! Parsing is single-pass and line-oriented: group directives open a group,
//! card directives attach to the group named in their first field. A card
//! naming a group that has not been declared is an error — the `group_id`
//! back-reference must always resolve.
//!
//! # File format
//! ```text
//! # cardwall board
//! group = todo, To Do
//! card = todo, launch-notes, Write the launch notes
//!
//! group = doing, In Progress
//! card = doing, importer, Refactor the importer
//! ```

use nom::{
    bytes::complete::{tag, take_until, take_while1},
    character::complete::{char, space0},
    combinator::rest,
    IResult, Parser,
};
use std::path::Path;
use thiserror::Error;

use crate::core::types::{Board, Card, Group};

/// Parse errors with line number context
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Parse error on line {line}: {message}")]
    InvalidSyntax { line: usize, message: String },

    #[error("Card on line {line} references undeclared group '{group}'")]
    UnknownGroup { group: String, line: usize },

    #[error("IO error reading board: {0}")]
    IoError(#[from] std::io::Error),
}

/// Parse a complete board file
///
/// # Arguments
/// * `content` - The full board file content as a string
/// * `file_path` - Path to the board file (for error messages)
///
/// # Returns
/// The parsed `Board`, or a `ParseError` carrying the offending line number
///
/// # Example
/// ```ignore
/// let content = std::fs::read_to_string("board.cards")?;
/// let board = parse_board_file(&content, Path::new("board.cards"))?;
/// ```
pub fn parse_board_file(content: &str, _file_path: &Path) -> Result<Board, ParseError> {
    let mut board = Board::new();

    for (line_num, line) in content.lines().enumerate() {
        let line_num = line_num + 1; // Human-readable numbers start at 1

        // Skip empty lines and comments
        let line_trimmed = line.trim();
        if line_trimmed.is_empty() || line_trimmed.starts_with('#') {
            continue;
        }

        if line_trimmed.starts_with("group") {
            match parse_group_line(line_trimmed) {
                Ok((_, group)) => board.groups.push(group),
                Err(e) => {
                    return Err(ParseError::InvalidSyntax {
                        line: line_num,
                        message: format!("{:?}", e),
                    });
                }
            }
        } else if line_trimmed.starts_with("card") {
            let card = match parse_card_line(line_trimmed) {
                Ok((_, card)) => card,
                Err(e) => {
                    return Err(ParseError::InvalidSyntax {
                        line: line_num,
                        message: format!("{:?}", e),
                    });
                }
            };

            // The back-reference must name a group declared above
            match board.group_mut(&card.group_id) {
                Some(group) => group.cards.push(card),
                None => {
                    return Err(ParseError::UnknownGroup {
                        group: card.group_id,
                        line: line_num,
                    });
                }
            }
        } else {
            // Board files hold nothing but groups, cards, and comments
            return Err(ParseError::InvalidSyntax {
                line: line_num,
                message: format!("unknown directive: {}", line_trimmed),
            });
        }
    }

    Ok(board)
}

/// Parse a group directive
///
/// Format: group = ID, TITLE
/// Example: group = todo, To Do
///
/// Returns an empty `Group` or a nom error
pub fn parse_group_line(input: &str) -> IResult<&str, Group> {
    let (input, _) = (tag("group"), space0, char('='), space0).parse(input)?;
    let (input, id) = parse_identifier(input)?;
    let (input, _) = (space0, char(','), space0).parse(input)?;
    let (input, title) = rest(input)?;

    Ok((input, Group::new(id, title)))
}

/// Parse a card directive
///
/// Format: card = GROUP_ID, CARD_ID, LABEL
/// Example: card = todo, launch-notes, Write the launch notes
///
/// Returns a `Card` or a nom error
pub fn parse_card_line(input: &str) -> IResult<&str, Card> {
    let (input, _) = (tag("card"), space0, char('='), space0).parse(input)?;
    let (input, group_id) = take_until(",")(input)?;
    let (input, _) = (char(','), space0).parse(input)?;
    let (input, card_id) = take_until(",")(input)?;
    let (input, _) = (char(','), space0).parse(input)?;
    let (input, label) = rest(input)?;

    Ok((input, Card::new(group_id, card_id, label)))
}

/// Parse an identifier: alphanumerics, underscores, and dashes
///
/// Identifiers are kept deliberately narrow so they can never collide with
/// the `,` field separator; `core::validator` enforces the same alphabet.
fn parse_identifier(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c.is_alphanumeric() || c == '_' || c == '-')(input)
}

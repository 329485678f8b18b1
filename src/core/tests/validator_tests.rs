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

//! Invariant validation tests

use crate::core::types::{Board, Card, Group};
use crate::core::validator::{validate_board, validate_id, ValidationError};

/// Helper to build a board from (group id, card ids) pairs
fn board(spec: &[(&str, &[&str])]) -> Board {
    let mut board = Board::new();
    for (group_id, card_ids) in spec {
        let mut group = Group::new(group_id, group_id);
        for card_id in *card_ids {
            group.cards.push(Card::new(group_id, card_id, card_id));
        }
        board.groups.push(group);
    }
    board
}

#[test]
fn test_valid_board_has_no_errors() {
    let board = board(&[("todo", &["a", "b"]), ("done", &["c"])]);
    assert!(validate_board(&board).is_empty());
}

#[test]
fn test_validate_id_whitelist() {
    assert!(validate_id("launch-notes_2").is_ok());
    assert!(validate_id("").is_err());
    assert!(validate_id("has space").is_err());
    assert!(validate_id("no,commas").is_err());
}

#[test]
fn test_duplicate_group_id() {
    let board = board(&[("todo", &[]), ("todo", &[])]);
    let errors = validate_board(&board);

    assert_eq!(errors.len(), 1);
    assert_eq!(
        errors[0],
        ValidationError::DuplicateGroupId("todo".to_string())
    );
}

#[test]
fn test_duplicate_card_id_within_group() {
    let board = board(&[("todo", &["a", "b", "a"])]);
    let errors = validate_board(&board);

    assert_eq!(errors.len(), 1);
    assert!(matches!(
        &errors[0],
        ValidationError::DuplicateCardId { group_id, card_id }
            if group_id == "todo" && card_id == "a"
    ));
}

#[test]
fn test_same_card_id_across_groups_is_allowed() {
    let board = board(&[("todo", &["a"]), ("done", &["a"])]);
    assert!(validate_board(&board).is_empty());
}

#[test]
fn test_foreign_back_reference() {
    let mut b = board(&[("todo", &[]), ("done", &[])]);
    // A card filed under "todo" but claiming to belong to "done"
    b.groups[0].cards.push(Card::new("done", "stray", "Stray"));

    let errors = validate_board(&b);
    assert_eq!(errors.len(), 1);
    assert!(matches!(
        &errors[0],
        ValidationError::ForeignBackReference { claimed, .. } if claimed == "done"
    ));
}

#[test]
fn test_collects_every_violation() {
    let mut b = board(&[("todo", &["a", "a"]), ("todo", &[])]);
    b.groups[0].cards.push(Card::new("todo", "bad id", "Bad"));

    let errors = validate_board(&b);
    // Duplicate card, duplicate group, invalid id: all reported at once
    assert_eq!(errors.len(), 3);
}

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

//! Type tests (Card, Group, Board)

use crate::core::types::{Board, Card, Group};

#[test]
fn test_empty_board_default() {
    let board = Board::default();
    assert!(board.groups.is_empty());
    assert_eq!(board.total_cards(), 0);
}

#[test]
fn test_group_len_and_is_empty() {
    let mut group = Group::new("todo", "To Do");
    assert!(group.is_empty());
    assert_eq!(group.len(), 0);

    group.cards.push(Card::new("todo", "a", "Task"));
    assert!(!group.is_empty());
    assert_eq!(group.len(), 1);
}

#[test]
fn test_group_mut_allows_in_place_edits() {
    let mut board = Board::new();
    board.groups.push(Group::new("todo", "To Do"));

    board
        .group_mut("todo")
        .unwrap()
        .cards
        .push(Card::new("todo", "a", "Task"));

    assert_eq!(board.group("todo").unwrap().len(), 1);
    assert!(board.group_mut("ghost").is_none());
}

#[test]
fn test_find_card_misses() {
    let mut board = Board::new();
    let mut todo = Group::new("todo", "To Do");
    todo.cards.push(Card::new("todo", "a", "Task"));
    board.groups.push(todo);

    assert!(board.find_card("ghost", "a").is_none());
    assert!(board.find_card("todo", "ghost").is_none());
}

#[test]
fn test_card_ids_may_repeat_across_groups() {
    // Card ids are scoped to their group, not the board
    let mut board = Board::new();
    let mut todo = Group::new("todo", "To Do");
    todo.cards.push(Card::new("todo", "a", "One"));
    let mut done = Group::new("done", "Done");
    done.cards.push(Card::new("done", "a", "Other"));
    board.groups.push(todo);
    board.groups.push(done);

    assert_eq!(board.find_card("todo", "a").unwrap().1.label, "One");
    assert_eq!(board.find_card("done", "a").unwrap().1.label, "Other");
}

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

//! Drag session state machine tests
//!
//! Exercises the gesture lifecycle (begin, hover, complete, cancel), the
//! edge-to-index rule with same-group compensation, and the defensive
//! behaviour around stale or absent sessions.

use crate::core::geometry::DropEdge;
use crate::core::reorder::apply_move;
use crate::core::session::DragSession;
use crate::core::types::{Board, Card, Group};

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
fn test_begin_drag_activates_session() {
    let mut session = DragSession::new();
    assert!(!session.is_active());

    session.begin_drag("y", "a", 1);

    assert!(session.is_active());
    let origin = session.origin().unwrap();
    assert_eq!(origin.card_id, "y");
    assert_eq!(origin.group_id, "a");
    assert_eq!(origin.index, 1);
}

#[test]
fn test_begin_drag_while_active_is_ignored() {
    let mut session = DragSession::new();
    session.begin_drag("y", "a", 1);

    // Second drag-start mid-gesture: first gesture wins
    session.begin_drag("q", "b", 0);

    assert_eq!(session.origin().unwrap().card_id, "y");
}

#[test]
fn test_update_hover_overwrites_previous_target() {
    let mut session = DragSession::new();
    session.begin_drag("y", "a", 1);

    session.update_hover("a", 0, DropEdge::Top);
    session.update_hover("b", 2, DropEdge::Bottom);

    let hover = session.hover().unwrap();
    assert_eq!(hover.group_id, "b");
    assert_eq!(hover.index, 2);
    assert_eq!(hover.edge, DropEdge::Bottom);
}

#[test]
fn test_update_hover_while_idle_is_ignored() {
    let mut session = DragSession::new();

    session.update_hover("a", 0, DropEdge::Top);

    assert!(session.hover().is_none());
}

#[test]
fn test_complete_without_session_is_noop() {
    let mut session = DragSession::new();
    let board = board(&[("a", &["x", "y"])]);

    assert!(session.complete_drag(&board).is_none());
}

#[test]
fn test_complete_without_hover_is_noop() {
    // The pointer never crossed a candidate row before release
    let mut session = DragSession::new();
    session.begin_drag("y", "a", 1);
    let board = board(&[("a", &["x", "y"])]);

    assert!(session.complete_drag(&board).is_none());
    assert!(!session.is_active(), "session still returns to idle");
}

#[test]
fn test_cancel_clears_session() {
    let mut session = DragSession::new();
    session.begin_drag("y", "a", 1);
    session.update_hover("a", 0, DropEdge::Top);

    session.cancel_drag();

    assert!(!session.is_active());
    let board = board(&[("a", &["x", "y"])]);
    assert!(
        session.complete_drag(&board).is_none(),
        "cancelled gesture produces no move"
    );
}

#[test]
fn test_next_gesture_after_cancel_is_accepted() {
    let mut session = DragSession::new();
    session.begin_drag("y", "a", 1);
    session.cancel_drag();

    session.begin_drag("q", "b", 0);

    assert_eq!(session.origin().unwrap().card_id, "q");
}

#[test]
fn test_top_edge_inserts_before_target() {
    let mut session = DragSession::new();
    let board = board(&[("a", &["x", "y", "z", "w", "v"])]);

    session.begin_drag("w", "a", 3);
    session.update_hover("a", 1, DropEdge::Top);

    let mv = session.complete_drag(&board).unwrap();
    assert_eq!(mv.target_index, 1, "top half of index 1 inserts at 1");
}

#[test]
fn test_bottom_edge_inserts_after_target() {
    let mut session = DragSession::new();
    let board = board(&[("a", &["x", "y", "z"]), ("b", &["p", "q"])]);

    session.begin_drag("x", "a", 0);
    session.update_hover("b", 0, DropEdge::Bottom);

    let mv = session.complete_drag(&board).unwrap();
    assert_eq!(mv.target_group_id, "b");
    assert_eq!(mv.target_index, 1, "bottom half of index 0 inserts at 1");
}

#[test]
fn test_same_group_compensation() {
    // Moving index 1 to the bottom half of index 3 in a 5-card group:
    // raw insertion is 4, compensated to 3 because the removal of the
    // source card shifts later indices down.
    let mut session = DragSession::new();
    let board = board(&[("a", &["x", "y", "z", "w", "v"])]);

    session.begin_drag("y", "a", 1);
    session.update_hover("a", 3, DropEdge::Bottom);

    let mv = session.complete_drag(&board).unwrap();
    assert_eq!(mv.target_index, 3, "compensated, not 4");
}

#[test]
fn test_no_compensation_when_moving_up() {
    let mut session = DragSession::new();
    let board = board(&[("a", &["x", "y", "z", "w", "v"])]);

    session.begin_drag("w", "a", 3);
    session.update_hover("a", 1, DropEdge::Bottom);

    let mv = session.complete_drag(&board).unwrap();
    assert_eq!(mv.target_index, 2, "source index above insertion: no shift");
}

#[test]
fn test_no_compensation_across_groups() {
    let mut session = DragSession::new();
    let board = board(&[("a", &["x", "y", "z"]), ("b", &["p", "q"])]);

    session.begin_drag("x", "a", 0);
    session.update_hover("b", 1, DropEdge::Bottom);

    let mv = session.complete_drag(&board).unwrap();
    assert_eq!(mv.target_index, 2, "cross-group insertion is uncompensated");
}

#[test]
fn test_insertion_index_clamped_to_group_length() {
    // The hovered row's index outlived the row (board shrank mid-drag)
    let mut session = DragSession::new();
    let board = board(&[("a", &["x", "y"]), ("b", &["p"])]);

    session.begin_drag("x", "a", 0);
    session.update_hover("b", 7, DropEdge::Bottom);

    let mv = session.complete_drag(&board).unwrap();
    assert_eq!(mv.target_index, 1, "clamped to target group length");
}

#[test]
fn test_empty_group_drop_zone_inserts_at_zero() {
    // An empty group's drop zone reports (group, 0, Top)
    let mut session = DragSession::new();
    let board = board(&[("a", &["x", "y"]), ("empty", &[])]);

    session.begin_drag("y", "a", 1);
    session.update_hover("empty", 0, DropEdge::Top);

    let mv = session.complete_drag(&board).unwrap();
    assert_eq!(mv.target_group_id, "empty");
    assert_eq!(mv.target_index, 0);
}

#[test]
fn test_full_gesture_against_resolver() {
    // End-to-end: drag y (index 1 in A) onto the bottom half of p
    // (index 0 in B), then apply the resulting move.
    let mut session = DragSession::new();
    let board = board(&[("A", &["x", "y", "z"]), ("B", &["p", "q"])]);

    session.begin_drag("y", "A", 1);
    session.update_hover("B", 0, DropEdge::Bottom);

    let mv = session.complete_drag(&board).unwrap();
    let groups = apply_move(&board.groups, &mv);

    let a: Vec<_> = groups[0].cards.iter().map(|c| c.id.as_str()).collect();
    let b: Vec<_> = groups[1].cards.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(a, vec!["x", "z"]);
    assert_eq!(b, vec!["p", "y", "q"]);
}

#[test]
fn test_cancelled_gesture_leaves_board_untouched() {
    let mut session = DragSession::new();
    let board = board(&[("A", &["x", "y", "z"]), ("B", &["p", "q"])]);
    let snapshot = board.clone();

    session.begin_drag("z", "A", 2);
    session.update_hover("B", 1, DropEdge::Top);
    session.cancel_drag();

    // Nothing to apply, so the board is byte-for-byte the input
    assert!(session.complete_drag(&board).is_none());
    assert_eq!(board, snapshot);
}

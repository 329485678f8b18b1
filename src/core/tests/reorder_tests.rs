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

//! Reorder resolver tests
//!
//! Covers the resolver's whole contract: same-group splice order,
//! cross-group moves, stale-reference no-ops, clamping, and the
//! untouched pass-through of unaffected groups.

use crate::core::reorder::reorder;
use crate::core::types::{Card, Group};

/// Helper to build a group from card ids
fn group(id: &str, card_ids: &[&str]) -> Group {
    let mut g = Group::new(id, id);
    for card_id in card_ids {
        g.cards.push(Card::new(id, card_id, card_id));
    }
    g
}

/// Helper to read a group's card ids back out
fn ids(groups: &[Group], group_id: &str) -> Vec<String> {
    groups
        .iter()
        .find(|g| g.id == group_id)
        .map(|g| g.cards.iter().map(|c| c.id.clone()).collect())
        .unwrap_or_default()
}

#[test]
fn test_same_group_move_lands_at_target_index() {
    let groups = vec![group("a", &["x", "y", "z", "w", "v"])];

    let result = reorder(&groups, "a", 1, "a", 3);

    assert_eq!(ids(&result, "a"), vec!["x", "z", "w", "y", "v"]);
    assert_eq!(result[0].cards[3].id, "y", "dragged card lands at target");
    assert_eq!(result[0].cards.len(), 5, "length unchanged");
}

#[test]
fn test_same_group_move_toward_front() {
    let groups = vec![group("a", &["x", "y", "z", "w"])];

    let result = reorder(&groups, "a", 3, "a", 0);

    assert_eq!(ids(&result, "a"), vec!["w", "x", "y", "z"]);
}

#[test]
fn test_move_to_own_position_is_identity() {
    let groups = vec![group("a", &["x", "y", "z"])];

    let result = reorder(&groups, "a", 1, "a", 1);

    assert_eq!(result, groups, "reorder to own position changes nothing");
}

#[test]
fn test_cross_group_lengths_and_total() {
    let groups = vec![group("a", &["x", "y", "z"]), group("b", &["p", "q"])];
    let total: usize = groups.iter().map(|g| g.cards.len()).sum();

    let result = reorder(&groups, "a", 0, "b", 2);

    assert_eq!(ids(&result, "a").len(), 2, "source shrinks by one");
    assert_eq!(ids(&result, "b").len(), 3, "target grows by one");
    let new_total: usize = result.iter().map(|g| g.cards.len()).sum();
    assert_eq!(new_total, total, "total card count is invariant");
    assert_eq!(ids(&result, "b"), vec!["p", "q", "x"]);
}

#[test]
fn test_cross_group_rewrites_back_reference() {
    let groups = vec![group("a", &["x"]), group("b", &[])];

    let result = reorder(&groups, "a", 0, "b", 0);

    let moved = &result.iter().find(|g| g.id == "b").unwrap().cards[0];
    assert_eq!(moved.group_id, "b", "back-reference follows the card");
}

#[test]
fn test_cross_group_when_target_precedes_source() {
    // The target group comes first in board order; the card must still
    // arrive intact.
    let groups = vec![group("b", &["p", "q"]), group("a", &["x", "y", "z"])];

    let result = reorder(&groups, "a", 1, "b", 1);

    assert_eq!(ids(&result, "b"), vec!["p", "y", "q"]);
    assert_eq!(ids(&result, "a"), vec!["x", "z"]);
}

#[test]
fn test_drop_into_empty_group() {
    let groups = vec![group("a", &["x", "y"]), group("empty", &[])];

    let result = reorder(&groups, "a", 1, "empty", 0);

    assert_eq!(ids(&result, "empty"), vec!["y"]);
    assert_eq!(ids(&result, "a"), vec!["x"]);
}

#[test]
fn test_spec_scenario_a_to_b() {
    // Drag y (index 1 in A) onto the bottom half of p (index 0 in B):
    // the session resolves that hover to target index 1.
    let groups = vec![group("A", &["x", "y", "z"]), group("B", &["p", "q"])];

    let result = reorder(&groups, "A", 1, "B", 1);

    assert_eq!(ids(&result, "A"), vec!["x", "z"]);
    assert_eq!(ids(&result, "B"), vec!["p", "y", "q"]);
}

#[test]
fn test_stale_source_index_returns_input_unchanged() {
    let groups = vec![group("a", &["x", "y"])];

    let result = reorder(&groups, "a", 5, "a", 0);

    assert_eq!(result, groups);
}

#[test]
fn test_missing_source_group_returns_input_unchanged() {
    let groups = vec![group("a", &["x", "y"])];

    let result = reorder(&groups, "ghost", 0, "a", 0);

    assert_eq!(result, groups);
}

#[test]
fn test_missing_target_group_returns_input_unchanged() {
    let groups = vec![group("a", &["x", "y"])];

    let result = reorder(&groups, "a", 0, "ghost", 0);

    assert_eq!(result, groups);
}

#[test]
fn test_target_index_clamped_to_length() {
    let groups = vec![group("a", &["x", "y", "z"]), group("b", &["p"])];

    let result = reorder(&groups, "a", 0, "b", 99);

    assert_eq!(ids(&result, "b"), vec!["p", "x"], "over-long index appends");
}

#[test]
fn test_unaffected_groups_pass_through_unchanged() {
    let groups = vec![
        group("a", &["x", "y"]),
        group("b", &["p"]),
        group("c", &["m", "n"]),
    ];

    let result = reorder(&groups, "a", 0, "b", 0);

    let untouched = result.iter().find(|g| g.id == "c").unwrap();
    assert_eq!(untouched, &groups[2], "bystander group is identical");
}

#[test]
fn test_input_is_never_mutated() {
    let groups = vec![group("a", &["x", "y", "z"])];
    let snapshot = groups.clone();

    let _ = reorder(&groups, "a", 0, "a", 2);

    assert_eq!(groups, snapshot, "resolver input is read-only");
}

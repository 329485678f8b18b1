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

//! src/core/reorder.rs
//!
//! Reorder resolver
//!
//! Pure functions that compute the next ordered state of all groups from a
//! move description. The resolver never mutates its input: it returns a new
//! collection, and unaffected groups pass through untouched so callers can
//! refresh only what changed. The caller commits the result as the new
//! source of truth.
//!
//! Defensive contract: a move whose source card no longer exists (the board
//! was mutated externally mid-drag) or whose target group has vanished
//! returns the input unchanged instead of failing — the view stays
//! consistent and the stale gesture simply has no effect.

use crate::core::session::CardMove;
use crate::core::types::Group;

/// Applies a [`CardMove`] to an ordered group collection
///
/// Convenience wrapper over [`reorder`] for callers holding a move struct.
pub fn apply_move(groups: &[Group], mv: &CardMove) -> Vec<Group> {
    reorder(
        groups,
        &mv.source_group_id,
        mv.source_index,
        &mv.target_group_id,
        mv.target_index,
    )
}

/// Computes the next ordered state of all groups for a single move
///
/// # Same-group moves
/// The card at `source_index` is removed first, then inserted at
/// `target_index` into the already-shortened sequence. The order matters:
/// inserting first would shift the removal target.
///
/// # Cross-group moves
/// The card is removed from the source group and inserted into the target
/// group at `target_index`; its `group_id` back-reference is rewritten to
/// the new owner.
///
/// Insertion indices are clamped to the receiving sequence's length, so a
/// hover index that outlived the row it pointed at degrades to an append
/// rather than a panic.
pub fn reorder(
    groups: &[Group],
    source_group_id: &str,
    source_index: usize,
    target_group_id: &str,
    target_index: usize,
) -> Vec<Group> {
    // Stale-reference check: the source card must still be where the drag
    // session last saw it.
    let source_exists = groups
        .iter()
        .find(|g| g.id == source_group_id)
        .is_some_and(|g| source_index < g.cards.len());

    if !source_exists || !groups.iter().any(|g| g.id == target_group_id) {
        return groups.to_vec();
    }

    if source_group_id == target_group_id {
        return groups
            .iter()
            .map(|group| {
                if group.id != source_group_id {
                    return group.clone();
                }

                let mut cards = group.cards.clone();
                let card = cards.remove(source_index);
                let insert_at = target_index.min(cards.len());
                cards.insert(insert_at, card);

                Group {
                    id: group.id.clone(),
                    title: group.title.clone(),
                    cards,
                }
            })
            .collect();
    }

    // Cross-group: lift the card out of the source first, so the rebuild
    // below works whichever of the two groups comes first in board order.
    let mut moved = match groups.iter().find(|g| g.id == source_group_id) {
        Some(group) => group.cards[source_index].clone(),
        None => return groups.to_vec(),
    };
    moved.group_id = target_group_id.to_string();

    groups
        .iter()
        .map(|group| {
            if group.id == source_group_id {
                let mut cards = group.cards.clone();
                cards.remove(source_index);

                Group {
                    id: group.id.clone(),
                    title: group.title.clone(),
                    cards,
                }
            } else if group.id == target_group_id {
                let mut cards = group.cards.clone();
                let insert_at = target_index.min(cards.len());
                cards.insert(insert_at, moved.clone());

                Group {
                    id: group.id.clone(),
                    title: group.title.clone(),
                    cards,
                }
            } else {
                group.clone()
            }
        })
        .collect()
}

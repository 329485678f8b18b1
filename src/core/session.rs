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

//! src/core/session.rs
//!
//! Drag session state machine
//!
//! A `DragSession` tracks exactly one in-progress drag gesture for a list
//! container. It has two states — idle and dragging — and four transitions:
//!
//! - `begin_drag` captures the drag origin (card, group, index). Ignored
//!   while a gesture is already in progress: the first gesture wins, which
//!   also guards against stale sessions left by a cancelled gesture.
//! - `update_hover` overwrites the current hover target on every drag-over
//!   event. Last write wins; only the hover state at drop time matters.
//! - `complete_drag` turns origin + hover into a concrete [`CardMove`] via
//!   the edge-to-index rule and returns to idle.
//! - `cancel_drag` returns to idle without producing a move.
//!
//! All state lives here, not in widgets, so the whole gesture contract is
//! testable without a display server.

use crate::core::geometry::DropEdge;
use crate::core::types::Board;

/// Where a drag gesture started, captured once at drag-begin
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DragOrigin {
    /// Id of the card being dragged
    pub card_id: String,
    /// Group the card was in when the gesture started
    pub group_id: String,
    /// The card's index in that group at gesture start
    pub index: usize,
}

/// The insertion point under the pointer, recomputed on every drag-over
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct HoverTarget {
    /// Group of the row currently under the pointer
    pub group_id: String,
    /// Index of the row currently under the pointer
    pub index: usize,
    /// Which half of that row the pointer is over
    pub edge: DropEdge,
}

/// A fully-described move, ready for the reorder resolver
///
/// `(source group, source index, target group, target index)` describes the
/// move completely; applying it preserves the relative order of every other
/// card.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CardMove {
    pub source_group_id: String,
    pub source_index: usize,
    pub target_group_id: String,
    pub target_index: usize,
}

/// Internal session state: idle, or dragging with an optional hover target
#[derive(Clone, Debug, Default, Eq, PartialEq)]
enum State {
    #[default]
    Idle,
    Dragging {
        origin: DragOrigin,
        hover: Option<HoverTarget>,
    },
}

/// Tracks the single drag gesture in progress for one list container
#[derive(Clone, Debug, Default)]
pub struct DragSession {
    state: State,
}

impl DragSession {
    /// Creates an idle session
    pub fn new() -> Self {
        Self { state: State::Idle }
    }

    /// Returns true while a gesture is in progress
    pub fn is_active(&self) -> bool {
        matches!(self.state, State::Dragging { .. })
    }

    /// The origin of the gesture in progress, if any
    pub fn origin(&self) -> Option<&DragOrigin> {
        match &self.state {
            State::Dragging { origin, .. } => Some(origin),
            State::Idle => None,
        }
    }

    /// The current hover target, if any
    pub fn hover(&self) -> Option<&HoverTarget> {
        match &self.state {
            State::Dragging { hover, .. } => hover.as_ref(),
            State::Idle => None,
        }
    }

    /// Starts a gesture; ignored if one is already active (first wins)
    pub fn begin_drag(&mut self, card_id: &str, group_id: &str, index: usize) {
        if self.is_active() {
            return;
        }

        self.state = State::Dragging {
            origin: DragOrigin {
                card_id: card_id.to_string(),
                group_id: group_id.to_string(),
                index,
            },
            hover: None,
        };
    }

    /// Records the insertion point under the pointer
    ///
    /// Idempotent: always overwrites the previous hover target. Ignored
    /// while idle (a stray drag-over without a matching drag-begin).
    pub fn update_hover(&mut self, group_id: &str, index: usize, edge: DropEdge) {
        if let State::Dragging { hover, .. } = &mut self.state {
            *hover = Some(HoverTarget {
                group_id: group_id.to_string(),
                index,
                edge,
            });
        }
    }

    /// Completes the gesture, turning origin + hover into a [`CardMove`]
    ///
    /// Returns `None` — and emits nothing — when no gesture is active or
    /// the gesture never acquired a hover target (a drop outside every
    /// candidate row). Either way the session returns to idle.
    ///
    /// # Edge-to-index rule
    /// Hovering the top half of the row at index `i` inserts at `i`;
    /// the bottom half inserts at `i + 1`. When source and target group are
    /// the same and the source index is below the insertion index, the
    /// insertion index is decremented by one: removing the source card
    /// shifts every later index down. The result is clamped to
    /// `[0, target_group.len()]`.
    pub fn complete_drag(&mut self, board: &Board) -> Option<CardMove> {
        let state = std::mem::take(&mut self.state);

        let (origin, hover) = match state {
            State::Dragging {
                origin,
                hover: Some(hover),
            } => (origin, hover),
            _ => return None,
        };

        let mut insertion_index = match hover.edge {
            DropEdge::Top => hover.index,
            DropEdge::Bottom => hover.index + 1,
        };

        // Same-group compensation: the removal of the source card shifts
        // every index after it down by one.
        if origin.group_id == hover.group_id && origin.index < insertion_index {
            insertion_index -= 1;
        }

        let target_len = board.group(&hover.group_id).map_or(0, |g| g.len());
        insertion_index = insertion_index.min(target_len);

        Some(CardMove {
            source_group_id: origin.group_id,
            source_index: origin.index,
            target_group_id: hover.group_id,
            target_index: insertion_index,
        })
    }

    /// Abandons the gesture without producing a move
    pub fn cancel_drag(&mut self) {
        self.state = State::Idle;
    }
}

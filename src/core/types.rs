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

//! src/core/types.rs
//!
//! Core type definitions for board management
//!
//! This module defines the fundamental types used throughout the application:
//! - `Card`: A single draggable entry, owned by exactly one group
//! - `Group`: An ordered, titled run of cards
//! - `Board`: The full ordered collection of groups
//!
//! All types implement serialization for persistence, and `Display` renders
//! the board file format that `core::parser` reads back, so a board
//! round-trips losslessly through its file representation.
//!
//! Card position is implicit: the index inside `Group::cards` IS the
//! position. Nothing stores an explicit position field, so a reorder can
//! never leave duplicate or missing indices.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single draggable card
///
/// A card's `id` is unique within its owning group at any point in time,
/// but not necessarily unique across the whole board. `group_id` is a
/// back-reference to the owning group — a relation used for lookup during
/// reorders, not an ownership pointer.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Card {
    /// Identifier, unique within the owning group
    pub id: String,

    /// Id of the group this card currently belongs to
    pub group_id: String,

    /// Display label; the list machinery never interprets it
    pub label: String,
}

impl Card {
    /// Create a new card with trimmed fields
    pub fn new(group_id: &str, id: &str, label: &str) -> Self {
        Self {
            id: id.trim().to_string(),
            group_id: group_id.trim().to_string(),
            label: label.trim().to_string(),
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "card = {}, {}, {}", self.group_id, self.id, self.label)
    }
}

/// An ordered, titled run of cards
///
/// The order of `cards` is significant: it defines both render order and
/// logical position. Groups are identified by an `id` that is unique across
/// the board and stable across reorders.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Group {
    /// Identifier, unique across the board, stable across reorders
    pub id: String,

    /// Display title shown in the group header
    pub title: String,

    /// Cards in display order; the index is the position
    pub cards: Vec<Card>,
}

impl Group {
    /// Create a new empty group
    pub fn new(id: &str, title: &str) -> Self {
        Self {
            id: id.trim().to_string(),
            title: title.trim().to_string(),
            cards: Vec::new(),
        }
    }

    /// Returns the index of the card with the given id, if present
    pub fn position_of(&self, card_id: &str) -> Option<usize> {
        self.cards.iter().position(|c| c.id == card_id)
    }

    /// Returns the number of cards in this group
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns true when the group holds no cards
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "group = {}, {}", self.id, self.title)
    }
}

/// The full board: an ordered collection of groups
///
/// The board is owned by the caller (ultimately the board file on disk);
/// the UI is a controlled view over it. Reordering replaces the board
/// wholesale with the resolver's output rather than mutating in place.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct Board {
    /// Groups in display order
    pub groups: Vec<Group>,
}

impl Board {
    /// Create an empty board
    pub fn new() -> Self {
        Self { groups: Vec::new() }
    }

    /// Look up a group by id
    pub fn group(&self, id: &str) -> Option<&Group> {
        self.groups.iter().find(|g| g.id == id)
    }

    /// Look up a group by id, mutably
    pub fn group_mut(&mut self, id: &str) -> Option<&mut Group> {
        self.groups.iter_mut().find(|g| g.id == id)
    }

    /// Total number of cards across all groups
    pub fn total_cards(&self) -> usize {
        self.groups.iter().map(|g| g.cards.len()).sum()
    }

    /// Find a card by (group id, card id); returns its index and the card
    pub fn find_card(&self, group_id: &str, card_id: &str) -> Option<(usize, &Card)> {
        let group = self.group(group_id)?;
        let index = group.position_of(card_id)?;
        Some((index, &group.cards[index]))
    }
}

impl fmt::Display for Board {
    /// Renders the board file format that `core::parser` parses
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, group) in self.groups.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            writeln!(f, "{}", group)?;
            for card in &group.cards {
                writeln!(f, "{}", card)?;
            }
        }
        Ok(())
    }
}

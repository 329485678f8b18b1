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

//! src/core/validator.rs
//!
//! Board invariant validation
//!
//! This module checks the structural invariants every board must satisfy:
//! - Group ids are unique across the board
//! - Card ids are unique within their owning group
//! - Ids are non-empty and drawn from a whitelisted alphabet
//! - Every card's `group_id` back-reference names its owning group
//!
//! Validation runs on every load and before every commit, so a board file
//! edited by hand cannot smuggle a duplicate id into the reorder machinery,
//! where it would make "the card at index i" ambiguous.
//!
//! We use WHITELIST validation for identifiers (allow known-good characters)
//! rather than rejecting known-bad ones: the id alphabet must stay disjoint
//! from the board file's field separator.

use regex::Regex;
use std::collections::HashMap;
use std::sync::OnceLock;
use thiserror::Error;

use crate::core::types::Board;

/// Identifier alphabet: alphanumerics, underscores, and dashes
const ID_PATTERN: &str = r"^[A-Za-z0-9_-]+$";

/// Validation errors
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    /// Identifier is empty or not in the whitelisted alphabet
    #[error("Invalid identifier '{0}': must match [A-Za-z0-9_-]+")]
    InvalidId(String),

    /// Two groups share an id
    #[error("Duplicate group id '{0}'")]
    DuplicateGroupId(String),

    /// Two cards in the same group share an id
    #[error("Duplicate card id '{card_id}' in group '{group_id}'")]
    DuplicateCardId { group_id: String, card_id: String },

    /// A card's back-reference names a group other than its owner
    #[error("Card '{card_id}' in group '{group_id}' claims group '{claimed}'")]
    ForeignBackReference {
        group_id: String,
        card_id: String,
        claimed: String,
    },
}

fn id_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(ID_PATTERN).expect("identifier pattern is a valid regex"))
}

/// Validates a single identifier against the whitelisted alphabet
pub fn validate_id(id: &str) -> Result<(), ValidationError> {
    if id_regex().is_match(id) {
        Ok(())
    } else {
        Err(ValidationError::InvalidId(id.to_string()))
    }
}

/// Validates all board invariants, collecting every violation
///
/// Returns an empty vector when the board is well-formed. Collecting all
/// violations (rather than stopping at the first) lets the CLI `check`
/// command report everything wrong with a hand-edited file in one pass.
///
/// Duplicate detection is HashMap-based: one occurrence count per group id
/// and per (group, card id) pair, flagged when a count passes one.
pub fn validate_board(board: &Board) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let mut group_seen: HashMap<&str, usize> = HashMap::new();

    for group in &board.groups {
        if let Err(e) = validate_id(&group.id) {
            errors.push(e);
        }

        let count = group_seen.entry(group.id.as_str()).or_insert(0);
        *count += 1;
        if *count == 2 {
            errors.push(ValidationError::DuplicateGroupId(group.id.clone()));
        }

        let mut card_seen: HashMap<&str, usize> = HashMap::new();

        for card in &group.cards {
            if let Err(e) = validate_id(&card.id) {
                errors.push(e);
            }

            let count = card_seen.entry(card.id.as_str()).or_insert(0);
            *count += 1;
            if *count == 2 {
                errors.push(ValidationError::DuplicateCardId {
                    group_id: group.id.clone(),
                    card_id: card.id.clone(),
                });
            }

            if card.group_id != group.id {
                errors.push(ValidationError::ForeignBackReference {
                    group_id: group.id.clone(),
                    card_id: card.id.clone(),
                    claimed: card.group_id.clone(),
                });
            }
        }
    }

    errors
}

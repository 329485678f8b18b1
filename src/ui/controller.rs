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

//! MVC Controller - Mediates between Model (BoardStore) and View (GTK4 components)
//!
//! # Responsibilities
//!
//! - Load the board from the BoardStore
//! - Filter/search cards
//! - Own the single drag session and funnel every reorder through it
//! - Card CRUD, multi-select bookkeeping, backups, export/import
//! - Provide data to the View in UI-friendly form
//!
//! # Architecture
//!
//! The Controller holds the Model but doesn't know about GTK4 widgets.
//! This keeps business logic separate from presentation — and makes the
//! whole gesture contract testable without a display server.

use std::cell::{Cell, RefCell};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::geometry::DropEdge;
use crate::core::parser::parse_board_file;
use crate::core::reorder::apply_move;
use crate::core::session::{CardMove, DragSession};
use crate::core::types::{Board, Card};
use crate::core::validator::validate_board;
use crate::store::{BoardStore, StoreError};

/// MVC Controller coordinating Model and View
///
/// All board mutation — drops included — funnels through methods on this
/// type, which commit to the store first and replace the in-memory board
/// wholesale on success. The view re-renders from the replacement.
pub struct Controller {
    /// Board file manager
    store: BoardStore,
    /// Current in-memory board (the view's source of truth)
    board: RefCell<Board>,
    /// The single drag session for this container
    session: RefCell<DragSession>,
    /// Current search query (empty = show everything)
    search_query: RefCell<String>,
    /// Whether multi-select mode is on
    select_mode: Cell<bool>,
    /// Selected cards as (group id, card id) pairs
    selection: RefCell<HashSet<(String, String)>>,
}

impl Controller {
    /// Creates a new Controller for the given board file path
    ///
    /// # Errors
    ///
    /// Returns `StoreError` when the board file does not exist or its
    /// backup directory cannot be prepared.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use cardwall::ui::Controller;
    /// use std::path::PathBuf;
    ///
    /// let controller = Controller::new(
    ///     PathBuf::from("~/.config/cardwall/board.cards")
    /// )?;
    /// # Ok::<(), cardwall::store::StoreError>(())
    /// ```
    pub fn new(board_path: PathBuf) -> Result<Self, StoreError> {
        let store = BoardStore::new(board_path)?;

        // Data is loaded later via load_board
        Ok(Self {
            store,
            board: RefCell::new(Board::new()),
            session: RefCell::new(DragSession::new()),
            search_query: RefCell::new(String::new()),
            select_mode: Cell::new(false),
            selection: RefCell::new(HashSet::new()),
        })
    }

    /// Path of the board file backing this controller
    pub fn board_path(&self) -> PathBuf {
        self.store.path().to_path_buf()
    }

    /// Loads (or reloads) the board from the store
    ///
    /// Call on startup and whenever the file watcher reports an external
    /// edit. Selections pointing at cards that no longer exist are pruned,
    /// and any gesture in progress is cancelled — its indices are stale.
    ///
    /// # Returns
    ///
    /// The number of cards loaded.
    pub fn load_board(&self) -> Result<usize, StoreError> {
        let board = self.store.load()?;
        let count = board.total_cards();

        self.selection
            .borrow_mut()
            .retain(|(group_id, card_id)| board.find_card(group_id, card_id).is_some());
        self.session.borrow_mut().cancel_drag();

        *self.board.borrow_mut() = board;

        Ok(count)
    }

    /// Returns a clone of the current board
    pub fn board(&self) -> Board {
        self.board.borrow().clone()
    }

    /// Total cards across all groups
    pub fn card_count(&self) -> usize {
        self.board.borrow().total_cards()
    }

    /// Number of groups on the board
    pub fn group_count(&self) -> usize {
        self.board.borrow().groups.len()
    }

    // ------------------------------------------------------------------
    // Search
    // ------------------------------------------------------------------

    /// Stores the current search query (single source of truth)
    pub fn set_search_query(&self, query: String) {
        *self.search_query.borrow_mut() = query;
    }

    /// The board as currently visible: all groups, cards filtered by query
    ///
    /// Search is case-insensitive and matches card labels and ids. Groups
    /// stay visible when emptied by the filter so their headers (and drop
    /// zones) remain on screen.
    pub fn visible_board(&self) -> Board {
        let query = self.search_query.borrow().trim().to_lowercase();
        if query.is_empty() {
            return self.board();
        }

        let mut board = self.board();
        for group in &mut board.groups {
            group.cards.retain(|card| {
                card.label.to_lowercase().contains(&query)
                    || card.id.to_lowercase().contains(&query)
            });
        }
        board
    }

    /// True while a (non-empty) search query is active
    ///
    /// Drags are rejected while filtering: filtered indices don't line up
    /// with stored positions, so a drop could not be resolved faithfully.
    pub fn filtering(&self) -> bool {
        !self.search_query.borrow().trim().is_empty()
    }

    // ------------------------------------------------------------------
    // Drag session (the List Container contract)
    // ------------------------------------------------------------------

    /// Records the drag origin; ignored if a gesture is already active
    pub fn begin_drag(&self, card_id: &str, group_id: &str, index: usize) {
        if self.filtering() {
            return;
        }
        self.session.borrow_mut().begin_drag(card_id, group_id, index);
    }

    /// Overwrites the hover target; called on every drag-over event
    pub fn update_hover(&self, group_id: &str, index: usize, edge: DropEdge) {
        self.session.borrow_mut().update_hover(group_id, index, edge);
    }

    /// True while a drag gesture is in progress
    pub fn drag_active(&self) -> bool {
        self.session.borrow().is_active()
    }

    /// Completes the gesture: resolve, persist, replace the board
    ///
    /// Returns the applied move, or `None` when there was no active
    /// session or no hover target (nothing is emitted in either case).
    /// On a store failure the in-memory board is left untouched and the
    /// error is surfaced to the caller.
    pub fn complete_drag(&self) -> Result<Option<CardMove>, StoreError> {
        let mv = {
            let board = self.board.borrow();
            self.session.borrow_mut().complete_drag(&board)
        };

        let Some(mv) = mv else {
            return Ok(None);
        };

        let new_board = Board {
            groups: apply_move(&self.board.borrow().groups, &mv),
        };

        self.store.save(&new_board)?;
        *self.board.borrow_mut() = new_board;

        Ok(Some(mv))
    }

    /// Abandons the gesture without emitting a reorder
    pub fn cancel_drag(&self) {
        self.session.borrow_mut().cancel_drag();
    }

    // ------------------------------------------------------------------
    // Card CRUD
    // ------------------------------------------------------------------

    /// Adds a card to the end of its group
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Invalid` if the card names a group that does
    /// not exist, or would duplicate an id within its group.
    pub fn add_card(&self, card: Card) -> Result<(), StoreError> {
        let mut board = self.board();

        let group = board
            .group_mut(&card.group_id)
            .ok_or_else(|| StoreError::Invalid(format!("no such group: {}", card.group_id)))?;
        group.cards.push(card);

        self.commit(board)
    }

    /// Replaces a card, possibly moving it to another group
    ///
    /// When the group is unchanged the card keeps its position; when it
    /// changes, the card is appended to the new group.
    pub fn update_card(&self, original: &Card, updated: Card) -> Result<(), StoreError> {
        let mut board = self.board();

        let group = board
            .group_mut(&original.group_id)
            .ok_or_else(|| StoreError::Invalid(format!("no such group: {}", original.group_id)))?;
        let index = group
            .position_of(&original.id)
            .ok_or_else(|| StoreError::Invalid(format!("no such card: {}", original.id)))?;

        if updated.group_id == original.group_id {
            group.cards[index] = updated;
        } else {
            group.cards.remove(index);
            let target = board
                .group_mut(&updated.group_id)
                .ok_or_else(|| StoreError::Invalid(format!("no such group: {}", updated.group_id)))?;
            target.cards.push(updated);
        }

        self.commit(board)
    }

    /// Deletes a card from the board
    pub fn delete_card(&self, card: &Card) -> Result<(), StoreError> {
        let mut board = self.board();

        let group = board
            .group_mut(&card.group_id)
            .ok_or_else(|| StoreError::Invalid(format!("no such group: {}", card.group_id)))?;
        let index = group
            .position_of(&card.id)
            .ok_or_else(|| StoreError::Invalid(format!("no such card: {}", card.id)))?;
        group.cards.remove(index);

        self.selection
            .borrow_mut()
            .remove(&(card.group_id.clone(), card.id.clone()));

        self.commit(board)
    }

    /// Validates, persists, and adopts a mutated board copy
    fn commit(&self, board: Board) -> Result<(), StoreError> {
        let violations = validate_board(&board);
        if !violations.is_empty() {
            let joined = violations
                .iter()
                .map(|v| v.to_string())
                .collect::<Vec<_>>()
                .join("; ");
            return Err(StoreError::Invalid(joined));
        }

        self.store.save(&board)?;
        *self.board.borrow_mut() = board;
        Ok(())
    }

    // ------------------------------------------------------------------
    // Multi-select
    // ------------------------------------------------------------------

    /// Toggles multi-select mode; leaving it clears the selection
    pub fn set_select_mode(&self, on: bool) {
        self.select_mode.set(on);
        if !on {
            self.selection.borrow_mut().clear();
        }
    }

    /// Whether multi-select mode is on
    pub fn select_mode(&self) -> bool {
        self.select_mode.get()
    }

    /// Marks or unmarks a card as selected
    pub fn set_selected(&self, group_id: &str, card_id: &str, selected: bool) {
        let key = (group_id.to_string(), card_id.to_string());
        if selected {
            self.selection.borrow_mut().insert(key);
        } else {
            self.selection.borrow_mut().remove(&key);
        }
    }

    /// Whether a card is currently selected
    pub fn is_selected(&self, group_id: &str, card_id: &str) -> bool {
        self.selection
            .borrow()
            .contains(&(group_id.to_string(), card_id.to_string()))
    }

    /// Number of selected cards
    pub fn selected_count(&self) -> usize {
        self.selection.borrow().len()
    }

    /// Deletes every selected card; returns how many went away
    pub fn delete_selected(&self) -> Result<usize, StoreError> {
        let selection = self.selection.borrow().clone();
        if selection.is_empty() {
            return Ok(0);
        }

        let mut board = self.board();
        for group in &mut board.groups {
            group
                .cards
                .retain(|card| !selection.contains(&(group.id.clone(), card.id.clone())));
        }

        let removed = self.card_count() - board.total_cards();
        self.commit(board)?;
        self.selection.borrow_mut().clear();

        Ok(removed)
    }

    // ------------------------------------------------------------------
    // Backups
    // ------------------------------------------------------------------

    /// Lists board backups, newest first
    pub fn list_backups(&self) -> Result<Vec<PathBuf>, StoreError> {
        self.store.list_backups()
    }

    /// Restores a backup and reloads the board from it
    pub fn restore_backup(&self, backup: &Path) -> Result<(), StoreError> {
        self.store.restore_backup(backup)?;
        self.load_board()?;
        Ok(())
    }

    /// Deletes a backup file
    pub fn delete_backup(&self, backup: &Path) -> Result<(), StoreError> {
        self.store.delete_backup(backup)
    }

    // ------------------------------------------------------------------
    // Export / import
    // ------------------------------------------------------------------

    /// Writes the current board to an arbitrary path in board file format
    pub fn export_to(&self, path: &Path) -> Result<(), StoreError> {
        fs::write(path, format!("{}", self.board.borrow()))?;
        Ok(())
    }

    /// Replaces the board with the content of another board file
    ///
    /// The imported board must parse and validate; the previous state is
    /// preserved as a backup by the commit.
    pub fn import_from(&self, path: &Path) -> Result<(), StoreError> {
        let content = fs::read_to_string(path)?;
        let board = parse_board_file(&content, path)?;
        self.commit(board)
    }
}

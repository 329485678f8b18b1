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

//! Grouped card list component - the list container
//!
//! Displays all groups and their cards in a scrollable column and owns the
//! view side of the drag-and-drop contract: rows report gestures to the
//! Controller (which holds the single drag session), and the container
//! relays each completed drop to the application through
//! `connect_reordered`, exactly once per drop.
//!
//! Selection is single across the whole container even though each group
//! section has its own list box: selecting a row clears every sibling
//! section's selection.

use gtk4::{prelude::*, Box as GtkBox, Orientation, ScrolledWindow};
use std::{cell::RefCell, rc::Rc};

use crate::core::session::CardMove;
use crate::core::types::{Board, Card};
use crate::ui::components::GroupSection;
use crate::ui::Controller;

/// Callback slot shared between the container and its dynamically built rows
type ReorderSlot = Rc<RefCell<Option<Rc<dyn Fn(&CardMove)>>>>;
type SelectSlot = Rc<RefCell<Option<Rc<dyn Fn(Card)>>>>;

/// Displays a scrollable list of group sections with draggable rows
pub struct GroupList {
    /// Root widget (scrollable container)
    widget: ScrolledWindow,
    /// Vertical box holding one section per group
    container: GtkBox,
    /// Controller reference for data access
    controller: Rc<Controller>,
    /// Sections currently displayed
    sections: Rc<RefCell<Vec<GroupSection>>>,
    /// Cache of the currently displayed (possibly filtered) board
    current_board: Rc<RefCell<Board>>,
    /// Application callback for completed drops
    on_reordered: ReorderSlot,
    /// Application callback for card selection
    on_card_selected: SelectSlot,
}

impl GroupList {
    /// Creates a new grouped card list
    ///
    /// # Arguments
    /// * `controller` - Shared Controller reference
    ///
    /// # Example
    /// ```no_run
    /// use cardwall::ui::components::GroupList;
    /// use cardwall::ui::Controller;
    /// use std::rc::Rc;
    /// use std::path::PathBuf;
    ///
    /// # fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let controller = Rc::new(Controller::new(PathBuf::from("board.cards"))?);
    /// let list = GroupList::new(controller);
    /// list.refresh(); // Load initial data
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(controller: Rc<Controller>) -> Self {
        let scrolled_window = ScrolledWindow::builder()
            .hexpand(true)
            .vexpand(true)
            .build();

        let container = GtkBox::new(Orientation::Vertical, 6);
        scrolled_window.set_child(Some(&container));

        Self {
            widget: scrolled_window,
            container,
            controller,
            sections: Rc::new(RefCell::new(Vec::new())),
            current_board: Rc::new(RefCell::new(Board::new())),
            on_reordered: Rc::new(RefCell::new(None)),
            on_card_selected: Rc::new(RefCell::new(None)),
        }
    }

    /// Refreshes the list from the Controller's visible board
    pub fn refresh(&self) {
        self.update_with_board(self.controller.visible_board());
    }

    /// Updates the list with a specific board (used for filtering)
    pub fn update_with_board(&self, board: Board) {
        // Clear existing sections
        while let Some(child) = self.container.first_child() {
            self.container.remove(&child);
        }
        self.sections.borrow_mut().clear();

        let reorder_relay = self.reorder_relay();
        let select_relay = self.select_relay();

        for group in &board.groups {
            let section = GroupSection::new(
                group,
                self.controller.clone(),
                reorder_relay.clone(),
                select_relay.clone(),
            );
            self.container.append(section.widget());
            self.sections.borrow_mut().push(section);
        }

        *self.current_board.borrow_mut() = board;
    }

    /// Relay handed to rows: forwards a completed drop to the app callback
    fn reorder_relay(&self) -> Rc<dyn Fn(&CardMove)> {
        let slot = self.on_reordered.clone();
        Rc::new(move |mv: &CardMove| {
            let callback = slot.borrow().clone();
            if let Some(callback) = callback {
                callback(mv);
            }
        })
    }

    /// Relay handed to sections: enforces single selection, resolves the
    /// clicked row to a card, and forwards it to the app callback
    fn select_relay(&self) -> Rc<dyn Fn(&str, usize)> {
        let sections = self.sections.clone();
        let current_board = self.current_board.clone();
        let slot = self.on_card_selected.clone();

        Rc::new(move |group_id: &str, index: usize| {
            for section in sections.borrow().iter() {
                if section.group_id() != group_id {
                    section.unselect();
                }
            }

            let card = current_board
                .borrow()
                .group(group_id)
                .and_then(|g| g.cards.get(index))
                .cloned();

            if let Some(card) = card {
                let callback = slot.borrow().clone();
                if let Some(callback) = callback {
                    callback(card);
                }
            }
        })
    }

    /// Connects the application's reorder callback
    ///
    /// Invoked once per completed drop with the applied move; the usual
    /// reaction is to refresh this list and any panels showing positions.
    pub fn connect_reordered<F>(&self, callback: F)
    where
        F: Fn(&CardMove) + 'static,
    {
        *self.on_reordered.borrow_mut() = Some(Rc::new(callback));
    }

    /// Connects the application's card-selection callback
    pub fn connect_card_selected<F>(&self, callback: F)
    where
        F: Fn(Card) + 'static,
    {
        *self.on_card_selected.borrow_mut() = Some(Rc::new(callback));
    }

    /// Get a card by its current display position
    ///
    /// Resolves against the currently displayed board, so it accounts for
    /// any active search filter.
    pub fn card_at(&self, group_id: &str, index: usize) -> Option<Card> {
        self.current_board
            .borrow()
            .group(group_id)
            .and_then(|g| g.cards.get(index))
            .cloned()
    }

    /// Returns the count of currently displayed cards
    pub fn count(&self) -> usize {
        self.current_board.borrow().total_cards()
    }

    /// Returns the root widget for adding to a parent container
    pub fn widget(&self) -> &ScrolledWindow {
        &self.widget
    }
}

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

//! Details panel component for displaying selected card information.
//!
//! Shows the selected card's label, id, owning group, and position within
//! that group, plus edit/delete buttons that the application wires up.

use gtk4::{
    pango::WrapMode::WordChar, prelude::*, Align, Box as GtkBox, Button, Frame, Grid, Label,
    Orientation, Separator,
};
use std::{cell::RefCell, rc::Rc};

use crate::{core::types::Card, ui::Controller};

/// A panel that displays detailed information about a selected card.
///
/// The panel shows:
/// - Label (full text, wrapped)
/// - Card id
/// - Owning group (title and id)
/// - Position within the group ("2 of 5")
/// - Edit and Delete buttons (disabled when nothing is selected)
///
/// The panel width is enforced by the parent Paned widget.
pub struct DetailsPanel {
    /// Root widget (Frame)
    widget: Frame,
    /// Label displaying the card's text
    label_value: Label,
    /// Label displaying the card id
    id_value: Label,
    /// Label displaying the owning group
    group_value: Label,
    /// Label displaying the position within the group
    position_value: Label,
    /// Edit button
    edit_button: Button,
    /// Delete button
    delete_button: Button,
    /// Controller for resolving group titles and positions
    controller: Rc<Controller>,
    /// Currently displayed card (for edit/delete operations)
    current_card: Rc<RefCell<Option<Card>>>,
}

impl DetailsPanel {
    /// Helper to create a label row (header + value) for the details grid
    fn create_label_row(header_text: &str, initial_value: &str) -> (Label, Label) {
        let header = Label::builder()
            .label(header_text)
            .halign(Align::End)
            .xalign(1.0)
            .build();
        header.add_css_class("field-header");

        let value = Label::builder()
            .label(initial_value)
            .halign(Align::Start)
            .xalign(0.0)
            .wrap(true)
            .wrap_mode(WordChar)
            .max_width_chars(20)
            .build();

        (header, value)
    }

    /// Create a new details panel.
    pub fn new(controller: Rc<Controller>) -> Self {
        let frame = Frame::builder()
            .label("Selected Card")
            .margin_start(10)
            .margin_end(10)
            .margin_top(10)
            .margin_bottom(10)
            .width_request(280)
            .build();

        let vbox = GtkBox::new(Orientation::Vertical, 10);
        vbox.set_margin_start(15);
        vbox.set_margin_end(15);
        vbox.set_margin_top(15);
        vbox.set_margin_bottom(15);

        let grid = Grid::builder().row_spacing(10).column_spacing(15).build();

        // Row 0: Label
        let (label_header, label_value) = Self::create_label_row("Label:", "Select a card...");
        grid.attach(&label_header, 0, 0, 1, 1);
        grid.attach(&label_value, 1, 0, 1, 1);

        // Row 1: Id
        let (id_header, id_value) = Self::create_label_row("Id:", "");
        grid.attach(&id_header, 0, 1, 1, 1);
        grid.attach(&id_value, 1, 1, 1, 1);

        // Row 2: Group
        let (group_header, group_value) = Self::create_label_row("Group:", "");
        grid.attach(&group_header, 0, 2, 1, 1);
        grid.attach(&group_value, 1, 2, 1, 1);

        // Row 3: Position
        let (position_header, position_value) = Self::create_label_row("Position:", "");
        grid.attach(&position_header, 0, 3, 1, 1);
        grid.attach(&position_value, 1, 3, 1, 1);

        vbox.append(&grid);

        let separator = Separator::new(Orientation::Horizontal);
        separator.set_margin_top(10);
        separator.set_margin_bottom(10);
        vbox.append(&separator);

        let edit_button = Button::builder()
            .label("✏️ Edit Card")
            .sensitive(false) // Disabled until a card is selected
            .build();
        vbox.append(&edit_button);

        let delete_button = Button::builder()
            .label("🗑️  Delete Card")
            .sensitive(false) // Disabled until a card is selected
            .build();
        delete_button.add_css_class("destructive-action");
        vbox.append(&delete_button);

        frame.set_child(Some(&vbox));

        Self {
            widget: frame,
            label_value,
            id_value,
            group_value,
            position_value,
            edit_button,
            delete_button,
            controller,
            current_card: Rc::new(RefCell::new(None)),
        }
    }

    /// Update the panel to display information about a specific card.
    ///
    /// If `None` is passed, the panel shows a "Select a card..." message.
    pub fn update_card(&self, card: Option<&Card>) {
        // Store the current card for edit/delete operations
        *self.current_card.borrow_mut() = card.cloned();

        self.edit_button.set_sensitive(card.is_some());
        self.delete_button.set_sensitive(card.is_some());

        match card {
            Some(c) => {
                self.label_value.set_label(&c.label);
                self.label_value.set_has_tooltip(true);
                self.label_value.set_tooltip_text(Some(&c.label));

                self.id_value.set_label(&c.id);

                // Resolve group title and stored position from the board
                let board = self.controller.board();
                match board.group(&c.group_id) {
                    Some(group) => {
                        self.group_value
                            .set_label(&format!("{} ({})", group.title, group.id));

                        match group.position_of(&c.id) {
                            Some(index) => {
                                self.position_value
                                    .set_label(&format!("{} of {}", index + 1, group.len()));
                            }
                            None => self.position_value.set_label("—"),
                        }
                    }
                    None => {
                        self.group_value.set_label(&c.group_id);
                        self.position_value.set_label("—");
                    }
                }
            }
            None => {
                self.label_value.set_label("👈 Select a card");
                self.label_value.set_tooltip_text(None);

                self.id_value.set_label("");
                self.group_value.set_label("");
                self.position_value.set_label("");
            }
        }
    }

    /// Connects the delete button to a callback
    ///
    /// This should be called from the app after creating the panel,
    /// passing in a closure that handles the deletion and UI refresh.
    pub fn connect_delete<F>(&self, callback: F)
    where
        F: Fn(&Card) + 'static,
    {
        let current_card = self.current_card.clone();

        self.delete_button.connect_clicked(move |_button| {
            // Extract the card completely before calling the callback so
            // no borrow is held when it triggers a UI refresh
            let card_to_delete = current_card.borrow().as_ref().cloned();

            if let Some(card) = card_to_delete {
                callback(&card);
            }
        });
    }

    /// Connects a callback to the edit button
    ///
    /// The callback receives the currently selected card when the edit
    /// button is clicked.
    pub fn connect_edit<F>(&self, callback: F)
    where
        F: Fn(&Card) + 'static,
    {
        let current_card = self.current_card.clone();

        self.edit_button.connect_clicked(move |_button| {
            let card_to_edit = current_card.borrow().as_ref().cloned();

            if let Some(card) = card_to_edit {
                callback(&card);
            }
        });
    }

    /// Get the root widget for adding to a container.
    pub fn widget(&self) -> &Frame {
        &self.widget
    }
}

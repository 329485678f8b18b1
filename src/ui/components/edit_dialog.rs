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

//! Card edit dialog
//!
//! A modal form for editing an existing card or creating a new one (the
//! add flow passes an empty card). Dialog visibility is fully controlled:
//! it is presented through the OverlayManager and `show_and_wait` spins
//! the main context until the user answers, so the caller gets a plain
//! `Option<Card>` back with no state left behind.

use gtk4::{prelude::*, ApplicationWindow, Box as GtkBox, Button, Entry, Grid, Label, Orientation, Window};
use std::cell::Cell;
use std::rc::Rc;

use crate::core::types::Card;
use crate::core::validator::validate_id;
use crate::ui::OverlayManager;

/// Dialog for editing a card's fields
pub struct EditDialog {
    dialog_window: Window,
    label_entry: Entry,
    id_entry: Entry,
    group_entry: Entry,
    overlay: Rc<OverlayManager>,
    response: Rc<Cell<Option<DialogResponse>>>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum DialogResponse {
    Save,
    Cancel,
}

impl EditDialog {
    /// Creates an edit dialog pre-filled with the card's current values
    pub fn new(parent: &ApplicationWindow, overlay: Rc<OverlayManager>, card: &Card) -> Self {
        // hide-on-close keeps the window alive so the invalid-input path
        // can present it again after showing the error
        let dialog_window = Window::builder()
            .title("✏️ Edit Card")
            .modal(true)
            .transient_for(parent)
            .default_width(450)
            .default_height(260)
            .resizable(false)
            .hide_on_close(true)
            .build();

        let grid = Grid::builder()
            .row_spacing(12)
            .column_spacing(12)
            .margin_start(20)
            .margin_end(20)
            .margin_top(20)
            .margin_bottom(20)
            .build();

        // Row 0: Label
        let label_label = Label::builder()
            .label("Label:")
            .halign(gtk4::Align::End)
            .build();
        let label_entry = Entry::builder()
            .text(&card.label)
            .placeholder_text("e.g., Write the launch notes")
            .hexpand(true)
            .build();
        grid.attach(&label_label, 0, 0, 1, 1);
        grid.attach(&label_entry, 1, 0, 1, 1);

        // Row 1: Card id
        let id_label = Label::builder()
            .label("Card id:")
            .halign(gtk4::Align::End)
            .build();
        let id_entry = Entry::builder()
            .text(&card.id)
            .placeholder_text("e.g., launch-notes")
            .hexpand(true)
            .build();
        grid.attach(&id_label, 0, 1, 1, 1);
        grid.attach(&id_entry, 1, 1, 1, 1);

        // Row 2: Group id
        let group_label = Label::builder()
            .label("Group:")
            .halign(gtk4::Align::End)
            .build();
        let group_entry = Entry::builder()
            .text(&card.group_id)
            .placeholder_text("e.g., todo")
            .hexpand(true)
            .build();
        grid.attach(&group_label, 0, 2, 1, 1);
        grid.attach(&group_entry, 1, 2, 1, 1);

        // Button row at the bottom
        let button_box = GtkBox::builder()
            .orientation(Orientation::Horizontal)
            .spacing(12)
            .halign(gtk4::Align::End)
            .margin_start(20)
            .margin_end(20)
            .margin_bottom(20)
            .build();

        let cancel_button = Button::builder().label("Cancel").build();

        let save_button = Button::builder().label("💾 Save").build();
        save_button.add_css_class("suggested-action");

        button_box.append(&cancel_button);
        button_box.append(&save_button);

        let main_box = GtkBox::builder()
            .orientation(Orientation::Vertical)
            .spacing(0)
            .build();

        main_box.append(&grid);
        main_box.append(&button_box);

        dialog_window.set_child(Some(&main_box));

        // Response tracking
        let response: Rc<Cell<Option<DialogResponse>>> = Rc::new(Cell::new(None));

        {
            let response = response.clone();
            let window = dialog_window.clone();
            cancel_button.connect_clicked(move |_| {
                response.set(Some(DialogResponse::Cancel));
                window.close();
            });
        }

        {
            let response = response.clone();
            let window = dialog_window.clone();
            save_button.connect_clicked(move |_| {
                response.set(Some(DialogResponse::Save));
                window.close();
            });
        }

        // Window close (X button) counts as Cancel
        {
            let response = response.clone();
            let overlay = overlay.clone();
            dialog_window.connect_close_request(move |window| {
                if response.get().is_none() {
                    response.set(Some(DialogResponse::Cancel));
                }
                overlay.forget(window);
                glib::Propagation::Proceed
            });
        }

        Self {
            dialog_window,
            label_entry,
            id_entry,
            group_entry,
            overlay,
            response,
        }
    }

    /// Parses the form fields and returns a new Card if valid
    fn parse_card(&self) -> Result<Card, String> {
        let label = self.label_entry.text().to_string();
        let id = self.id_entry.text().to_string();
        let group = self.group_entry.text().to_string();

        if label.trim().is_empty() {
            return Err("Label cannot be empty".to_string());
        }
        if id.trim().is_empty() {
            return Err("Card id cannot be empty".to_string());
        }
        if group.trim().is_empty() {
            return Err("Group cannot be empty".to_string());
        }

        validate_id(id.trim()).map_err(|e| e.to_string())?;
        validate_id(group.trim()).map_err(|e| e.to_string())?;

        Ok(Card::new(group.trim(), id.trim(), label.trim()))
    }

    /// Shows the dialog and waits for the user's answer
    ///
    /// Blocks on the GTK main context until Save or Cancel. Invalid input
    /// on Save shows an error and re-enters the wait instead of closing.
    pub fn show_and_wait(self) -> Option<Card> {
        self.response.set(None);
        self.overlay.present(&self.dialog_window);

        // Spin the main loop until we have an answer
        let main_context = glib::MainContext::default();
        while self.response.get().is_none() && self.dialog_window.is_visible() {
            main_context.iteration(true);
        }

        match self.response.get() {
            Some(DialogResponse::Save) => match self.parse_card() {
                Ok(card) => {
                    self.close();
                    Some(card)
                }
                Err(e) => {
                    // Show the error, then wait for a corrected answer
                    self.show_error(&e);
                    self.response.set(None);
                    self.show_and_wait()
                }
            },
            Some(DialogResponse::Cancel) | None => {
                self.close();
                None
            }
        }
    }

    fn close(&self) {
        self.overlay.forget(&self.dialog_window);
        self.dialog_window.destroy();
    }

    /// Shows an error message in a nested modal dialog
    fn show_error(&self, message: &str) {
        let error_window = Window::builder()
            .title("❌ Invalid Input")
            .modal(true)
            .transient_for(&self.dialog_window)
            .default_width(350)
            .default_height(150)
            .resizable(false)
            .build();

        let vbox = GtkBox::builder()
            .orientation(Orientation::Vertical)
            .spacing(12)
            .margin_start(20)
            .margin_end(20)
            .margin_top(20)
            .margin_bottom(20)
            .build();

        let label = Label::builder()
            .label(message)
            .wrap(true)
            .justify(gtk4::Justification::Center)
            .build();

        let ok_button = Button::builder()
            .label("Ok")
            .halign(gtk4::Align::Center)
            .build();

        vbox.append(&label);
        vbox.append(&ok_button);

        error_window.set_child(Some(&vbox));

        let error_window_clone = error_window.clone();
        ok_button.connect_clicked(move |_| {
            error_window_clone.close();
        });

        error_window.present();

        // Wait for the error dialog to close
        let main_context = glib::MainContext::default();
        while error_window.is_visible() {
            main_context.iteration(true);
        }
    }
}

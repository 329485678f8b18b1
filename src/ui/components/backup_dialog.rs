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

//! Backup manager dialog
//!
//! Lists the board's timestamped backups and lets the user restore or
//! delete one. The restore/delete work itself is injected by the caller;
//! the dialog only renders the list and routes button clicks.

use gtk4::prelude::*;
use gtk4::{Button, Label, ListBox, Orientation, ScrolledWindow, Window};
use std::cell::{Cell, RefCell};
use std::path::{Path, PathBuf};
use std::rc::Rc;

use crate::store::StoreError;
use crate::ui::OverlayManager;

/// Modal dialog listing board backups with restore/delete actions
pub struct BackupDialog {
    window: Window,
    list_box: ListBox,
    overlay: Rc<OverlayManager>,
}

impl BackupDialog {
    /// Creates the dialog over `parent` with the given backup paths
    ///
    /// # Arguments
    /// * `parent` - Transient parent window
    /// * `overlay` - Overlay manager that presents the dialog
    /// * `backups` - Backup paths, newest first
    /// * `on_restore` - Called with the selected backup; `Ok` closes the dialog
    /// * `on_delete` - Called with the selected backup; `Ok` removes its row
    pub fn new<R, D>(
        parent: &Window,
        overlay: Rc<OverlayManager>,
        backups: Vec<PathBuf>,
        on_restore: R,
        on_delete: D,
    ) -> Self
    where
        R: Fn(&Path) -> Result<(), StoreError> + 'static,
        D: Fn(&Path) -> Result<(), StoreError> + 'static,
    {
        let bd_window = Window::builder()
            .title("Backups")
            .modal(true)
            .transient_for(parent)
            .default_width(450)
            .default_height(300)
            .build();

        // Selection state shared with the button handlers
        let selected_backup: Rc<Cell<Option<usize>>> = Rc::new(Cell::new(None));
        let backups = Rc::new(RefCell::new(backups));

        let main_vbox = gtk4::Box::new(Orientation::Vertical, 12);
        main_vbox.set_margin_start(12);
        main_vbox.set_margin_end(12);
        main_vbox.set_margin_top(12);
        main_vbox.set_margin_bottom(12);

        let scrolled_window = ScrolledWindow::builder().vexpand(true).build();

        let list_box = ListBox::new();
        for backup_path in backups.borrow().iter() {
            list_box.append(&Self::backup_label(backup_path));
        }

        scrolled_window.set_child(Some(&list_box));
        main_vbox.append(&scrolled_window);

        // Button row
        let button_box = gtk4::Box::new(Orientation::Horizontal, 12);
        button_box.set_halign(gtk4::Align::End);

        let restore_button = Button::builder()
            .label("Restore")
            .sensitive(false) // Disabled until something is selected
            .build();
        restore_button.add_css_class("suggested-action");

        let delete_button = Button::builder()
            .label("Delete")
            .sensitive(false)
            .build();
        delete_button.add_css_class("destructive-action");

        let close_button = Button::builder().label("Close").build();

        button_box.append(&restore_button);
        button_box.append(&delete_button);
        button_box.append(&close_button);

        main_vbox.append(&button_box);

        // Selection enables/disables the action buttons
        {
            let selected_backup = selected_backup.clone();
            let restore_button = restore_button.clone();
            let delete_button = delete_button.clone();

            list_box.connect_row_selected(move |_list, row| match row {
                Some(r) => {
                    selected_backup.set(Some(r.index() as usize));
                    restore_button.set_sensitive(true);
                    delete_button.set_sensitive(true);
                }
                None => {
                    selected_backup.set(None);
                    restore_button.set_sensitive(false);
                    delete_button.set_sensitive(false);
                }
            });
        }

        // Restore: run the injected callback, close on success
        {
            let selected_backup = selected_backup.clone();
            let backups = backups.clone();
            let window = bd_window.clone();
            let overlay_for_restore = overlay.clone();

            restore_button.connect_clicked(move |_| {
                let Some(index) = selected_backup.get() else {
                    return;
                };
                let Some(path) = backups.borrow().get(index).cloned() else {
                    return;
                };

                match on_restore(&path) {
                    Ok(()) => {
                        eprintln!("✅ Restored backup: {}", path.display());
                        overlay_for_restore.forget(&window);
                        window.close();
                    }
                    Err(e) => eprintln!("❌ Failed to restore backup: {}", e),
                }
            });
        }

        // Delete: run the injected callback, drop the row on success
        {
            let selected_backup = selected_backup.clone();
            let backups = backups.clone();
            let list_box = list_box.clone();

            delete_button.connect_clicked(move |_| {
                let Some(index) = selected_backup.get() else {
                    return;
                };
                let Some(path) = backups.borrow().get(index).cloned() else {
                    return;
                };

                match on_delete(&path) {
                    Ok(()) => {
                        eprintln!("🗑️  Deleted backup: {}", path.display());
                        backups.borrow_mut().remove(index);
                        if let Some(row) = list_box.row_at_index(index as i32) {
                            list_box.remove(&row);
                        }
                        list_box.unselect_all();
                    }
                    Err(e) => eprintln!("❌ Failed to delete backup: {}", e),
                }
            });
        }

        {
            let window = bd_window.clone();
            let overlay_for_close = overlay.clone();
            close_button.connect_clicked(move |_| {
                overlay_for_close.forget(&window);
                window.close();
            });
        }

        // The window's own X button must unregister from the overlay too
        {
            let overlay_for_request = overlay.clone();
            bd_window.connect_close_request(move |window| {
                overlay_for_request.forget(window);
                glib::Propagation::Proceed
            });
        }

        bd_window.set_child(Some(&main_vbox));

        Self {
            window: bd_window,
            list_box,
            overlay,
        }
    }

    /// Renders one backup as a readable timestamp label
    ///
    /// Backup filenames look like "board.cards.2025-10-15_143025"; the
    /// trailing timestamp is reshaped into "2025-10-15 14:30:25", falling
    /// back to the raw filename when the shape is unexpected.
    fn backup_label(backup_path: &Path) -> Label {
        let filename = backup_path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("Unknown backup");

        let mut display_text = filename.to_string();

        let timestamp = filename.rsplit('.').next().unwrap_or("");
        let parts_by_underscore: Vec<&str> = timestamp.split('_').collect();
        if parts_by_underscore.len() == 2 {
            let date_part = parts_by_underscore[0]; // "2025-10-15"
            let time_part = parts_by_underscore[1]; // "143025"
            if time_part.len() == 6 {
                let hour = &time_part[0..2];
                let minute = &time_part[2..4];
                let second = &time_part[4..6];
                display_text = format!("{} {}:{}:{}", date_part, hour, minute, second);
            }
        }

        let label = Label::new(Some(&display_text));
        label.set_halign(gtk4::Align::Start);
        label.set_margin_start(8);
        label.set_margin_end(8);
        label.set_margin_top(8);
        label.set_margin_bottom(8);

        label
    }

    /// Presents the dialog through the overlay manager
    pub fn show(&self) {
        self.overlay.present(&self.window);
        self.list_box.unselect_all();
    }
}

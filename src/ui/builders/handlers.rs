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

//! Event handler setup
//!
//! Wires up all event handlers for the main UI:
//! - Card selection feeding the details panel
//! - The reorder callback (refresh after every completed drop)
//! - Add/Edit/Delete card flows
//! - Multi-select mode and bulk delete
//! - Backup manager

use gtk4::{gio, prelude::*, ApplicationWindow};
use std::rc::Rc;

use crate::core::types::Card;
use crate::ui::builders::layout::MainLayout;
use crate::ui::components::{BackupDialog, EditDialog};
use crate::ui::{Controller, OverlayManager};

/// Wires up all event handlers for the main UI
pub fn wire_up_handlers(
    window: &ApplicationWindow,
    controller: Rc<Controller>,
    overlay: Rc<OverlayManager>,
    layout: &MainLayout,
) {
    let group_list = layout.group_list.clone();
    let details_panel = layout.details_panel.clone();

    // ============================================================================
    // Card selection handler
    // ============================================================================
    let details_panel_for_select = details_panel.clone();

    group_list.connect_card_selected(move |card| {
        details_panel_for_select.update_card(Some(&card));
    });

    // ============================================================================
    // Reorder handler: refresh the list, clear stale position details
    // ============================================================================
    let group_list_for_reorder = group_list.clone();
    let details_panel_for_reorder = details_panel.clone();

    group_list.connect_reordered(move |mv| {
        eprintln!(
            "↕ Moved card: {}[{}] → {}[{}]",
            mv.source_group_id, mv.source_index, mv.target_group_id, mv.target_index
        );
        group_list_for_reorder.refresh();
        details_panel_for_reorder.update_card(None);
    });

    // ============================================================================
    // Delete button
    // ============================================================================
    let window_for_delete = window.clone();
    let controller_for_delete = controller.clone();
    let group_list_for_delete = group_list.clone();
    let details_panel_for_delete = details_panel.clone();

    details_panel.connect_delete(move |card| {
        let controller = controller_for_delete.clone();
        let group_list = group_list_for_delete.clone();
        let details_panel = details_panel_for_delete.clone();
        let card = card.clone();
        let window = window_for_delete.clone();

        let dialog = gtk4::AlertDialog::builder()
            .modal(true)
            .message("Delete Card?")
            .detail(format!(
                "Are you sure you want to delete:\n\n{} ({})",
                card.label, card.id
            ))
            .buttons(vec!["Cancel", "Delete"])
            .cancel_button(0)
            .default_button(0)
            .build();

        let window_for_error = window.clone();

        dialog.choose(
            Some(&window),
            None::<&gio::Cancellable>,
            move |response| {
                match response {
                    Ok(1) => {
                        // 1 = Delete button (second button)
                        match controller.delete_card(&card) {
                            Ok(()) => {
                                group_list.refresh();
                                details_panel.update_card(None);
                                eprintln!("✅ Card deleted");
                            }
                            Err(e) => {
                                eprintln!("❌ Failed to delete: {}", e);
                                show_error_dialog(&window_for_error, "Delete Failed", &e.to_string());
                            }
                        }
                    }
                    Ok(_) => eprintln!("🚫 Delete cancelled"),
                    Err(_) => eprintln!("❌ Delete dialog error"),
                }
            },
        );
    });

    // ============================================================================
    // Edit button
    // ============================================================================
    let window_for_edit = window.clone();
    let controller_for_edit = controller.clone();
    let group_list_for_edit = group_list.clone();
    let details_panel_for_edit = details_panel.clone();
    let overlay_for_edit = overlay.clone();

    details_panel.connect_edit(move |card| {
        let edit_dialog = EditDialog::new(&window_for_edit, overlay_for_edit.clone(), card);

        // Blocks until the user saves or cancels
        if let Some(updated) = edit_dialog.show_and_wait() {
            match controller_for_edit.update_card(card, updated) {
                Ok(()) => {
                    details_panel_for_edit.update_card(None);
                    group_list_for_edit.refresh();
                    eprintln!("✅ Card updated");
                }
                Err(e) => {
                    eprintln!("❌ Failed to update: {}", e);
                    show_error_dialog(&window_for_edit, "Edit Failed", &e.to_string());
                }
            }
        } else {
            eprintln!("🚫 Edit cancelled");
        }
    });

    // ============================================================================
    // Add button (reuses the edit dialog with an empty card)
    // ============================================================================
    let window_for_add = window.clone();
    let controller_for_add = controller.clone();
    let group_list_for_add = group_list.clone();
    let details_panel_for_add = details_panel.clone();
    let overlay_for_add = overlay.clone();

    layout.add_button.connect_clicked(move |_| {
        let empty_card = Card::new("", "", "");

        let edit_dialog = EditDialog::new(&window_for_add, overlay_for_add.clone(), &empty_card);

        if let Some(new_card) = edit_dialog.show_and_wait() {
            match controller_for_add.add_card(new_card) {
                Ok(()) => {
                    details_panel_for_add.update_card(None);
                    group_list_for_add.refresh();
                    eprintln!("✅ Card added");
                }
                Err(e) => {
                    eprintln!("❌ Failed to add: {}", e);
                    show_error_dialog(&window_for_add, "Add Failed", &e.to_string());
                }
            }
        } else {
            eprintln!("🚫 Add cancelled");
        }
    });

    // ============================================================================
    // Multi-select mode toggle
    // ============================================================================
    let controller_for_toggle = controller.clone();
    let group_list_for_toggle = group_list.clone();
    let delete_selected_for_toggle = layout.delete_selected_button.clone();

    layout.select_toggle.connect_toggled(move |toggle| {
        let on = toggle.is_active();
        controller_for_toggle.set_select_mode(on);
        delete_selected_for_toggle.set_sensitive(on);
        // Rebuild rows so checkboxes appear or disappear
        group_list_for_toggle.refresh();
    });

    // ============================================================================
    // Delete Selected button
    // ============================================================================
    let window_for_bulk = window.clone();
    let controller_for_bulk = controller.clone();
    let group_list_for_bulk = group_list.clone();
    let details_panel_for_bulk = details_panel.clone();

    layout.delete_selected_button.connect_clicked(move |_| {
        let count = controller_for_bulk.selected_count();
        if count == 0 {
            eprintln!("🚫 Nothing selected");
            return;
        }

        let controller = controller_for_bulk.clone();
        let group_list = group_list_for_bulk.clone();
        let details_panel = details_panel_for_bulk.clone();
        let window_for_error = window_for_bulk.clone();

        let dialog = gtk4::AlertDialog::builder()
            .modal(true)
            .message("Delete Selected Cards?")
            .detail(format!("{} card(s) will be deleted.", count))
            .buttons(vec!["Cancel", "Delete"])
            .cancel_button(0)
            .default_button(0)
            .build();

        dialog.choose(
            Some(&window_for_bulk),
            None::<&gio::Cancellable>,
            move |response| {
                if let Ok(1) = response {
                    match controller.delete_selected() {
                        Ok(removed) => {
                            group_list.refresh();
                            details_panel.update_card(None);
                            eprintln!("✅ Deleted {} card(s)", removed);
                        }
                        Err(e) => {
                            eprintln!("❌ Failed to delete selection: {}", e);
                            show_error_dialog(
                                &window_for_error,
                                "Delete Failed",
                                &e.to_string(),
                            );
                        }
                    }
                }
            },
        );
    });

    // ============================================================================
    // Backup manager button
    // ============================================================================
    let window_for_backup = window.clone();
    let controller_for_backup = controller.clone();
    let group_list_for_backup = group_list.clone();
    let details_panel_for_backup = details_panel.clone();
    let overlay_for_backup = overlay.clone();

    layout.backup_button.connect_clicked(move |_| {
        let backups = match controller_for_backup.list_backups() {
            Ok(b) => b,
            Err(e) => {
                eprintln!("❌ Failed to list backups: {}", e);
                return;
            }
        };

        // Restore callback: swap the board file and refresh everything
        let controller_for_restore = controller_for_backup.clone();
        let group_list_for_restore = group_list_for_backup.clone();
        let details_panel_for_restore = details_panel_for_backup.clone();

        // Delete callback only needs the controller
        let controller_for_delete = controller_for_backup.clone();

        let dialog = BackupDialog::new(
            window_for_backup.upcast_ref::<gtk4::Window>(),
            overlay_for_backup.clone(),
            backups,
            move |backup_path| {
                controller_for_restore.restore_backup(backup_path)?;
                group_list_for_restore.refresh();
                details_panel_for_restore.update_card(None);
                Ok(())
            },
            move |backup_path| controller_for_delete.delete_backup(backup_path),
        );
        dialog.show();
    });
}

/// Shows a one-button error dialog over the window
fn show_error_dialog(window: &ApplicationWindow, title: &str, detail: &str) {
    let error_dialog = gtk4::AlertDialog::builder()
        .modal(true)
        .message(title)
        .detail(detail)
        .buttons(vec!["OK"])
        .build();

    error_dialog.show(Some(window));
}

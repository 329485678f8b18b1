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

//! GTK Action setup for the application
//!
//! This module contains all GTK action definitions (quit, reload, export,
//! import) and their setup functions

use gtk4::{gio, prelude::*, Application, ApplicationWindow, FileDialog};
use std::rc::Rc;

use crate::ui::components::{DetailsPanel, GroupList};
use crate::ui::Controller;

/// Sets up the quit action
///
/// Creates a GTK action that quits the application when triggered.
pub fn setup_quit_action(app: &Application) {
    let quit_action = gio::SimpleAction::new("quit", None);
    let app_for_quit = app.clone();

    quit_action.connect_activate(move |_, _| {
        app_for_quit.quit();
    });

    app.add_action(&quit_action);
}

/// Sets up the reload action
///
/// Re-reads the board file from disk and refreshes the view. Bound to the
/// header bar's "Reload Board" button.
pub fn setup_reload_action(
    app: &Application,
    controller: Rc<Controller>,
    group_list: Rc<GroupList>,
    details_panel: Rc<DetailsPanel>,
) {
    let reload_action = gio::SimpleAction::new("reload", None);

    reload_action.connect_activate(move |_, _| {
        match controller.load_board() {
            Ok(count) => {
                eprintln!("🔄 Reloaded board ({} cards)", count);
                group_list.refresh();
                details_panel.update_card(None);
            }
            Err(e) => eprintln!("❌ Failed to reload board: {}", e),
        }
    });

    app.add_action(&reload_action);
}

/// Sets up the export action
///
/// Creates a GTK action that opens a file save dialog and exports the
/// board to the selected file.
pub fn setup_export_action(
    app: &Application,
    window: &ApplicationWindow,
    controller: Rc<Controller>,
) {
    let export_action = gio::SimpleAction::new("export", None);
    let controller_for_export = controller.clone();
    let window_for_export = window.clone();

    export_action.connect_activate(move |_, _| {
        let file_dialog = FileDialog::builder()
            .title("Export Board")
            .initial_name("board-export.cards")
            .build();

        let controller = controller_for_export.clone();
        let window = window_for_export.clone();

        file_dialog.save(Some(&window), None::<&gio::Cancellable>, move |result| {
            match result {
                Ok(file) => {
                    let Some(path) = file.path() else {
                        eprintln!("❌ Export target has no local path");
                        return;
                    };

                    match controller.export_to(&path) {
                        Ok(()) => eprintln!("✅ Exported board to {}", path.display()),
                        Err(e) => eprintln!("❌ Export failed: {}", e),
                    }
                }
                Err(_) => eprintln!("🚫 Export cancelled"),
            }
        });
    });

    app.add_action(&export_action);
}

/// Sets up the import action
///
/// Creates a GTK action that opens a file open dialog and replaces the
/// board with the selected file's content. Refreshes the UI after import.
pub fn setup_import_action(
    app: &Application,
    window: &ApplicationWindow,
    controller: Rc<Controller>,
    group_list: Rc<GroupList>,
    details_panel: Rc<DetailsPanel>,
) {
    let import_action = gio::SimpleAction::new("import", None);
    let controller_for_import = controller.clone();
    let window_for_import = window.clone();
    let group_list_for_import = group_list.clone();
    let details_panel_for_import = details_panel.clone();

    import_action.connect_activate(move |_, _| {
        let file_dialog = FileDialog::builder().title("Import Board").build();

        let controller = controller_for_import.clone();
        let group_list = group_list_for_import.clone();
        let details_panel = details_panel_for_import.clone();
        let window = window_for_import.clone();

        file_dialog.open(Some(&window), None::<&gio::Cancellable>, move |result| {
            match result {
                Ok(file) => {
                    let Some(path) = file.path() else {
                        eprintln!("❌ Import source has no local path");
                        return;
                    };

                    match controller.import_from(&path) {
                        Ok(()) => {
                            eprintln!("✅ Imported board from {}", path.display());
                            group_list.refresh();
                            details_panel.update_card(None);
                        }
                        Err(e) => eprintln!("❌ Import failed: {}", e),
                    }
                }
                Err(_) => eprintln!("🚫 Import cancelled"),
            }
        });
    });

    app.add_action(&import_action);
}

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

//! GTK4 Application wrapper
//!
//! This module sets up the GTK4 application lifecycle and creates the main
//! window. It uses the Controller to load and display data.
//!
//! # Architecture
//!
//! ```text
//! App (GTK4 Application)
//!   ├─ Creates Controller and OverlayManager
//!   ├─ Builds main window (header, layout, handlers, actions)
//!   └─ Polls the board file watcher from the main loop
//! ```

use gtk4::prelude::*;
use gtk4::{gdk, Application, ApplicationWindow, CssProvider};
use std::path::PathBuf;
use std::rc::Rc;
use std::time::Duration;

use crate::ui::builders::{build_header_bar, build_main_layout, wire_up_handlers};
use crate::ui::file_watcher::BoardWatcher;
use crate::ui::{actions, Controller, OverlayManager};

/// GTK4 Application for grouped card boards
pub struct App {
    /// GTK4 Application instance
    app: Application,
    /// MVC Controller
    controller: Rc<Controller>,
    /// Single ambient-overlay service, injected into every dialog site
    overlay: Rc<OverlayManager>,
}

impl App {
    /// Creates a new App for the given board file path
    ///
    /// # Errors
    ///
    /// Returns a message when the Controller cannot be created (missing
    /// board file, unwritable backup directory).
    ///
    /// # Example
    ///
    /// ```no_run
    /// use cardwall::ui::App;
    /// use std::path::PathBuf;
    ///
    /// let app = App::new(PathBuf::from("~/.config/cardwall/board.cards"))?;
    /// app.run(); // Blocks until the window closes
    /// # Ok::<(), String>(())
    /// ```
    pub fn new(board_path: PathBuf) -> Result<Self, String> {
        let app = Application::builder()
            .application_id("io.cardwall.Cardwall")
            .build();

        let controller = Controller::new(board_path)
            .map_err(|e| format!("Failed to create controller: {}", e))?;

        Ok(Self {
            app,
            controller: Rc::new(controller),
            overlay: Rc::new(OverlayManager::new()),
        })
    }

    /// Runs the GTK4 application
    ///
    /// Starts the GTK main loop; blocks until the application exits.
    pub fn run(self) {
        let controller = self.controller.clone();
        let overlay = self.overlay.clone();

        self.app.connect_activate(move |app| {
            Self::build_ui(app, controller.clone(), overlay.clone());
        });

        self.app.run_with_args::<&str>(&[]);
    }

    /// Loads custom CSS styling for the application
    fn load_css() {
        let provider = CssProvider::new();
        let css = include_str!("style.css");
        provider.load_from_string(css);

        if let Some(display) = gdk::Display::default() {
            gtk4::style_context_add_provider_for_display(
                &display,
                &provider,
                gtk4::STYLE_PROVIDER_PRIORITY_APPLICATION,
            );
        }
    }

    /// Builds the main window UI
    fn build_ui(app: &Application, controller: Rc<Controller>, overlay: Rc<OverlayManager>) {
        match controller.load_board() {
            Ok(count) => eprintln!("📋 Loaded board ({} cards)", count),
            Err(e) => {
                eprintln!("Failed to load board: {}", e);
                return;
            }
        }

        Self::load_css();

        let window = ApplicationWindow::builder()
            .application(app)
            .title("Cardwall")
            .default_width(1000)
            .default_height(800)
            .build();

        window.set_titlebar(Some(&build_header_bar()));

        let layout = build_main_layout(controller.clone());
        window.set_child(Some(&layout.main_vbox));

        wire_up_handlers(&window, controller.clone(), overlay, &layout);

        actions::setup_quit_action(app);
        actions::setup_reload_action(
            app,
            controller.clone(),
            layout.group_list.clone(),
            layout.details_panel.clone(),
        );
        actions::setup_export_action(app, &window, controller.clone());
        actions::setup_import_action(
            app,
            &window,
            controller.clone(),
            layout.group_list.clone(),
            layout.details_panel.clone(),
        );

        // Initial display
        layout.group_list.refresh();

        Self::watch_board_file(controller, &layout);

        window.present();
    }

    /// Polls the board file watcher and reloads on external edits
    ///
    /// An external rewrite is exactly how drag indices go stale, so the
    /// reload also cancels any gesture in progress (`Controller::load_board`).
    fn watch_board_file(
        controller: Rc<Controller>,
        layout: &crate::ui::builders::MainLayout,
    ) {
        let watcher = match BoardWatcher::new(controller.board_path()) {
            Ok(watcher) => watcher,
            Err(e) => {
                eprintln!("⚠ Board file watching disabled: {}", e);
                return;
            }
        };

        let group_list = layout.group_list.clone();
        let details_panel = layout.details_panel.clone();

        glib::timeout_add_local(Duration::from_millis(500), move || {
            if watcher.check_for_changes() {
                match controller.load_board() {
                    Ok(count) => {
                        eprintln!("🔄 Board changed on disk, reloaded ({} cards)", count);
                        group_list.refresh();
                        details_panel.update_card(None);
                    }
                    Err(e) => eprintln!("❌ Failed to reload after external edit: {}", e),
                }
            }
            glib::ControlFlow::Continue
        });
    }
}

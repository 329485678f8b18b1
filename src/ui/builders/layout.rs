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

//! Layout builder
//!
//! Creates the main application layout structure.

use crate::ui::{
    components::{DetailsPanel, GroupList, SearchBar},
    Controller,
};
use gtk4::{prelude::*, Box as GtkBox, Button, Orientation, Paned, ToggleButton};
use std::rc::Rc;

/// Widgets produced by [`build_main_layout`] that later wiring needs
pub struct MainLayout {
    /// Root vertical box for the window
    pub main_vbox: GtkBox,
    /// The grouped card list
    pub group_list: Rc<GroupList>,
    /// The selected-card panel
    pub details_panel: Rc<DetailsPanel>,
    /// "Add Card" button
    pub add_button: Button,
    /// "Manage Backups" button
    pub backup_button: Button,
    /// Multi-select mode toggle
    pub select_toggle: ToggleButton,
    /// "Delete Selected" button (insensitive outside select mode)
    pub delete_selected_button: Button,
}

/// Builds the main application layout
///
/// Creates a vertical box containing a Paned layout with:
/// - Left: search bar, action buttons, grouped card list (resizable)
/// - Right: details panel (fixed 280px width)
///
/// Search is wired here: the query lands in the Controller (single source
/// of truth) and the list re-renders from the filtered board.
pub fn build_main_layout(controller: Rc<Controller>) -> MainLayout {
    let main_vbox = GtkBox::new(Orientation::Vertical, 0);

    // Use PANED for fixed right panel
    let paned = Paned::new(Orientation::Horizontal);

    // LEFT SIDE: Search + buttons + list (resizable)
    let left_vbox = GtkBox::new(Orientation::Vertical, 10);
    left_vbox.set_margin_start(10);
    left_vbox.set_margin_end(10);
    left_vbox.set_margin_bottom(10);

    // Create SINGLE group list instance
    let group_list = Rc::new(GroupList::new(controller.clone()));

    let search_bar = SearchBar::new();
    left_vbox.append(search_bar.widget());

    let button_row = GtkBox::new(Orientation::Horizontal, 10);

    let add_button = Button::builder().label("➕ Add Card").build();
    add_button.add_css_class("suggested-action");
    button_row.append(&add_button);

    let backup_button = Button::builder().label("📦 Manage Backups").build();
    button_row.append(&backup_button);

    let select_toggle = ToggleButton::builder()
        .label("☑ Select")
        .tooltip_text("Toggle multi-select mode")
        .build();
    button_row.append(&select_toggle);

    let delete_selected_button = Button::builder()
        .label("Delete Selected")
        .sensitive(false)
        .build();
    delete_selected_button.add_css_class("destructive-action");
    button_row.append(&delete_selected_button);

    left_vbox.append(&button_row);
    left_vbox.append(group_list.widget());

    // Wire up search: query lives in the Controller
    let group_list_for_search = group_list.clone();
    let controller_for_search = controller.clone();

    search_bar.widget().connect_search_changed(move |entry| {
        let query = entry.text().to_string();

        controller_for_search.set_search_query(query);
        // A gesture measured against the unfiltered board cannot survive
        // the rows changing under it
        controller_for_search.cancel_drag();
        group_list_for_search.refresh();
    });

    // RIGHT SIDE: details panel (fixed 280px)
    let details_panel = Rc::new(DetailsPanel::new(controller));

    paned.set_start_child(Some(&left_vbox));
    paned.set_resize_start_child(true); // Left side resizes with window
    paned.set_shrink_start_child(true);

    paned.set_end_child(Some(details_panel.widget()));
    paned.set_resize_end_child(false); // Right side keeps its width
    paned.set_shrink_end_child(false);

    paned.set_position(720); // 1000px default width - 280px panel

    main_vbox.append(&paned);

    MainLayout {
        main_vbox,
        group_list,
        details_panel,
        add_button,
        backup_button,
        select_toggle,
        delete_selected_button,
    }
}

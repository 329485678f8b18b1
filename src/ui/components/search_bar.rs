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

//! Search bar component
//!
//! Provides real-time filtering of cards as the user types. The filtering
//! itself lives in the Controller; this component only exposes the entry.

use gtk4::{prelude::*, SearchEntry};

/// Search bar for filtering cards
pub struct SearchBar {
    /// Root widget (search entry)
    widget: SearchEntry,
}

impl Default for SearchBar {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchBar {
    /// Creates a new search bar
    ///
    /// Returns just the widget - the parent is responsible for wiring
    /// up the search functionality to avoid instance sharing bugs.
    ///
    /// # Example
    /// ```no_run
    /// use cardwall::ui::components::SearchBar;
    /// use gtk4::prelude::*;
    ///
    /// let search_bar = SearchBar::new();
    ///
    /// // Parent wires up search functionality:
    /// search_bar.widget().connect_search_changed(move |entry| {
    ///     let query = entry.text().to_string();
    ///     // ... filter logic here
    /// });
    /// ```
    pub fn new() -> Self {
        let widget = SearchEntry::builder()
            .placeholder_text("Search cards...")
            .build();

        Self { widget }
    }

    /// Returns the root widget for adding to parent container
    pub fn widget(&self) -> &SearchEntry {
        &self.widget
    }

    /// Clears the search query and resets the list
    pub fn clear(&self) {
        self.widget.set_text("");
    }
}

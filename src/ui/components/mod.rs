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

//! Reusable UI widgets
//!
//! Each component wraps its root widget and exposes `widget()` for the
//! parent to place; callbacks are wired by the application, not here.

pub mod backup_dialog;
pub mod card_row;
pub mod details_panel;
pub mod edit_dialog;
pub mod group_list;
pub mod group_section;
pub mod search_bar;

pub use backup_dialog::BackupDialog;
pub use card_row::CardRow;
pub use details_panel::DetailsPanel;
pub use edit_dialog::EditDialog;
pub use group_list::GroupList;
pub use group_section::GroupSection;
pub use search_bar::SearchBar;

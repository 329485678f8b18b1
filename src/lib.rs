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

//! Cardwall
//!
//! Grouped card lists for GTK4 with drag-and-drop reordering, backed by a
//! plain-text board file.
//!
//! # Features
//!
//! - **Drag-and-Drop Reordering:** Move cards within and across groups,
//!   with top/bottom-half drop placement
//! - **Collapsible Groups:** Each group folds away without touching data
//! - **Search and Multi-Select:** Filter cards as you type, select many
//! - **Automatic Backups:** Timestamped backups before every board change
//! - **Live Reload:** External edits to the board file show up immediately
//! - **Atomic Writes:** The board file is never left half-written
//!
//! # Architecture
//!
//! - **`core`:** Business logic (types, parser, drag session, reorder
//!   resolver, geometry, validation)
//! - **`store`:** File operations (reading, writing, atomic updates, backups)
//! - **`ui`:** GTK4 GUI components (MVC pattern)
//!
//! The drag-and-drop contract lives entirely in `core`: the session state
//! machine captures a gesture's origin, tracks the hover target under the
//! pointer, and resolves the drop to a concrete move; the pure reorder
//! resolver then produces the next board. Widgets only report geometry.
//! The whole contract runs headless, so it is tested without a display
//! server.
//!
//! # Examples
//!
//! ## Parsing a board file
//!
//! ```no_run
//! use cardwall::core::parser::parse_board_file;
//! use std::path::Path;
//!
//! let content = std::fs::read_to_string("/tmp/board.cards")?;
//! let board = parse_board_file(&content, Path::new("/tmp/board.cards"))?;
//! println!("Found {} cards", board.total_cards());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Resolving a drag gesture
//!
//! ```
//! use cardwall::core::geometry::DropEdge;
//! use cardwall::core::reorder::apply_move;
//! use cardwall::core::session::DragSession;
//! use cardwall::core::types::{Board, Card, Group};
//!
//! let mut group = Group::new("todo", "To Do");
//! group.cards.push(Card::new("todo", "a", "First"));
//! group.cards.push(Card::new("todo", "b", "Second"));
//! let board = Board { groups: vec![group] };
//!
//! let mut session = DragSession::new();
//! session.begin_drag("a", "todo", 0);
//! session.update_hover("todo", 1, DropEdge::Bottom);
//!
//! if let Some(mv) = session.complete_drag(&board) {
//!     let groups = apply_move(&board.groups, &mv);
//!     assert_eq!(groups[0].cards[1].id, "a");
//! }
//! ```
//!
//! ## Using the GUI
//!
//! ```no_run
//! use cardwall::ui::App;
//! use std::path::PathBuf;
//!
//! let app = App::new(PathBuf::from("~/.config/cardwall/board.cards"))?;
//! app.run(); // Blocks until the window closes
//! # Ok::<(), String>(())
//! ```

pub mod core;
pub mod store;
pub mod ui;

// Re-export commonly used types for convenience
pub use crate::core::{Board, Card, CardMove, DragSession, DropEdge, Group};

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

//! src/core/mod.rs
//!
//! Core business logic module
//!
//! This module contains the fundamental data structures and algorithms
//! for grouped card lists, including:
//! - Type definitions for cards, groups, and boards
//! - The drag session state machine and edge-to-index rule
//! - The pure reorder resolver
//! - Drop-edge geometry
//! - Board file parsing and invariant validation
//!
//! All business logic is isolated from UI and I/O concerns to enable
//! comprehensive unit testing without requiring a display server.

pub mod geometry;
pub mod parser;
pub mod reorder;
pub mod session;
pub mod types;
pub mod validator;

pub use geometry::{drop_edge, DropEdge};
pub use reorder::{apply_move, reorder};
pub use session::{CardMove, DragOrigin, DragSession, HoverTarget};
pub use types::*;
pub use validator::{validate_board, validate_id, ValidationError};

#[cfg(test)]
mod tests;

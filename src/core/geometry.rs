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

//! src/core/geometry.rs
//!
//! Drop-edge computation for drag-over events
//!
//! During a drag, every pointer movement over a candidate row asks: is the
//! pointer in the top or bottom half of that row's bounding box? The answer
//! decides which side of the row the dragged card would be inserted on.
//! The edge is recomputed on every drag-over event, never cached — the
//! pointer moves continuously and only the final answer at drop time counts.

use std::fmt;

/// Which half of a candidate row the pointer is over
///
/// `Top` inserts before the row, `Bottom` inserts after it. The mapping to
/// an insertion index is handled by [`crate::core::session::DragSession`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum DropEdge {
    /// Pointer is in the upper half: insert before this row
    Top,
    /// Pointer is in the lower half: insert after this row
    Bottom,
}

impl fmt::Display for DropEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DropEdge::Top => write!(f, "top"),
            DropEdge::Bottom => write!(f, "bottom"),
        }
    }
}

/// Computes the drop edge from pointer position and row geometry
///
/// # Arguments
/// * `pointer_y` - Vertical pointer coordinate
/// * `rect_top` - Top of the row's bounding box, same coordinate space
/// * `rect_height` - Height of the row's bounding box
///
/// The row midpoint itself counts as the bottom half, so a degenerate
/// zero-height row always reports `Bottom` rather than dividing by its
/// height.
///
/// # Example
/// ```
/// use cardwall::core::geometry::{drop_edge, DropEdge};
///
/// // A 40px row whose top edge sits at y = 100
/// assert_eq!(drop_edge(110.0, 100.0, 40.0), DropEdge::Top);
/// assert_eq!(drop_edge(135.0, 100.0, 40.0), DropEdge::Bottom);
/// ```
pub fn drop_edge(pointer_y: f64, rect_top: f64, rect_height: f64) -> DropEdge {
    let offset_from_top = pointer_y - rect_top;

    if offset_from_top < rect_height / 2.0 {
        DropEdge::Top
    } else {
        DropEdge::Bottom
    }
}

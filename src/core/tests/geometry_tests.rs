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

//! Drop-edge geometry tests
//!
//! The edge decides which side of a hovered row a dragged card inserts on,
//! so the half-height threshold has to be exact.

use crate::core::geometry::{drop_edge, DropEdge};

#[test]
fn test_upper_half_is_top() {
    // A 40px row whose top edge sits at y = 100: anything above the
    // midpoint at 120 reports Top.
    assert_eq!(drop_edge(110.0, 100.0, 40.0), DropEdge::Top);
    assert_eq!(drop_edge(100.0, 100.0, 40.0), DropEdge::Top);
    assert_eq!(drop_edge(119.9, 100.0, 40.0), DropEdge::Top);
}

#[test]
fn test_lower_half_is_bottom() {
    assert_eq!(drop_edge(135.0, 100.0, 40.0), DropEdge::Bottom);
    assert_eq!(drop_edge(139.9, 100.0, 40.0), DropEdge::Bottom);
}

#[test]
fn test_midpoint_counts_as_bottom() {
    // offset == height / 2 is not strictly less than the threshold
    assert_eq!(drop_edge(120.0, 100.0, 40.0), DropEdge::Bottom);
}

#[test]
fn test_widget_relative_coordinates() {
    // GTK drop targets report pointer coordinates relative to the row
    // widget, so rect_top is 0 in practice.
    assert_eq!(drop_edge(5.0, 0.0, 32.0), DropEdge::Top);
    assert_eq!(drop_edge(28.0, 0.0, 32.0), DropEdge::Bottom);
}

#[test]
fn test_degenerate_zero_height_row() {
    // An unallocated row must not divide the gesture's fate by zero
    assert_eq!(drop_edge(100.0, 100.0, 0.0), DropEdge::Bottom);
}

#[test]
fn test_edge_display() {
    assert_eq!(format!("{}", DropEdge::Top), "top");
    assert_eq!(format!("{}", DropEdge::Bottom), "bottom");
}

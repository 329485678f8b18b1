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

//! Draggable card row component
//!
//! A wrapper/slot widget: callers hand it arbitrary content to render, and
//! the row owns every event binding — drag source, drop target, and the
//! multi-select checkbox — without the content knowing anything about it.
//!
//! As a drag source the row reports `(card id, group id, index)` once at
//! drag-begin. As a drop target it recomputes which half of its own box the
//! pointer is over on every drag-over event and reports
//! `(group id, index, edge)` to the Controller; nothing is cached because
//! the pointer moves continuously and only the state at drop time counts.

use gtk4::{gdk, prelude::*, Box as GtkBox, CheckButton, DragSource, DropTarget, Orientation};
use std::rc::Rc;

use crate::core::geometry::{drop_edge, DropEdge};
use crate::core::session::CardMove;
use crate::core::types::Card;
use crate::ui::Controller;

/// A single draggable, droppable row wrapping caller-supplied content
pub struct CardRow {
    /// Root widget (horizontal box)
    widget: GtkBox,
}

impl CardRow {
    /// Creates a row for `card` at `index` within its group
    ///
    /// # Arguments
    /// * `card` - The card this row represents
    /// * `index` - The card's current index within its group
    /// * `content` - Caller-supplied content; rendered as-is inside the row
    /// * `controller` - Shared Controller owning the drag session
    /// * `on_reordered` - Invoked once per completed drop, with the move
    pub fn new(
        card: &Card,
        index: usize,
        content: &gtk4::Widget,
        controller: Rc<Controller>,
        on_reordered: Rc<dyn Fn(&CardMove)>,
    ) -> Self {
        let widget = GtkBox::builder()
            .orientation(Orientation::Horizontal)
            .spacing(10)
            .margin_start(10)
            .margin_end(10)
            .margin_top(5)
            .margin_bottom(5)
            .build();
        widget.add_css_class("card-row");

        // Multi-select checkbox, only in select mode
        if controller.select_mode() {
            let check = CheckButton::new();
            check.set_active(controller.is_selected(&card.group_id, &card.id));

            let controller_for_check = controller.clone();
            let group_id = card.group_id.clone();
            let card_id = card.id.clone();
            check.connect_toggled(move |button| {
                controller_for_check.set_selected(&group_id, &card_id, button.is_active());
            });

            widget.append(&check);
        }

        widget.append(content);

        Self::attach_drag_source(&widget, card, index, &controller);
        Self::attach_drop_target(&widget, card, index, &controller, on_reordered);

        Self { widget }
    }

    /// Makes the row a drag source reporting its identity at drag-begin
    fn attach_drag_source(widget: &GtkBox, card: &Card, index: usize, controller: &Rc<Controller>) {
        let drag_source = DragSource::new();
        drag_source.set_actions(gdk::DragAction::MOVE);

        // The payload carries the card id for completeness; the session is
        // the source of truth for the gesture.
        let payload = card.id.clone();
        drag_source.connect_prepare(move |_, _x, _y| {
            Some(gdk::ContentProvider::for_value(&payload.to_value()))
        });

        let controller_for_begin = controller.clone();
        let card_id = card.id.clone();
        let group_id = card.group_id.clone();
        let row_for_begin = widget.clone();
        drag_source.connect_drag_begin(move |_, _drag| {
            controller_for_begin.begin_drag(&card_id, &group_id, index);
            row_for_begin.add_css_class("dragging");
        });

        let controller_for_cancel = controller.clone();
        drag_source.connect_drag_cancel(move |_, _, _| {
            controller_for_cancel.cancel_drag();
            false
        });

        // On a successful drop the session is already idle when drag-end
        // arrives; a gesture that ended nowhere is cancelled here.
        let controller_for_end = controller.clone();
        let row_for_end = widget.clone();
        drag_source.connect_drag_end(move |_, _drag, _delete_data| {
            controller_for_end.cancel_drag();
            row_for_end.remove_css_class("dragging");
        });

        widget.add_controller(drag_source);
    }

    /// Makes the row a drop target reporting hover edges and drops
    fn attach_drop_target(
        widget: &GtkBox,
        card: &Card,
        index: usize,
        controller: &Rc<Controller>,
        on_reordered: Rc<dyn Fn(&CardMove)>,
    ) {
        let drop_target = DropTarget::new(glib::types::Type::STRING, gdk::DragAction::MOVE);

        let controller_for_motion = controller.clone();
        let group_id = card.group_id.clone();
        let row_for_motion = widget.clone();
        drop_target.connect_motion(move |_, _x, y| {
            let edge = drop_edge(y, 0.0, f64::from(row_for_motion.height()));
            controller_for_motion.update_hover(&group_id, index, edge);

            match edge {
                DropEdge::Top => {
                    row_for_motion.add_css_class("drop-above");
                    row_for_motion.remove_css_class("drop-below");
                }
                DropEdge::Bottom => {
                    row_for_motion.add_css_class("drop-below");
                    row_for_motion.remove_css_class("drop-above");
                }
            }

            gdk::DragAction::MOVE
        });

        let row_for_leave = widget.clone();
        drop_target.connect_leave(move |_| {
            row_for_leave.remove_css_class("drop-above");
            row_for_leave.remove_css_class("drop-below");
        });

        let controller_for_drop = controller.clone();
        let group_id = card.group_id.clone();
        let row_for_drop = widget.clone();
        drop_target.connect_drop(move |_, _value, _x, y| {
            row_for_drop.remove_css_class("drop-above");
            row_for_drop.remove_css_class("drop-below");

            // Final edge at the drop position, then resolve the gesture
            let edge = drop_edge(y, 0.0, f64::from(row_for_drop.height()));
            controller_for_drop.update_hover(&group_id, index, edge);

            match controller_for_drop.complete_drag() {
                Ok(Some(mv)) => {
                    // Rebuilding the list mid-drop confuses the gesture
                    // teardown; notify after the event unwinds.
                    let callback = on_reordered.clone();
                    glib::idle_add_local_once(move || callback(&mv));
                    true
                }
                Ok(None) => false,
                Err(e) => {
                    eprintln!("❌ Failed to persist reorder: {}", e);
                    false
                }
            }
        });

        widget.add_controller(drop_target);
    }

    /// Returns the root widget for adding to a parent container
    pub fn widget(&self) -> &GtkBox {
        &self.widget
    }
}

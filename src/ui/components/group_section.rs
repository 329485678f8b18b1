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

//! Collapsible group section component
//!
//! Renders one group's cards, in order, inside a collapsible section.
//! Collapsing is purely local UI state — two states, initially open — and
//! only hides the children; it never touches the data. Every per-card
//! callback is tagged with this group's id on the way to the Controller.
//!
//! An empty group exposes a drop zone instead of rows, reporting insertion
//! index 0, so cards can always be dragged into it.

use gtk4::{
    gdk, prelude::*, Box as GtkBox, Expander, Label, ListBox, ListBoxRow, Orientation,
    SelectionMode,
};
use std::rc::Rc;

use crate::core::geometry::DropEdge;
use crate::core::session::CardMove;
use crate::core::types::{Card, Group};
use crate::ui::components::CardRow;
use crate::ui::Controller;

/// One collapsible group of card rows
pub struct GroupSection {
    /// Root widget (expander)
    widget: Expander,
    /// List box holding one row per card
    list_box: ListBox,
    /// Id of the group this section renders
    group_id: String,
}

impl GroupSection {
    /// Builds the section for a group
    ///
    /// # Arguments
    /// * `group` - The group to render
    /// * `controller` - Shared Controller owning the drag session
    /// * `on_reordered` - Relayed to every row; fired once per drop
    /// * `on_row_selected` - Called with `(group id, row index)` on click
    pub fn new(
        group: &Group,
        controller: Rc<Controller>,
        on_reordered: Rc<dyn Fn(&CardMove)>,
        on_row_selected: Rc<dyn Fn(&str, usize)>,
    ) -> Self {
        let widget = Expander::builder()
            .label(format!("{} ({})", group.title, group.cards.len()))
            .expanded(true)
            .build();
        widget.add_css_class("group-section");

        let body = GtkBox::new(Orientation::Vertical, 0);

        let list_box = ListBox::builder()
            .selection_mode(SelectionMode::Single)
            .build();

        for (index, card) in group.cards.iter().enumerate() {
            let content = Self::card_content(card);
            let row = CardRow::new(
                card,
                index,
                content.upcast_ref(),
                controller.clone(),
                on_reordered.clone(),
            );

            let list_row = ListBoxRow::new();
            list_row.set_child(Some(row.widget()));
            list_box.append(&list_row);
        }

        // Forward clicks tagged with this group's id; deselections are
        // handled by the list container clearing sibling sections.
        let group_id_for_select = group.id.clone();
        let on_row_selected = on_row_selected.clone();
        list_box.connect_row_selected(move |_list_box, row| {
            if let Some(row) = row {
                on_row_selected(&group_id_for_select, row.index() as usize);
            }
        });

        body.append(&list_box);

        if group.is_empty() {
            body.append(&Self::empty_drop_zone(group, &controller, on_reordered));
        }

        widget.set_child(Some(&body));

        Self {
            widget,
            list_box,
            group_id: group.id.clone(),
        }
    }

    /// Default row content: label plus a dimmed id, tooltip when long
    fn card_content(card: &Card) -> GtkBox {
        let content = GtkBox::builder()
            .orientation(Orientation::Horizontal)
            .spacing(10)
            .build();

        let label = Label::builder()
            .label(&card.label)
            .xalign(0.0)
            .hexpand(true)
            .ellipsize(gtk4::pango::EllipsizeMode::End)
            .build();

        // Tooltip shows the full label when it is likely truncated
        if card.label.len() > 40 {
            label.set_has_tooltip(true);
            label.set_tooltip_text(Some(&card.label));
        }

        let id_label = Label::builder().label(&card.id).xalign(1.0).build();
        id_label.add_css_class("card-id");

        content.append(&label);
        content.append(&id_label);

        content
    }

    /// A drop target standing in for rows while the group is empty
    ///
    /// Always reports insertion index 0 with a top edge, so a drop here
    /// lands as the group's first card.
    fn empty_drop_zone(
        group: &Group,
        controller: &Rc<Controller>,
        on_reordered: Rc<dyn Fn(&CardMove)>,
    ) -> Label {
        let zone = Label::builder()
            .label("Drop cards here")
            .margin_top(10)
            .margin_bottom(10)
            .build();
        zone.add_css_class("empty-drop-zone");

        let drop_target = gtk4::DropTarget::new(glib::types::Type::STRING, gdk::DragAction::MOVE);

        let controller_for_motion = controller.clone();
        let group_id = group.id.clone();
        drop_target.connect_motion(move |_, _x, _y| {
            controller_for_motion.update_hover(&group_id, 0, DropEdge::Top);
            gdk::DragAction::MOVE
        });

        let controller_for_drop = controller.clone();
        let group_id = group.id.clone();
        drop_target.connect_drop(move |_, _value, _x, _y| {
            controller_for_drop.update_hover(&group_id, 0, DropEdge::Top);

            match controller_for_drop.complete_drag() {
                Ok(Some(mv)) => {
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

        zone.add_controller(drop_target);

        zone
    }

    /// Id of the group this section renders
    pub fn group_id(&self) -> &str {
        &self.group_id
    }

    /// Clears this section's row selection
    pub fn unselect(&self) {
        self.list_box.unselect_all();
    }

    /// Returns the root widget for adding to a parent container
    pub fn widget(&self) -> &Expander {
        &self.widget
    }
}

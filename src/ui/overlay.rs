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

//! Overlay manager - the single ambient overlay, made explicit
//!
//! At most one transient overlay (edit dialog, backup manager, …) is on
//! screen at a time. Rather than a hidden module-level "current dialog"
//! singleton, the rule lives in an `OverlayManager` service constructed
//! once at application startup and passed by reference to everything that
//! presents overlays. Presenting a new overlay dismisses the previous one.

use gtk4::prelude::*;
use gtk4::Window;
use std::cell::RefCell;

/// Tracks and enforces the at-most-one-overlay rule
///
/// Constructed once in `App::new` and shared via `Rc`; components never
/// call `present()` on their windows directly.
#[derive(Debug, Default)]
pub struct OverlayManager {
    /// The overlay currently on screen, if any
    current: RefCell<Option<Window>>,
}

impl OverlayManager {
    /// Creates a manager with no overlay showing
    pub fn new() -> Self {
        Self {
            current: RefCell::new(None),
        }
    }

    /// Presents a window as the ambient overlay
    ///
    /// Any previously presented overlay is closed first. The manager
    /// forgets the window automatically when it is closed by other means
    /// (its own buttons, the window manager).
    pub fn present(&self, window: &Window) {
        // End the borrow before close(): close handlers call back into
        // forget(), which takes its own borrow.
        let previous = self.current.borrow_mut().take();
        if let Some(previous) = previous {
            if previous != *window {
                previous.close();
            }
        }

        *self.current.borrow_mut() = Some(window.clone());
        window.present();
    }

    /// Dismisses the current overlay, if any
    pub fn dismiss(&self) {
        let current = self.current.borrow_mut().take();
        if let Some(window) = current {
            window.close();
        }
    }

    /// Drops the tracked overlay without closing it
    ///
    /// Called from a window's own close handler so the manager never
    /// holds a window that is already gone.
    pub fn forget(&self, window: &Window) {
        let mut current = self.current.borrow_mut();
        if current.as_ref() == Some(window) {
            *current = None;
        }
    }

    /// True while an overlay is on screen
    pub fn has_overlay(&self) -> bool {
        self.current.borrow().is_some()
    }
}

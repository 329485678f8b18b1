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

//! File system watcher for live board file monitoring
//!
//! Uses OS-level file watching (Linux inotify) via the notify crate.
//! Zero CPU overhead when the file is unchanged, prompt UI refresh when an
//! external editor rewrites the board. External edits are exactly how a
//! drag gesture's indices go stale, so the app reloads — and cancels any
//! gesture in progress — as soon as a change is flagged.

use notify::{Config, Event, RecommendedWatcher, RecursiveMode, Watcher};
use std::{
    path::PathBuf,
    sync::mpsc::{channel, Receiver},
};

/// Watches the board file for modifications, polled from the main loop
pub struct BoardWatcher {
    _watcher: RecommendedWatcher,
    rx: Receiver<notify::Result<Event>>,
}

impl BoardWatcher {
    pub fn new(path: PathBuf) -> Result<Self, Box<dyn std::error::Error>> {
        let (tx, rx) = channel();

        let mut watcher = RecommendedWatcher::new(
            move |res| {
                let _ = tx.send(res);
            },
            Config::default(),
        )?;

        watcher.watch(&path, RecursiveMode::NonRecursive)?;

        Ok(BoardWatcher {
            _watcher: watcher,
            rx,
        })
    }

    /// Checks for file modification events (non-blocking)
    pub fn check_for_changes(&self) -> bool {
        let mut changed = false;
        while let Ok(event_result) = self.rx.try_recv() {
            if let Ok(event) = event_result {
                if matches!(event.kind, notify::EventKind::Modify(_)) {
                    changed = true;
                }
            }
        }
        changed
    }
}

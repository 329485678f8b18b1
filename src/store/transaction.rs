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

//! Board file transactions with automatic backups
//!
//! Provides atomic write operations with ACID guarantees.

use atomic_write_file::AtomicWriteFile;
use std::{fs, io::Write, path::PathBuf};

use crate::store::{BoardStore, StoreError};

/// Atomic board transaction with automatic backup.
///
/// Provides ACID guarantees:
/// - **Atomic**: Changes are all-or-nothing (atomic file operations)
/// - **Consistent**: The board file is never in a half-written state
/// - **Isolated**: No race conditions (OS-level atomic rename)
/// - **Durable**: Backup created before any modifications
///
/// # Lifecycle
///
/// 1. `begin()` - Creates a timestamped backup immediately
/// 2. Caller prepares the new content (in memory)
/// 3. `commit()` - Writes atomically, or `rollback()` - restores original
///
/// # Example
///
/// ```no_run
/// use cardwall::store::{BoardStore, BoardTransaction};
/// use std::path::PathBuf;
///
/// let store = BoardStore::new(PathBuf::from("board.cards"))?;
/// let tx = BoardTransaction::begin(&store)?;
///
/// let new_content = "group = todo, To Do\ncard = todo, a, First task\n";
///
/// match tx.commit(new_content) {
///     Ok(()) => println!("Board updated successfully"),
///     Err(e) => eprintln!("Commit failed: {}", e),
/// }
/// # Ok::<(), cardwall::store::StoreError>(())
/// ```
pub struct BoardTransaction<'a> {
    store: &'a BoardStore,
    backup_path: Option<PathBuf>,
}

impl<'a> BoardTransaction<'a> {
    /// Begins a new transaction by creating a timestamped backup.
    ///
    /// The backup is created immediately when `begin()` is called, ensuring
    /// that a rollback point exists before any modification is attempted.
    ///
    /// # Errors
    ///
    /// Returns an error if the current board cannot be read or the backup
    /// file cannot be written; in that case nothing has been changed.
    pub fn begin(store: &'a BoardStore) -> Result<Self, StoreError> {
        // The backup is the rollback point; create it before anything else
        let backup_path = store.create_timestamped_backup()?;

        Ok(Self {
            store,
            backup_path: Some(backup_path),
        })
    }

    /// Commits the transaction by atomically writing the new content.
    ///
    /// The write is atomic at the filesystem level (temp file + rename), so
    /// the board file is never in a partially-written state. The backup
    /// created during `begin()` remains available for manual rollback.
    ///
    /// This method consumes the transaction, preventing double-commits.
    ///
    /// # Errors
    ///
    /// On error the original board file remains unchanged and the backup
    /// created during `begin()` is still available.
    pub fn commit(self, new_content: &str) -> Result<(), StoreError> {
        let mut file = AtomicWriteFile::options()
            .open(self.store.path())
            .map_err(|e| {
                StoreError::WriteFailed(format!("Failed to open for atomic write: {}", e))
            })?;

        file.write_all(new_content.as_bytes())
            .map_err(|e| StoreError::WriteFailed(format!("Failed to write content: {}", e)))?;

        file.commit()
            .map_err(|e| StoreError::WriteFailed(format!("Failed to commit atomic write: {}", e)))?;

        Ok(())
    }

    /// Rolls back to the backup created during `begin()`.
    ///
    /// Atomically restores the board file to its state when the transaction
    /// began. Borrows `self` immutably, allowing repeated attempts.
    pub fn rollback(&self) -> Result<(), StoreError> {
        if let Some(backup_path) = &self.backup_path {
            let backup_content = fs::read_to_string(backup_path)?;

            let mut file = AtomicWriteFile::options()
                .open(self.store.path())
                .map_err(|e| {
                    StoreError::WriteFailed(format!("Failed to open for atomic write: {}", e))
                })?;

            file.write_all(backup_content.as_bytes())
                .map_err(|e| StoreError::WriteFailed(format!("Failed to write content: {}", e)))?;

            file.commit()
                .map_err(|e| StoreError::WriteFailed(format!("Failed to commit: {}", e)))?;

            Ok(())
        } else {
            Err(StoreError::BackupFailed(
                "No backup available for rollback".to_string(),
            ))
        }
    }
}

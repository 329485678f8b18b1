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

//! Board file management with atomic writes and backup support.
//!
//! This module provides safe, transactional operations for the board file
//! that backs a cardwall window. Key features:
//!
//! - **Atomic writes**: Uses temp-file-then-rename to prevent corruption
//! - **Automatic backups**: Every write creates a timestamped backup
//! - **Rollback safety**: Failed transactions leave the original untouched
//! - **Symlink warnings**: Alerts the user but allows symlinked boards
//!
//! # Example
//!
//! ```no_run
//! use cardwall::store::BoardStore;
//!
//! let store = BoardStore::new("/home/user/.config/cardwall/board.cards".into())?;
//!
//! let mut board = store.load()?;
//! board.groups.swap(0, 1);
//! store.save(&board)?; // Backup, validate, atomic write
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod transaction;

pub use transaction::BoardTransaction;

use chrono::Local;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::core::parser::{parse_board_file, ParseError};
use crate::core::types::Board;
use crate::core::validator::validate_board;

/// Errors that can occur during board file management.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Board file does not exist.
    #[error("Board file not found: {0}")]
    NotFound(PathBuf),

    /// Backup directory cannot be created or written to.
    #[error("Backup directory not writable: {0}")]
    BackupDirNotWritable(PathBuf),

    /// Failed to create backup file.
    #[error("Failed to create backup: {0}")]
    BackupFailed(String),

    /// Atomic write operation failed.
    #[error("Atomic write failed: {0}")]
    WriteFailed(String),

    /// Board file could not be parsed.
    #[error("Parse failed: {0}")]
    Parse(#[from] ParseError),

    /// Board violates structural invariants.
    #[error("Invalid board: {0}")]
    Invalid(String),

    /// Path handed to a backup operation is not inside the backup directory.
    #[error("Not a backup of this board: {0}")]
    ForeignBackup(PathBuf),

    /// Generic I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Manages a board file with safe atomic operations.
///
/// The BoardStore provides read access and transactional writes with
/// automatic backup creation. All writes go through the transaction API
/// to ensure atomicity and recoverability, and every board is validated
/// both on load and before commit so the reorder machinery never sees a
/// board with ambiguous identifiers.
#[derive(Debug)]
pub struct BoardStore {
    /// Path to the board file.
    board_path: PathBuf,
    /// Directory holding timestamped backups, next to the board file.
    backup_dir: PathBuf,
}

impl BoardStore {
    /// Creates a new BoardStore for the given board file.
    ///
    /// This validates that the board file exists and creates the backup
    /// directory if it doesn't exist. If the board is a symlink, a warning
    /// is printed to stderr but the operation continues.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if the board file doesn't exist.
    /// Returns `StoreError::BackupDirNotWritable` if the backup directory
    /// cannot be created.
    pub fn new(board_path: PathBuf) -> Result<Self, StoreError> {
        if !board_path.exists() {
            return Err(StoreError::NotFound(board_path));
        }

        // Warn if the board is a symlink (but allow it)
        if board_path.read_link().is_ok() {
            eprintln!("⚠ Warning: Board file is a symlink: {}", board_path.display());
            eprintln!("  This is allowed, but be aware of what it points to.");
        }

        // Create backup directory next to the board file
        // e.g., ~/.config/cardwall/board.cards → ~/.config/cardwall/backups/
        let backup_dir = board_path
            .parent()
            .ok_or_else(|| {
                StoreError::BackupDirNotWritable(PathBuf::from(
                    "Board file has no parent directory",
                ))
            })?
            .join("backups");

        if !backup_dir.exists() {
            fs::create_dir_all(&backup_dir)
                .map_err(|_| StoreError::BackupDirNotWritable(backup_dir.clone()))?;
        }

        if backup_dir.metadata()?.permissions().readonly() {
            return Err(StoreError::BackupDirNotWritable(backup_dir));
        }

        Ok(Self {
            board_path,
            backup_dir,
        })
    }

    /// Path of the managed board file.
    pub fn path(&self) -> &Path {
        &self.board_path
    }

    /// Reads the current board file content.
    pub fn read_board(&self) -> Result<String, StoreError> {
        Ok(fs::read_to_string(&self.board_path)?)
    }

    /// Loads and validates the board.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Parse` on malformed directives and
    /// `StoreError::Invalid` when the parsed board violates its invariants
    /// (duplicate ids, foreign back-references).
    pub fn load(&self) -> Result<Board, StoreError> {
        let content = self.read_board()?;
        let board = parse_board_file(&content, &self.board_path)?;
        Self::check_invariants(&board)?;
        Ok(board)
    }

    /// Persists the board: validate, backup, then write atomically.
    ///
    /// The previous content is always backed up first, so a bad write can
    /// be undone from the backup manager.
    pub fn save(&self, board: &Board) -> Result<(), StoreError> {
        Self::check_invariants(board)?;

        let tx = BoardTransaction::begin(self)?;
        tx.commit(&format!("{}", board))
    }

    fn check_invariants(board: &Board) -> Result<(), StoreError> {
        let violations = validate_board(board);
        if violations.is_empty() {
            return Ok(());
        }

        let joined = violations
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join("; ");
        Err(StoreError::Invalid(joined))
    }

    /// Copies the current board into the backup directory, timestamped.
    pub(crate) fn create_timestamped_backup(&self) -> Result<PathBuf, StoreError> {
        let content = fs::read_to_string(&self.board_path)?;

        // Generate timestamp in YYYY-MM-DD_HHMMSS format
        let timestamp = Local::now().format("%Y-%m-%d_%H%M%S");

        let original_name = self
            .board_path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| StoreError::BackupFailed("Board path has no file name".to_string()))?;

        let backup_filename = format!("{}.{}", original_name, timestamp);
        let backup_path = self.backup_dir.join(&backup_filename);

        fs::write(&backup_path, &content)?;

        Ok(backup_path)
    }

    /// Lists available backups, newest first.
    pub fn list_backups(&self) -> Result<Vec<PathBuf>, StoreError> {
        let mut backups = Vec::new();

        for entry in fs::read_dir(&self.backup_dir)? {
            let path = entry?.path();
            if path.is_file() {
                backups.push(path);
            }
        }

        // Timestamped names sort chronologically; reverse for newest first
        backups.sort();
        backups.reverse();

        Ok(backups)
    }

    /// Restores a backup as the current board.
    ///
    /// The backup content must itself parse and validate, and the current
    /// board is backed up before being replaced.
    pub fn restore_backup(&self, backup: &Path) -> Result<(), StoreError> {
        self.check_is_our_backup(backup)?;

        let content = fs::read_to_string(backup)?;
        let board = parse_board_file(&content, backup)?;
        Self::check_invariants(&board)?;

        let tx = BoardTransaction::begin(self)?;
        tx.commit(&content)
    }

    /// Deletes a backup file.
    pub fn delete_backup(&self, backup: &Path) -> Result<(), StoreError> {
        self.check_is_our_backup(backup)?;
        fs::remove_file(backup)?;
        Ok(())
    }

    /// Guards backup operations against paths outside the backup directory.
    fn check_is_our_backup(&self, backup: &Path) -> Result<(), StoreError> {
        if backup.parent() == Some(self.backup_dir.as_path()) {
            Ok(())
        } else {
            Err(StoreError::ForeignBackup(backup.to_path_buf()))
        }
    }
}

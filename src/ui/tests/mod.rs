//! UI module tests
//!
//! The Controller never touches GTK types, so its whole contract — board
//! loading, filtering, the drag path, CRUD, selection, backups — runs
//! headless against tempfile boards.

#[cfg(test)]
mod controller_tests;

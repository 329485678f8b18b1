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

//! Controller tests

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

use crate::core::geometry::DropEdge;
use crate::core::types::Card;
use crate::ui::Controller;

/// Helper: Creates a test board with known content
fn create_test_board() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let board_path = temp_dir.path().join("board.cards");

    let content = r#"
# Test board
group = todo, To Do
card = todo, notes, Write the launch notes
card = todo, review, Review the queue
card = todo, triage, Triage new reports

group = doing, In Progress
card = doing, importer, Refactor the importer

group = done, Done
"#;

    fs::write(&board_path, content).unwrap();
    (temp_dir, board_path)
}

fn loaded_controller(board_path: PathBuf) -> Controller {
    let controller = Controller::new(board_path).unwrap();
    controller.load_board().unwrap();
    controller
}

#[test]
fn test_controller_creation() {
    let (_temp_dir, board_path) = create_test_board();
    let controller = Controller::new(board_path);

    assert!(controller.is_ok(), "Controller should be created successfully");
}

#[test]
fn test_load_board_counts() {
    let (_temp_dir, board_path) = create_test_board();
    let controller = loaded_controller(board_path);

    assert_eq!(controller.card_count(), 4, "Should load 4 cards");
    assert_eq!(controller.group_count(), 3, "Should load 3 groups");
}

#[test]
fn test_visible_board_filters_by_label() {
    let (_temp_dir, board_path) = create_test_board();
    let controller = loaded_controller(board_path);

    controller.set_search_query("launch".to_string());

    let visible = controller.visible_board();
    assert_eq!(visible.total_cards(), 1, "Should find 1 card with 'launch'");
    assert_eq!(visible.groups.len(), 3, "Groups stay visible while filtering");
}

#[test]
fn test_visible_board_filters_by_id() {
    let (_temp_dir, board_path) = create_test_board();
    let controller = loaded_controller(board_path);

    controller.set_search_query("importer".to_string());

    assert_eq!(controller.visible_board().total_cards(), 1);
}

#[test]
fn test_empty_query_shows_everything() {
    let (_temp_dir, board_path) = create_test_board();
    let controller = loaded_controller(board_path);

    controller.set_search_query("  ".to_string());

    assert_eq!(controller.visible_board().total_cards(), 4);
    assert!(!controller.filtering());
}

#[test]
fn test_drag_within_group_persists() {
    let (_temp_dir, board_path) = create_test_board();
    let controller = loaded_controller(board_path);

    // Drag "notes" (index 0) below "review" (index 1)
    controller.begin_drag("notes", "todo", 0);
    controller.update_hover("todo", 1, DropEdge::Bottom);

    let mv = controller.complete_drag().unwrap().unwrap();
    assert_eq!(mv.source_group_id, "todo");
    assert_eq!(mv.target_index, 1, "compensated for the removal");

    let board = controller.board();
    let ids: Vec<_> = board.group("todo").unwrap().cards.iter().map(|c| c.id.clone()).collect();
    assert_eq!(ids, vec!["review", "notes", "triage"]);

    // The move survived a round trip through the store
    controller.load_board().unwrap();
    let reloaded: Vec<_> = controller
        .board()
        .group("todo")
        .unwrap()
        .cards
        .iter()
        .map(|c| c.id.clone())
        .collect();
    assert_eq!(reloaded, vec!["review", "notes", "triage"]);
}

#[test]
fn test_drag_into_empty_group() {
    let (_temp_dir, board_path) = create_test_board();
    let controller = loaded_controller(board_path);

    controller.begin_drag("importer", "doing", 0);
    controller.update_hover("done", 0, DropEdge::Top);

    let mv = controller.complete_drag().unwrap().unwrap();
    assert_eq!(mv.target_group_id, "done");
    assert_eq!(mv.target_index, 0);

    let board = controller.board();
    assert!(board.group("doing").unwrap().is_empty());
    assert_eq!(board.group("done").unwrap().cards[0].id, "importer");
    assert_eq!(board.group("done").unwrap().cards[0].group_id, "done");
}

#[test]
fn test_drop_without_hover_emits_nothing() {
    let (_temp_dir, board_path) = create_test_board();
    let controller = loaded_controller(board_path);
    let before = controller.board();

    controller.begin_drag("notes", "todo", 0);

    assert!(controller.complete_drag().unwrap().is_none());
    assert_eq!(controller.board(), before, "board untouched");
}

#[test]
fn test_cancel_discards_gesture() {
    let (_temp_dir, board_path) = create_test_board();
    let controller = loaded_controller(board_path);
    let before = controller.board();

    controller.begin_drag("notes", "todo", 0);
    controller.update_hover("doing", 0, DropEdge::Top);
    controller.cancel_drag();

    assert!(controller.complete_drag().unwrap().is_none());
    assert_eq!(controller.board(), before);
}

#[test]
fn test_begin_drag_rejected_while_filtering() {
    // Filtered indices don't line up with stored positions
    let (_temp_dir, board_path) = create_test_board();
    let controller = loaded_controller(board_path);

    controller.set_search_query("triage".to_string());
    controller.begin_drag("triage", "todo", 0);

    assert!(!controller.drag_active());
}

#[test]
fn test_external_reload_cancels_gesture() {
    let (_temp_dir, board_path) = create_test_board();
    let controller = loaded_controller(board_path.clone());

    controller.begin_drag("notes", "todo", 0);
    controller.update_hover("todo", 2, DropEdge::Bottom);

    // The board file changes under the gesture; reload drops the session
    fs::write(&board_path, "group = todo, To Do\n").unwrap();
    controller.load_board().unwrap();

    assert!(!controller.drag_active());
    assert!(controller.complete_drag().unwrap().is_none());
}

#[test]
fn test_add_card() {
    let (_temp_dir, board_path) = create_test_board();
    let controller = loaded_controller(board_path);

    controller
        .add_card(Card::new("done", "shipped", "Shipped the thing"))
        .unwrap();

    assert_eq!(controller.card_count(), 5);
    assert_eq!(
        controller.board().group("done").unwrap().cards[0].id,
        "shipped"
    );
}

#[test]
fn test_add_card_to_unknown_group_fails() {
    let (_temp_dir, board_path) = create_test_board();
    let controller = loaded_controller(board_path);

    let result = controller.add_card(Card::new("ghost", "x", "Nowhere"));

    assert!(result.is_err());
    assert_eq!(controller.card_count(), 4, "board unchanged");
}

#[test]
fn test_add_duplicate_card_id_fails() {
    let (_temp_dir, board_path) = create_test_board();
    let controller = loaded_controller(board_path);

    let result = controller.add_card(Card::new("todo", "notes", "Duplicate"));

    assert!(result.is_err());
    assert_eq!(controller.card_count(), 4);
}

#[test]
fn test_update_card_in_place() {
    let (_temp_dir, board_path) = create_test_board();
    let controller = loaded_controller(board_path);

    let original = controller.board().find_card("todo", "notes").unwrap().1.clone();
    let updated = Card::new("todo", "notes", "Rewritten label");

    controller.update_card(&original, updated).unwrap();

    let board = controller.board();
    let (index, card) = board.find_card("todo", "notes").unwrap();
    assert_eq!(index, 0, "position kept");
    assert_eq!(card.label, "Rewritten label");
}

#[test]
fn test_update_card_moves_groups() {
    let (_temp_dir, board_path) = create_test_board();
    let controller = loaded_controller(board_path);

    let original = controller.board().find_card("todo", "notes").unwrap().1.clone();
    let updated = Card::new("doing", "notes", "Write the launch notes");

    controller.update_card(&original, updated).unwrap();

    let board = controller.board();
    assert!(board.find_card("todo", "notes").is_none());
    let (index, _) = board.find_card("doing", "notes").unwrap();
    assert_eq!(index, 1, "appended to the new group");
}

#[test]
fn test_delete_card() {
    let (_temp_dir, board_path) = create_test_board();
    let controller = loaded_controller(board_path);

    let card = controller.board().find_card("todo", "review").unwrap().1.clone();
    controller.delete_card(&card).unwrap();

    assert_eq!(controller.card_count(), 3);
    assert!(controller.board().find_card("todo", "review").is_none());
}

#[test]
fn test_selection_lifecycle() {
    let (_temp_dir, board_path) = create_test_board();
    let controller = loaded_controller(board_path);

    controller.set_select_mode(true);
    controller.set_selected("todo", "notes", true);
    controller.set_selected("todo", "review", true);
    assert_eq!(controller.selected_count(), 2);
    assert!(controller.is_selected("todo", "notes"));

    controller.set_selected("todo", "notes", false);
    assert_eq!(controller.selected_count(), 1);

    // Leaving select mode clears the rest
    controller.set_select_mode(false);
    assert_eq!(controller.selected_count(), 0);
}

#[test]
fn test_delete_selected() {
    let (_temp_dir, board_path) = create_test_board();
    let controller = loaded_controller(board_path);

    controller.set_select_mode(true);
    controller.set_selected("todo", "notes", true);
    controller.set_selected("doing", "importer", true);

    let removed = controller.delete_selected().unwrap();

    assert_eq!(removed, 2);
    assert_eq!(controller.card_count(), 2);
    assert_eq!(controller.selected_count(), 0);
}

#[test]
fn test_backup_restore_round_trip() {
    let (_temp_dir, board_path) = create_test_board();
    let controller = loaded_controller(board_path);

    let before = controller.board();

    let card = before.find_card("todo", "notes").unwrap().1.clone();
    controller.delete_card(&card).unwrap();
    assert_eq!(controller.card_count(), 3);

    let backups = controller.list_backups().unwrap();
    assert!(!backups.is_empty(), "delete should have left a backup");

    controller.restore_backup(&backups[0]).unwrap();
    assert_eq!(controller.board(), before);
}

#[test]
fn test_export_and_import() {
    let (temp_dir, board_path) = create_test_board();
    let controller = loaded_controller(board_path);

    let export_path = temp_dir.path().join("export.cards");
    controller.export_to(&export_path).unwrap();

    // Shrink the board, then import the export back
    let card = controller.board().find_card("todo", "notes").unwrap().1.clone();
    controller.delete_card(&card).unwrap();
    assert_eq!(controller.card_count(), 3);

    controller.import_from(&export_path).unwrap();
    assert_eq!(controller.card_count(), 4);
}

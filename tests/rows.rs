use cgie::{GameInfoDialog, GameRecord, TagRow, statics};
use pretty_assertions::assert_eq;

fn two_extra_tags() -> GameRecord {
    let mut game = GameRecord::new();
    game.set_text_tag("Opening", "Sicilian");
    game.set_text_tag("ECO", "B20");
    game
}

#[test]
fn add_row_appends_placeholder_and_selects_it() {
    let mut dialog = GameInfoDialog::new();
    dialog.open(&GameRecord::new());

    dialog.add_row();
    assert_eq!(
        dialog.rows,
        vec![TagRow::new(statics::EN_NEW_TAG_NAME, "")]
    );
    assert_eq!(dialog.selected_row, Some(0));
    // Focus is handed out once, for the freshly added row.
    assert_eq!(dialog.take_row_focus(), Some(0));
    assert_eq!(dialog.take_row_focus(), None);
}

#[test]
fn delete_with_no_selection_is_a_noop() {
    let mut dialog = GameInfoDialog::new();
    dialog.open(&two_extra_tags());

    dialog.delete_selected_row();
    assert_eq!(dialog.rows.len(), 2);
}

#[test]
fn delete_removes_the_selected_row() {
    let mut dialog = GameInfoDialog::new();
    dialog.open(&two_extra_tags());

    dialog.selected_row = Some(0);
    dialog.delete_selected_row();
    assert_eq!(dialog.rows, vec![TagRow::new("ECO", "B20")]);
    assert_eq!(dialog.selected_row, None);
}

#[test]
fn placeholder_named_row_commits_as_a_real_tag() {
    let mut game = GameRecord::new();
    let mut dialog = GameInfoDialog::new();
    dialog.open(&game);

    dialog.add_row();
    dialog.rows[0].value = "kept".to_string();
    dialog.accept(&mut game);

    // Exclusion is gated on an empty name, not on the placeholder.
    assert_eq!(game.tag_text(statics::EN_NEW_TAG_NAME), "kept");
}

#[test]
fn empty_named_rows_are_skipped_at_commit() {
    let mut game = GameRecord::new();
    let mut dialog = GameInfoDialog::new();
    dialog.open(&game);

    dialog.rows.push(TagRow::new("", "ignored"));
    dialog.accept(&mut game);

    assert!(game.tags.values().all(|v| v.as_text() != Some("ignored")));
}

#[test]
fn dedicated_named_rows_cannot_override_their_fields() {
    let mut game = GameRecord::new();
    let mut dialog = GameInfoDialog::new();
    dialog.open(&game);

    dialog.fields.white = "Alice".to_string();
    dialog.rows.push(TagRow::new(statics::TAG_WHITE, "Mallory"));
    dialog.accept(&mut game);

    assert_eq!(game.tag_text(statics::TAG_WHITE), "Alice");
}

#[test]
fn later_rows_win_on_name_collision() {
    let mut game = GameRecord::new();
    let mut dialog = GameInfoDialog::new();
    dialog.open(&game);

    dialog.rows.push(TagRow::new("Opening", "Sicilian"));
    dialog.rows.push(TagRow::new("Opening", "French"));
    dialog.accept(&mut game);

    assert_eq!(game.tag_text("Opening"), "French");
}

#[test]
fn commit_sets_player_names_and_notifies() {
    let mut game = GameRecord::new();
    let mut dialog = GameInfoDialog::new();
    dialog.open(&game);

    dialog.fields.white = "Alice".to_string();
    dialog.fields.black = "Bob".to_string();

    let before = game.players_generation();
    assert!(dialog.accept(&mut game));
    assert_eq!(game.white.name, "Alice");
    assert_eq!(game.black.name, "Bob");
    assert_eq!(game.players_generation(), before + 1);
}

#[test]
fn cancel_hides_without_touching_the_record() {
    let mut game = two_extra_tags();
    let mut dialog = GameInfoDialog::new();
    dialog.open(&game);

    dialog.rows[0].value = "Najdorf".to_string();
    dialog.close();

    assert!(!dialog.visible);
    assert_eq!(game.tag_text("Opening"), "Sicilian");
    assert_eq!(game.players_generation(), 0);

    // The dialog is reusable: the next open reloads from the record.
    dialog.open(&game);
    assert_eq!(dialog.rows[0], TagRow::new("Opening", "Sicilian"));
}

use cgie::{ChangeTone, GameInfoDialog, GameRecord, RatingChange, statics};
use pretty_assertions::assert_eq;

fn decided_game(site: &str) -> GameRecord {
    let mut game = GameRecord::new();
    game.set_text_tag(statics::TAG_SITE, site);
    game.set_text_tag(statics::TAG_RESULT, statics::RESULT_WHITE_WIN);
    game.set_text_tag(statics::TAG_WHITE_ELO, "1500");
    game.set_text_tag(statics::TAG_BLACK_ELO, "1480");
    game
}

#[test]
fn online_sites_blank_both_displays() {
    for site in [
        "https://lichess.org/AbCdEfGh",
        "chessclub.com game 1234",
        "freechess.org",
    ] {
        let game = decided_game(site);
        let mut dialog = GameInfoDialog::new();
        dialog.open(&game);

        assert_eq!(dialog.white_change, RatingChange::default(), "site {site}");
        assert_eq!(dialog.black_change, RatingChange::default(), "site {site}");
    }
}

#[test]
fn decided_game_classifies_gain_and_loss() {
    let game = decided_game("My Club");
    let mut dialog = GameInfoDialog::new();
    dialog.open(&game);

    assert_eq!(dialog.white_change.text, "+9");
    assert_eq!(dialog.white_change.tone, ChangeTone::Gain);
    assert_eq!(dialog.black_change.text, "-9");
    assert_eq!(dialog.black_change.tone, ChangeTone::Loss);
}

#[test]
fn draw_between_equals_is_neutral_zero() {
    let mut game = GameRecord::new();
    game.set_text_tag(statics::TAG_SITE, "My Club");
    game.set_text_tag(statics::TAG_RESULT, statics::RESULT_DRAW);
    game.set_text_tag(statics::TAG_WHITE_ELO, "1800");
    game.set_text_tag(statics::TAG_BLACK_ELO, "1800");

    let mut dialog = GameInfoDialog::new();
    dialog.open(&game);

    assert_eq!(dialog.white_change.text, "0");
    assert_eq!(dialog.white_change.tone, ChangeTone::Neutral);
    assert_eq!(dialog.black_change.tone, ChangeTone::Neutral);
}

#[test]
fn undecided_game_shows_nothing() {
    let mut game = GameRecord::new();
    game.set_text_tag(statics::TAG_SITE, "My Club");
    game.set_text_tag(statics::TAG_WHITE_ELO, "1500");
    game.set_text_tag(statics::TAG_BLACK_ELO, "1500");

    let mut dialog = GameInfoDialog::new();
    dialog.open(&game);

    assert_eq!(dialog.white_change.text, "");
    assert_eq!(dialog.white_change.tone, ChangeTone::Neutral);
}

#[test]
fn editing_a_rating_field_changes_the_estimate() {
    let game = decided_game("My Club");
    let mut dialog = GameInfoDialog::new();
    dialog.open(&game);
    assert_eq!(dialog.white_change.text, "+9");

    dialog.fields.white_elo = "1600".to_string();
    dialog.refresh_rating_change(&game);
    assert_eq!(dialog.white_change.text, "+7");

    dialog.fields.white_elo = "not a number".to_string();
    dialog.refresh_rating_change(&game);
    assert_eq!(dialog.white_change, RatingChange::default());
}

//! Estimated Elo rating change for a finished game. Cosmetic only: the
//! dialog shows the estimate next to the rating fields, nothing is stored.

use crate::game::{Color, GameRecord};
use crate::statics;

/// Signed change string for one player ("+8", "-12", "0"), or empty when the
/// estimate cannot be computed: a rating field that is not a number, or a
/// Result tag that is not a decided result.
pub fn rating_change_str(
    game: &GameRecord,
    color: Color,
    white_elo: &str,
    black_elo: &str,
) -> String {
    let Ok(white) = white_elo.trim().parse::<f64>() else {
        return String::new();
    };
    let Ok(black) = black_elo.trim().parse::<f64>() else {
        return String::new();
    };

    let result = game.tag_text(statics::TAG_RESULT);
    let score = match result.as_str() {
        r if r == statics::RESULT_WHITE_WIN => match color {
            Color::White => 1.0,
            Color::Black => 0.0,
        },
        r if r == statics::RESULT_BLACK_WIN => match color {
            Color::White => 0.0,
            Color::Black => 1.0,
        },
        r if r == statics::RESULT_DRAW => 0.5,
        _ => return String::new(),
    };

    let (own, opp) = match color {
        Color::White => (white, black),
        Color::Black => (black, white),
    };

    let expected = 1.0 / (1.0 + 10f64.powf((opp - own) / 400.0));
    let k = if own >= 2400.0 { 10.0 } else { 20.0 };
    let change = (k * (score - expected)).round() as i64;

    if change > 0 {
        format!("+{change}")
    } else {
        change.to_string()
    }
}

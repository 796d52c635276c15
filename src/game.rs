use crate::statics;
use crate::tags::{TagMap, TagValue};

/// Side to move / player color. Indexes into the record's two players.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    White,
    Black,
}

/// A player as the rest of the application displays it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Player {
    pub name: String,
}

impl Player {
    pub fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
    }
}

/// In-memory record of a single game: its tag mapping plus the two player
/// objects. The dialog edits the tags; the shell observes the players.
#[derive(Debug, Clone, Default)]
pub struct GameRecord {
    pub tags: TagMap,
    pub white: Player,
    pub black: Player,
    players_generation: u64,
}

impl GameRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tags(tags: TagMap) -> Self {
        Self {
            tags,
            ..Self::default()
        }
    }

    /// Text rendering of a tag, empty string when absent. Structured values
    /// render through their display form so dedicated fields can always load
    /// something sensible.
    pub fn tag_text(&self, name: &str) -> String {
        self.tags
            .get(name)
            .map(TagValue::to_string)
            .unwrap_or_default()
    }

    pub fn set_text_tag(&mut self, name: &str, value: &str) {
        self.tags
            .insert(name.to_string(), TagValue::text(value));
    }

    pub fn player_mut(&mut self, color: Color) -> &mut Player {
        match color {
            Color::White => &mut self.white,
            Color::Black => &mut self.black,
        }
    }

    /// Best-effort components of the Date tag. Each component parses
    /// independently, so "1987.??.??" yields a year and nothing else.
    pub fn game_date(&self) -> (Option<i32>, Option<u32>, Option<u32>) {
        parse_pgn_date(&self.tag_text(statics::TAG_DATE))
    }

    /// Monotonic counter bumped on every players-changed notification.
    pub fn players_generation(&self) -> u64 {
        self.players_generation
    }

    pub fn emit_players_changed(&mut self) {
        self.players_generation += 1;
    }
}

/// Per-component parse of a "YYYY.MM.DD" date string. Components that are
/// missing or not plain integers (the "????" placeholder, typically) come
/// back as `None`; callers supply their own fallbacks.
pub fn parse_pgn_date(text: &str) -> (Option<i32>, Option<u32>, Option<u32>) {
    let mut parts = text.splitn(3, '.');
    let year = parts.next().and_then(|p| p.trim().parse().ok());
    let month = parts.next().and_then(|p| p.trim().parse().ok());
    let day = parts.next().and_then(|p| p.trim().parse().ok());
    (year, month, day)
}

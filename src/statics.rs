// Central place for UI strings and other non-localized constants.
// Keep these out of gui.rs to reduce duplication and make tweaks safer.

// English UI strings (EN_ prefix to make future localization easier)
pub const EN_APP_TITLE: &str = "CGIE: Chess Game Info Editor";

pub const EN_BTN_GAME_INFO: &str = "Game Info...";
pub const EN_BTN_ABOUT: &str = "About";
pub const EN_BTN_TOGGLE_THEME: &str = "Theme";

pub const EN_WINDOW_GAME_INFO: &str = "Game Info";
pub const EN_WINDOW_PICK_DATE: &str = "Pick a date";
pub const EN_WINDOW_ABOUT: &str = "About";

pub const EN_ABOUT_HEADING: &str = "CGIE: Chess Game Info Editor";
pub const EN_ABOUT_VERSION: &str = "Version:";
pub const EN_ABOUT_BLURB: &str = "View and edit the PGN-style tags of the current game.";

pub const EN_HEADING_TAGS: &str = "Tags";
pub const EN_HEADING_EXTRA_TAGS: &str = "Extra tags";

pub const EN_LABEL_SITE: &str = "Site:";
pub const EN_LABEL_EVENT: &str = "Event:";
pub const EN_LABEL_DATE: &str = "Date:";
pub const EN_LABEL_ROUND: &str = "Round:";
pub const EN_LABEL_ANNOTATOR: &str = "Annotator:";
pub const EN_LABEL_WHITE: &str = "White:";
pub const EN_LABEL_BLACK: &str = "Black:";
pub const EN_LABEL_WHITE_ELO: &str = "White Elo:";
pub const EN_LABEL_BLACK_ELO: &str = "Black Elo:";

pub const EN_COL_TAG: &str = "Tag";
pub const EN_COL_VALUE: &str = "Value";
pub const EN_COL_TYPE: &str = "Type";

pub const EN_BTN_ADD_TAG: &str = "Add";
pub const EN_BTN_DELETE_TAG: &str = "Delete";
pub const EN_BTN_PICK_DATE: &str = "...";
pub const EN_BTN_OK: &str = "OK";
pub const EN_BTN_CANCEL: &str = "Cancel";

pub const EN_NAV_PREV_MONTH: &str = "<";
pub const EN_NAV_NEXT_MONTH: &str = ">";

// Calendar header, Monday first.
pub const EN_WEEKDAYS: [&str; 7] = ["Mo", "Tu", "We", "Th", "Fr", "Sa", "Su"];

// Placeholder name for a freshly added tag row. Committed as-is if the user
// leaves it; only an empty name excludes a row from the commit.
pub const EN_NEW_TAG_NAME: &str = "New";

pub const EN_STATUS_TAGS_UPDATED: &str = "Game info updated";

pub const EN_EMPTY: &str = "";

// PGN tag names (TAG_ prefix)
pub const TAG_SITE: &str = "Site";
pub const TAG_EVENT: &str = "Event";
pub const TAG_DATE: &str = "Date";
pub const TAG_ROUND: &str = "Round";
pub const TAG_ANNOTATOR: &str = "Annotator";
pub const TAG_WHITE: &str = "White";
pub const TAG_BLACK: &str = "Black";
pub const TAG_WHITE_ELO: &str = "WhiteElo";
pub const TAG_BLACK_ELO: &str = "BlackElo";
pub const TAG_RESULT: &str = "Result";

/// Tags that always have a dedicated entry field in the dialog and never
/// appear in the generic tag table. Order is the field order in the dialog.
pub const DEDICATED_TAGS: [&str; 9] = [
    TAG_SITE,
    TAG_EVENT,
    TAG_DATE,
    TAG_ROUND,
    TAG_ANNOTATOR,
    TAG_WHITE,
    TAG_BLACK,
    TAG_WHITE_ELO,
    TAG_BLACK_ELO,
];

pub fn is_dedicated_tag(name: &str) -> bool {
    DEDICATED_TAGS.contains(&name)
}

// Online servers that publish their own rating deltas; the estimate is
// suppressed when the Site tag mentions one of them. Substring match,
// case-sensitive. lichess reports three values per player, which the
// single-number display cannot represent.
pub const ONLINE_SITES: [&str; 3] = ["lichess.org", "chessclub.com", "freechess.org"];

// PGN result literals.
pub const RESULT_WHITE_WIN: &str = "1-0";
pub const RESULT_BLACK_WIN: &str = "0-1";
pub const RESULT_DRAW: &str = "1/2-1/2";
pub const RESULT_ONGOING: &str = "*";

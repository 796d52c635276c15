use crate::elo;
use crate::game::{Color, GameRecord};
use crate::statics;
use crate::tags::TagRow;
use chrono::{Datelike, Local, NaiveDate};

/// One text buffer per dedicated tag, in the dialog's field order. Typed
/// handles instead of lookup-by-name keep the wiring checkable at compile
/// time; `get`/`get_mut` cover the loops that walk `DEDICATED_TAGS`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DedicatedFields {
    pub site: String,
    pub event: String,
    pub date: String,
    pub round: String,
    pub annotator: String,
    pub white: String,
    pub black: String,
    pub white_elo: String,
    pub black_elo: String,
}

impl DedicatedFields {
    pub fn get(&self, tag: &str) -> Option<&str> {
        match tag {
            t if t == statics::TAG_SITE => Some(&self.site),
            t if t == statics::TAG_EVENT => Some(&self.event),
            t if t == statics::TAG_DATE => Some(&self.date),
            t if t == statics::TAG_ROUND => Some(&self.round),
            t if t == statics::TAG_ANNOTATOR => Some(&self.annotator),
            t if t == statics::TAG_WHITE => Some(&self.white),
            t if t == statics::TAG_BLACK => Some(&self.black),
            t if t == statics::TAG_WHITE_ELO => Some(&self.white_elo),
            t if t == statics::TAG_BLACK_ELO => Some(&self.black_elo),
            _ => None,
        }
    }

    pub fn get_mut(&mut self, tag: &str) -> Option<&mut String> {
        match tag {
            t if t == statics::TAG_SITE => Some(&mut self.site),
            t if t == statics::TAG_EVENT => Some(&mut self.event),
            t if t == statics::TAG_DATE => Some(&mut self.date),
            t if t == statics::TAG_ROUND => Some(&mut self.round),
            t if t == statics::TAG_ANNOTATOR => Some(&mut self.annotator),
            t if t == statics::TAG_WHITE => Some(&mut self.white),
            t if t == statics::TAG_BLACK => Some(&mut self.black),
            t if t == statics::TAG_WHITE_ELO => Some(&mut self.white_elo),
            t if t == statics::TAG_BLACK_ELO => Some(&mut self.black_elo),
            _ => None,
        }
    }
}

/// How a rating-change string should be rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ChangeTone {
    #[default]
    Neutral,
    Gain,
    Loss,
}

/// One player's rating-change display: the string and its tone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RatingChange {
    pub text: String,
    pub tone: ChangeTone,
}

impl RatingChange {
    fn classify(text: String) -> Self {
        let tone = if text.starts_with('-') {
            ChangeTone::Loss
        } else if text.starts_with('+') {
            ChangeTone::Gain
        } else {
            ChangeTone::Neutral
        };
        Self { text, tone }
    }
}

/// State of the modal date-picker sub-dialog. Created fresh on every open and
/// dropped on confirm or cancel. The month is held 0-based, as calendar
/// widgets count it; the formatted write-back is 1-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatePickerState {
    pub year: i32,
    pub month0: u32,
    pub day: u32,
}

impl DatePickerState {
    /// Seed the picker from the date field's current text. Each component
    /// that fails to parse falls back to today's corresponding component.
    pub fn seeded_from(field_text: &str, today: NaiveDate) -> Self {
        let (year, month, day) = crate::game::parse_pgn_date(field_text);
        Self {
            year: year.unwrap_or_else(|| today.year()),
            month0: month.map(|m| m.saturating_sub(1)).unwrap_or_else(|| today.month0()),
            day: day.unwrap_or_else(|| today.day()),
        }
    }

    /// Zero-padded "YYYY.MM.DD" with the month written 1-based.
    pub fn formatted(&self) -> String {
        format!("{:04}.{:02}.{:02}", self.year, self.month0 + 1, self.day)
    }

    pub fn days_in_month(&self) -> u32 {
        let Some(first) = NaiveDate::from_ymd_opt(self.year, self.month0 + 1, 1) else {
            return 31;
        };
        let (next_year, next_month) = if self.month0 >= 11 {
            (self.year + 1, 1)
        } else {
            (self.year, self.month0 + 2)
        };
        match NaiveDate::from_ymd_opt(next_year, next_month, 1) {
            Some(next) => next.signed_duration_since(first).num_days() as u32,
            None => 31,
        }
    }

    /// Weekday of the first of the month, Monday = 0. Drives the calendar
    /// grid offset.
    pub fn first_weekday0(&self) -> u32 {
        NaiveDate::from_ymd_opt(self.year, self.month0 + 1, 1)
            .map(|d| d.weekday().num_days_from_monday())
            .unwrap_or(0)
    }

    pub fn prev_month(&mut self) {
        if self.month0 == 0 {
            self.month0 = 11;
            self.year -= 1;
        } else {
            self.month0 -= 1;
        }
        self.clamp_day();
    }

    pub fn next_month(&mut self) {
        if self.month0 >= 11 {
            self.month0 = 0;
            self.year += 1;
        } else {
            self.month0 += 1;
        }
        self.clamp_day();
    }

    fn clamp_day(&mut self) {
        self.day = self.day.clamp(1, self.days_in_month());
    }
}

/// Controller for the Game Info window. One instance lives for the whole
/// session; `open` reloads it from the current game, `accept` writes the
/// edits back. All behavior is plain methods so it tests without a UI loop.
#[derive(Debug, Default)]
pub struct GameInfoDialog {
    pub visible: bool,
    pub fields: DedicatedFields,
    pub rows: Vec<TagRow>,
    pub selected_row: Option<usize>,
    focus_row: Option<usize>,
    pub white_change: RatingChange,
    pub black_change: RatingChange,
    pub date_picker: Option<DatePickerState>,
}

impl GameInfoDialog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the current game into the dialog and show it. Dedicated fields
    /// come first, then the rating-change refresh, then the extra-tag rows
    /// in the mapping's own order.
    pub fn open(&mut self, game: &GameRecord) {
        for tag in statics::DEDICATED_TAGS {
            if let Some(field) = self.fields.get_mut(tag) {
                *field = game.tag_text(tag);
            }
        }

        self.refresh_rating_change(game);

        self.rows.clear();
        self.selected_row = None;
        self.focus_row = None;
        for (name, value) in &game.tags {
            if statics::is_dedicated_tag(name) {
                continue;
            }
            if let Some(text) = value.as_text() {
                self.rows.push(TagRow::new(name.clone(), text));
            }
        }

        self.visible = true;
    }

    /// Hide without committing. The dialog stays loaded and reusable.
    pub fn close(&mut self) {
        self.visible = false;
        self.date_picker = None;
    }

    /// Append a placeholder row and move selection/focus onto it.
    pub fn add_row(&mut self) {
        self.rows
            .push(TagRow::new(statics::EN_NEW_TAG_NAME, statics::EN_EMPTY));
        let idx = self.rows.len() - 1;
        self.selected_row = Some(idx);
        self.focus_row = Some(idx);
    }

    /// Remove the selected row, if any.
    pub fn delete_selected_row(&mut self) {
        let Some(idx) = self.selected_row.take() else {
            return;
        };
        if idx < self.rows.len() {
            self.rows.remove(idx);
        }
        self.focus_row = None;
    }

    /// Index of a freshly added row that should grab input focus. Cleared on
    /// read; the shell asks once per frame.
    pub fn take_row_focus(&mut self) -> Option<usize> {
        self.focus_row.take()
    }

    /// Recompute both rating-change displays from the Site tag and the live
    /// rating field texts.
    pub fn refresh_rating_change(&mut self, game: &GameRecord) {
        let site = game.tag_text(statics::TAG_SITE);
        if statics::ONLINE_SITES.iter().any(|s| site.contains(s)) {
            self.white_change = RatingChange::default();
            self.black_change = RatingChange::default();
            return;
        }

        let welo = self.fields.white_elo.clone();
        let belo = self.fields.black_elo.clone();
        self.white_change =
            RatingChange::classify(elo::rating_change_str(game, Color::White, &welo, &belo));
        self.black_change =
            RatingChange::classify(elo::rating_change_str(game, Color::Black, &welo, &belo));
    }

    /// Open the date picker seeded from the date field, falling back to the
    /// current date for components that do not parse.
    pub fn open_date_picker(&mut self) {
        self.open_date_picker_at(Local::now().date_naive());
    }

    pub fn open_date_picker_at(&mut self, today: NaiveDate) {
        self.date_picker = Some(DatePickerState::seeded_from(&self.fields.date, today));
    }

    /// Write the picked date into the date field and drop the picker.
    pub fn confirm_date_picker(&mut self) {
        if let Some(picker) = self.date_picker.take() {
            self.fields.date = picker.formatted();
        }
    }

    /// Drop the picker, leaving the date field untouched.
    pub fn cancel_date_picker(&mut self) {
        self.date_picker = None;
    }

    /// Commit the edits into the game record. Step order matters:
    /// 1. drop every text-valued tag (structured values stay; the dedicated
    ///    tags go too, step 2 restores them unconditionally),
    /// 2. rewrite the nine dedicated tags from their fields,
    /// 3. write every non-empty, non-dedicated row (later rows win),
    /// 4. hide the dialog,
    /// 5. set both player names from the just-written tags,
    /// 6. notify the rest of the application.
    pub fn accept(&mut self, game: &mut GameRecord) -> bool {
        game.tags.retain(|_, value| !value.is_text());

        for tag in statics::DEDICATED_TAGS {
            let text = self.fields.get(tag).unwrap_or(statics::EN_EMPTY);
            game.set_text_tag(tag, text);
        }

        for row in &self.rows {
            if row.name.is_empty() || statics::is_dedicated_tag(&row.name) {
                continue;
            }
            game.set_text_tag(&row.name, &row.value);
        }

        self.visible = false;
        self.date_picker = None;

        let black = game.tag_text(statics::TAG_BLACK);
        game.player_mut(Color::Black).set_name(&black);
        let white = game.tag_text(statics::TAG_WHITE);
        game.player_mut(Color::White).set_name(&white);
        game.emit_players_changed();

        true
    }
}

#[cfg(test)]
mod tests {
    use super::{ChangeTone, DatePickerState, DedicatedFields, RatingChange};
    use crate::statics;
    use chrono::NaiveDate;

    #[test]
    fn fields_cover_every_dedicated_tag() {
        let mut fields = DedicatedFields::default();
        for tag in statics::DEDICATED_TAGS {
            *fields.get_mut(tag).expect("field for dedicated tag") = tag.to_string();
            assert_eq!(fields.get(tag), Some(tag));
        }
        assert_eq!(fields.get(statics::TAG_RESULT), None);
    }

    #[test]
    fn classify_reads_the_sign_prefix() {
        assert_eq!(RatingChange::classify("+15".into()).tone, ChangeTone::Gain);
        assert_eq!(RatingChange::classify("-7".into()).tone, ChangeTone::Loss);
        assert_eq!(RatingChange::classify("0".into()).tone, ChangeTone::Neutral);
        assert_eq!(RatingChange::classify("50".into()).tone, ChangeTone::Neutral);
        assert_eq!(RatingChange::classify(String::new()).tone, ChangeTone::Neutral);
    }

    #[test]
    fn days_in_month_handles_leap_years() {
        let feb_leap = DatePickerState {
            year: 2024,
            month0: 1,
            day: 1,
        };
        assert_eq!(feb_leap.days_in_month(), 29);

        let feb = DatePickerState {
            year: 2023,
            month0: 1,
            day: 1,
        };
        assert_eq!(feb.days_in_month(), 28);
    }

    #[test]
    fn month_navigation_wraps_years_and_clamps_days() {
        let mut picker = DatePickerState {
            year: 2024,
            month0: 0,
            day: 31,
        };
        picker.prev_month();
        assert_eq!((picker.year, picker.month0, picker.day), (2023, 11, 31));

        picker.next_month();
        assert_eq!((picker.year, picker.month0, picker.day), (2024, 0, 31));

        // Jan 31 -> Feb clamps to the leap-year length.
        picker.next_month();
        assert_eq!((picker.year, picker.month0, picker.day), (2024, 1, 29));
    }

    #[test]
    fn seeding_falls_back_per_component() {
        let today = NaiveDate::from_ymd_opt(2026, 8, 30).unwrap();

        let picker = DatePickerState::seeded_from("1987.06.05", today);
        assert_eq!((picker.year, picker.month0, picker.day), (1987, 5, 5));

        let picker = DatePickerState::seeded_from("1987.??.??", today);
        assert_eq!((picker.year, picker.month0, picker.day), (1987, 7, 30));

        let picker = DatePickerState::seeded_from("notadate", today);
        assert_eq!((picker.year, picker.month0, picker.day), (2026, 7, 30));
    }

    #[test]
    fn formatted_is_zero_padded_and_one_based() {
        let picker = DatePickerState {
            year: 2005,
            month0: 0,
            day: 7,
        };
        assert_eq!(picker.formatted(), "2005.01.07");
    }
}

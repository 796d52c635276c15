//! Core library for the Chess Game Info Editor (CGIE).
//! Holds the game record with its PGN-style tag mapping and the Game Info
//! dialog controller; the GUI shell renders both with egui.

mod dialog;
mod elo;
mod game;
mod gui;
pub mod statics;
mod tags;

pub use dialog::{ChangeTone, DatePickerState, DedicatedFields, GameInfoDialog, RatingChange};
pub use game::{Color, GameRecord, Player, parse_pgn_date};
pub use gui::run_gui;
pub use tags::{RatingDetail, TagMap, TagRow, TagValue};

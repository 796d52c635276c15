use crate::dialog::{ChangeTone, GameInfoDialog, RatingChange};
use crate::game::{Color, GameRecord};
use crate::statics;
use chrono::{Datelike, Local};
use eframe::egui;
use egui_extras::{Column, TableBuilder};

// Rating-change colors: dark green for gains, dark red for losses.
const GAIN_COLOR: egui::Color32 = egui::Color32::from_rgb(78, 154, 6);
const LOSS_COLOR: egui::Color32 = egui::Color32::from_rgb(164, 0, 0);

pub fn run_gui() -> eframe::Result {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([780.0, 640.0]),
        ..Default::default()
    };
    let title = format!("{} {}", statics::EN_APP_TITLE, env!("CARGO_PKG_VERSION"));
    eframe::run_native(
        &title,
        options,
        Box::new(|_cc| {
            Ok(Box::new(CgieApp {
                game: starter_game(),
                theme_dark: true,
                ..Default::default()
            }))
        }),
    )
}

/// The record a fresh session edits: casual-game defaults with today's date.
fn starter_game() -> GameRecord {
    let today = Local::now().date_naive();
    let mut game = GameRecord::new();
    game.set_text_tag(statics::TAG_EVENT, "Casual Game");
    game.set_text_tag(statics::TAG_SITE, "Local game");
    game.set_text_tag(
        statics::TAG_DATE,
        &format!("{:04}.{:02}.{:02}", today.year(), today.month(), today.day()),
    );
    game.set_text_tag(statics::TAG_ROUND, "1");
    game.set_text_tag(statics::TAG_WHITE, "White");
    game.set_text_tag(statics::TAG_BLACK, "Black");
    game.set_text_tag(statics::TAG_RESULT, statics::RESULT_ONGOING);
    let white = game.tag_text(statics::TAG_WHITE);
    game.player_mut(Color::White).set_name(&white);
    let black = game.tag_text(statics::TAG_BLACK);
    game.player_mut(Color::Black).set_name(&black);
    game
}

/// The application shell: owns the current game record and the Game Info
/// dialog controller, and watches the players-changed generation.
#[derive(Default)]
struct CgieApp {
    game: GameRecord,
    dialog: GameInfoDialog,
    theme_dark: bool,
    about_open: bool,
    status: String,
    seen_players_generation: u64,
}

fn change_color(ui: &egui::Ui, change: &RatingChange) -> egui::Color32 {
    match change.tone {
        ChangeTone::Gain => GAIN_COLOR,
        ChangeTone::Loss => LOSS_COLOR,
        ChangeTone::Neutral => ui.visuals().text_color(),
    }
}

impl CgieApp {
    fn render_about(&mut self, ctx: &egui::Context) {
        if !self.about_open {
            return;
        }
        let mut open = self.about_open;
        egui::Window::new(statics::EN_WINDOW_ABOUT)
            .collapsible(false)
            .open(&mut open)
            .show(ctx, |ui| {
                ui.heading(statics::EN_ABOUT_HEADING);
                ui.label(format!(
                    "{} {}",
                    statics::EN_ABOUT_VERSION,
                    env!("CARGO_PKG_VERSION")
                ));
                ui.separator();
                ui.label(statics::EN_ABOUT_BLURB);
            });
        self.about_open = open;
    }

    fn render_dialog(&mut self, ctx: &egui::Context) {
        let mut open = true;
        egui::Window::new(statics::EN_WINDOW_GAME_INFO)
            .collapsible(false)
            .default_width(480.0)
            .open(&mut open)
            .show(ctx, |ui| {
                // The date picker is modal: the parent dialog goes inert
                // while it is up.
                let picker_open = self.dialog.date_picker.is_some();
                ui.add_enabled_ui(!picker_open, |ui| {
                    self.dialog_contents(ui);
                });
            });
        if !open {
            self.dialog.close();
        }
    }

    fn dialog_contents(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("dedicated_fields")
            .num_columns(3)
            .spacing([10.0, 6.0])
            .show(ui, |ui| {
                ui.label(statics::EN_LABEL_SITE);
                ui.text_edit_singleline(&mut self.dialog.fields.site);
                ui.end_row();

                ui.label(statics::EN_LABEL_EVENT);
                ui.text_edit_singleline(&mut self.dialog.fields.event);
                ui.end_row();

                ui.label(statics::EN_LABEL_DATE);
                ui.text_edit_singleline(&mut self.dialog.fields.date);
                if ui.button(statics::EN_BTN_PICK_DATE).clicked() {
                    self.dialog.open_date_picker();
                }
                ui.end_row();

                ui.label(statics::EN_LABEL_ROUND);
                ui.text_edit_singleline(&mut self.dialog.fields.round);
                ui.end_row();

                ui.label(statics::EN_LABEL_ANNOTATOR);
                ui.text_edit_singleline(&mut self.dialog.fields.annotator);
                ui.end_row();

                ui.label(statics::EN_LABEL_WHITE);
                ui.text_edit_singleline(&mut self.dialog.fields.white);
                ui.end_row();

                ui.label(statics::EN_LABEL_BLACK);
                ui.text_edit_singleline(&mut self.dialog.fields.black);
                ui.end_row();

                ui.label(statics::EN_LABEL_WHITE_ELO);
                if ui
                    .text_edit_singleline(&mut self.dialog.fields.white_elo)
                    .changed()
                {
                    self.dialog.refresh_rating_change(&self.game);
                }
                let color = change_color(ui, &self.dialog.white_change);
                ui.colored_label(color, self.dialog.white_change.text.as_str());
                ui.end_row();

                ui.label(statics::EN_LABEL_BLACK_ELO);
                if ui
                    .text_edit_singleline(&mut self.dialog.fields.black_elo)
                    .changed()
                {
                    self.dialog.refresh_rating_change(&self.game);
                }
                let color = change_color(ui, &self.dialog.black_change);
                ui.colored_label(color, self.dialog.black_change.text.as_str());
                ui.end_row();
            });

        ui.separator();
        ui.strong(statics::EN_HEADING_EXTRA_TAGS);

        let row_h = ui.text_style_height(&egui::TextStyle::Body) + 6.0;
        let selected = self.dialog.selected_row;
        let focus_row = self.dialog.take_row_focus();
        let mut select: Option<usize> = None;

        ui.push_id("extra_tags_table", |ui| {
            egui::ScrollArea::vertical().max_height(180.0).show(ui, |ui| {
                TableBuilder::new(ui)
                    .striped(true)
                    .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
                    .column(Column::exact(24.0))
                    .column(Column::initial(140.0).resizable(true))
                    .column(Column::remainder().resizable(true))
                    .header(row_h, |mut header| {
                        header.col(|_ui| {});
                        header.col(|ui| {
                            ui.strong(statics::EN_COL_TAG);
                        });
                        header.col(|ui| {
                            ui.strong(statics::EN_COL_VALUE);
                        });
                    })
                    .body(|mut body| {
                        for (idx, row) in self.dialog.rows.iter_mut().enumerate() {
                            body.row(row_h, |mut table_row| {
                                table_row.col(|ui| {
                                    let label = format!("{}", idx + 1);
                                    if ui.selectable_label(selected == Some(idx), label).clicked()
                                    {
                                        select = Some(idx);
                                    }
                                });
                                table_row.col(|ui| {
                                    let resp = ui.add(
                                        egui::TextEdit::singleline(&mut row.name)
                                            .desired_width(ui.available_width()),
                                    );
                                    if focus_row == Some(idx) {
                                        resp.request_focus();
                                    }
                                });
                                table_row.col(|ui| {
                                    ui.add(
                                        egui::TextEdit::singleline(&mut row.value)
                                            .desired_width(ui.available_width()),
                                    );
                                });
                            });
                        }
                    });
            });
        });
        if let Some(idx) = select {
            self.dialog.selected_row = Some(idx);
        }

        ui.horizontal(|ui| {
            if ui.button(statics::EN_BTN_ADD_TAG).clicked() {
                self.dialog.add_row();
            }
            let can_delete = self.dialog.selected_row.is_some();
            if ui
                .add_enabled(can_delete, egui::Button::new(statics::EN_BTN_DELETE_TAG))
                .clicked()
            {
                self.dialog.delete_selected_row();
            }
        });

        ui.separator();
        ui.horizontal(|ui| {
            if ui.button(statics::EN_BTN_OK).clicked() {
                self.dialog.accept(&mut self.game);
            }
            if ui.button(statics::EN_BTN_CANCEL).clicked() {
                self.dialog.close();
            }
        });
    }

    fn render_date_picker(&mut self, ctx: &egui::Context) {
        let Some(mut picker) = self.dialog.date_picker.clone() else {
            return;
        };
        let mut confirmed = false;
        let mut cancelled = false;

        egui::Window::new(statics::EN_WINDOW_PICK_DATE)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    if ui.button(statics::EN_NAV_PREV_MONTH).clicked() {
                        picker.prev_month();
                    }
                    ui.strong(format!("{:04}.{:02}", picker.year, picker.month0 + 1));
                    if ui.button(statics::EN_NAV_NEXT_MONTH).clicked() {
                        picker.next_month();
                    }
                });
                ui.separator();

                let days = picker.days_in_month();
                let offset = picker.first_weekday0();
                egui::Grid::new("calendar_grid")
                    .num_columns(7)
                    .spacing([4.0, 4.0])
                    .show(ui, |ui| {
                        for name in statics::EN_WEEKDAYS {
                            ui.strong(name);
                        }
                        ui.end_row();

                        let mut cell = 0u32;
                        for _ in 0..offset {
                            ui.label(statics::EN_EMPTY);
                            cell += 1;
                        }
                        for day in 1..=days {
                            if ui
                                .selectable_label(picker.day == day, format!("{day:>2}"))
                                .clicked()
                            {
                                picker.day = day;
                            }
                            cell += 1;
                            if cell % 7 == 0 {
                                ui.end_row();
                            }
                        }
                    });

                ui.separator();
                ui.horizontal(|ui| {
                    if ui.button(statics::EN_BTN_OK).clicked() {
                        confirmed = true;
                    }
                    if ui.button(statics::EN_BTN_CANCEL).clicked() {
                        cancelled = true;
                    }
                });
            });

        self.dialog.date_picker = Some(picker);
        if confirmed {
            self.dialog.confirm_date_picker();
        } else if cancelled {
            self.dialog.cancel_date_picker();
        }
    }
}

impl eframe::App for CgieApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            egui::MenuBar::new().ui(ui, |ui| {
                if ui.button(statics::EN_BTN_GAME_INFO).clicked() {
                    self.dialog.open(&self.game);
                }

                if ui.button(statics::EN_BTN_ABOUT).clicked() {
                    self.about_open = true;
                }

                if ui.button(statics::EN_BTN_TOGGLE_THEME).clicked() {
                    self.theme_dark = !self.theme_dark;
                    if self.theme_dark {
                        ctx.set_visuals(egui::Visuals::dark());
                    } else {
                        ctx.set_visuals(egui::Visuals::light());
                    }
                }

                if !self.status.is_empty() {
                    ui.separator();
                    ui.label(&self.status);
                }
            });
        });

        // Players-changed notification from the last commit.
        if self.game.players_generation() != self.seen_players_generation {
            self.seen_players_generation = self.game.players_generation();
            self.status = format!(
                "{}: {} vs {}",
                statics::EN_STATUS_TAGS_UPDATED,
                self.game.white.name,
                self.game.black.name
            );
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading(format!(
                "{} vs {}",
                self.game.white.name, self.game.black.name
            ));
            ui.separator();
            ui.strong(statics::EN_HEADING_TAGS);

            let row_h = ui.text_style_height(&egui::TextStyle::Body) + 6.0;
            ui.push_id("game_tags_table", |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    TableBuilder::new(ui)
                        .striped(true)
                        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
                        .column(Column::initial(160.0).resizable(true))
                        .column(Column::remainder().resizable(true))
                        .column(Column::initial(70.0).resizable(false))
                        .header(row_h, |mut header| {
                            header.col(|ui| {
                                ui.strong(statics::EN_COL_TAG);
                            });
                            header.col(|ui| {
                                ui.strong(statics::EN_COL_VALUE);
                            });
                            header.col(|ui| {
                                ui.strong(statics::EN_COL_TYPE);
                            });
                        })
                        .body(|mut body| {
                            for (name, value) in &self.game.tags {
                                body.row(row_h, |mut table_row| {
                                    table_row.col(|ui| {
                                        ui.monospace(name);
                                    });
                                    table_row.col(|ui| {
                                        ui.label(value.to_string());
                                    });
                                    table_row.col(|ui| {
                                        ui.monospace(value.type_name());
                                    });
                                });
                            }
                        });
                });
            });
        });

        self.render_about(ctx);

        if self.dialog.visible {
            self.render_dialog(ctx);
        }
        if self.dialog.date_picker.is_some() {
            self.render_date_picker(ctx);
        }
    }
}

//! Replay window: load a recorded session and step through it

use std::path::Path;

use egui::{Context, RichText, Window};

use crate::replay::Replay;
use crate::{Player, Verdict};

use super::board_view::BoardView;
use super::theme::*;

pub struct ReplayView {
    pub open: bool,
    path: String,
    replay: Option<Replay>,
    board_view: BoardView,
    error: Option<String>,
}

impl ReplayView {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            open: false,
            path: path.into(),
            replay: None,
            board_view: BoardView::default(),
            error: None,
        }
    }

    fn load(&mut self) {
        match Replay::load(Path::new(&self.path)) {
            Ok(replay) => {
                self.replay = Some(replay);
                self.error = None;
            }
            Err(e) => {
                self.replay = None;
                self.error = Some(e.to_string());
            }
        }
    }

    pub fn show(&mut self, ctx: &Context) {
        let mut open = self.open;
        Window::new("Replay")
            .open(&mut open)
            .default_size([720.0, 420.0])
            .resizable(true)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label("File");
                    ui.text_edit_singleline(&mut self.path);
                    if ui.button("Open").clicked() {
                        self.load();
                    }
                });

                if let Some(error) = &self.error {
                    ui.label(RichText::new(error).color(TIMER_CRITICAL));
                }

                let Some(replay) = &mut self.replay else {
                    ui.label(RichText::new("No record loaded").color(TEXT_MUTED));
                    return;
                };

                ui.separator();
                ui.horizontal(|ui| {
                    if ui
                        .add_enabled(replay.has_previous(), egui::Button::new("◀ Previous"))
                        .clicked()
                    {
                        replay.previous();
                    }
                    if ui
                        .add_enabled(replay.has_next(), egui::Button::new("Next ▶"))
                        .clicked()
                    {
                        replay.next();
                    }
                    ui.label(
                        RichText::new(format!(
                            "Game {}/{}  ·  board {}",
                            replay.game_index() + 1,
                            replay.game_count(),
                            replay.move_index()
                        ))
                        .color(TEXT_SECONDARY),
                    );
                });

                ui.horizontal(|ui| {
                    for player in Player::ALL {
                        let marker = if replay.current_player() == player { "▶ " } else { "" };
                        ui.label(
                            RichText::new(format!(
                                "{marker}{} ({}): {}",
                                replay.name(player),
                                replay.mode(player).label(),
                                replay.score(player)
                            ))
                            .color(player_color(player)),
                        );
                        ui.add_space(16.0);
                    }
                });

                match replay.verdict() {
                    Verdict::Win(winner) => {
                        ui.label(
                            RichText::new(format!("{} wins", replay.name(winner)))
                                .strong()
                                .color(WIN_HIGHLIGHT),
                        );
                    }
                    Verdict::Draw => {
                        ui.label(RichText::new("Draw").strong().color(TIMER_WARNING));
                    }
                    Verdict::Ongoing => {}
                }

                let current = replay.current_player();
                self.board_view.show(ui, replay.board(), current, None, &[]);
            });
        self.open = open;
    }
}

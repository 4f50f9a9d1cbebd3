//! Main application for the Slideways GUI

use std::time::Duration;

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel};

use crate::search::Strategy;
use crate::{GameConfig, Player, PlayerMode, Verdict};

use super::board_view::BoardView;
use super::game_state::GameState;
use super::replay_view::ReplayView;
use super::theme::*;

const DEFAULT_RECORD_PATH: &str = "slideways-record.json";

/// Main Slideways application
pub struct SlidewaysApp {
    state: GameState,
    board_view: BoardView,
    replay: ReplayView,
    record_path: String,
    show_debug: bool,
}

impl SlidewaysApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: GameConfig) -> Self {
        Self {
            state: GameState::new(config),
            board_view: BoardView::default(),
            replay: ReplayView::new(DEFAULT_RECORD_PATH),
            record_path: DEFAULT_RECORD_PATH.to_string(),
            show_debug: true,
        }
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Round (N)").clicked() {
                        self.state.new_round();
                        ui.close_menu();
                    }
                    if ui.button("New Match").clicked() {
                        let config = self.state.game.config().clone();
                        self.state = GameState::new(config);
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Replay...").clicked() {
                        self.replay.open = true;
                        ui.close_menu();
                    }
                });

                ui.menu_button("View", |ui| {
                    ui.checkbox(&mut self.show_debug, "AI Panel (D)");
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let game = &self.state.game;
                    ui.label(format!(
                        "{} vs {}",
                        game.mode(Player::One).label(),
                        game.mode(Player::Two).label()
                    ));
                });
            });
        });
    }

    /// Render the side panel with game info
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(260.0)
            .max_width(300.0)
            .frame(Frame::new().fill(PANEL_BG).inner_margin(8.0))
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    ui.add_space(8.0);
                    self.render_title_card(ui);
                    ui.add_space(12.0);

                    self.render_turn_card(ui);
                    ui.add_space(10.0);

                    for player in Player::ALL {
                        self.render_player_card(ui, player);
                        ui.add_space(10.0);
                    }

                    self.render_record_card(ui);

                    if self.show_debug {
                        ui.add_space(10.0);
                        self.render_debug_card(ui);
                    }

                    if let Some(verdict) = self.state.round_result {
                        ui.add_space(10.0);
                        self.render_round_card(ui, verdict);
                    }

                    if let Some(msg) = &self.state.message {
                        ui.add_space(10.0);
                        Self::render_message_card(ui, msg);
                    }
                });
            });
    }

    /// Helper to create a card frame
    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    fn render_title_card(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("◀▶").size(20.0).color(TEXT_SECONDARY));
            ui.add_space(4.0);
            ui.label(RichText::new("SLIDEWAYS").size(22.0).strong().color(TEXT_PRIMARY));
        });
        let config = self.state.game.config();
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(
                RichText::new(format!(
                    "{} in a row · {}x{} board",
                    config.win_threshold,
                    config.board_size,
                    config.board_size
                ))
                .size(11.0)
                .color(TEXT_MUTED),
            );
        });
    }

    /// Render turn indicator and timer
    fn render_turn_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            let game = &self.state.game;
            let player = game.current_player();

            ui.horizontal(|ui| {
                let (rect, _) =
                    ui.allocate_exact_size(egui::Vec2::new(40.0, 40.0), egui::Sense::hover());
                ui.painter().circle_filled(rect.center(), 18.0, player_color(player));
                ui.add_space(10.0);

                ui.vertical(|ui| {
                    ui.label(
                        RichText::new(game.name(player))
                            .size(18.0)
                            .strong()
                            .color(TEXT_PRIMARY),
                    );

                    let status = if self.state.is_ai_thinking() {
                        ("AI thinking...", TIMER_WARNING)
                    } else if game.verdict().is_over() {
                        ("Round over", WIN_HIGHLIGHT)
                    } else if self.state.paused && game.is_ai_turn() {
                        ("Paused", TEXT_MUTED)
                    } else {
                        ("To move", TIMER_NORMAL)
                    };
                    ui.label(RichText::new(status.0).size(12.0).color(status.1));
                });
            });

            ui.add_space(6.0);
            match self.state.ai_thinking_elapsed() {
                Some(elapsed) => {
                    let limit = game.config().ai_time_limit();
                    let ratio = elapsed.as_secs_f32() / limit.as_secs_f32();
                    let color = if ratio < 0.5 {
                        TIMER_NORMAL
                    } else if ratio < 0.8 {
                        TIMER_WARNING
                    } else {
                        TIMER_CRITICAL
                    };
                    ui.label(
                        RichText::new(format!("{:.2}s", elapsed.as_secs_f32()))
                            .size(26.0)
                            .strong()
                            .color(color),
                    );
                }
                None => {
                    let elapsed = self.state.move_timer.elapsed();
                    ui.label(
                        RichText::new(format!("{:.1}s", elapsed.as_secs_f32()))
                            .size(22.0)
                            .color(TEXT_PRIMARY),
                    );
                }
            }
            ui.label(
                RichText::new(format!("Move #{}", game.history().len() - 1))
                    .size(11.0)
                    .color(TEXT_SECONDARY),
            );
        });
    }

    /// Name, score, controller and pacing of one player
    fn render_player_card(&mut self, ui: &mut egui::Ui, player: Player) {
        Self::card_frame().show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new(format!("PLAYER {}", player.number()))
                        .size(10.0)
                        .color(player_color(player)),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        RichText::new(self.state.game.score(player).to_string())
                            .size(20.0)
                            .strong()
                            .color(TEXT_PRIMARY),
                    );
                });
            });

            let mut name = self.state.game.name(player).to_string();
            if ui.text_edit_singleline(&mut name).changed() {
                self.state.game.set_name(player, name);
            }

            let mut mode = self.state.game.mode(player);
            egui::ComboBox::from_id_salt(("mode", player.index()))
                .selected_text(mode.label())
                .show_ui(ui, |ui| {
                    ui.selectable_value(&mut mode, PlayerMode::Human, PlayerMode::Human.label());
                    for strategy in Strategy::ALL {
                        let ai = PlayerMode::Ai(strategy);
                        ui.selectable_value(&mut mode, ai, ai.label());
                    }
                });
            self.state.set_mode(player, mode);

            if mode.is_ai() {
                let mut secs = self.state.game.min_think(player).as_secs();
                let slider = egui::Slider::new(&mut secs, 0..=10).text("min think (s)");
                if ui.add(slider).changed() {
                    self.state
                        .game
                        .set_min_think(player, Duration::from_secs(secs));
                }
            }
        });
    }

    fn render_record_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("RECORD").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            let mut recording = self.state.game.is_recording();
            ui.add_enabled_ui(!recording, |ui| {
                ui.text_edit_singleline(&mut self.record_path);
            });
            if ui.checkbox(&mut recording, "Record session").changed() {
                self.state.set_recording(recording, &self.record_path);
            }
            ui.checkbox(&mut self.state.paused, "Pause AI");
        });
    }

    /// Last AI search statistics
    fn render_debug_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("AI").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            let Some(report) = &self.state.last_ai else {
                ui.label(RichText::new("No AI move yet").size(10.0).color(TEXT_MUTED));
                return;
            };
            let outcome = &report.outcome;

            ui.horizontal(|ui| {
                ui.vertical(|ui| {
                    ui.label(
                        RichText::new(format!("{:?}", report.strategy))
                            .size(11.0)
                            .strong()
                            .color(TIMER_NORMAL),
                    );
                    ui.label(
                        RichText::new(format!("Score: {:.1}", outcome.score))
                            .size(10.0)
                            .color(TEXT_SECONDARY),
                    );
                });
                ui.with_layout(egui::Layout::right_to_left(egui::Align::TOP), |ui| {
                    ui.vertical(|ui| {
                        ui.label(
                            RichText::new(format!("{}ms", outcome.elapsed.as_millis()))
                                .size(10.0)
                                .color(TEXT_SECONDARY),
                        );
                        ui.label(
                            RichText::new(format!("{} nodes", outcome.nodes))
                                .size(10.0)
                                .color(TEXT_MUTED),
                        );
                    });
                });
            });
            ui.add_space(4.0);
            ui.label(
                RichText::new(format!("→ {}", outcome.mv))
                    .size(12.0)
                    .strong()
                    .color(player_color(outcome.player)),
            );
        });
    }

    /// Render the result of the last round
    fn render_round_card(&mut self, ui: &mut egui::Ui, verdict: Verdict) {
        let text = match verdict {
            Verdict::Win(winner) => format!("{} wins!", self.state.game.name(winner)),
            Verdict::Draw => "Draw".to_string(),
            Verdict::Ongoing => return,
        };

        Frame::new()
            .fill(egui::Color32::from_rgb(45, 80, 55))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(
                        RichText::new("ROUND OVER")
                            .size(12.0)
                            .color(egui::Color32::from_rgb(180, 255, 180)),
                    );
                    ui.add_space(6.0);
                    ui.label(RichText::new(text).size(18.0).strong().color(TEXT_PRIMARY));

                    if self.state.game.verdict().is_over() {
                        ui.add_space(10.0);
                        if ui.button("New Round").clicked() {
                            self.state.new_round();
                        }
                    }
                });
            });
    }

    fn render_message_card(ui: &mut egui::Ui, msg: &str) {
        Frame::new()
            .fill(egui::Color32::from_rgb(80, 60, 30))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label(RichText::new("⚠").size(14.0));
                    ui.add_space(4.0);
                    ui.label(RichText::new(msg).size(11.0).color(TEXT_PRIMARY));
                });
            });
    }

    /// Render the main board
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default()
            .frame(Frame::new().fill(egui::Color32::from_rgb(40, 42, 46)).inner_margin(16.0))
            .show(ctx, |ui| {
                let legal = self.state.human_moves();
                let game = &self.state.game;

                let clicked = self.board_view.show(
                    ui,
                    game.board(),
                    game.current_player(),
                    game.last_move(),
                    &legal,
                );

                if let Some(mv) = clicked {
                    if let Err(msg) = self.state.try_play(mv) {
                        self.state.message = Some(msg);
                    }
                }
            });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        if ctx.wants_keyboard_input() {
            return;
        }
        ctx.input(|i| {
            // D - Toggle AI panel
            if i.key_pressed(egui::Key::D) {
                self.show_debug = !self.show_debug;
            }

            // N - New round
            if i.key_pressed(egui::Key::N) {
                self.state.new_round();
            }

            // P - Pause AI
            if i.key_pressed(egui::Key::P) {
                self.state.paused = !self.state.paused;
            }
        });
    }
}

impl eframe::App for SlidewaysApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        // Check AI result
        self.state.check_ai_result();

        // Start AI thinking if needed
        self.state.start_ai_thinking();

        // Render UI
        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);

        if self.replay.open {
            self.replay.show(ctx);
        }

        // Keep timers and the AI poll running
        if self.state.is_ai_thinking() || !self.state.game.verdict().is_over() {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }
}

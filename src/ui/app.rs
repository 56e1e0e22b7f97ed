//! Main application for the GUI

use std::time::Duration;

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel, Vec2};

use super::board_view::{BoardAction, BoardView};
use super::game_state::GameState;
use super::theme::*;
use crate::config::GameConfig;
use crate::{column_label, Outcome, Player};

/// Main application
pub struct RenjuApp {
    state: GameState,
    board_view: BoardView,
    show_debug: bool,
}

impl RenjuApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: GameConfig) -> Self {
        Self {
            state: GameState::new(config),
            board_view: BoardView::default(),
            show_debug: true,
        }
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Game (play Black)").clicked() {
                        self.state.reset_as(Player::Black);
                        ui.close_menu();
                    }
                    if ui.button("New Game (play White)").clicked() {
                        self.state.reset_as(Player::White);
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Undo (U)").clicked() {
                        self.state.undo();
                        ui.close_menu();
                    }
                    if ui.button("Save (S)").clicked() {
                        self.state.save();
                        ui.close_menu();
                    }
                    if ui.button("Load (L)").clicked() {
                        self.state.load();
                        ui.close_menu();
                    }
                });

                ui.menu_button("View", |ui| {
                    ui.checkbox(&mut self.show_debug, "Engine Panel (D)");
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(format!("You: {}", self.state.human));
                });
            });
        });
    }

    /// Render the side panel with game info and engine stats
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(240.0)
            .max_width(280.0)
            .frame(Frame::new().fill(egui::Color32::from_rgb(25, 27, 31)))
            .show(ctx, |ui| {
                ui.add_space(12.0);
                self.render_title_card(ui);
                ui.add_space(12.0);

                self.render_turn_card(ui);
                ui.add_space(10.0);

                self.render_clock_card(ui);
                ui.add_space(10.0);

                self.render_actions_card(ui);

                if self.show_debug {
                    ui.add_space(10.0);
                    self.render_debug_card(ui);
                }

                let outcome = self.state.outcome();
                if outcome.is_over() {
                    ui.add_space(10.0);
                    self.render_game_over_card(ui, outcome);
                }

                if let Some(msg) = &self.state.message {
                    ui.add_space(10.0);
                    Self::render_message_card(ui, msg);
                }
            });
    }

    /// Helper to create a card frame
    fn card_frame() -> Frame {
        Frame::new()
            .fill(egui::Color32::from_rgb(35, 38, 43))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    fn render_title_card(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("GOMOKU").size(22.0).strong().color(TEXT_PRIMARY));
        });
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            let size = self.state.game.board().size();
            ui.label(RichText::new(format!("{size}×{size}, five in a row")).size(11.0).color(TEXT_MUTED));
        });
    }

    fn render_turn_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            let turn = self.state.game.board().whose_move();
            let (stone_char, accent, stone_color) = match turn {
                Player::Black => ("●", egui::Color32::from_rgb(70, 70, 75), TEXT_PRIMARY),
                Player::White => ("○", egui::Color32::from_rgb(220, 220, 225), egui::Color32::from_rgb(30, 30, 35)),
            };

            ui.horizontal(|ui| {
                let (rect, _) = ui.allocate_exact_size(Vec2::new(48.0, 48.0), egui::Sense::hover());
                ui.painter().circle_filled(rect.center(), 22.0, accent);
                ui.painter().text(
                    rect.center(),
                    egui::Align2::CENTER_CENTER,
                    stone_char,
                    egui::FontId::proportional(28.0),
                    stone_color,
                );

                ui.add_space(12.0);

                ui.vertical(|ui| {
                    ui.add_space(4.0);
                    ui.label(RichText::new(turn.to_string().to_uppercase()).size(18.0).strong().color(TEXT_PRIMARY));

                    let status = if self.state.is_game_over() {
                        ("Game Over".to_string(), WIN_HIGHLIGHT)
                    } else if let Some(elapsed) = self.state.ai_thinking_elapsed() {
                        (format!("AI thinking... {:.1}s", elapsed.as_secs_f32()), TIMER_WARNING)
                    } else if self.state.is_human_turn() {
                        ("Your turn".to_string(), TIMER_NORMAL)
                    } else {
                        ("AI to move".to_string(), TEXT_SECONDARY)
                    };
                    ui.label(RichText::new(status.0).size(12.0).color(status.1));
                });
            });
        });
    }

    /// Remaining time for both players
    fn render_clock_card(&self, ui: &mut egui::Ui) {
        let (black, white) = self.state.remaining_times();
        let limit = self.state.time_limit().as_secs_f64();

        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("CLOCKS").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            for (player, secs) in [(Player::Black, black), (Player::White, white)] {
                let color = if secs < limit * 0.1 {
                    TIMER_CRITICAL
                } else if secs < limit * 0.3 {
                    TIMER_WARNING
                } else {
                    TIMER_NORMAL
                };
                ui.horizontal(|ui| {
                    ui.label(RichText::new(player.to_string()).size(14.0).color(TEXT_SECONDARY));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(RichText::new(format!("{:.1}s", secs.max(0.0))).size(22.0).strong().color(color));
                    });
                });
            }
        });
    }

    fn render_actions_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("ACTIONS").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            let btn_frame = Frame::new()
                .fill(egui::Color32::from_rgb(50, 53, 58))
                .corner_radius(CornerRadius::same(6))
                .inner_margin(8.0);

            let actions: [(&str, fn(&mut GameState)); 4] = [
                ("Undo", GameState::undo),
                ("Save", GameState::save),
                ("Load", GameState::load),
                ("New", GameState::reset),
            ];
            ui.horizontal(|ui| {
                for (label, action) in actions {
                    btn_frame.show(ui, |ui| {
                        let button = egui::Label::new(RichText::new(label).size(12.0).color(TEXT_PRIMARY))
                            .sense(egui::Sense::click());
                        if ui.add(button).clicked() {
                            action(&mut self.state);
                        }
                    });
                    ui.add_space(4.0);
                }
            });

            ui.add_space(8.0);
            ui.label(RichText::new(format!("Move #{}", self.state.move_count())).size(11.0).color(TEXT_SECONDARY));
        });
    }

    /// Last engine search: move, score, nodes and time
    fn render_debug_card(&self, ui: &mut egui::Ui) {
        Frame::new()
            .fill(egui::Color32::from_rgb(30, 33, 38))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
            .show(ui, |ui| {
                ui.label(RichText::new("ENGINE").size(10.0).color(TEXT_MUTED));
                ui.add_space(6.0);

                let Some(result) = &self.state.last_ai_result else {
                    ui.label(RichText::new("Waiting for AI...").size(10.0).color(TEXT_MUTED));
                    return;
                };

                ui.horizontal(|ui| {
                    ui.label(RichText::new(format!("Score: {}", result.score)).size(10.0).color(TEXT_SECONDARY));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::TOP), |ui| {
                        ui.vertical(|ui| {
                            ui.label(RichText::new(format!("{}ms", result.time_ms)).size(10.0).color(TEXT_SECONDARY));
                            ui.label(RichText::new(format!("{} nodes", result.nodes)).size(10.0).color(TEXT_MUTED));
                        });
                    });
                });

                let pos = result.best_move;
                let col = column_label(usize::from(pos.col), self.state.game.board().size());
                ui.add_space(4.0);
                ui.label(RichText::new(format!("→ {} {}", col, pos.row)).size(12.0).strong().color(WIN_HIGHLIGHT));
            });
    }

    fn render_game_over_card(&mut self, ui: &mut egui::Ui, outcome: Outcome) {
        let headline = match outcome.winner() {
            Some(player) => format!("{} WINS!", player.to_string().to_uppercase()),
            None => "DRAW".to_string(),
        };
        let reason = match (outcome, self.state.game.flagged()) {
            (Outcome::Draw, _) => "board full",
            (_, Some(_)) => "on time",
            _ => "five in a row",
        };

        Frame::new()
            .fill(egui::Color32::from_rgb(45, 80, 55))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("GAME OVER").size(12.0).color(egui::Color32::from_rgb(180, 255, 180)));
                    ui.add_space(8.0);
                    ui.label(RichText::new(headline).size(18.0).strong().color(TEXT_PRIMARY));
                    ui.add_space(4.0);
                    ui.label(RichText::new(format!("by {reason}")).size(11.0).color(TEXT_SECONDARY));
                    ui.add_space(12.0);

                    Frame::new()
                        .fill(egui::Color32::from_rgb(60, 100, 70))
                        .corner_radius(CornerRadius::same(6))
                        .inner_margin(10.0)
                        .show(ui, |ui| {
                            let button = egui::Label::new(RichText::new("New Game").size(14.0).strong().color(TEXT_PRIMARY))
                                .sense(egui::Sense::click());
                            if ui.add(button).clicked() {
                                self.state.reset();
                            }
                        });
                });
            });
    }

    fn render_message_card(ui: &mut egui::Ui, msg: &str) {
        Frame::new()
            .fill(egui::Color32::from_rgb(80, 60, 30))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.label(RichText::new(msg).size(11.0).color(TEXT_PRIMARY));
            });
    }

    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            ui.style_mut().visuals.panel_fill = egui::Color32::from_rgb(40, 42, 46);

            let action = self.board_view.show(
                ui,
                self.state.game.board(),
                self.state.winning_line(),
                self.state.is_game_over(),
            );

            match action {
                Some(BoardAction::Place(pos)) => {
                    if let Err(msg) = self.state.try_place_stone(pos) {
                        self.state.message = Some(msg);
                    }
                }
                Some(BoardAction::TakeBack) => self.state.undo(),
                None => {}
            }
        });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        let (debug, undo, new_game, save, load) = ctx.input(|i| {
            (
                i.key_pressed(egui::Key::D),
                i.key_pressed(egui::Key::U),
                i.key_pressed(egui::Key::N),
                i.key_pressed(egui::Key::S),
                i.key_pressed(egui::Key::L),
            )
        });

        if debug {
            self.show_debug = !self.show_debug;
        }
        if undo {
            self.state.undo();
        }
        if new_game {
            self.state.reset();
        }
        if save {
            self.state.save();
        }
        if load {
            self.state.load();
        }
    }
}

impl eframe::App for RenjuApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        self.state.check_ai_result();
        self.state.tick();

        if self.state.is_ai_turn() && !self.state.is_ai_thinking() && !self.state.is_game_over() {
            self.state.start_ai_thinking();
        }

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);

        // Clocks keep running while the game is on
        if self.state.is_ai_thinking() {
            ctx.request_repaint();
        } else if !self.state.is_game_over() {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }
}

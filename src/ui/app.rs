//! Main application for the Gomoku GUI

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, Vec2};

use crate::board::{MAX_BOARD_SIZE, MIN_BOARD_SIZE};
use crate::config::GameConfig;
use crate::player::{Player, PlayerKind};
use crate::Stone;

use super::board_view::BoardView;
use super::game_state::{GameState, SetupForm};
use super::theme::*;

/// Largest depth offered on the setup page
const MAX_SETUP_DEPTH: u8 = 6;

/// Main Gomoku application
pub struct GomokuApp {
    setup: SetupForm,
    game: Option<GameState>,
    board_view: BoardView,
    setup_error: Option<String>,
}

impl GomokuApp {
    /// Create the app on the setup page, prefilled from `config`
    pub fn new(_cc: &eframe::CreationContext<'_>, config: &GameConfig) -> Self {
        Self {
            setup: SetupForm::from_config(config),
            game: None,
            board_view: BoardView::default(),
            setup_error: None,
        }
    }

    fn start_game(&mut self) {
        match GameState::new(&self.setup.to_config()) {
            Ok(state) => {
                self.game = Some(state);
                self.setup_error = None;
            }
            Err(e) => self.setup_error = Some(e.to_string()),
        }
    }

    /// Helper to create a card frame
    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    fn button(ui: &mut egui::Ui, text: &str) -> bool {
        Frame::new()
            .fill(BUTTON_BG)
            .corner_radius(CornerRadius::same(6))
            .inner_margin(8.0)
            .show(ui, |ui| {
                ui.add(egui::Label::new(RichText::new(text).size(14.0).strong().color(TEXT_PRIMARY)).sense(egui::Sense::click()))
                    .clicked()
            })
            .inner
    }

    /// Render the setup page
    fn render_setup(&mut self, ctx: &Context) {
        CentralPanel::default()
            .frame(Frame::new().fill(PANEL_BG).inner_margin(24.0))
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("Gomoku Game Setup").size(28.0).strong().color(TEXT_PRIMARY));
                });
                ui.add_space(20.0);

                Self::card_frame().show(ui, |ui| {
                    ui.horizontal(|ui| {
                        ui.label(RichText::new("Board Size (5-19):").color(TEXT_SECONDARY));
                        ui.add(egui::DragValue::new(&mut self.setup.board_size).range(MIN_BOARD_SIZE..=MAX_BOARD_SIZE));
                    });
                });
                ui.add_space(12.0);

                for (idx, seat) in self.setup.seats.iter_mut().enumerate() {
                    let color = if idx == 0 { "White" } else { "Black" };
                    Self::card_frame().show(ui, |ui| {
                        ui.label(RichText::new(format!("Player {} ({color})", idx + 1)).size(16.0).strong().color(TEXT_PRIMARY));
                        ui.add_space(6.0);
                        egui::Grid::new(("seat", idx)).num_columns(2).spacing([12.0, 6.0]).show(ui, |ui| {
                            ui.label(RichText::new("Name:").color(TEXT_SECONDARY));
                            ui.text_edit_singleline(&mut seat.name);
                            ui.end_row();

                            ui.label(RichText::new("Type:").color(TEXT_SECONDARY));
                            egui::ComboBox::from_id_salt(("kind", idx))
                                .selected_text(seat.kind.to_string())
                                .show_ui(ui, |ui| {
                                    for kind in PlayerKind::ALL {
                                        ui.selectable_value(&mut seat.kind, kind, kind.to_string());
                                    }
                                });
                            ui.end_row();

                            ui.label(RichText::new("AI Depth:").color(TEXT_SECONDARY));
                            ui.add_enabled(
                                seat.kind.is_ai(),
                                egui::DragValue::new(&mut seat.depth).range(1..=MAX_SETUP_DEPTH),
                            );
                            ui.end_row();
                        });
                    });
                    ui.add_space(12.0);
                }

                ui.vertical_centered(|ui| {
                    if Self::button(ui, "Start Game") {
                        self.start_game();
                    }
                    if let Some(error) = &self.setup_error {
                        ui.add_space(8.0);
                        ui.label(RichText::new(error).color(hover_invalid()));
                    }
                });
            });
    }

    /// Render the side panel with status, players and actions
    fn render_side_panel(ctx: &Context, state: &mut GameState) -> SideAction {
        let mut action = SideAction::None;
        SidePanel::right("info_panel")
            .min_width(240.0)
            .max_width(280.0)
            .frame(Frame::new().fill(PANEL_BG).inner_margin(8.0))
            .show(ctx, |ui| {
                ui.add_space(12.0);
                ui.label(RichText::new("GOMOKU").size(22.0).strong().color(TEXT_PRIMARY));
                ui.add_space(12.0);

                Self::render_status_card(ui, state);
                ui.add_space(10.0);

                for player in state.session.players() {
                    Self::render_player_card(ui, player);
                    ui.add_space(10.0);
                }

                if let Some(result) = &state.last_ai_result {
                    Self::card_frame().show(ui, |ui| {
                        ui.label(RichText::new("LAST AI MOVE").size(10.0).color(TEXT_MUTED));
                        if let Some(pos) = result.best_move {
                            ui.label(RichText::new(format!("row {}, col {}", pos.row, pos.col)).size(14.0).strong().color(TEXT_PRIMARY));
                        }
                        ui.label(RichText::new(format!("Score: {}", result.score)).size(10.0).color(TEXT_SECONDARY));
                        ui.label(RichText::new(format!("{} nodes", result.nodes)).size(10.0).color(TEXT_SECONDARY));
                        if let Some(time) = state.ai_thinking_time {
                            ui.label(RichText::new(format!("{:.3}s", time.as_secs_f32())).size(10.0).color(TEXT_SECONDARY));
                        }
                    });
                    ui.add_space(10.0);
                }

                if let Some(msg) = &state.message {
                    Frame::new()
                        .fill(MESSAGE_BG)
                        .corner_radius(CornerRadius::same(8))
                        .inner_margin(10.0)
                        .show(ui, |ui| {
                            ui.label(RichText::new(msg).size(11.0).color(TEXT_PRIMARY));
                        });
                    ui.add_space(10.0);
                }

                ui.horizontal(|ui| {
                    if Self::button(ui, "Play Again") {
                        action = SideAction::PlayAgain;
                    }
                    if Self::button(ui, "Back to Setup") {
                        action = SideAction::BackToSetup;
                    }
                });
            });
        action
    }

    fn render_status_card(ui: &mut egui::Ui, state: &GameState) {
        let (fill, detail, color) = if state.session.is_over() {
            (RESULT_BG, None, WIN_HIGHLIGHT)
        } else if let Some(elapsed) = state.ai_thinking_elapsed() {
            (CARD_BG, Some(format!("AI thinking... {:.1}s", elapsed.as_secs_f32())), STATUS_THINKING)
        } else {
            (CARD_BG, Some("Your turn".to_string()), STATUS_READY)
        };

        Frame::new()
            .fill(fill)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    if !state.session.is_over() {
                        Self::stone_icon(ui, state.session.current_player().stone());
                        ui.add_space(8.0);
                    }
                    ui.vertical(|ui| {
                        ui.label(RichText::new(state.status_text()).size(16.0).strong().color(TEXT_PRIMARY));
                        if let Some(detail) = detail {
                            ui.label(RichText::new(detail).size(12.0).color(color));
                        }
                    });
                });
            });
    }

    fn render_player_card(ui: &mut egui::Ui, player: &Player) {
        Self::card_frame().show(ui, |ui| {
            ui.horizontal(|ui| {
                Self::stone_icon(ui, player.stone());
                ui.add_space(8.0);
                ui.vertical(|ui| {
                    let color = player.stone().name();
                    ui.label(RichText::new(format!("{} ({color})", player.name())).size(14.0).strong().color(TEXT_PRIMARY));
                    ui.label(RichText::new(format!("Type: {}", player.kind())).size(11.0).color(TEXT_SECONDARY));
                    if let Some(depth) = player.depth() {
                        ui.label(RichText::new(format!("Depth: {depth}")).size(11.0).color(TEXT_SECONDARY));
                    }
                });
            });
        });
    }

    fn stone_icon(ui: &mut egui::Ui, stone: Stone) {
        let (rect, _) = ui.allocate_exact_size(Vec2::new(32.0, 32.0), egui::Sense::hover());
        let fill = if stone == Stone::Black { BLACK_STONE } else { WHITE_STONE };
        ui.painter().circle_filled(rect.center(), 14.0, fill);
    }

    /// Render the board and apply human clicks
    fn render_board(ctx: &Context, board_view: &mut BoardView, state: &mut GameState) {
        CentralPanel::default()
            .frame(Frame::new().fill(egui::Color32::from_rgb(40, 42, 46)).inner_margin(10.0))
            .show(ctx, |ui| {
                let winning_line = match state.session.outcome() {
                    crate::Outcome::Won { line, .. } => line,
                    _ => None,
                };
                let accept_input = state.session.is_human_turn() && !state.is_ai_thinking();

                let clicked = board_view.show(
                    ui,
                    state.session.board(),
                    state.session.current_player().stone(),
                    state.session.last_move(),
                    winning_line,
                    accept_input,
                );

                if let Some(pos) = clicked {
                    if let Err(e) = state.try_place_stone(pos) {
                        state.message = Some(e.to_string());
                    }
                }
            });
    }
}

enum SideAction {
    None,
    PlayAgain,
    BackToSetup,
}

impl eframe::App for GomokuApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        let Some(state) = self.game.as_mut() else {
            self.render_setup(ctx);
            return;
        };

        state.check_ai_result();
        if state.session.is_ai_turn() && !state.is_ai_thinking() {
            state.start_ai_thinking();
        }

        let action = Self::render_side_panel(ctx, state);
        Self::render_board(ctx, &mut self.board_view, state);

        if state.is_ai_thinking() {
            ctx.request_repaint();
        }

        match action {
            SideAction::None => {}
            SideAction::PlayAgain => state.reset(),
            SideAction::BackToSetup => self.game = None,
        }
    }
}

use eframe::egui;
use snake_common::games::snake::{Direction, Position, SnakeSnapshot};

use crate::colors;
use crate::state::{AppState, SharedState};

const MAX_BOARD_PIXELS: f32 = 600.0;
const CONTROL_BUTTON_SIZE: f32 = 48.0;

pub struct GameUi {
    shared_state: SharedState,
}

impl GameUi {
    pub fn new(shared_state: SharedState) -> Self {
        Self { shared_state }
    }

    pub fn render(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        match self.shared_state.get_state() {
            AppState::Starting => {
                ui.heading("Starting game...");
                ui.spinner();
            }
            AppState::Playing { snapshot } => {
                self.handle_direction_keys(ctx);
                Self::render_scores(ui, &snapshot);
                Self::render_board(ui, &snapshot, false);
                self.render_controls(ui);
            }
            AppState::GameOver { snapshot, reason } => {
                Self::render_scores(ui, &snapshot);
                Self::render_board(ui, &snapshot, true);

                ui.separator();
                ui.heading("Game Over!");
                ui.label(format!(
                    "The snake {} with a score of {}.",
                    reason.describe(),
                    snapshot.score
                ));
                if snapshot.new_high_score {
                    ui.label("🎉 New high score! 🎉");
                }

                let replay_key = ctx.input(|i| i.key_pressed(egui::Key::Enter));
                if ui.button("Play again (Enter)").clicked() || replay_key {
                    self.shared_state.request_reset();
                }
            }
        }

        ui.separator();
        ui.collapsing("How to play", |ui| {
            ui.label(
                "Steer the snake with the arrow keys, WASD, or the arrow buttons. \
                 Eat the red food to grow and score points. \
                 Avoid the walls and your own tail. \
                 Your best score is saved between runs.",
            );
        });
    }

    fn handle_direction_keys(&self, ctx: &egui::Context) {
        let pressed = ctx.input(|i| directions_from_events(&i.events));

        for direction in pressed {
            self.shared_state.send_direction(direction);
        }
    }

    fn render_scores(ui: &mut egui::Ui, snapshot: &SnakeSnapshot) {
        ui.horizontal(|ui| {
            ui.strong(format!("Score: {}", snapshot.score));
            ui.add_space(20.0);
            ui.strong(format!("High Score: {}", snapshot.high_score));
        });
        ui.separator();
    }

    fn render_board(ui: &mut egui::Ui, snapshot: &SnakeSnapshot, dead: bool) {
        let side = ui.available_width().min(MAX_BOARD_PIXELS);
        let cell_size = side / snapshot.board_size as f32;

        let (response, painter) =
            ui.allocate_painter(egui::Vec2::splat(side), egui::Sense::hover());
        let origin = response.rect.min;

        painter.rect_filled(response.rect, 4.0, colors::BOARD_BACKGROUND);
        for i in 1..snapshot.board_size {
            let offset = i as f32 * cell_size;
            painter.line_segment(
                [origin + egui::vec2(offset, 0.0), origin + egui::vec2(offset, side)],
                egui::Stroke::new(0.5, colors::GRID_LINE),
            );
            painter.line_segment(
                [origin + egui::vec2(0.0, offset), origin + egui::vec2(side, offset)],
                egui::Stroke::new(0.5, colors::GRID_LINE),
            );
        }

        painter.rect_filled(cell_rect(origin, cell_size, snapshot.food).shrink(1.0), cell_size / 2.0, colors::FOOD);

        // Tail first so the head stays on top when food overlaps the body.
        for (i, segment) in snapshot.snake.iter().enumerate().rev() {
            let color = match (dead, i) {
                (true, _) => colors::DEAD_SNAKE,
                (false, 0) => colors::SNAKE_HEAD,
                (false, _) => colors::SNAKE_BODY,
            };
            painter.rect_filled(cell_rect(origin, cell_size, *segment).shrink(0.5), 2.0, color);
        }
    }

    fn render_controls(&self, ui: &mut egui::Ui) {
        ui.add_space(8.0);
        let button = |ui: &mut egui::Ui, label: &str| {
            ui.add_sized([CONTROL_BUTTON_SIZE, CONTROL_BUTTON_SIZE], egui::Button::new(label))
                .clicked()
        };

        ui.vertical_centered(|ui| {
            if button(ui, "⬆") {
                self.shared_state.send_direction(Direction::Up);
            }
            ui.horizontal(|ui| {
                let row_width = CONTROL_BUTTON_SIZE * 3.0 + ui.spacing().item_spacing.x * 2.0;
                ui.add_space((ui.available_width() - row_width).max(0.0) / 2.0);
                if button(ui, "⬅") {
                    self.shared_state.send_direction(Direction::Left);
                }
                if button(ui, "⬇") {
                    self.shared_state.send_direction(Direction::Down);
                }
                if button(ui, "➡") {
                    self.shared_state.send_direction(Direction::Right);
                }
            });
        });
    }
}

pub fn direction_for_key(key: egui::Key) -> Option<Direction> {
    match key {
        egui::Key::ArrowUp | egui::Key::W => Some(Direction::Up),
        egui::Key::ArrowDown | egui::Key::S => Some(Direction::Down),
        egui::Key::ArrowLeft | egui::Key::A => Some(Direction::Left),
        egui::Key::ArrowRight | egui::Key::D => Some(Direction::Right),
        _ => None,
    }
}

/// Every fresh direction key press in `events`, in the order they arrived.
pub fn directions_from_events(events: &[egui::Event]) -> Vec<Direction> {
    events
        .iter()
        .filter_map(|event| match event {
            egui::Event::Key { key, pressed: true, repeat: false, .. } => direction_for_key(*key),
            _ => None,
        })
        .collect()
}

/// Screen rectangle of a 1-indexed board cell.
pub fn cell_rect(origin: egui::Pos2, cell_size: f32, pos: Position) -> egui::Rect {
    egui::Rect::from_min_size(
        egui::pos2(
            origin.x + (pos.x - 1) as f32 * cell_size,
            origin.y + (pos.y - 1) as f32 * cell_size,
        ),
        egui::Vec2::splat(cell_size),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrow_and_wasd_keys_map_to_directions() {
        assert_eq!(direction_for_key(egui::Key::ArrowUp), Some(Direction::Up));
        assert_eq!(direction_for_key(egui::Key::S), Some(Direction::Down));
        assert_eq!(direction_for_key(egui::Key::A), Some(Direction::Left));
        assert_eq!(direction_for_key(egui::Key::ArrowRight), Some(Direction::Right));
        assert_eq!(direction_for_key(egui::Key::Space), None);
    }

    fn key_event(key: egui::Key, pressed: bool, repeat: bool) -> egui::Event {
        egui::Event::Key {
            key,
            physical_key: None,
            pressed,
            repeat,
            modifiers: egui::Modifiers::NONE,
        }
    }

    #[test]
    fn test_all_direction_presses_in_a_frame_are_kept() {
        let events = vec![
            key_event(egui::Key::ArrowUp, true, false),
            key_event(egui::Key::ArrowUp, false, false),
            key_event(egui::Key::Space, true, false),
            key_event(egui::Key::ArrowLeft, true, false),
            key_event(egui::Key::ArrowLeft, true, true),
        ];

        assert_eq!(
            directions_from_events(&events),
            vec![Direction::Up, Direction::Left]
        );
    }

    #[test]
    fn test_cell_rect_is_one_indexed() {
        let origin = egui::pos2(10.0, 20.0);
        let first = cell_rect(origin, 20.0, Position::new(1, 1));
        assert_eq!(first.min, origin);
        assert_eq!(first.max, egui::pos2(30.0, 40.0));

        let other = cell_rect(origin, 20.0, Position::new(3, 2));
        assert_eq!(other.min, egui::pos2(50.0, 40.0));
    }
}

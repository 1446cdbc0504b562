use eframe::egui;

use crate::game_ui::GameUi;
use crate::state::SharedState;

pub struct SnakeApp {
    game_ui: GameUi,
    shared_state: SharedState,
}

impl SnakeApp {
    pub fn new(shared_state: SharedState) -> Self {
        Self {
            game_ui: GameUi::new(shared_state.clone()),
            shared_state,
        }
    }
}

impl eframe::App for SnakeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if ctx.input(|i| i.viewport().close_requested()) {
            self.shared_state.request_shutdown();
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.game_ui.render(ui, ctx);
        });
    }
}

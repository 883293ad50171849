use std::time::{Duration, Instant};

use common::game::{GameRng, RunState, SnakeGameState};
use eframe::egui;

use crate::config::Config;
use crate::game_ui::GameUi;

/// The presentation loop: one engine frame per repaint, repaints paced to
/// the configured frame rate. All game rules live in the engine; this layer
/// only moves input intents in and pixels out.
pub struct SnakeApp {
    state: SnakeGameState,
    rng: GameRng,
    game_ui: GameUi,
    last_frame: Instant,
    frame_budget: Duration,
}

impl SnakeApp {
    pub fn new(config: Config, rng: GameRng) -> Self {
        let frame_budget = Duration::from_secs_f32(1.0 / config.game.target_fps as f32);
        Self {
            state: SnakeGameState::new(config.game),
            rng,
            game_ui: GameUi::new(config.window.canvas_size as f32),
            last_frame: Instant::now(),
            frame_budget,
        }
    }
}

impl eframe::App for SnakeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        let dt = (now - self.last_frame).as_secs_f32();
        self.last_frame = now;

        egui::CentralPanel::default().show(ctx, |ui| {
            let commands = self.game_ui.render_game(ui, ctx, &self.state);
            for command in commands {
                self.state.handle_command(command);
            }
        });

        if self.state.run_state() == RunState::Quit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        self.state.advance_frame(dt, &mut self.rng);
        ctx.request_repaint_after(self.frame_budget);
    }
}

use common::game::{
    CellKind, Direction, GameCommand, GridPos, RestartReason, RunState, SnakeGameState,
};
use eframe::egui;

use crate::colors;

pub struct GameUi {
    canvas_size: f32,
}

impl GameUi {
    pub fn new(canvas_size: f32) -> Self {
        Self { canvas_size }
    }

    /// Draws the field, snake and status line, and collects this frame's
    /// input intents. Pointer positions are translated to grid cells here so
    /// the engine only ever sees grid coordinates.
    pub fn render_game(
        &self,
        ui: &mut egui::Ui,
        ctx: &egui::Context,
        state: &SnakeGameState,
    ) -> Vec<GameCommand> {
        let mut commands = Vec::new();
        collect_key_commands(ctx, &mut commands);

        ui.horizontal(|ui| {
            ui.heading(format!("Score: {}", state.score()));
            match state.run_state() {
                RunState::Paused => {
                    ui.label("Paused: P to play, arrows steer, mouse edits walls, C clears, Esc quits");
                }
                RunState::Running => {
                    ui.label("P to pause");
                }
                RunState::Quit | RunState::Restart => {}
            }
            if let Some(reason) = state.last_restart_reason() {
                ui.label(format!("Round over: {}", reason_text(reason)));
            }
        });

        let field_size = state.field().size();
        let cell_px = self.canvas_size / field_size as f32;
        let (response, painter) = ui.allocate_painter(
            egui::Vec2::splat(self.canvas_size),
            egui::Sense::click_and_drag(),
        );
        let canvas = response.rect;

        painter.rect_filled(canvas, 0.0, colors::GRASS);
        for (pos, kind) in state.field().iter() {
            if kind != CellKind::Grass {
                painter.rect_filled(cell_rect(canvas.min, cell_px, pos), 0.0, colors::cell_color(kind));
            }
        }

        // Body below the head so the head stays visible in overlaps.
        let segments = state.snake().segments();
        for segment in segments.iter().skip(1) {
            painter.rect_filled(
                cell_rect(canvas.min, cell_px, segment.cell()),
                0.0,
                colors::SNAKE_BODY,
            );
        }
        if let Some(head) = segments.first() {
            painter.rect_filled(
                cell_rect(canvas.min, cell_px, head.cell()),
                0.0,
                colors::SNAKE_HEAD,
            );
        }

        collect_pointer_commands(ctx, canvas, cell_px, &mut commands);
        commands
    }
}

fn cell_rect(canvas_min: egui::Pos2, cell_px: f32, pos: GridPos) -> egui::Rect {
    egui::Rect::from_min_size(
        egui::pos2(
            canvas_min.x + pos.x as f32 * cell_px,
            canvas_min.y + pos.y as f32 * cell_px,
        ),
        // A one-pixel gap keeps the cell grid visible.
        egui::vec2(cell_px - 1.0, cell_px - 1.0),
    )
}

fn collect_key_commands(ctx: &egui::Context, commands: &mut Vec<GameCommand>) {
    ctx.input(|i| {
        if i.key_pressed(egui::Key::ArrowUp) {
            commands.push(GameCommand::Turn(Direction::Up));
        } else if i.key_pressed(egui::Key::ArrowDown) {
            commands.push(GameCommand::Turn(Direction::Down));
        } else if i.key_pressed(egui::Key::ArrowLeft) {
            commands.push(GameCommand::Turn(Direction::Left));
        } else if i.key_pressed(egui::Key::ArrowRight) {
            commands.push(GameCommand::Turn(Direction::Right));
        }

        if i.key_pressed(egui::Key::P) {
            commands.push(GameCommand::TogglePause);
        }
        if i.key_pressed(egui::Key::C) {
            commands.push(GameCommand::ClearWalls);
        }
        if i.key_pressed(egui::Key::Escape) {
            commands.push(GameCommand::Quit);
        }
    });
}

fn collect_pointer_commands(
    ctx: &egui::Context,
    canvas: egui::Rect,
    cell_px: f32,
    commands: &mut Vec<GameCommand>,
) {
    ctx.input(|i| {
        let Some(pos) = i.pointer.interact_pos() else {
            return;
        };
        if !canvas.contains(pos) {
            return;
        }

        let cell = GridPos::new(
            ((pos.x - canvas.min.x) / cell_px) as i32,
            ((pos.y - canvas.min.y) / cell_px) as i32,
        );

        if i.pointer.primary_down() {
            commands.push(GameCommand::PaintWall(cell));
        } else if i.pointer.secondary_down() {
            commands.push(GameCommand::EraseWall(cell));
        }
    });
}

fn reason_text(reason: RestartReason) -> &'static str {
    match reason {
        RestartReason::OutOfBounds => "left the field",
        RestartReason::WallCollision => "hit a wall",
        RestartReason::SelfCollision => "ran into itself",
        RestartReason::Starved => "shrank away",
    }
}

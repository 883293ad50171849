use serde::{Deserialize, Serialize};

use crate::config::Validate;

use super::types::GridPos;

/// Tunable parameters for one game. Embedded in the client config file.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameSettings {
    /// Side length of the square field, in cells.
    pub field_size: usize,
    pub spawn_x: i32,
    pub spawn_y: i32,
    /// Head movement speed in grid cells per second.
    pub game_speed: f32,
    /// Maximum snake length; growth beyond it is dropped.
    pub snake_capacity: usize,
    /// Render/update pacing target for the presentation loop.
    pub target_fps: u32,
}

impl GameSettings {
    pub fn spawn(&self) -> GridPos {
        GridPos::new(self.spawn_x, self.spawn_y)
    }
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            field_size: 15,
            spawn_x: 7,
            spawn_y: 7,
            game_speed: 14.0,
            snake_capacity: 512,
            target_fps: 60,
        }
    }
}

impl Validate for GameSettings {
    fn validate(&self) -> Result<(), String> {
        if self.field_size < 5 || self.field_size > 100 {
            return Err("Field size must be between 5 and 100".to_string());
        }
        if self.spawn_x < 0 || self.spawn_x as usize >= self.field_size {
            return Err("Spawn x must be inside the field".to_string());
        }
        if self.spawn_y < 0 || self.spawn_y as usize >= self.field_size {
            return Err("Spawn y must be inside the field".to_string());
        }
        if !(1.0..=60.0).contains(&self.game_speed) {
            return Err("Game speed must be between 1 and 60 cells per second".to_string());
        }
        if self.snake_capacity < 1 || self.snake_capacity > 4096 {
            return Err("Snake capacity must be between 1 and 4096".to_string());
        }
        if self.target_fps < 10 || self.target_fps > 240 {
            return Err("Target FPS must be between 10 and 240".to_string());
        }
        Ok(())
    }
}

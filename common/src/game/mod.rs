mod food;
mod grid;
mod rng;
mod settings;
mod snake;
mod state;
mod types;

pub use food::Food;
pub use grid::PlayField;
pub use rng::GameRng;
pub use settings::GameSettings;
pub use snake::Snake;
pub use state::SnakeGameState;
pub use types::{
    CellKind, Direction, FoodKind, GameCommand, GridPos, Heading, RestartReason, RunState, Segment,
};

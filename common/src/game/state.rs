use crate::log;

use super::food::Food;
use super::grid::PlayField;
use super::rng::GameRng;
use super::settings::GameSettings;
use super::snake::Snake;
use super::types::{CellKind, FoodKind, GameCommand, Heading, RestartReason, RunState};

/// One game: field, snake, both food items, score and the run state. The
/// presentation loop owns a single instance and drives it with
/// `handle_command` plus one `advance_frame` per rendered frame.
pub struct SnakeGameState {
    settings: GameSettings,
    field: PlayField,
    snake: Snake,
    apple: Food,
    chocolate: Food,
    score: i32,
    run_state: RunState,
    last_restart_reason: Option<RestartReason>,
}

impl SnakeGameState {
    /// Starts in the same shape `setup_round` produces: length-1 snake at
    /// the configured spawn, clean field, unplaced food, Paused.
    pub fn new(settings: GameSettings) -> Self {
        let field = PlayField::new(settings.field_size);
        let snake = Snake::new(settings.spawn(), Heading::RIGHT, settings.snake_capacity);
        Self {
            field,
            snake,
            apple: Food::new(FoodKind::Apple),
            chocolate: Food::new(FoodKind::Chocolate),
            score: 0,
            run_state: RunState::Paused,
            last_restart_reason: None,
            settings,
        }
    }

    pub fn settings(&self) -> &GameSettings {
        &self.settings
    }

    pub fn field(&self) -> &PlayField {
        &self.field
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn score(&self) -> i32 {
        self.score
    }

    pub fn run_state(&self) -> RunState {
        self.run_state
    }

    /// Why the previous round ended; kept through the Paused state so the
    /// presentation layer can display it, cleared on resume.
    pub fn last_restart_reason(&self) -> Option<RestartReason> {
        self.last_restart_reason
    }

    pub fn handle_command(&mut self, command: GameCommand) {
        match command {
            GameCommand::Turn(direction) => {
                if self.run_state == RunState::Quit {
                    return;
                }
                let proposed = direction.heading();
                // Never reverse straight into the first body segment.
                if proposed != self.snake.heading_between(0, 1) {
                    self.snake.set_heading(proposed);
                }
            }
            GameCommand::TogglePause => match self.run_state {
                RunState::Running => self.run_state = RunState::Paused,
                RunState::Paused => {
                    self.last_restart_reason = None;
                    self.run_state = RunState::Running;
                }
                RunState::Quit | RunState::Restart => {}
            },
            GameCommand::PaintWall(pos) => {
                self.field.paint_wall(pos);
            }
            GameCommand::EraseWall(pos) => {
                self.field.erase_wall(pos);
            }
            GameCommand::ClearWalls => self.field.clear_walls(),
            GameCommand::Quit => self.run_state = RunState::Quit,
        }
    }

    /// One frame of simulation: a tick while Running, then an immediate
    /// round re-setup if that tick ended the round.
    pub fn advance_frame(&mut self, dt: f32, rng: &mut GameRng) {
        self.update(dt, rng);
        if self.run_state == RunState::Restart {
            self.setup_round();
        }
    }

    /// A single tick. Only acts while the run state is Running; a terminal
    /// condition leaves the state at Restart for the caller to resolve.
    pub fn update(&mut self, dt: f32, rng: &mut GameRng) {
        if self.run_state != RunState::Running {
            return;
        }

        self.snake.advance(dt, self.settings.game_speed);

        self.apple.place_if_consumed(&mut self.field, rng);
        self.chocolate.place_if_consumed(&mut self.field, rng);

        let head_cell = self.snake.head_cell();

        if head_cell == self.apple.pos() {
            self.snake.extend();
            self.field.set_cell(self.apple.pos(), CellKind::Grass);
            self.score += 1;
            log!(
                "Ate apple at ({}, {}). Score: {}",
                head_cell.x,
                head_cell.y,
                self.score
            );
        }

        if head_cell == self.chocolate.pos() {
            self.snake.shrink();
            self.field.set_cell(self.chocolate.pos(), CellKind::Grass);
            self.score -= 1;
            log!(
                "Ate chocolate at ({}, {}). Score: {}",
                head_cell.x,
                head_cell.y,
                self.score
            );
        }

        if self.snake.is_empty() {
            self.end_round(RestartReason::Starved);
            return;
        }

        // Terminal collisions. Out-of-bounds and wall are exclusive (a head
        // outside the field has no cell to read); self-collision is checked
        // independently. Every branch only writes Restart, so the order is
        // not observable.
        let head = self.snake.head();
        let size = self.field.size() as f32;
        if head.x < 0.0 || head.x >= size || head.y < 0.0 || head.y >= size {
            self.end_round(RestartReason::OutOfBounds);
        } else if self.field.cell(head_cell) == CellKind::Wall {
            self.end_round(RestartReason::WallCollision);
        }

        if self
            .snake
            .segments()
            .iter()
            .skip(1)
            .any(|segment| segment.cell() == head_cell)
        {
            self.end_round(RestartReason::SelfCollision);
        }
    }

    /// Resets the round: length-1 snake at the spawn, every non-Wall cell
    /// back to Grass, food back to the unplaced sentinel, score 0, Paused.
    pub fn setup_round(&mut self) {
        self.snake = Snake::new(
            self.settings.spawn(),
            Heading::RIGHT,
            self.settings.snake_capacity,
        );
        self.field.reset_round();
        self.apple.reset();
        self.chocolate.reset();
        self.score = 0;
        self.run_state = RunState::Paused;
    }

    fn end_round(&mut self, reason: RestartReason) {
        self.run_state = RunState::Restart;
        self.last_restart_reason = Some(reason);
        log!("Round over: {:?}. Final score: {}", reason, self.score);
    }

    #[cfg(test)]
    pub(crate) fn force_food(&mut self, kind: FoodKind, pos: super::types::GridPos) {
        let food = match kind {
            FoodKind::Apple => &mut self.apple,
            FoodKind::Chocolate => &mut self.chocolate,
        };
        self.field.set_cell(food.pos(), CellKind::Grass);
        self.field.set_cell(pos, kind.cell_kind());
        food.place_at(pos);
    }

    #[cfg(test)]
    pub(crate) fn set_snake(&mut self, snake: Snake) {
        self.snake = snake;
    }
}

#[cfg(test)]
mod tests {
    use super::super::types::{Direction, GridPos, Segment};
    use super::*;

    fn running_state() -> (SnakeGameState, GameRng) {
        let mut state = SnakeGameState::new(GameSettings::default());
        let rng = GameRng::new(42);
        // Pin both foods away from the snake's path so ticks are
        // deterministic.
        state.force_food(FoodKind::Apple, GridPos::new(8, 7));
        state.force_food(FoodKind::Chocolate, GridPos::new(0, 14));
        state.handle_command(GameCommand::TogglePause);
        (state, rng)
    }

    #[test]
    fn test_initial_state_is_paused_round() {
        let state = SnakeGameState::new(GameSettings::default());
        assert_eq!(state.run_state(), RunState::Paused);
        assert_eq!(state.snake().len(), 1);
        assert_eq!(state.snake().head_cell(), GridPos::new(7, 7));
        assert_eq!(state.score(), 0);
        assert_eq!(state.field().count_cells(CellKind::Grass), 15 * 15);
    }

    #[test]
    fn test_eating_apple_then_chocolate() {
        let (mut state, mut rng) = running_state();

        // 0.08 s at 14 cells/s crosses from x = 7.0 into cell 8.
        state.advance_frame(0.08, &mut rng);
        assert_eq!(state.snake().len(), 2);
        assert_eq!(state.score(), 1);
        assert_eq!(state.run_state(), RunState::Running);

        // Park the respawning apple out of the way, put chocolate ahead.
        state.force_food(FoodKind::Apple, GridPos::new(0, 0));
        state.force_food(FoodKind::Chocolate, GridPos::new(10, 7));

        state.advance_frame(0.08, &mut rng); // x = 9.24
        state.advance_frame(0.08, &mut rng); // x = 10.36, chocolate eaten
        assert_eq!(state.snake().len(), 1);
        assert_eq!(state.score(), 0);
        assert_eq!(state.run_state(), RunState::Running);
    }

    #[test]
    fn test_eaten_apple_cell_returns_to_grass_and_respawns() {
        let (mut state, mut rng) = running_state();
        state.advance_frame(0.08, &mut rng);
        assert_eq!(state.field().cell(GridPos::new(8, 7)), CellKind::Grass);

        // Next tick re-places the apple on some Grass cell. It may land
        // under the head, in which case it is eaten within the same tick.
        state.advance_frame(0.001, &mut rng);
        assert!(state.field().count_cells(CellKind::Apple) == 1 || state.score() == 2);
        assert_eq!(state.field().count_cells(CellKind::Chocolate), 1);
    }

    #[test]
    fn test_chocolate_places_when_apple_takes_the_sentinel_cell() {
        let mut state = SnakeGameState::new(GameSettings::default());
        let mut rng = GameRng::new(42);
        // The apple occupies the cell both unplaced items point at.
        state.force_food(FoodKind::Apple, GridPos::ORIGIN);
        state.handle_command(GameCommand::TogglePause);

        state.update(0.001, &mut rng);
        assert_eq!(state.field().count_cells(CellKind::Apple), 1);
        // The chocolate may land under the head and get eaten the same tick.
        assert!(state.field().count_cells(CellKind::Chocolate) == 1 || state.score() == -1);
    }

    #[test]
    fn test_head_leaving_field_restarts() {
        let (mut state, mut rng) = running_state();
        state.set_snake(Snake::from_segments(
            vec![Segment::new(14.8, 7.0)],
            Heading::RIGHT,
            512,
        ));

        state.update(0.05, &mut rng); // x = 15.5 on a size-15 field
        assert_eq!(state.run_state(), RunState::Restart);
        assert_eq!(state.last_restart_reason(), Some(RestartReason::OutOfBounds));
    }

    #[test]
    fn test_hitting_wall_restarts() {
        let (mut state, mut rng) = running_state();
        state.handle_command(GameCommand::PaintWall(GridPos::new(9, 7)));
        state.set_snake(Snake::from_segments(
            vec![Segment::new(8.8, 7.0)],
            Heading::RIGHT,
            512,
        ));

        state.update(0.05, &mut rng); // x = 9.5, a Wall cell
        assert_eq!(state.run_state(), RunState::Restart);
        assert_eq!(
            state.last_restart_reason(),
            Some(RestartReason::WallCollision)
        );
    }

    #[test]
    fn test_running_into_own_body_restarts() {
        let (mut state, mut rng) = running_state();
        // Mid-turn shape: the head is about to cross into the cell whose
        // occupant shifts from the second to the third segment this tick.
        state.set_snake(Snake::from_segments(
            vec![
                Segment::new(5.2, 4.9),
                Segment::new(5.0, 5.0),
                Segment::new(4.0, 5.0),
            ],
            Heading::DOWN,
            512,
        ));

        state.update(0.01, &mut rng);
        assert_eq!(state.run_state(), RunState::Restart);
        assert_eq!(
            state.last_restart_reason(),
            Some(RestartReason::SelfCollision)
        );
    }

    #[test]
    fn test_starving_to_zero_length_restarts() {
        let (mut state, mut rng) = running_state();
        state.force_food(FoodKind::Apple, GridPos::new(0, 13));
        state.force_food(FoodKind::Chocolate, GridPos::new(8, 7));

        state.update(0.08, &mut rng);
        assert_eq!(state.snake().len(), 0);
        assert_eq!(state.score(), -1);
        assert_eq!(state.run_state(), RunState::Restart);
        assert_eq!(state.last_restart_reason(), Some(RestartReason::Starved));
    }

    #[test]
    fn test_restart_runs_setup_back_to_paused() {
        let (mut state, mut rng) = running_state();
        state.handle_command(GameCommand::PaintWall(GridPos::new(3, 3)));
        state.set_snake(Snake::from_segments(
            vec![Segment::new(14.8, 7.0)],
            Heading::RIGHT,
            512,
        ));

        state.advance_frame(0.05, &mut rng);
        assert_eq!(state.run_state(), RunState::Paused);
        assert_eq!(state.snake().len(), 1);
        assert_eq!(state.snake().head_cell(), GridPos::new(7, 7));
        assert_eq!(state.score(), 0);
        // Walls survive the reset; everything else is Grass again.
        assert_eq!(state.field().cell(GridPos::new(3, 3)), CellKind::Wall);
        assert_eq!(state.field().count_cells(CellKind::Apple), 0);
        assert_eq!(state.field().count_cells(CellKind::Chocolate), 0);
        // The reason stays visible while paused.
        assert_eq!(state.last_restart_reason(), Some(RestartReason::OutOfBounds));
    }

    #[test]
    fn test_reversal_is_rejected() {
        let (mut state, _) = running_state();
        state.set_snake(Snake::from_segments(
            vec![Segment::new(7.0, 7.0), Segment::new(6.0, 7.0)],
            Heading::RIGHT,
            512,
        ));

        state.handle_command(GameCommand::Turn(Direction::Left));
        assert_eq!(state.snake().heading(), Heading::RIGHT);

        state.handle_command(GameCommand::Turn(Direction::Up));
        assert_eq!(state.snake().heading(), Heading::UP);
    }

    #[test]
    fn test_paused_state_does_not_tick() {
        let mut state = SnakeGameState::new(GameSettings::default());
        let mut rng = GameRng::new(42);
        let head = state.snake().head();

        state.update(1.0, &mut rng);
        assert_eq!(state.snake().head(), head);
        assert_eq!(state.field().count_cells(CellKind::Apple), 0);
    }

    #[test]
    fn test_pause_toggle_and_quit() {
        let mut state = SnakeGameState::new(GameSettings::default());
        assert_eq!(state.run_state(), RunState::Paused);

        state.handle_command(GameCommand::TogglePause);
        assert_eq!(state.run_state(), RunState::Running);
        state.handle_command(GameCommand::TogglePause);
        assert_eq!(state.run_state(), RunState::Paused);

        state.handle_command(GameCommand::Quit);
        assert_eq!(state.run_state(), RunState::Quit);
        state.handle_command(GameCommand::TogglePause);
        assert_eq!(state.run_state(), RunState::Quit);
    }

    #[test]
    fn test_resume_clears_restart_reason() {
        let (mut state, mut rng) = running_state();
        state.set_snake(Snake::from_segments(
            vec![Segment::new(14.8, 7.0)],
            Heading::RIGHT,
            512,
        ));
        state.advance_frame(0.05, &mut rng);
        assert!(state.last_restart_reason().is_some());

        state.handle_command(GameCommand::TogglePause);
        assert_eq!(state.last_restart_reason(), None);
    }

    #[test]
    fn test_wall_editing_commands() {
        let mut state = SnakeGameState::new(GameSettings::default());
        state.handle_command(GameCommand::PaintWall(GridPos::new(2, 2)));
        state.handle_command(GameCommand::PaintWall(GridPos::new(4, 4)));
        assert_eq!(state.field().count_cells(CellKind::Wall), 2);

        state.handle_command(GameCommand::EraseWall(GridPos::new(2, 2)));
        assert_eq!(state.field().count_cells(CellKind::Wall), 1);

        state.handle_command(GameCommand::ClearWalls);
        assert_eq!(state.field().count_cells(CellKind::Wall), 0);
    }
}

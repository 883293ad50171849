use crate::log;

use super::grid::PlayField;
use super::rng::GameRng;
use super::types::{CellKind, FoodKind, GridPos};

/// A single food item. Exactly one apple and one chocolate exist per game.
///
/// The recorded position doubles as the placement trigger: whenever the cell
/// it points at no longer holds the item's own tag (eaten back to Grass, the
/// origin sentinel after round setup, or occupied by the other item), the
/// item gets re-placed onto a uniformly random Grass cell.
#[derive(Clone, Debug)]
pub struct Food {
    kind: FoodKind,
    pos: GridPos,
}

impl Food {
    pub fn new(kind: FoodKind) -> Self {
        Self {
            kind,
            pos: GridPos::ORIGIN,
        }
    }

    pub fn pos(&self) -> GridPos {
        self.pos
    }

    pub fn reset(&mut self) {
        self.pos = GridPos::ORIGIN;
    }

    #[cfg(test)]
    pub(crate) fn place_at(&mut self, pos: GridPos) {
        self.pos = pos;
    }

    /// Re-places the item unless its recorded cell still holds its own tag.
    /// Idempotent while the item is on the field.
    ///
    /// Placement is skipped while no Grass cell is left, so the rejection
    /// sampling below always terminates.
    pub fn place_if_consumed(&mut self, field: &mut PlayField, rng: &mut GameRng) {
        if field.cell(self.pos) == self.kind.cell_kind() {
            return;
        }
        if field.count_cells(CellKind::Grass) == 0 {
            return;
        }

        let size = field.size() as i32;
        loop {
            let pos = GridPos::new(rng.random_range(0..size), rng.random_range(0..size));
            if field.cell(pos) == CellKind::Grass {
                field.set_cell(pos, self.kind.cell_kind());
                self.pos = pos;
                log!("{:?} placed at ({}, {})", self.kind, pos.x, pos.y);
                break;
            }
        }
    }
}

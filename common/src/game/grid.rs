use super::types::{CellKind, GridPos};

/// The square playing field: one `CellKind` per coordinate, row-major.
///
/// Walls are the only player-editable cells: painting converts Grass to Wall
/// and erasing converts Wall back, so food and walls can never stamp over
/// each other.
#[derive(Clone, Debug)]
pub struct PlayField {
    size: usize,
    cells: Vec<CellKind>,
}

impl PlayField {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![CellKind::Grass; size * size],
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn contains(&self, pos: GridPos) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as usize) < self.size && (pos.y as usize) < self.size
    }

    fn index(&self, pos: GridPos) -> usize {
        pos.y as usize * self.size + pos.x as usize
    }

    /// Callers must pass an in-bounds position; use `contains` first for
    /// positions derived from the snake head or pointer input.
    pub fn cell(&self, pos: GridPos) -> CellKind {
        self.cells[self.index(pos)]
    }

    pub fn set_cell(&mut self, pos: GridPos, kind: CellKind) {
        let index = self.index(pos);
        self.cells[index] = kind;
    }

    pub fn paint_wall(&mut self, pos: GridPos) -> bool {
        if self.contains(pos) && self.cell(pos) == CellKind::Grass {
            self.set_cell(pos, CellKind::Wall);
            return true;
        }
        false
    }

    pub fn erase_wall(&mut self, pos: GridPos) -> bool {
        if self.contains(pos) && self.cell(pos) == CellKind::Wall {
            self.set_cell(pos, CellKind::Grass);
            return true;
        }
        false
    }

    pub fn clear_walls(&mut self) {
        for cell in self.cells.iter_mut() {
            if *cell == CellKind::Wall {
                *cell = CellKind::Grass;
            }
        }
    }

    /// Round setup: every non-Wall cell reverts to Grass. Player-built walls
    /// survive across rounds.
    pub fn reset_round(&mut self) {
        for cell in self.cells.iter_mut() {
            if *cell != CellKind::Wall {
                *cell = CellKind::Grass;
            }
        }
    }

    pub fn count_cells(&self, kind: CellKind) -> usize {
        self.cells.iter().filter(|&&c| c == kind).count()
    }

    pub fn iter(&self) -> impl Iterator<Item = (GridPos, CellKind)> + '_ {
        self.cells.iter().enumerate().map(|(i, &kind)| {
            let pos = GridPos::new((i % self.size) as i32, (i / self.size) as i32);
            (pos, kind)
        })
    }
}

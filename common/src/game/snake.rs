use crate::log;

use super::types::{GridPos, Heading, Segment};

/// The player snake: an ordered list of continuous-position segments with
/// the head at index 0, plus the current heading.
///
/// The head accumulates sub-cell movement every tick; the body only follows
/// when the head's truncated cell changes, so simulation speed stays
/// independent of the frame rate.
#[derive(Clone, Debug)]
pub struct Snake {
    body: Vec<Segment>,
    heading: Heading,
    capacity: usize,
}

impl Snake {
    pub fn new(spawn: GridPos, heading: Heading, capacity: usize) -> Self {
        let mut body = Vec::with_capacity(capacity);
        body.push(Segment::new(spawn.x as f32, spawn.y as f32));
        Self {
            body,
            heading,
            capacity,
        }
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn segments(&self) -> &[Segment] {
        &self.body
    }

    pub fn head(&self) -> Segment {
        *self.body.first().expect("Snake body should never be empty")
    }

    pub fn head_cell(&self) -> GridPos {
        self.head().cell()
    }

    pub fn heading(&self) -> Heading {
        self.heading
    }

    pub fn set_heading(&mut self, heading: Heading) {
        self.heading = heading;
    }

    /// Advances the head by `heading * dt * speed` grid units. When the head
    /// crosses a cell boundary, every trailing segment is shifted one slot
    /// toward its predecessor, tail-to-head so no value is overwritten
    /// before it is read.
    pub fn advance(&mut self, dt: f32, speed: f32) {
        let head = self.head();
        let new_head = Segment::new(
            head.x + self.heading.dx as f32 * dt * speed,
            head.y + self.heading.dy as f32 * dt * speed,
        );

        if new_head.cell() != head.cell() {
            for i in (1..self.body.len()).rev() {
                self.body[i] = self.body[i - 1];
            }
        }

        self.body[0] = new_head;
    }

    /// Appends one segment a full grid unit beyond the tail, continuing the
    /// direction the tail moves away from its predecessor. With a single
    /// segment the new tail goes one unit behind the head, against the
    /// heading. At capacity growth is dropped and reported.
    pub fn extend(&mut self) {
        if self.body.len() >= self.capacity {
            log!(
                "Snake at maximum length {}, dropping growth",
                self.capacity
            );
            return;
        }

        let tail = *self.body.last().expect("Snake body should never be empty");

        let (step_x, step_y) = if self.body.len() > 1 {
            let prev = self.body[self.body.len() - 2];
            let dx = tail.x - prev.x;
            let dy = tail.y - prev.y;
            if dx == 0.0 {
                (0.0, if dy > 0.0 { 1.0 } else { -1.0 })
            } else {
                (if dx > 0.0 { 1.0 } else { -1.0 }, 0.0)
            }
        } else {
            (-(self.heading.dx as f32), -(self.heading.dy as f32))
        };

        self.body
            .push(Segment::new(tail.x + step_x, tail.y + step_y));
    }

    /// Removes the tail segment, down to length 0. The caller treats an
    /// empty snake as a lost round.
    pub fn shrink(&mut self) {
        self.body.pop();
    }

    /// Unit direction from segment `index` to segment `index + offset`
    /// (truncated cells), falling back to the current heading when the
    /// snake is a single segment or the target index is out of range.
    ///
    /// `heading_between(0, 1)` points from the head back into the body; a
    /// proposed turn equal to it would reverse the snake into itself.
    pub fn heading_between(&self, index: usize, offset: usize) -> Heading {
        let target = index + offset;
        if self.body.len() < 2 || index >= self.body.len() || target >= self.body.len() {
            return self.heading;
        }

        let from = self.body[index].cell();
        let to = self.body[target].cell();

        if from.x == to.x && from.y != to.y {
            if to.y > from.y { Heading::DOWN } else { Heading::UP }
        } else if from.y == to.y && from.x != to.x {
            if to.x > from.x { Heading::RIGHT } else { Heading::LEFT }
        } else {
            self.heading
        }
    }

    #[cfg(test)]
    pub(crate) fn from_segments(segments: Vec<Segment>, heading: Heading, capacity: usize) -> Self {
        Self {
            body: segments,
            heading,
            capacity,
        }
    }
}

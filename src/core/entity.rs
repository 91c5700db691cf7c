use std::cell::RefCell;
use std::rc::Rc;

use crate::core::render::{RenderTarget, Sprite};

/// A point on the grid in cell units. Fractional while an entity is in
/// motion between cells.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Horizontal travel direction for lane hazards. A hazard holds exactly one
/// of these at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    pub fn signum(self) -> f64 {
        match self {
            Direction::Left => -1.0,
            Direction::Right => 1.0,
        }
    }
}

/// Anything that participates in the per-tick update/render cycle with a
/// grid position.
///
/// `update` defaults to a no-op so stationary entities only provide the
/// accessors. Movement inside `update` must be scaled by `dt` so the game
/// runs at the same speed regardless of frame rate.
pub trait Entity {
    fn update(&mut self, _dt: f64) {}

    fn position(&self) -> Position;

    /// Logical sprite identifier; resolving it to something drawable is the
    /// render target's business.
    fn sprite(&self) -> Sprite;

    fn render(&self, target: &mut dyn RenderTarget) {
        target.draw_sprite(self.sprite(), self.position());
    }
}

/// Entities are shared between the registry and whatever factory created
/// them; `Rc` pointer identity is what registration dedupes on.
pub type SharedEntity = Rc<RefCell<dyn Entity>>;

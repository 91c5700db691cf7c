use rand::Rng;

use crate::core::board::Board;
use crate::core::entity::{Direction, Entity, Position};
use crate::core::render::Sprite;

pub const BUG_SPRITE: Sprite = Sprite("enemy-bug");

/// How far past either edge a bug travels before turning around, in cells.
const TURN_MARGIN: f64 = 1.0;
/// Top speed in cells per second; each bug rolls its own below this.
const MAX_SPEED: f64 = 3.0;

/// A lane hazard. Shuttles along one stone lane forever, reversing once it
/// is more than `TURN_MARGIN` past an edge; its x is intentionally allowed
/// outside the visible field.
pub struct Bug {
    board: Board,
    pos: Position,
    speed: f64,
    direction: Direction,
}

impl Bug {
    /// Random lane, speed and travel side. The bug enters from one cell
    /// beyond the edge it spawns at, headed into the field.
    pub fn random(rng: &mut impl Rng, board: Board) -> Self {
        let from_left = rng.random_bool(0.5);
        let lane = rng.random_range(board.lanes()) as f64;
        Self {
            board,
            pos: Position::new(
                if from_left {
                    board.left - 1.0
                } else {
                    board.right + 1.0
                },
                lane,
            ),
            speed: rng.random_range(0.0..MAX_SPEED),
            direction: if from_left {
                Direction::Right
            } else {
                Direction::Left
            },
        }
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }
}

impl Entity for Bug {
    fn update(&mut self, dt: f64) {
        self.pos.x += dt * self.speed * self.direction.signum();
        if self.pos.x > self.board.right + TURN_MARGIN {
            self.direction = Direction::Left;
        }
        if self.pos.x < self.board.left - TURN_MARGIN {
            self.direction = Direction::Right;
        }
    }

    fn position(&self) -> Position {
        self.pos
    }

    fn sprite(&self) -> Sprite {
        BUG_SPRITE
    }
}

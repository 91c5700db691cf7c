use crate::core::board::Board;
use crate::core::entity::{Entity, Position};
use crate::core::events::MoveKey;
use crate::core::render::Sprite;

/// Selectable character skins, cycled on the welcome screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Skin {
    Boy,
    CatGirl,
    HornGirl,
    PinkGirl,
    Princess,
}

impl Skin {
    const ALL: [Skin; 5] = [
        Skin::Boy,
        Skin::CatGirl,
        Skin::HornGirl,
        Skin::PinkGirl,
        Skin::Princess,
    ];

    pub fn sprite(self) -> Sprite {
        Sprite(match self {
            Skin::Boy => "char-boy",
            Skin::CatGirl => "char-cat-girl",
            Skin::HornGirl => "char-horn-girl",
            Skin::PinkGirl => "char-pink-girl",
            Skin::Princess => "char-princess-girl",
        })
    }

    fn index(self) -> usize {
        Self::ALL.iter().position(|skin| *skin == self).unwrap_or(0)
    }

    pub fn next(self) -> Skin {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Skin {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// The player token. Moves one cell per key press; its own input handler
/// clamps it to the board edges, so stepping past an edge is a no-op rather
/// than an error. Stationary between inputs, hence no `update` override.
pub struct PlayerToken {
    board: Board,
    pos: Position,
    skin: Skin,
}

impl PlayerToken {
    pub fn new(board: Board) -> Self {
        Self {
            board,
            pos: board.spawn(),
            skin: Skin::Boy,
        }
    }

    /// Back to the spawn cell; wired to the `start` channel.
    pub fn reset(&mut self) {
        self.pos = self.board.spawn();
    }

    pub fn handle_input(&mut self, key: MoveKey) {
        match key {
            MoveKey::Left => {
                if self.pos.x > self.board.left {
                    self.pos.x -= 1.0;
                }
            }
            MoveKey::Right => {
                if self.pos.x < self.board.right {
                    self.pos.x += 1.0;
                }
            }
            MoveKey::Up => {
                if self.pos.y > self.board.top {
                    self.pos.y -= 1.0;
                }
            }
            MoveKey::Down => {
                if self.pos.y < self.board.bottom {
                    self.pos.y += 1.0;
                }
            }
        }
    }

    /// Menu-only skin cycling; up/down do nothing there.
    pub fn change_skin(&mut self, key: MoveKey) {
        match key {
            MoveKey::Left => self.skin = self.skin.prev(),
            MoveKey::Right => self.skin = self.skin.next(),
            MoveKey::Up | MoveKey::Down => {}
        }
    }

    pub fn skin(&self) -> Skin {
        self.skin
    }
}

impl Entity for PlayerToken {
    fn position(&self) -> Position {
        self.pos
    }

    fn sprite(&self) -> Sprite {
        self.skin.sprite()
    }
}

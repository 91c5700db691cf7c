use anyhow::Result;
use tracing::{debug, info};

use crate::core::board::Board;
use crate::core::collision;
use crate::core::entity::{Position, SharedEntity};
use crate::core::events::{ChannelEvent, EventBus, Listener, MoveKey, KEYUP, MENU_KEYUP, START};
use crate::core::registry::EntityRegistry;
use crate::core::render::RenderTarget;
use crate::core::state::GameState;

/// Largest time delta a single tick will simulate. An uncapped delta after a
/// long stall would let a fast hazard step clean over the player's hitbox.
pub const MAX_TICK_DELTA: f64 = 0.25;

/// Input after the host has translated raw key codes. The three control
/// keys are handled by the engine itself and never reach a channel;
/// movement keys are routed to `keyup` or `menu:keyup` by phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Reset,
    Pause,
    Confirm,
    Move(MoveKey),
}

/// The mutable world handed to channel listeners: everything except the
/// dispatcher itself, so a listener can register entities but can never
/// recursively dispatch or tick.
pub struct EngineCtx {
    pub board: Board,
    pub state: GameState,
    pub registry: EntityRegistry,
}

/// The runtime engine: per-tick update and render over the entity registry,
/// gated by the state machine, with lifecycle events dispatched to outside
/// collaborators.
pub struct Engine {
    ctx: EngineCtx,
    events: EventBus,
}

impl Engine {
    pub fn new(board: Board) -> Self {
        info!(cols = board.cols(), rows = board.rows(), "engine created");
        Self {
            ctx: EngineCtx {
                board,
                state: GameState::new(),
                registry: EntityRegistry::new(),
            },
            events: EventBus::new(),
        }
    }

    pub fn board(&self) -> Board {
        self.ctx.board
    }

    pub fn state(&self) -> &GameState {
        &self.ctx.state
    }

    pub fn registry(&self) -> &EntityRegistry {
        &self.ctx.registry
    }

    pub fn set_player(&mut self, entity: SharedEntity) {
        self.ctx.registry.set_player(entity);
    }

    pub fn add_hazard(&mut self, entity: SharedEntity) {
        self.ctx.registry.add_hazard(entity);
    }

    pub fn remove_hazard(&mut self, entity: &SharedEntity) {
        self.ctx.registry.remove_hazard(entity);
    }

    pub fn on(&mut self, channel: &str, listener: Listener) {
        self.events.on(channel, listener);
    }

    /// Back to the welcome screen from any phase: hazards cleared, the
    /// player left registered, then the `start` channel replayed
    /// synchronously so factories can repopulate the field. A listener
    /// error propagates to the caller.
    pub fn reset(&mut self) -> Result<()> {
        self.ctx.state.restart();
        self.ctx.registry.clear_hazards();
        debug!("replaying start channel");
        self.events.emit(START, &mut self.ctx, &ChannelEvent::Start)
    }

    pub fn handle_key(&mut self, key: Key) -> Result<()> {
        match key {
            Key::Reset => self.reset(),
            Key::Pause => {
                self.ctx.state.pause();
                Ok(())
            }
            Key::Confirm => {
                let state = &mut self.ctx.state;
                if state.is_game_over() {
                    // Enter is dead once the run has ended; only reset revives it.
                } else if !state.is_started() {
                    state.start();
                } else if state.is_playing() {
                    state.pause();
                } else {
                    state.resume();
                }
                Ok(())
            }
            Key::Move(direction) => {
                let channel = if self.ctx.state.is_playing() {
                    KEYUP
                } else {
                    MENU_KEYUP
                };
                self.events
                    .emit(channel, &mut self.ctx, &ChannelEvent::Key(direction))
            }
        }
    }

    /// One tick of the loop. Simulation (entity updates, collision, win
    /// check) runs only while Playing; rendering runs every tick so the
    /// last frame stays visible while paused or over.
    pub fn tick(&mut self, dt: f64, target: &mut dyn RenderTarget) {
        let dt = dt.min(MAX_TICK_DELTA);
        if self.ctx.state.is_playing() {
            self.ctx.registry.update_all(dt);
            self.check_collisions();
            self.check_win();
        }
        self.render(target);
    }

    /// Absent player is a legal, inert state: nothing to collide with.
    fn check_collisions(&mut self) {
        let hit = match self.ctx.registry.player() {
            Some(player) => {
                let player_pos = player.borrow().position();
                let hazard_positions: Vec<Position> = self
                    .ctx
                    .registry
                    .hazards()
                    .iter()
                    .map(|hazard| hazard.borrow().position())
                    .collect();
                collision::collides(player_pos, hazard_positions)
            }
            None => false,
        };
        if hit {
            info!("player hit a hazard");
            self.ctx.state.lose();
        }
    }

    fn check_win(&mut self) {
        let reached_top = self
            .ctx
            .registry
            .player()
            .is_some_and(|player| player.borrow().position().y == self.ctx.board.top);
        if reached_top {
            info!("player reached the far edge");
            self.ctx.state.win();
        }
    }

    /// Fixed z-order: background grid, then hazards, then the player.
    fn render(&self, target: &mut dyn RenderTarget) {
        target.clear();
        let board = self.ctx.board;
        for row in 0..board.rows() {
            for col in 0..board.cols() {
                target.draw_cell(col, row, board.terrain(row));
            }
        }
        self.ctx.registry.render_all(target);
    }
}

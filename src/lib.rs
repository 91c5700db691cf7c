pub mod cli;
pub mod config;
pub mod core;
pub mod game;
pub mod runner;
pub mod tui;

// Re-export for convenience
pub use crate::core::board::{Board, Terrain};
pub use crate::core::engine::{Engine, EngineCtx, Key};
pub use crate::core::entity::{Direction, Entity, Position, SharedEntity};
pub use crate::core::events::{ChannelEvent, Listener, MoveKey};
pub use crate::core::render::{RenderTarget, Sprite};
pub use crate::core::state::{GameState, Phase};

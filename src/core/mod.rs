pub mod board;
pub mod collision;
pub mod engine;
pub mod entity;
pub mod events;
pub mod registry;
pub mod render;
pub mod state;

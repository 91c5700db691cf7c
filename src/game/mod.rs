pub mod hazard;
pub mod player;
pub mod setup;

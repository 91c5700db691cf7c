use crate::core::board::Terrain;
use crate::core::entity::Position;

/// Opaque logical sprite identifier. The core only reads these off entities
/// and hands them to the render target; it never resolves or caches the
/// underlying drawable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Sprite(pub &'static str);

/// Abstract drawing surface the engine renders into once per tick: the
/// background grid cell by cell, then every entity's sprite.
pub trait RenderTarget {
    fn clear(&mut self);
    fn draw_cell(&mut self, col: usize, row: usize, terrain: Terrain);
    fn draw_sprite(&mut self, sprite: Sprite, pos: Position);
}

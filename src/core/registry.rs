use std::rc::Rc;

use tracing::warn;

use crate::core::entity::SharedEntity;
use crate::core::render::RenderTarget;

/// Tracks the singular player and the active hazard set, both read every
/// frame by the game loop.
///
/// Registration is validated but never fatal: a duplicate add or an absent
/// remove logs a warning and leaves the collection unchanged. The entity
/// capability itself is guaranteed by the `Entity` trait bound, so identity
/// is the only thing left to check at runtime.
///
/// Render-order policy: hazards draw before the player, so the player token
/// always sits on top of traffic.
#[derive(Default)]
pub struct EntityRegistry {
    player: Option<SharedEntity>,
    hazards: Vec<SharedEntity>,
}

impl EntityRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the singular player reference. At most one player exists at
    /// a time; the previous reference is dropped from the registry only.
    pub fn set_player(&mut self, entity: SharedEntity) {
        self.player = Some(entity);
    }

    pub fn player(&self) -> Option<&SharedEntity> {
        self.player.as_ref()
    }

    pub fn add_hazard(&mut self, entity: SharedEntity) {
        if self.hazards.iter().any(|known| Rc::ptr_eq(known, &entity)) {
            warn!("hazard is already registered, ignoring");
            return;
        }
        self.hazards.push(entity);
    }

    pub fn remove_hazard(&mut self, entity: &SharedEntity) {
        match self.hazards.iter().position(|known| Rc::ptr_eq(known, entity)) {
            Some(index) => {
                self.hazards.remove(index);
            }
            None => warn!("hazard is not registered, ignoring"),
        }
    }

    /// Drops every hazard but leaves the player slot alone; a restart keeps
    /// the player object alive and merely repositions it from outside.
    pub fn clear_hazards(&mut self) {
        self.hazards.clear();
    }

    pub fn hazards(&self) -> &[SharedEntity] {
        &self.hazards
    }

    pub fn hazard_count(&self) -> usize {
        self.hazards.len()
    }

    /// Advances every hazard, then the player if one is set.
    pub fn update_all(&self, dt: f64) {
        for hazard in &self.hazards {
            hazard.borrow_mut().update(dt);
        }
        if let Some(player) = &self.player {
            player.borrow_mut().update(dt);
        }
    }

    /// Draws hazards first, then the player, per the render-order policy.
    pub fn render_all(&self, target: &mut dyn RenderTarget) {
        for hazard in &self.hazards {
            hazard.borrow().render(target);
        }
        if let Some(player) = &self.player {
            player.borrow().render(target);
        }
    }
}

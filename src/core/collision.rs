use crate::core::entity::Position;

/// Symmetric half-width of the tolerant hitbox, in grid units.
pub const HITBOX_HALF_WIDTH: f64 = 0.8;

/// True when any hazard is in contact with the player.
///
/// Contact is one-dimensional: entities collide only on the exact same row
/// (rows are integer-valued, so the equality is safe), and within
/// `HITBOX_HALF_WIDTH` of each other along it. Deliberately not a real
/// bounding-box test.
pub fn collides(player: Position, hazards: impl IntoIterator<Item = Position>) -> bool {
    hazards.into_iter().any(|hazard| {
        hazard.y == player.y
            && hazard.x + HITBOX_HALF_WIDTH >= player.x
            && hazard.x <= player.x + HITBOX_HALF_WIDTH
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(x: f64, y: f64) -> Position {
        Position::new(x, y)
    }

    #[test]
    fn overlap_on_same_row_collides() {
        assert!(collides(at(2.0, 3.0), [at(2.5, 3.0)]));
    }

    #[test]
    fn distant_hazard_does_not_collide() {
        assert!(!collides(at(2.0, 3.0), [at(4.0, 3.0)]));
    }

    #[test]
    fn adjacent_row_never_collides() {
        assert!(!collides(at(2.0, 3.0), [at(2.0, 2.0)]));
    }

    #[test]
    fn contact_at_exactly_the_half_width() {
        assert!(collides(at(2.0, 3.0), [at(2.8, 3.0)]));
        assert!(collides(at(2.0, 3.0), [at(1.2, 3.0)]));
        assert!(!collides(at(2.0, 3.0), [at(2.81, 3.0)]));
    }

    #[test]
    fn any_of_several_hazards_suffices() {
        let hazards = [at(0.0, 1.0), at(4.0, 2.0), at(2.3, 3.0)];
        assert!(collides(at(2.0, 3.0), hazards));
    }

    #[test]
    fn no_hazards_no_collision() {
        assert!(!collides(at(2.0, 3.0), []));
    }
}

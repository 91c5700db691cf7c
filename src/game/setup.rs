use std::cell::RefCell;
use std::rc::Rc;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::core::engine::Engine;
use crate::core::events::{ChannelEvent, KEYUP, MENU_KEYUP, START};
use crate::game::hazard::Bug;
use crate::game::player::PlayerToken;

/// Bugs spawned per run, bounds inclusive.
const MIN_BUGS: u32 = 1;
const MAX_BUGS: u32 = 10;

/// Wires the playable game onto the engine: registers the player token and
/// installs the listeners that repopulate the field on every `start`
/// replay, move the player during a run, and cycle the skin in the menu.
///
/// Returns the shared player so callers (and tests) can inspect it; the
/// registry keeps its own reference across resets.
pub fn install(engine: &mut Engine, seed: Option<u64>) -> Rc<RefCell<PlayerToken>> {
    let rng = Rc::new(RefCell::new(match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }));

    let player = Rc::new(RefCell::new(PlayerToken::new(engine.board())));
    engine.set_player(player.clone());

    let reset_player = player.clone();
    engine.on(
        START,
        Rc::new(move |_ctx, _event| {
            reset_player.borrow_mut().reset();
            Ok(())
        }),
    );

    let spawn_rng = rng.clone();
    engine.on(
        START,
        Rc::new(move |ctx, _event| {
            let mut rng = spawn_rng.borrow_mut();
            let count = rng.random_range(MIN_BUGS..=MAX_BUGS);
            debug!(count, "spawning bugs");
            for _ in 0..count {
                ctx.registry
                    .add_hazard(Rc::new(RefCell::new(Bug::random(&mut *rng, ctx.board))));
            }
            Ok(())
        }),
    );

    let moving_player = player.clone();
    engine.on(
        KEYUP,
        Rc::new(move |_ctx, event| {
            if let ChannelEvent::Key(key) = event {
                moving_player.borrow_mut().handle_input(*key);
            }
            Ok(())
        }),
    );

    let menu_player = player.clone();
    engine.on(
        MENU_KEYUP,
        Rc::new(move |_ctx, event| {
            if let ChannelEvent::Key(key) = event {
                menu_player.borrow_mut().change_skin(*key);
            }
            Ok(())
        }),
    );

    player
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::board::Board;
    use crate::core::engine::Key;
    use crate::core::entity::Entity;
    use crate::core::events::MoveKey;
    use crate::game::player::Skin;

    fn game() -> (Engine, Rc<RefCell<PlayerToken>>) {
        let mut engine = Engine::new(Board::CLASSIC);
        let player = install(&mut engine, Some(7));
        engine.reset().unwrap();
        (engine, player)
    }

    #[test]
    fn reset_places_the_player_and_spawns_bugs() {
        let (engine, player) = game();
        assert_eq!(player.borrow().position(), Board::CLASSIC.spawn());
        let count = engine.registry().hazard_count();
        assert!((1..=10).contains(&count));
    }

    #[test]
    fn reset_respawns_a_fresh_field_but_keeps_the_player() {
        let (mut engine, player) = game();
        engine.reset().unwrap();
        assert!(engine.registry().hazard_count() >= 1);
        assert!(engine.registry().player().is_some());
        assert_eq!(player.borrow().position(), Board::CLASSIC.spawn());
    }

    #[test]
    fn same_seed_same_field() {
        let counts: Vec<usize> = (0..2)
            .map(|_| {
                let mut engine = Engine::new(Board::CLASSIC);
                install(&mut engine, Some(99));
                engine.reset().unwrap();
                engine.registry().hazard_count()
            })
            .collect();
        assert_eq!(counts[0], counts[1]);
    }

    #[test]
    fn arrows_move_the_player_only_while_playing() {
        let (mut engine, player) = game();

        engine.handle_key(Key::Move(MoveKey::Up)).unwrap();
        assert_eq!(player.borrow().position(), Board::CLASSIC.spawn());

        engine.handle_key(Key::Confirm).unwrap();
        engine.handle_key(Key::Move(MoveKey::Up)).unwrap();
        assert_eq!(player.borrow().position().y, Board::CLASSIC.spawn().y - 1.0);
    }

    #[test]
    fn arrows_cycle_the_skin_in_the_menu() {
        let (mut engine, player) = game();

        engine.handle_key(Key::Move(MoveKey::Right)).unwrap();
        assert_eq!(player.borrow().skin(), Skin::CatGirl);

        engine.handle_key(Key::Confirm).unwrap();
        engine.handle_key(Key::Move(MoveKey::Right)).unwrap();
        assert_eq!(player.borrow().skin(), Skin::CatGirl);
    }
}

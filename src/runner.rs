use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{Event, EventStream, KeyCode, KeyEventKind, KeyModifiers};
use futures_util::StreamExt;
use tracing::debug;

use crate::core::engine::{Engine, Key};
use crate::core::events::MoveKey;
use crate::tui::TerminalCanvas;

/// Drives the engine against a real terminal until the player quits.
pub async fn run(mut engine: Engine, fps: f64, debug_hitboxes: bool) -> Result<()> {
    let terminal = ratatui::init();
    let result = run_loop(&mut engine, terminal, fps, debug_hitboxes).await;
    ratatui::restore();
    result
}

/// The frame loop: one engine tick per frame interval, input handled as it
/// arrives in between. The time delta is sampled from a monotonic clock,
/// with the baseline taken right before the first frame so it sees dt ≈ 0.
async fn run_loop(
    engine: &mut Engine,
    mut terminal: ratatui::DefaultTerminal,
    fps: f64,
    debug_hitboxes: bool,
) -> Result<()> {
    let mut canvas = TerminalCanvas::new(engine.board(), debug_hitboxes);
    let mut input = EventStream::new();
    let mut frames = tokio::time::interval(Duration::from_secs_f64(1.0 / fps.max(1.0)));
    frames.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

    // populate the field before the first frame
    engine.reset()?;
    let mut last_tick = Instant::now();

    loop {
        tokio::select! {
            _ = frames.tick() => {
                let dt = last_tick.elapsed().as_secs_f64();
                last_tick = Instant::now();

                engine.tick(dt, &mut canvas);
                let phase = engine.state().phase();
                terminal.draw(|frame| canvas.present(frame, phase))?;
            }

            Some(event) = input.next() => {
                if let Event::Key(key) = event? {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    let ctrl_c = key.code == KeyCode::Char('c')
                        && key.modifiers.contains(KeyModifiers::CONTROL);
                    if key.code == KeyCode::Char('q') || ctrl_c {
                        debug!("quit requested");
                        break;
                    }
                    if let Some(key) = translate(key.code) {
                        engine.handle_key(key)?;
                    }
                }
            }
        }
    }

    Ok(())
}

/// Raw key codes stop here; the engine only ever sees semantic tokens.
fn translate(code: KeyCode) -> Option<Key> {
    match code {
        KeyCode::Char('r') => Some(Key::Reset),
        KeyCode::Esc => Some(Key::Pause),
        KeyCode::Enter => Some(Key::Confirm),
        KeyCode::Up => Some(Key::Move(MoveKey::Up)),
        KeyCode::Down => Some(Key::Move(MoveKey::Down)),
        KeyCode::Left => Some(Key::Move(MoveKey::Left)),
        KeyCode::Right => Some(Key::Move(MoveKey::Right)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn control_keys_translate_to_engine_keys() {
        assert_eq!(translate(KeyCode::Char('r')), Some(Key::Reset));
        assert_eq!(translate(KeyCode::Esc), Some(Key::Pause));
        assert_eq!(translate(KeyCode::Enter), Some(Key::Confirm));
    }

    #[test]
    fn arrows_translate_to_movement_tokens() {
        assert_eq!(translate(KeyCode::Up), Some(Key::Move(MoveKey::Up)));
        assert_eq!(translate(KeyCode::Down), Some(Key::Move(MoveKey::Down)));
        assert_eq!(translate(KeyCode::Left), Some(Key::Move(MoveKey::Left)));
        assert_eq!(translate(KeyCode::Right), Some(Key::Move(MoveKey::Right)));
    }

    #[test]
    fn unmapped_keys_never_reach_the_engine() {
        assert_eq!(translate(KeyCode::Char('x')), None);
        assert_eq!(translate(KeyCode::Tab), None);
    }
}

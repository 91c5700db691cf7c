use std::collections::HashMap;
use std::rc::Rc;

use anyhow::Result;

use crate::core::engine::EngineCtx;

/// Replayed on every reset, after the state machine and hazard collection
/// have been cleared. Entity factories hang off this channel.
pub const START: &str = "start";
/// Movement input while a run is advancing.
pub const KEYUP: &str = "keyup";
/// Movement input in any other phase (welcome screen, paused, game over).
pub const MENU_KEYUP: &str = "menu:keyup";

/// Semantic movement tokens. Raw key codes are translated before they reach
/// the core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveKey {
    Up,
    Down,
    Left,
    Right,
}

/// Payload handed to channel listeners.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelEvent {
    Start,
    Key(MoveKey),
}

/// Listeners get the mutable engine context so they can register entities
/// and reposition things, and a fallible return so a fault in one listener
/// surfaces to whoever triggered the dispatch.
pub type Listener = Rc<dyn Fn(&mut EngineCtx, &ChannelEvent) -> Result<()>>;

/// Minimal publish/subscribe registry keyed by channel name. Per channel,
/// insertion order is dispatch order and listeners are deduplicated by `Rc`
/// identity.
#[derive(Default)]
pub struct EventBus {
    channels: HashMap<String, Vec<Listener>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a listener. Registering the same `Rc` twice on one channel
    /// is a no-op.
    pub fn on(&mut self, channel: &str, listener: Listener) {
        let listeners = self.channels.entry(channel.to_string()).or_default();
        if listeners.iter().any(|known| Rc::ptr_eq(known, &listener)) {
            return;
        }
        listeners.push(listener);
    }

    /// Fires every listener on the channel in registration order. The first
    /// error aborts the remaining listeners and propagates to the caller;
    /// no per-listener isolation.
    pub fn emit(&self, channel: &str, ctx: &mut EngineCtx, event: &ChannelEvent) -> Result<()> {
        let Some(listeners) = self.channels.get(channel) else {
            return Ok(());
        };
        for listener in listeners.clone() {
            listener(ctx, event)?;
        }
        Ok(())
    }

    pub fn listener_count(&self, channel: &str) -> usize {
        self.channels.get(channel).map_or(0, Vec::len)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use anyhow::anyhow;

    use super::*;
    use crate::core::board::Board;
    use crate::core::registry::EntityRegistry;
    use crate::core::state::GameState;

    fn ctx() -> EngineCtx {
        EngineCtx {
            board: Board::CLASSIC,
            state: GameState::new(),
            registry: EntityRegistry::new(),
        }
    }

    fn recording(log: &Rc<RefCell<Vec<u32>>>, tag: u32) -> Listener {
        let log = log.clone();
        Rc::new(move |_ctx, _event| {
            log.borrow_mut().push(tag);
            Ok(())
        })
    }

    #[test]
    fn listeners_fire_in_registration_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut bus = EventBus::new();
        bus.on("start", recording(&log, 1));
        bus.on("start", recording(&log, 2));
        bus.on("start", recording(&log, 3));

        bus.emit("start", &mut ctx(), &ChannelEvent::Start).unwrap();
        assert_eq!(*log.borrow(), vec![1, 2, 3]);
    }

    #[test]
    fn duplicate_listener_registers_once() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let listener = recording(&log, 7);
        let mut bus = EventBus::new();
        bus.on("start", listener.clone());
        bus.on("start", listener);
        assert_eq!(bus.listener_count("start"), 1);

        bus.emit("start", &mut ctx(), &ChannelEvent::Start).unwrap();
        assert_eq!(*log.borrow(), vec![7]);
    }

    #[test]
    fn channels_are_independent() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut bus = EventBus::new();
        bus.on("keyup", recording(&log, 1));
        bus.on("menu:keyup", recording(&log, 2));

        bus.emit("menu:keyup", &mut ctx(), &ChannelEvent::Key(MoveKey::Left))
            .unwrap();
        assert_eq!(*log.borrow(), vec![2]);
    }

    #[test]
    fn emitting_an_unknown_channel_is_fine() {
        let bus = EventBus::new();
        bus.emit("nobody-home", &mut ctx(), &ChannelEvent::Start)
            .unwrap();
    }

    #[test]
    fn a_failing_listener_aborts_the_rest() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut bus = EventBus::new();
        bus.on("start", recording(&log, 1));
        bus.on("start", Rc::new(|_ctx, _event| Err(anyhow!("listener fault"))));
        bus.on("start", recording(&log, 3));

        let result = bus.emit("start", &mut ctx(), &ChannelEvent::Start);
        assert!(result.is_err());
        assert_eq!(*log.borrow(), vec![1]);
    }
}

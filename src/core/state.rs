use tracing::debug;

/// Lifecycle phase of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    NotStarted,
    Playing,
    Paused,
    Won,
    Lost,
}

/// The game state machine, and the only mutator of "is the simulation
/// advancing".
///
/// Legal transitions: NotStarted → Playing ⇄ Paused; Playing → Won | Lost;
/// Restart from anywhere back to NotStarted. Illegal triggers are ignored
/// rather than rejected — the driving input handler simply gets no effect.
#[derive(Debug)]
pub struct GameState {
    phase: Phase,
}

impl GameState {
    pub fn new() -> Self {
        Self {
            phase: Phase::NotStarted,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_playing(&self) -> bool {
        self.phase == Phase::Playing
    }

    /// A run is underway, whether or not it is currently advancing. False
    /// again once the run ends.
    pub fn is_started(&self) -> bool {
        matches!(self.phase, Phase::Playing | Phase::Paused)
    }

    pub fn is_game_over(&self) -> bool {
        matches!(self.phase, Phase::Won | Phase::Lost)
    }

    pub fn start(&mut self) {
        if self.phase == Phase::NotStarted {
            self.set(Phase::Playing);
        }
    }

    pub fn pause(&mut self) {
        if self.phase == Phase::Playing {
            self.set(Phase::Paused);
        }
    }

    pub fn resume(&mut self) {
        if self.phase == Phase::Paused {
            self.set(Phase::Playing);
        }
    }

    pub fn win(&mut self) {
        if self.phase == Phase::Playing {
            self.set(Phase::Won);
        }
    }

    pub fn lose(&mut self) {
        if self.phase == Phase::Playing {
            self.set(Phase::Lost);
        }
    }

    pub fn restart(&mut self) {
        self.set(Phase::NotStarted);
    }

    fn set(&mut self, next: Phase) {
        debug!(from = ?self.phase, to = ?next, "phase transition");
        self.phase = next;
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

use std::cell;
use std::time::{Duration, Instant};

use log::{debug, info};

use crate::game::{Command, GameState, GameStatus, StepOutcome};
use crate::score::ScoreStore;

/// Monotonic time source for frame timestamps.
pub trait Clock {
    fn now(&self) -> Instant;
}

/// Wall clock backed by [`Instant::now`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Clock that only moves when told to. Used to drive the loop with
/// synthetic timestamps.
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: cell::Cell<Instant>,
}

impl ManualClock {
    #[must_use]
    pub fn new() -> Self {
        Self {
            now: cell::Cell::new(Instant::now()),
        }
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.now.get()
    }
}

/// What the host reports when asked for the next frame.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum FrameEvent {
    Frame(Instant),
    Quit,
}

/// Display-side collaborator that paces frames and draws them.
pub trait FrameHost {
    type Error;

    /// Waits for the next frame and appends any commands received since the
    /// previous one.
    fn next_frame(&mut self, commands: &mut Vec<Command>) -> Result<FrameEvent, Self::Error>;

    /// Draws a full frame from read-only state.
    fn present(&mut self, state: &GameState) -> Result<(), Self::Error>;
}

/// Owns the game state and gates simulation steps on elapsed frame time.
#[derive(Debug)]
pub struct LoopDriver<S> {
    state: GameState,
    store: S,
    last_tick: Instant,
}

impl<S: ScoreStore> LoopDriver<S> {
    /// Creates a driver whose first step is due one interval after `started_at`.
    ///
    /// The stored high score is loaded into `state`.
    pub fn new(state: GameState, store: S, started_at: Instant) -> Self {
        let state = state.with_high_score(store.load());

        Self {
            state,
            store,
            last_tick: started_at,
        }
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Applies one input command between frames.
    pub fn apply(&mut self, command: Command) {
        let applied = self.state.apply_command(command);
        debug!("command {command:?} applied={applied}");

        match command {
            Command::Restart => info!("restarted on {} grid", self.state.size().side()),
            Command::Resize(_) => info!("resized grid to {}", self.state.size().side()),
            _ => {}
        }
    }

    /// Runs the time-gated update for a frame at `now`.
    ///
    /// At most one step is taken per frame, however many intervals elapsed.
    pub fn frame(&mut self, now: Instant) -> StepOutcome {
        if self.state.status != GameStatus::Running {
            self.last_tick = now;
            return StepOutcome::Idle;
        }

        if now.saturating_duration_since(self.last_tick) < self.state.speed.tick_interval() {
            return StepOutcome::Idle;
        }

        let outcome = self.state.step();
        self.last_tick = now;

        match outcome {
            StepOutcome::Died => info!(
                "snake died after {} ticks: score {} high {}",
                self.state.tick_count, self.state.score, self.state.high_score
            ),
            StepOutcome::Won => info!("board cleared with score {}", self.state.score),
            _ => {}
        }

        if outcome.persists_high_score() {
            self.store.save(self.state.high_score);
        }

        outcome
    }

    /// Drives frames from `host` until it reports [`FrameEvent::Quit`].
    pub fn run<H: FrameHost>(&mut self, host: &mut H) -> Result<(), H::Error> {
        let mut commands = Vec::new();

        loop {
            let now = match host.next_frame(&mut commands)? {
                FrameEvent::Frame(now) => now,
                FrameEvent::Quit => break,
            };

            for command in commands.drain(..) {
                self.apply(command);
            }

            self.frame(now);
            host.present(&self.state)?;
        }

        Ok(())
    }
}

use std::collections::VecDeque;
use std::convert::Infallible;
use std::time::Duration;

use torus_snake::driver::{Clock, FrameEvent, FrameHost, LoopDriver, ManualClock};
use torus_snake::game::{Command, GameState, GameStatus, Overlay};
use torus_snake::grid::{Cell, GridSize};
use torus_snake::score::MemoryScoreStore;
use torus_snake::snake::{Direction, Snake};

const FRAME: Duration = Duration::from_millis(16);

/// Replays scripted commands at a fixed frame rate and records what it drew.
struct ScriptedHost {
    clock: ManualClock,
    script: VecDeque<Vec<Command>>,
    presented: Vec<Presented>,
}

#[derive(Debug, Clone, PartialEq)]
struct Presented {
    head: Cell,
    status: GameStatus,
    overlay: Option<Overlay>,
}

impl ScriptedHost {
    fn new(clock: ManualClock, script: Vec<Vec<Command>>) -> Self {
        Self {
            clock,
            script: script.into(),
            presented: Vec::new(),
        }
    }
}

impl FrameHost for ScriptedHost {
    type Error = Infallible;

    fn next_frame(&mut self, commands: &mut Vec<Command>) -> Result<FrameEvent, Infallible> {
        let Some(batch) = self.script.pop_front() else {
            return Ok(FrameEvent::Quit);
        };

        self.clock.advance(FRAME);
        commands.extend(batch);
        Ok(FrameEvent::Frame(self.clock.now()))
    }

    fn present(&mut self, state: &GameState) -> Result<(), Infallible> {
        self.presented.push(Presented {
            head: state.snake.head(),
            status: state.status,
            overlay: state.overlay(),
        });
        Ok(())
    }
}

fn idle_frames(count: usize) -> Vec<Vec<Command>> {
    vec![Vec::new(); count]
}

fn driver_at(clock: &ManualClock, start: Cell) -> LoopDriver<MemoryScoreStore> {
    let mut state = GameState::new_with_seed(GridSize::new(20), 17);
    state.snake = Snake::new(start, Direction::Right);
    state.food = Some(Cell::new(0, 19));
    LoopDriver::new(state, MemoryScoreStore::default(), clock.now())
}

#[test]
fn every_frame_is_presented_and_steps_follow_the_interval() {
    let clock = ManualClock::new();
    let mut driver = driver_at(&clock, Cell::new(2, 2));
    // 160 ms interval at 16 ms frames: one step every tenth frame.
    let mut host = ScriptedHost::new(clock.clone(), idle_frames(30));

    driver.run(&mut host).expect("scripted host never fails");

    assert_eq!(host.presented.len(), 30);
    assert_eq!(driver.state().tick_count, 3);
    assert_eq!(host.presented[8].head, Cell::new(2, 2));
    assert_eq!(host.presented[9].head, Cell::new(3, 2));
    assert_eq!(host.presented[29].head, Cell::new(5, 2));
}

#[test]
fn paused_frames_keep_rendering_without_advancing() {
    let clock = ManualClock::new();
    let mut driver = driver_at(&clock, Cell::new(2, 2));

    let mut script = vec![vec![Command::TogglePause]];
    script.extend(idle_frames(40));
    script.push(vec![Command::TogglePause]);
    script.extend(idle_frames(10));
    let mut host = ScriptedHost::new(clock.clone(), script);

    driver.run(&mut host).expect("scripted host never fails");

    assert!(
        host.presented[..41]
            .iter()
            .all(|frame| frame.head == Cell::new(2, 2) && frame.status == GameStatus::Paused)
    );
    assert_eq!(host.presented[0].overlay.map(|o| o.title), Some("Game Paused"));
    // Resume waits a full interval from the unpause frame.
    assert_eq!(host.presented[41].overlay, None);
    assert_eq!(host.presented[50].head, Cell::new(3, 2));
    assert_eq!(driver.state().tick_count, 1);
}

#[test]
fn queued_turn_and_restart_flow_through_the_driver() {
    let clock = ManualClock::new();
    let mut driver = driver_at(&clock, Cell::new(5, 5));

    let mut script = vec![vec![
        Command::RequestDirection(Direction::Up),
        Command::RequestDirection(Direction::Down),
    ]];
    script.extend(idle_frames(9));
    script.push(vec![Command::Restart]);
    let mut host = ScriptedHost::new(clock.clone(), script);

    driver.run(&mut host).expect("scripted host never fails");

    // Last request before the tick wins.
    assert_eq!(host.presented[9].head, Cell::new(5, 6));
    assert_eq!(driver.state().snake.head(), Cell::new(10, 10));
    assert_eq!(driver.state().status, GameStatus::Running);
}

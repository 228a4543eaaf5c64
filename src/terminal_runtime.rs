use std::io;

use crossterm::cursor::{Hide, Show};
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::config::FRAME_POLL_INTERVAL;
use crate::driver::{Clock, FrameEvent, FrameHost};
use crate::game::{Command, GameState, Speed};
use crate::grid::GridSize;
use crate::input::{InputAction, InputHandler};
use crate::renderer;

/// Concrete terminal type used by the runtime.
pub type AppTerminal = Terminal<CrosstermBackend<io::Stdout>>;

/// Owns terminal lifecycle (raw mode, alternate screen, mouse capture) for
/// one game session.
///
/// On drop, this type restores terminal state best-effort.
pub struct TerminalSession {
    terminal: AppTerminal,
    mouse_capture: bool,
}

impl TerminalSession {
    /// Enters raw mode, switches to alternate screen, and creates a ratatui terminal.
    pub fn enter(mouse_capture: bool) -> io::Result<Self> {
        enable_raw_mode()?;

        let mut stdout = io::stdout();
        if let Err(error) = execute!(stdout, EnterAlternateScreen, Hide) {
            let _ = disable_raw_mode();
            return Err(error);
        }

        if mouse_capture {
            if let Err(error) = execute!(stdout, EnableMouseCapture) {
                let _ = cleanup_terminal_best_effort(false);
                return Err(error);
            }
        }

        let backend = CrosstermBackend::new(stdout);
        match Terminal::new(backend) {
            Ok(terminal) => Ok(Self {
                terminal,
                mouse_capture,
            }),
            Err(error) => {
                let _ = cleanup_terminal_best_effort(mouse_capture);
                Err(error)
            }
        }
    }

    /// Returns mutable access to the inner ratatui terminal.
    pub fn terminal_mut(&mut self) -> &mut AppTerminal {
        &mut self.terminal
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = cleanup_terminal_best_effort(self.mouse_capture);
    }
}

/// Restores the terminal without a session handle, e.g. from a panic hook.
pub fn cleanup_terminal_best_effort(mouse_capture: bool) -> io::Result<()> {
    let _ = disable_raw_mode();
    let mut stdout = io::stdout();
    if mouse_capture {
        let _ = execute!(stdout, DisableMouseCapture);
    }
    execute!(stdout, Show, LeaveAlternateScreen)
}

/// Frame host that paces frames by polling terminal input and draws with ratatui.
pub struct TerminalHost<C> {
    session: TerminalSession,
    input: InputHandler,
    clock: C,
    actions: Vec<InputAction>,
    speed: Speed,
    grid: GridSize,
}

impl<C: Clock> TerminalHost<C> {
    /// Creates a host; `speed` and `grid` seed the relative speed/grid keys
    /// until the first frame is presented.
    pub fn new(session: TerminalSession, clock: C, speed: Speed, grid: GridSize) -> Self {
        Self {
            session,
            input: InputHandler::new(),
            clock,
            actions: Vec::new(),
            speed,
            grid,
        }
    }
}

impl<C: Clock> FrameHost for TerminalHost<C> {
    type Error = io::Error;

    fn next_frame(&mut self, commands: &mut Vec<Command>) -> io::Result<FrameEvent> {
        self.actions.clear();
        self.input
            .poll_actions(FRAME_POLL_INTERVAL, self.speed, self.grid, &mut self.actions)?;

        for action in self.actions.drain(..) {
            match action {
                InputAction::Command(command) => commands.push(command),
                InputAction::Quit => return Ok(FrameEvent::Quit),
            }
        }

        Ok(FrameEvent::Frame(self.clock.now()))
    }

    fn present(&mut self, state: &GameState) -> io::Result<()> {
        self.speed = state.speed;
        self.grid = state.size();
        self.session
            .terminal_mut()
            .draw(|frame| renderer::render(frame, state))?;
        Ok(())
    }
}

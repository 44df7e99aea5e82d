//! Full-screen terminal session for the page.
//!
//! The page draws on the alternate screen in raw mode. Anything printed before
//! leaving it is lost when the screen is swapped back, so exit notices go
//! through [`TerminalSession::finish`], which leaves first and prints second.

use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver};
use std::sync::Arc;
use std::time::Duration;

/// Switches the terminal in and out of the page's drawing mode.
pub trait ScreenOps: Send + Sync + 'static {
    fn enter(&self) -> io::Result<()>;
    fn leave(&self) -> io::Result<()>;
}

#[derive(Debug, Default)]
pub struct CrosstermScreen;

impl ScreenOps for CrosstermScreen {
    fn enter(&self) -> io::Result<()> {
        use crossterm::{cursor, execute, terminal};

        terminal::enable_raw_mode()?;
        execute!(
            io::stdout(),
            terminal::EnterAlternateScreen,
            cursor::SetCursorStyle::SteadyBar
        )
    }

    fn leave(&self) -> io::Result<()> {
        use crossterm::{cursor, execute, terminal};

        let raw = terminal::disable_raw_mode();
        let screen = execute!(
            io::stdout(),
            terminal::LeaveAlternateScreen,
            cursor::SetCursorStyle::DefaultUserShape,
            cursor::Show
        );
        raw.and(screen)
    }
}

/// Shared handle that leaves the screen at most once, whichever of normal
/// exit, drop or a signal gets there first.
#[derive(Clone)]
pub struct ScreenRestorer {
    left: Arc<AtomicBool>,
    ops: Arc<dyn ScreenOps>,
}

impl ScreenRestorer {
    pub fn leave(&self) -> io::Result<()> {
        if self.left.swap(true, Ordering::SeqCst) {
            return Ok(());
        }
        self.ops.leave()
    }

    pub fn has_left(&self) -> bool {
        self.left.load(Ordering::SeqCst)
    }
}

pub struct TerminalSession {
    restorer: ScreenRestorer,
    notices: Box<dyn Write + Send>,
}

impl TerminalSession {
    /// Enters raw mode and the alternate screen; notices go to stderr.
    pub fn enter() -> io::Result<Self> {
        Self::with_ops(Arc::new(CrosstermScreen), Box::new(io::stderr()))
    }

    pub fn with_ops(ops: Arc<dyn ScreenOps>, notices: Box<dyn Write + Send>) -> io::Result<Self> {
        if let Err(err) = ops.enter() {
            // Raw mode may already be on when the screen switch fails.
            let _ = ops.leave();
            return Err(err);
        }
        Ok(Self {
            restorer: ScreenRestorer {
                left: Arc::new(AtomicBool::new(false)),
                ops,
            },
            notices,
        })
    }

    pub fn restorer(&self) -> ScreenRestorer {
        self.restorer.clone()
    }

    /// Leaves the screen, then prints `notice` (if any) on the normal terminal.
    pub fn finish(mut self, notice: Option<&str>) -> io::Result<()> {
        self.restorer.leave()?;
        if let Some(notice) = notice {
            writeln!(self.notices, "{notice}")?;
            self.notices.flush()?;
        }
        Ok(())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = self.restorer.leave();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationSignal {
    Interrupt,
    Terminate,
}

impl TerminationSignal {
    /// Shell convention: 128 + signal number.
    pub fn exit_code(self) -> u8 {
        match self {
            Self::Interrupt => 130,
            Self::Terminate => 143,
        }
    }
}

/// Delivers SIGINT/SIGTERM to the event loop. If the loop has not wound down
/// within `grace`, the watcher leaves the screen and exits the process itself.
pub struct SignalWatch {
    rx: Receiver<TerminationSignal>,
}

impl SignalWatch {
    #[cfg(unix)]
    pub fn install(restorer: ScreenRestorer, grace: Duration) -> io::Result<Self> {
        use signal_hook::consts::signal::{SIGINT, SIGTERM};
        use signal_hook::iterator::Signals;

        let mut signals = Signals::new([SIGINT, SIGTERM])?;
        let (tx, rx) = mpsc::channel();
        std::thread::spawn(move || {
            let Some(signal) = signals.forever().find_map(|raw| match raw {
                SIGINT => Some(TerminationSignal::Interrupt),
                SIGTERM => Some(TerminationSignal::Terminate),
                _ => None,
            }) else {
                return;
            };
            tracing::info!(?signal, "termination signal received");
            let _ = tx.send(signal);
            std::thread::sleep(grace);
            tracing::warn!(?signal, "event loop did not exit in time; forcing exit");
            let _ = restorer.leave();
            std::process::exit(i32::from(signal.exit_code()));
        });
        Ok(Self { rx })
    }

    #[cfg(not(unix))]
    pub fn install(_restorer: ScreenRestorer, _grace: Duration) -> io::Result<Self> {
        Ok(Self::inert())
    }

    /// A watch that never fires.
    pub fn inert() -> Self {
        let (_tx, rx) = mpsc::channel();
        Self { rx }
    }

    pub fn poll(&self) -> Option<TerminationSignal> {
        self.rx.try_recv().ok()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/tui/terminal_session.rs"]
mod tests;

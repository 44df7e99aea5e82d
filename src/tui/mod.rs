//! Terminal integration (crossterm + ratatui), kept apart from `kernel`/`models`.

pub mod terminal_session;

pub use terminal_session::{
    ScreenOps, ScreenRestorer, SignalWatch, TerminalSession, TerminationSignal,
};

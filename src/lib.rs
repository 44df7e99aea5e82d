//! orgdesk: the company "About Us" page editor with its organization chart.
//!
//! Modules:
//! - models: page document, node ids and the copy-on-write chart engine
//! - kernel: headless state/action/effect store plus service ports and adapters
//! - app: terminal page and chart component (feature `tui`)
//! - tui: terminal setup/restore (feature `tui`)

pub mod kernel;
pub mod models;

#[cfg(feature = "tui")]
pub mod app;
#[cfg(feature = "tui")]
pub mod tui;

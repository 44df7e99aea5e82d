//! Service ports: traits + data contracts.

pub mod document;
pub mod session;
pub mod settings;

pub use document::{DocumentStore, StoreError};
pub use session::{SessionSource, SessionState};
pub use settings::{Settings, ThemeSettings};

//! Service adapters: OS/runtime specific implementations (IO/async).

pub mod json_store;
pub mod memory_store;
pub mod runtime;
pub mod session;
pub mod settings;

pub use json_store::JsonDocumentStore;
pub use memory_store::InMemoryDocumentStore;
pub use runtime::{AppMessage, AsyncRuntime};
pub use session::{EnvSessionSource, StaticSessionSource, IDENTITY_ENV};
pub use settings::{
    default_store_path, ensure_log_dir, ensure_settings_file, get_settings_path, load_settings,
    SettingsError,
};

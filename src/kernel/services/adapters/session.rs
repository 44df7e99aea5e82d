use crate::kernel::services::ports::{SessionSource, SessionState};

pub const IDENTITY_ENV: &str = "ORGDESK_IDENTITY";

/// Reads the signed-in identity from `ORGDESK_IDENTITY`, falling back to the
/// identity configured in settings.
#[derive(Debug, Clone, Default)]
pub struct EnvSessionSource {
    fallback: Option<String>,
}

impl EnvSessionSource {
    pub fn new(fallback: Option<String>) -> Self {
        Self { fallback }
    }
}

impl SessionSource for EnvSessionSource {
    fn resolve(&self) -> SessionState {
        let identity = identity_from(std::env::var(IDENTITY_ENV).ok(), self.fallback.as_deref());
        match identity {
            Some(identity) => SessionState::signed_in(identity),
            None => SessionState::signed_out(),
        }
    }
}

/// First non-blank of the environment value and the configured fallback.
fn identity_from(env: Option<String>, fallback: Option<&str>) -> Option<String> {
    env.as_deref()
        .into_iter()
        .chain(fallback)
        .map(str::trim)
        .find(|value| !value.is_empty())
        .map(str::to_string)
}

#[derive(Debug, Clone)]
pub struct StaticSessionSource(pub SessionState);

impl SessionSource for StaticSessionSource {
    fn resolve(&self) -> SessionState {
        self.0.clone()
    }
}

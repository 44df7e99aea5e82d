/// Who is signed in, as far as the page is concerned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    pub identity: Option<String>,
    pub is_resolving: bool,
}

impl SessionState {
    pub fn resolving() -> Self {
        Self {
            identity: None,
            is_resolving: true,
        }
    }

    pub fn signed_in(identity: impl Into<String>) -> Self {
        Self {
            identity: Some(identity.into()),
            is_resolving: false,
        }
    }

    pub fn signed_out() -> Self {
        Self {
            identity: None,
            is_resolving: false,
        }
    }

    /// Resolution finished and nobody is signed in.
    pub fn requires_login(&self) -> bool {
        !self.is_resolving && self.identity.is_none()
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::resolving()
    }
}

pub trait SessionSource: Send + Sync + 'static {
    fn resolve(&self) -> SessionState;
}

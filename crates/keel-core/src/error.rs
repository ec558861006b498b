use thiserror::Error;

/// Which scope stack an error refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScopeKind {
    Theme,
    Layout,
    Window,
    Parent,
}

impl std::fmt::Display for ScopeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ScopeKind::Theme => "theme",
            ScopeKind::Layout => "layout",
            ScopeKind::Window => "window",
            ScopeKind::Parent => "parent",
        };
        f.write_str(name)
    }
}

/// Configuration and discipline errors.
///
/// Only [`UiError::InvalidConfig`] is ever returned to the caller. The other
/// variants describe fatal conditions; the engine panics with their message
/// because continuing would desynchronize the persistent tree from what is on
/// screen.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum UiError {
    #[error("invalid config: {field} {reason}")]
    InvalidConfig {
        field: &'static str,
        reason: &'static str,
    },
    #[error("identity table exhausted ({capacity} slots); raise UiConfig::identity_capacity")]
    IdentityTableFull { capacity: usize },
    #[error("{scope} stack overflow (depth {depth})")]
    ScopeOverflow { scope: ScopeKind, depth: usize },
    #[error("pop on empty {scope} stack")]
    ScopeUnderflow { scope: ScopeKind },
    #[error("{scope} stack unbalanced at end of frame ({depth} entries left open)")]
    UnbalancedScope { scope: ScopeKind, depth: usize },
    #[error("widget built outside a begin()/end() bracket")]
    OutsideFrame,
    #[error("begin() called while a frame is already open")]
    FrameAlreadyOpen,
}

pub type Result<T, E = UiError> = std::result::Result<T, E>;

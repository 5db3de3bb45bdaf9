use thiserror::Error;

/// Top-level error type used across the entire controller.
#[derive(Debug, Error)]
pub enum StatusBarError {
    #[error("config error: {0}")]
    Config(String),

    /// Malformed hex string or unknown named color.
    #[error("invalid color: {0}")]
    InvalidColor(String),

    /// A bridge action was invoked with a missing or mistyped argument.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The platform (or this window) lacks the requested capability.
    #[error("unsupported operation: {0}")]
    Unsupported(String),

    /// An operation was invoked before `ready()` attached the controller
    /// to the active window.
    #[error("status bar controller is not ready")]
    NotReady,

    /// The UI thread is gone or dropped the call before responding.
    #[error("UI thread error: {0}")]
    Ui(String),

    #[error("bridge error: {0}")]
    Bridge(String),

    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl StatusBarError {
    /// Stable taxonomy string carried in bridge failure payloads.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Config(_) => "config",
            Self::InvalidColor(_) => "invalid-color-string",
            Self::InvalidArgument(_) => "invalid-argument",
            Self::Unsupported(_) => "unsupported-operation",
            Self::NotReady => "not-ready",
            Self::Ui(_) => "ui-thread",
            Self::Bridge(_) => "bridge",
            Self::Io { .. } => "io",
        }
    }
}

pub type Result<T, E = StatusBarError> = std::result::Result<T, E>;

//! Error types for gateway calls and controller operations.

use thiserror::Error;

/// Result type for gateway operations
pub type GatewayResult<T> = Result<T, GatewayError>;

/// Failure of a single remote store call
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GatewayError {
    #[error("network error: {0}")]
    Network(String),

    #[error("remote store returned {status}: {message}")]
    Status { status: u16, message: String },

    #[error("malformed response: {0}")]
    Decode(String),

    #[error("insert returned no row")]
    EmptyInsert,
}

impl From<reqwest::Error> for GatewayError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            GatewayError::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            GatewayError::Status { status: status.as_u16(), message: err.to_string() }
        } else {
            GatewayError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for GatewayError {
    fn from(err: serde_json::Error) -> Self {
        GatewayError::Decode(err.to_string())
    }
}

/// The category of write a controller attempted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WriteAction {
    Add,
    Toggle,
    Delete,
    ClearCompleted,
    SetPriority,
}

impl WriteAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            WriteAction::Add => "add todo",
            WriteAction::Toggle => "toggle todo",
            WriteAction::Delete => "delete todo",
            WriteAction::ClearCompleted => "clear completed todos",
            WriteAction::SetPriority => "change todo priority",
        }
    }
}

impl std::fmt::Display for WriteAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Failure of a controller operation. Local state is untouched whenever one is returned.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ControllerError {
    #[error("failed to load todos: {source}")]
    RemoteRead {
        #[source]
        source: GatewayError,
    },

    #[error("failed to {action}: {source}")]
    RemoteWrite {
        action: WriteAction,
        #[source]
        source: GatewayError,
    },
}

impl ControllerError {
    pub fn read(source: GatewayError) -> Self {
        ControllerError::RemoteRead { source }
    }

    pub fn write(action: WriteAction, source: GatewayError) -> Self {
        ControllerError::RemoteWrite { action, source }
    }

    /// The attempted write, or `None` for a failed load
    pub fn action(&self) -> Option<WriteAction> {
        match self {
            ControllerError::RemoteRead { .. } => None,
            ControllerError::RemoteWrite { action, .. } => Some(*action),
        }
    }

    pub fn gateway_error(&self) -> &GatewayError {
        match self {
            ControllerError::RemoteRead { source } | ControllerError::RemoteWrite { source, .. } => source,
        }
    }
}

use tracing::error;

pub const GENERIC_MESSAGE: &str = "Something went wrong";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Non-success HTTP status; the message came from the server's error body.
    Api,
    /// Rejected client-side before any network call was made.
    Validation,
    /// Network or body decode failure; the user sees a generic message.
    Transport,
}

#[derive(Debug)]
pub struct PanelError {
    pub kind: ErrorKind,
    pub message: String,
}

impl PanelError {
    pub fn api(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Api,
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Validation,
            message: message.into(),
        }
    }

    pub fn transport(err: impl std::error::Error) -> Self {
        error!("transport error: {err}");
        Self {
            kind: ErrorKind::Transport,
            message: GENERIC_MESSAGE.to_string(),
        }
    }
}

impl std::fmt::Display for PanelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for PanelError {}

impl From<reqwest::Error> for PanelError {
    fn from(err: reqwest::Error) -> Self {
        Self::transport(err)
    }
}

impl From<serde_json::Error> for PanelError {
    fn from(err: serde_json::Error) -> Self {
        Self::transport(err)
    }
}

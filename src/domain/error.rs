use thiserror::Error;

/// Broad failure category, so callers can tell "service unreachable"
/// apart from "service returned something unexpected".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Configuration,
    Transport,
    Parse,
    Storage,
}

#[derive(Error, Debug)]
pub enum MtError {
    #[error("Translation endpoint not configured ({0})")]
    EndpointNotConfigured(String),

    #[error("Invalid translation endpoint '{endpoint}': {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },

    #[error("Credential '{0}' not configured")]
    CredentialMissing(String),

    #[error("{0} connector is disabled")]
    Disabled(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Translation service returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Unexpected response from translation service: {0}")]
    Parse(String),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Stored credential is corrupt: {0}")]
    CredentialDecode(#[from] hex::FromHexError),
}

impl MtError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            MtError::EndpointNotConfigured(_)
            | MtError::InvalidEndpoint { .. }
            | MtError::CredentialMissing(_)
            | MtError::Disabled(_)
            | MtError::Config(_) => ErrorKind::Configuration,
            MtError::Http(_) | MtError::Status { .. } => ErrorKind::Transport,
            MtError::Parse(_) | MtError::Json(_) => ErrorKind::Parse,
            MtError::Io(_) | MtError::Toml(_) | MtError::CredentialDecode(_) => ErrorKind::Storage,
        }
    }

    /// What the user should look at, by failure kind
    pub fn hint(&self) -> &'static str {
        match self.kind() {
            ErrorKind::Configuration => "check settings with `mtc configure`",
            ErrorKind::Transport => "translation service unreachable or refused the request",
            ErrorKind::Parse => "translation service returned an unexpected response",
            ErrorKind::Storage => "local settings could not be read or written",
        }
    }
}

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::error::MtError;

// 翻译后端
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    Azure,
    Mtuoc,
}

impl Backend {
    pub const ALL: [Backend; 2] = [Backend::Azure, Backend::Mtuoc];

    /// Human readable connector name
    pub fn display_name(&self) -> &'static str {
        match self {
            Backend::Azure => "Microsoft Translator (Azure)",
            Backend::Mtuoc => "MTUOC",
        }
    }

    /// Key under which this connector's credential is stored
    pub fn credential_id(&self) -> &'static str {
        match self {
            Backend::Azure => "azure.subscription_key",
            Backend::Mtuoc => "mtuoc.apikey",
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Backend::Azure => write!(f, "azure"),
            Backend::Mtuoc => write!(f, "mtuoc"),
        }
    }
}

impl FromStr for Backend {
    type Err = MtError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "azure" | "microsoft" => Ok(Backend::Azure),
            "mtuoc" => Ok(Backend::Mtuoc),
            other => Err(MtError::Config(format!("Unknown backend: {}", other))),
        }
    }
}

// 翻译请求
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct TranslationRequest {
    pub source_language: String,
    pub target_language: String,
    pub text: String,
}

impl TranslationRequest {
    pub fn new(
        source_language: impl Into<String>,
        target_language: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            source_language: source_language.into(),
            target_language: target_language.into(),
            text: text.into(),
        }
    }
}

// 翻译结果
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslationResult {
    pub backend: Backend,
    pub request: TranslationRequest,
    pub translation: String,
    pub source: ResultSource,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ResultSource {
    Cache,
    Online,
}

/// Endpoint of a self-hosted engine, split into the two values the user enters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EndpointConfig {
    pub url: Option<String>,
    pub port: Option<String>,
}

impl EndpointConfig {
    pub fn new(url: Option<String>, port: Option<String>) -> Self {
        Self { url, port }
    }

    /// `<url>:<port>/translate`, or an empty string when either part is unset.
    pub fn translate_endpoint(&self) -> String {
        match (&self.url, &self.port) {
            (Some(url), Some(port)) => format!("{}:{}/translate", url, port),
            _ => String::new(),
        }
    }
}

/// Values edited through a connector's configuration surface.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConnectorSettings {
    pub endpoint_url: Option<String>,
    pub endpoint_port: Option<String>,
    pub credential: Option<String>,
    #[serde(default)]
    pub persist_credential: bool,
}

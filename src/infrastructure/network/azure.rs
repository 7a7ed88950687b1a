use crate::domain::error::MtError;
use crate::domain::model::{Backend, TranslationRequest};
use crate::domain::traits::Translator;
use crate::infrastructure::config::AzureConfig;
use crate::infrastructure::network::http::post_json;
use crate::infrastructure::storage::credentials::CredentialManager;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

const API_VERSION: &str = "3.0";

// Azure Translator v3 request/response structures
#[derive(Serialize, Debug)]
struct TextItem<'a> {
    text: &'a str,
}

#[derive(Deserialize, Debug)]
struct TranslateResult {
    translations: Vec<Translation>,
}

#[derive(Deserialize, Debug)]
struct Translation {
    text: String,
}

#[derive(Deserialize, Debug)]
struct ErrorResponse {
    error: ErrorDetail,
}

#[derive(Deserialize, Debug)]
struct ErrorDetail {
    code: i64,
    message: String,
}

/// Microsoft Translator Text API v3 connector
pub struct AzureTranslator {
    client: Client,
    config: AzureConfig,
    credentials: Arc<CredentialManager>,
}

impl AzureTranslator {
    pub fn new(client: Client, config: AzureConfig, credentials: Arc<CredentialManager>) -> Self {
        Self {
            client,
            config,
            credentials,
        }
    }

    fn endpoint(&self) -> String {
        if self.config.url.trim().is_empty() {
            return String::new();
        }
        format!("{}/translate", self.config.url.trim_end_matches('/'))
    }

    fn headers(&self, key: &str) -> Result<HeaderMap, MtError> {
        let mut headers = HeaderMap::new();
        let key = HeaderValue::from_str(key).map_err(|_| {
            MtError::Config("Azure subscription key contains invalid characters".to_string())
        })?;
        headers.insert("Ocp-Apim-Subscription-Key", key);

        if let Some(region) = self.config.region.as_deref().filter(|r| !r.is_empty()) {
            let region = HeaderValue::from_str(region).map_err(|_| {
                MtError::Config(format!("Invalid Azure region: {}", region))
            })?;
            headers.insert("Ocp-Apim-Subscription-Region", region);
        }
        Ok(headers)
    }
}

#[async_trait]
impl Translator for AzureTranslator {
    fn backend(&self) -> Backend {
        Backend::Azure
    }

    async fn translate(&self, request: &TranslationRequest) -> Result<String, MtError> {
        let endpoint = self.endpoint();
        if endpoint.is_empty() {
            return Err(MtError::EndpointNotConfigured(
                Backend::Azure.display_name().to_string(),
            ));
        }
        let key = self.credentials.require(Backend::Azure.credential_id())?;
        let headers = self.headers(&key)?;

        let from = azure_language_code(&request.source_language);
        let to = azure_language_code(&request.target_language);
        debug!(from = %from, to = %to, "azure translate");

        let body = create_json_request(&request.text)?;
        let query = [
            ("api-version", API_VERSION),
            ("from", from.as_str()),
            ("to", to.as_str()),
        ];

        let raw = post_json(&self.client, &endpoint, headers, &query, body)
            .await
            .map_err(describe_service_error)?;
        parse_response(&raw)
    }
}

/// Serialize `text` into the v3 request body: `[{"text":"..."}]`
pub fn create_json_request(text: &str) -> Result<String, MtError> {
    Ok(serde_json::to_string(&[TextItem { text }])?)
}

/// Extract the first translation from a v3 response body
pub fn parse_response(body: &str) -> Result<String, MtError> {
    let results: Vec<TranslateResult> = serde_json::from_str(body)
        .map_err(|e| MtError::Parse(format!("Azure response: {}", e)))?;

    results
        .into_iter()
        .next()
        .and_then(|r| r.translations.into_iter().next())
        .map(|t| t.text)
        .ok_or_else(|| MtError::Parse("Azure response contains no translation".to_string()))
}

/// Replace a raw error body with Azure's own code and message when present
fn describe_service_error(err: MtError) -> MtError {
    match err {
        MtError::Status { status, body } => match serde_json::from_str::<ErrorResponse>(&body) {
            Ok(resp) => MtError::Status {
                status,
                body: format!("{} {}", resp.error.code, resp.error.message),
            },
            Err(_) => MtError::Status { status, body },
        },
        other => other,
    }
}

/// Azure uses script subtags for Chinese; everything else passes through
pub fn azure_language_code(tag: &str) -> String {
    let normalized = tag.trim().replace('_', "-");
    match normalized.to_ascii_lowercase().as_str() {
        "zh" | "zh-cn" | "zh-sg" | "zh-hans" => "zh-Hans".to_string(),
        "zh-tw" | "zh-hk" | "zh-mo" | "zh-hant" => "zh-Hant".to_string(),
        _ => normalized,
    }
}

use crate::domain::error::MtError;
use crate::domain::model::{Backend, EndpointConfig, TranslationRequest};
use crate::domain::traits::Translator;
use crate::infrastructure::network::http::post_json;
use async_trait::async_trait;
use reqwest::header::HeaderMap;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::debug;

// MTUOC server request/response structures
#[derive(Serialize, Debug)]
struct MtuocRequest<'a> {
    id: u64,
    src: &'a str,
    #[serde(rename = "srcLang")]
    src_lang: &'a str,
    #[serde(rename = "tgtLang")]
    tgt_lang: &'a str,
}

#[derive(Deserialize, Debug)]
struct MtuocResponse {
    tgt: String,
}

/// Connector for a self-hosted MTUOC engine
pub struct MtuocTranslator {
    client: Client,
    endpoint: EndpointConfig,
    next_id: Arc<AtomicU64>,
}

impl MtuocTranslator {
    pub fn new(client: Client, endpoint: EndpointConfig) -> Self {
        Self::with_request_ids(client, endpoint, Arc::new(AtomicU64::new(1)))
    }

    /// Share the request id sequence with other instances of this connector
    pub fn with_request_ids(client: Client, endpoint: EndpointConfig, next_id: Arc<AtomicU64>) -> Self {
        Self {
            client,
            endpoint,
            next_id,
        }
    }

    pub fn translate_endpoint(&self) -> String {
        self.endpoint.translate_endpoint()
    }
}

#[async_trait]
impl Translator for MtuocTranslator {
    fn backend(&self) -> Backend {
        Backend::Mtuoc
    }

    async fn translate(&self, request: &TranslationRequest) -> Result<String, MtError> {
        let endpoint = self.translate_endpoint();
        if endpoint.is_empty() {
            return Err(MtError::EndpointNotConfigured(
                Backend::Mtuoc.display_name().to_string(),
            ));
        }

        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        debug!(id, endpoint = %endpoint, "mtuoc translate");

        let body = create_json_request(id, request)?;
        let raw = post_json(&self.client, &endpoint, HeaderMap::new(), &[], body).await?;
        parse_response(&raw)
    }
}

pub fn create_json_request(id: u64, request: &TranslationRequest) -> Result<String, MtError> {
    Ok(serde_json::to_string(&MtuocRequest {
        id,
        src: &request.text,
        src_lang: &request.source_language,
        tgt_lang: &request.target_language,
    })?)
}

pub fn parse_response(body: &str) -> Result<String, MtError> {
    let response: MtuocResponse = serde_json::from_str(body)
        .map_err(|e| MtError::Parse(format!("MTUOC response: {}", e)))?;
    Ok(response.tgt)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::ErrorKind;

    #[test]
    fn test_create_json_request() {
        let request = TranslationRequest::new("en", "ca", "Say \"hi\"\n");
        let json = create_json_request(7, &request).unwrap();
        assert_eq!(
            json,
            r#"{"id":7,"src":"Say \"hi\"\n","srcLang":"en","tgtLang":"ca"}"#
        );
    }

    #[test]
    fn test_parse_response() {
        let body = r#"{"id":7,"src":"Hello","tgt":"Hola"}"#;
        assert_eq!(parse_response(body).unwrap(), "Hola");
    }

    #[test]
    fn test_parse_response_missing_field() {
        let err = parse_response(r#"{"id":7,"src":"Hello"}"#).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Parse);
        assert!(err.to_string().contains("tgt"));
    }

    #[tokio::test]
    async fn test_unconfigured_endpoint_fails_before_network() {
        let translator = MtuocTranslator::new(Client::new(), EndpointConfig::default());
        let request = TranslationRequest::new("en", "es", "Hello");
        let err = translator.translate(&request).await.unwrap_err();

        assert!(matches!(err, MtError::EndpointNotConfigured(_)));
        assert_eq!(err.kind(), ErrorKind::Configuration);
    }
}

//! Azure connector against a mock Translator endpoint

mod common;

use mt_connectors::domain::error::{ErrorKind, MtError};
use mt_connectors::domain::model::TranslationRequest;
use mt_connectors::domain::traits::Translator;
use mt_connectors::infrastructure::config::AzureConfig;
use mt_connectors::infrastructure::network::azure::AzureTranslator;
use mt_connectors::infrastructure::storage::credentials::{CredentialManager, MemorySecretStore};
use reqwest::Client;
use std::sync::Arc;
use wiremock::matchers::{body_string, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn translator(server: &MockServer, key: Option<&str>, region: Option<&str>) -> AzureTranslator {
    let credentials = Arc::new(CredentialManager::new(Arc::new(MemorySecretStore::new())));
    if let Some(key) = key {
        credentials.set("azure.subscription_key", key, true).unwrap();
    }
    let config = AzureConfig {
        enabled: true,
        url: server.uri(),
        region: region.map(str::to_string),
    };
    AzureTranslator::new(Client::new(), config, credentials)
}

#[tokio::test]
async fn test_translate_sends_v3_request() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/translate"))
        .and(query_param("api-version", "3.0"))
        .and(query_param("from", "en"))
        .and(query_param("to", "zh-Hans"))
        .and(header("Ocp-Apim-Subscription-Key", "secret"))
        .and(header("Ocp-Apim-Subscription-Region", "westeurope"))
        .and(body_string(r#"[{"text":"\"foo\" boo"}]"#))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"[{"translations":[{"text":"“foo” 嘘","to":"zh-Hans"}]}]"#,
        ))
        .expect(1)
        .mount(&server)
        .await;

    let translator = translator(&server, Some("secret"), Some("westeurope"));
    let request = TranslationRequest::new("en", "zh-CN", "\"foo\" boo");
    let translation = translator.translate(&request).await.unwrap();

    assert_eq!(translation, "“foo” 嘘");
}

#[tokio::test]
async fn test_missing_key_fails_without_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let translator = translator(&server, None, None);
    let request = TranslationRequest::new("en", "fr", "Hello");
    let err = translator.translate(&request).await.unwrap_err();

    assert!(matches!(err, MtError::CredentialMissing(_)));
    assert_eq!(err.kind(), ErrorKind::Configuration);
}

#[tokio::test]
async fn test_rejected_request_is_transport_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/translate"))
        .respond_with(ResponseTemplate::new(401).set_body_string(
            r#"{"error":{"code":401000,"message":"The request is not authorized"}}"#,
        ))
        .mount(&server)
        .await;

    let translator = translator(&server, Some("wrong"), None);
    let request = TranslationRequest::new("en", "fr", "Hello");
    let err = translator.translate(&request).await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Transport);
    match err {
        MtError::Status { status, body } => {
            assert_eq!(status, 401);
            assert!(body.contains("not authorized"));
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn test_unexpected_body_is_parse_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/translate"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"text":"Bonjour"}"#))
        .mount(&server)
        .await;

    let translator = translator(&server, Some("secret"), None);
    let request = TranslationRequest::new("en", "fr", "Hello");
    let err = translator.translate(&request).await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Parse);
}

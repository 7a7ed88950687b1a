//! MTUOC connector against a mock engine

mod common;

use mt_connectors::domain::error::{ErrorKind, MtError};
use mt_connectors::domain::model::{EndpointConfig, TranslationRequest};
use mt_connectors::domain::traits::Translator;
use mt_connectors::infrastructure::network::mtuoc::MtuocTranslator;
use reqwest::Client;
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_translate_round_trip() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/translate"))
        .and(body_json(json!({
            "id": 1,
            "src": "Good morning\nfriends",
            "srcLang": "en",
            "tgtLang": "ca"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 1,
            "src": "Good morning\nfriends",
            "tgt": "Bon dia\namics"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let translator = MtuocTranslator::new(Client::new(), common::mtuoc_endpoint(&server));
    let request = TranslationRequest::new("en", "ca", "Good morning\nfriends");

    assert_eq!(translator.translate(&request).await.unwrap(), "Bon dia\namics");
}

#[tokio::test]
async fn test_missing_port_fails_without_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let endpoint = EndpointConfig::new(Some(server.uri()), None);
    assert_eq!(endpoint.translate_endpoint(), "");

    let translator = MtuocTranslator::new(Client::new(), endpoint);
    let err = translator
        .translate(&TranslationRequest::new("en", "es", "Hello"))
        .await
        .unwrap_err();

    assert!(matches!(err, MtError::EndpointNotConfigured(_)));
    assert_eq!(err.kind(), ErrorKind::Configuration);
}

#[tokio::test]
async fn test_malformed_endpoint_is_configuration_error() {
    let endpoint = EndpointConfig::new(Some("172.20.137.165".to_string()), Some("8011".to_string()));
    let translator = MtuocTranslator::new(Client::new(), endpoint);
    let err = translator
        .translate(&TranslationRequest::new("en", "es", "Hello"))
        .await
        .unwrap_err();

    assert!(matches!(err, MtError::InvalidEndpoint { .. }));
    assert_eq!(err.kind(), ErrorKind::Configuration);
}

#[tokio::test]
async fn test_unreachable_engine_is_transport_error() {
    let endpoint = EndpointConfig::new(
        Some("http://127.0.0.1".to_string()),
        Some(common::closed_port().to_string()),
    );
    let translator = MtuocTranslator::new(Client::new(), endpoint);
    let err = translator
        .translate(&TranslationRequest::new("en", "es", "Hello"))
        .await
        .unwrap_err();

    assert!(matches!(err, MtError::Http(_)));
    assert_eq!(err.kind(), ErrorKind::Transport);
}

#[tokio::test]
async fn test_server_error_vs_bad_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/translate"))
        .respond_with(ResponseTemplate::new(500).set_body_string("model not loaded"))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/translate"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let translator = MtuocTranslator::new(Client::new(), common::mtuoc_endpoint(&server));
    let request = TranslationRequest::new("en", "es", "Hello");

    let transport = translator.translate(&request).await.unwrap_err();
    let parse = translator.translate(&request).await.unwrap_err();

    assert_eq!(transport.kind(), ErrorKind::Transport);
    assert_eq!(parse.kind(), ErrorKind::Parse);
}

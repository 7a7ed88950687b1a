// HTTP client utilities
use crate::domain::error::MtError;
use crate::infrastructure::config::HttpConfig;
use reqwest::header::HeaderMap;
use reqwest::{Client, Url};
use std::time::Duration;
use tracing::{debug, warn};

/// Create the shared HTTP client from the `[http]` section
pub fn create_client(http: &HttpConfig) -> Result<Client, MtError> {
    let mut builder = Client::builder()
        .pool_max_idle_per_host(10)
        .pool_idle_timeout(Duration::from_secs(30))
        .timeout(Duration::from_secs(http.timeout_secs))
        .user_agent(http.user_agent.as_str());

    if let Some(proxy) = http.proxy.as_deref().filter(|p| !p.is_empty()) {
        builder = builder.proxy(reqwest::Proxy::all(proxy)?);
    }

    Ok(builder.build()?)
}

/// Validate an endpoint address before anything goes on the wire.
pub fn parse_endpoint(endpoint: &str) -> Result<Url, MtError> {
    if endpoint.trim().is_empty() {
        return Err(MtError::EndpointNotConfigured("empty address".to_string()));
    }
    let url = Url::parse(endpoint).map_err(|e| MtError::InvalidEndpoint {
        endpoint: endpoint.to_string(),
        reason: e.to_string(),
    })?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        scheme => Err(MtError::InvalidEndpoint {
            endpoint: endpoint.to_string(),
            reason: format!("unsupported scheme '{}'", scheme),
        }),
    }
}

/// POST a JSON body once and return the raw response text.
///
/// Non-success statuses are returned as [`MtError::Status`] carrying the
/// body the service sent back.
pub async fn post_json(
    client: &Client,
    endpoint: &str,
    headers: HeaderMap,
    query: &[(&str, &str)],
    body: String,
) -> Result<String, MtError> {
    let url = parse_endpoint(endpoint)?;
    debug!(endpoint = %url, bytes = body.len(), "sending translation request");

    let response = client
        .post(url)
        .headers(headers)
        .header(reqwest::header::CONTENT_TYPE, "application/json; charset=UTF-8")
        .query(query)
        .body(body)
        .send()
        .await?;

    let status = response.status();
    let text = response.text().await?;

    if !status.is_success() {
        warn!(status = status.as_u16(), "translation service rejected request");
        return Err(MtError::Status {
            status: status.as_u16(),
            body: text,
        });
    }

    Ok(text)
}

use crate::domain::error::MtError;
use crate::domain::model::{Backend, ResultSource, TranslationRequest, TranslationResult};
use crate::domain::traits::Translator;
use crate::infrastructure::config::Config;
use crate::infrastructure::network::azure::AzureTranslator;
use crate::infrastructure::network::mtuoc::MtuocTranslator;
use crate::state::AppState;
use tracing::{debug, info};

/// Build a connector from the configuration as it is right now
pub fn build_translator(state: &AppState, config: &Config, backend: Backend) -> Box<dyn Translator> {
    match backend {
        Backend::Azure => Box::new(AzureTranslator::new(
            state.http_client.clone(),
            config.azure.clone(),
            state.credentials.clone(),
        )),
        Backend::Mtuoc => Box::new(MtuocTranslator::with_request_ids(
            state.http_client.clone(),
            config.mtuoc.endpoint(),
            state.mtuoc_request_ids.clone(),
        )),
    }
}

pub async fn translate_text(
    state: &AppState,
    backend: Backend,
    request: &TranslationRequest,
    no_cache: bool,
) -> Result<TranslationResult, MtError> {
    // Snapshot config so the lock is not held across the network call
    let (translator, use_cache) = {
        let config = state.config.read().await;
        if !config.is_enabled(backend) {
            return Err(MtError::Disabled(backend.display_name().to_string()));
        }
        (
            build_translator(state, &config, backend),
            config.cache.enable && !no_cache,
        )
    };

    // 1. Memory Cache
    if use_cache {
        if let Some(cached) = state.cache.get(backend, request) {
            debug!(%backend, "translation served from cache");
            return Ok(TranslationResult {
                backend,
                request: request.clone(),
                translation: cached,
                source: ResultSource::Cache,
            });
        }
    }

    // 2. Online
    let translation = translator.translate(request).await?;
    info!(
        %backend,
        from = %request.source_language,
        to = %request.target_language,
        "translation received"
    );

    // 3. Write back
    if use_cache {
        state.cache.insert(backend, request, &translation);
    }

    Ok(TranslationResult {
        backend,
        request: request.clone(),
        translation,
        source: ResultSource::Online,
    })
}

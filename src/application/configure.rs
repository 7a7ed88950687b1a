use crate::domain::error::MtError;
use crate::domain::model::{Backend, ConnectorSettings};
use crate::infrastructure::config::{load_config_strict, save_config_to, Config};
use crate::infrastructure::storage::credentials::CredentialManager;
use std::path::Path;

fn non_empty(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Apply edited settings to the config and credential store.
///
/// `None` fields are left untouched. An empty credential clears it. The
/// caller is responsible for saving `config`.
pub fn apply_settings(
    config: &mut Config,
    credentials: &CredentialManager,
    backend: Backend,
    settings: &ConnectorSettings,
) -> Result<(), MtError> {
    match backend {
        Backend::Mtuoc => {
            if settings.endpoint_url.is_some() {
                config.mtuoc.engine_url = non_empty(&settings.endpoint_url);
            }
            if settings.endpoint_port.is_some() {
                config.mtuoc.engine_port = non_empty(&settings.endpoint_port);
            }
        }
        Backend::Azure => {
            if settings.endpoint_port.is_some() {
                return Err(MtError::Config(
                    "Azure endpoint takes no separate port; include it in the URL".to_string(),
                ));
            }
            if let Some(url) = non_empty(&settings.endpoint_url) {
                config.azure.url = url;
            }
        }
    }

    if let Some(credential) = &settings.credential {
        let id = backend.credential_id();
        let credential = credential.trim();
        if credential.is_empty() {
            credentials.clear(id)?;
        } else {
            credentials.set(id, credential, !settings.persist_credential)?;
        }
    }

    Ok(())
}

/// Edit the config file at `path` for a process that exits right after.
///
/// A session-only credential would vanish on exit and also erase the saved
/// one, so it is refused; use `translate --key` for one-off keys. The file is
/// parsed strictly so a broken config is reported instead of replaced.
pub fn save_settings(
    path: &Path,
    credentials: &CredentialManager,
    backend: Backend,
    settings: &ConnectorSettings,
) -> Result<Config, MtError> {
    let session_only = settings
        .credential
        .as_deref()
        .is_some_and(|c| !c.trim().is_empty())
        && !settings.persist_credential;
    if session_only {
        return Err(MtError::Config(
            "A credential given to configure must be saved with --persist; \
             use `translate --key` for a one-off key"
                .to_string(),
        ));
    }

    let mut config = load_config_strict(path)?;
    apply_settings(&mut config, credentials, backend, settings)?;
    save_config_to(&config, path)?;
    Ok(config)
}

/// Read back the values a configuration dialog would show
pub fn current_settings(
    config: &Config,
    credentials: &CredentialManager,
    backend: Backend,
) -> Result<ConnectorSettings, MtError> {
    let id = backend.credential_id();
    let (endpoint_url, endpoint_port) = match backend {
        Backend::Mtuoc => (config.mtuoc.engine_url.clone(), config.mtuoc.engine_port.clone()),
        Backend::Azure => (Some(config.azure.url.clone()), None),
    };

    Ok(ConnectorSettings {
        endpoint_url,
        endpoint_port,
        credential: credentials.get(id)?,
        persist_credential: !credentials.is_stored_temporarily(id)?,
    })
}

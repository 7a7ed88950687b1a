// Two-tier credential storage: process-lifetime values first, then the
// hex-obfuscated credentials file.
use crate::domain::error::MtError;
use crate::domain::traits::SecretStore;
use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use tracing::debug;

#[derive(Debug, Default, Serialize, Deserialize)]
struct CredentialsFile {
    #[serde(default)]
    credentials: BTreeMap<String, String>,
}

/// Durable store backed by a TOML file.
///
/// Values are hex encoded at rest. This keeps secrets from being read at a
/// glance; it is not encryption.
pub struct FileSecretStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileSecretStore {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            lock: Mutex::new(()),
        }
    }

    fn read(&self) -> Result<CredentialsFile, MtError> {
        if !self.path.exists() {
            return Ok(CredentialsFile::default());
        }
        let content = fs::read_to_string(&self.path)?;
        Ok(toml::from_str(&content)?)
    }

    fn write(&self, file: &CredentialsFile) -> Result<(), MtError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(file)
            .map_err(|e| MtError::Config(format!("Failed to serialize credentials: {}", e)))?;
        fs::write(&self.path, content)?;
        Ok(())
    }
}

impl SecretStore for FileSecretStore {
    fn retrieve(&self, id: &str) -> Result<Option<String>, MtError> {
        let _guard = self.lock.lock().unwrap_or_else(|e| e.into_inner());
        let file = self.read()?;
        match file.credentials.get(id) {
            Some(encoded) if !encoded.is_empty() => {
                let bytes = hex::decode(encoded)?;
                let value = String::from_utf8(bytes)
                    .map_err(|e| MtError::Config(format!("Stored credential is not UTF-8: {}", e)))?;
                Ok(Some(value))
            }
            _ => Ok(None),
        }
    }

    fn store(&self, id: &str, value: &str) -> Result<(), MtError> {
        let _guard = self.lock.lock().unwrap_or_else(|e| e.into_inner());
        let mut file = self.read()?;
        file.credentials
            .insert(id.to_string(), hex::encode(value.as_bytes()));
        self.write(&file)?;
        debug!(id, "credential persisted");
        Ok(())
    }

    fn remove(&self, id: &str) -> Result<(), MtError> {
        let _guard = self.lock.lock().unwrap_or_else(|e| e.into_inner());
        let mut file = self.read()?;
        if file.credentials.remove(id).is_some() {
            self.write(&file)?;
            debug!(id, "persisted credential removed");
        }
        Ok(())
    }
}

/// Durable tier that never leaves the process; for embedders without a disk.
#[derive(Default)]
pub struct MemorySecretStore {
    map: DashMap<String, String>,
}

impl MemorySecretStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SecretStore for MemorySecretStore {
    fn retrieve(&self, id: &str) -> Result<Option<String>, MtError> {
        Ok(self
            .map
            .get(id)
            .map(|entry| entry.value().clone())
            .filter(|v| !v.is_empty()))
    }

    fn store(&self, id: &str, value: &str) -> Result<(), MtError> {
        self.map.insert(id.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, id: &str) -> Result<(), MtError> {
        self.map.remove(id);
        Ok(())
    }
}

/// Credential lookup: transient value, then durable value, then `None`.
///
/// Empty strings are treated as "not configured" in both tiers.
pub struct CredentialManager {
    transient: DashMap<String, String>,
    durable: Arc<dyn SecretStore>,
}

impl CredentialManager {
    pub fn new(durable: Arc<dyn SecretStore>) -> Self {
        Self {
            transient: DashMap::new(),
            durable,
        }
    }

    pub fn get(&self, id: &str) -> Result<Option<String>, MtError> {
        if let Some(value) = self.transient.get(id) {
            if !value.is_empty() {
                return Ok(Some(value.value().clone()));
            }
        }
        self.durable.retrieve(id)
    }

    /// Like [`get`](Self::get) but a missing credential is an error.
    pub fn require(&self, id: &str) -> Result<String, MtError> {
        self.get(id)?
            .ok_or_else(|| MtError::CredentialMissing(id.to_string()))
    }

    /// Store a credential for this process; unless `temporary`, persist it too.
    ///
    /// A temporary credential clears any persisted value for the same id.
    pub fn set(&self, id: &str, value: &str, temporary: bool) -> Result<(), MtError> {
        self.transient.insert(id.to_string(), value.to_string());
        if temporary {
            self.durable.remove(id)
        } else {
            self.durable.store(id, value)
        }
    }

    pub fn clear(&self, id: &str) -> Result<(), MtError> {
        self.transient.remove(id);
        self.durable.remove(id)
    }

    pub fn is_stored_temporarily(&self, id: &str) -> Result<bool, MtError> {
        let transient = self
            .transient
            .get(id)
            .map(|v| !v.is_empty())
            .unwrap_or(false);
        Ok(transient && !self.durable.is_stored(id)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manager() -> (CredentialManager, Arc<MemorySecretStore>) {
        let durable = Arc::new(MemorySecretStore::new());
        (CredentialManager::new(durable.clone()), durable)
    }

    #[test]
    fn test_missing_credential_is_none() {
        let (creds, _) = manager();
        assert_eq!(creds.get("azure.subscription_key").unwrap(), None);
        assert!(matches!(
            creds.require("azure.subscription_key"),
            Err(MtError::CredentialMissing(_))
        ));
    }

    #[test]
    fn test_transient_takes_precedence() {
        let (creds, durable) = manager();
        durable.store("key", "persisted").unwrap();
        assert_eq!(creds.get("key").unwrap().as_deref(), Some("persisted"));

        creds.transient.insert("key".to_string(), "session".to_string());
        assert_eq!(creds.get("key").unwrap().as_deref(), Some("session"));
    }

    #[test]
    fn test_temporary_set_clears_durable() {
        let (creds, durable) = manager();
        creds.set("key", "first", false).unwrap();
        assert_eq!(durable.retrieve("key").unwrap().as_deref(), Some("first"));
        assert!(!creds.is_stored_temporarily("key").unwrap());

        creds.set("key", "second", true).unwrap();
        assert_eq!(durable.retrieve("key").unwrap(), None);
        assert_eq!(creds.get("key").unwrap().as_deref(), Some("second"));
        assert!(creds.is_stored_temporarily("key").unwrap());
    }

    #[test]
    fn test_empty_values_are_absent() {
        let (creds, _) = manager();
        creds.set("key", "", false).unwrap();
        assert_eq!(creds.get("key").unwrap(), None);
        assert!(!creds.is_stored_temporarily("key").unwrap());
    }
}

use crate::domain::error::MtError;
use crate::domain::model::{Backend, TranslationRequest};
use async_trait::async_trait;

/// Machine translation capability shared by every connector.
///
/// Implementations build the backend's payload, perform one HTTP call and
/// return the translated text. They hold no per-call state, so one
/// instance may serve concurrent callers.
#[async_trait]
pub trait Translator: Send + Sync {
    fn backend(&self) -> Backend;

    async fn translate(&self, request: &TranslationRequest) -> Result<String, MtError>;
}

/// Durable tier of the credential store.
pub trait SecretStore: Send + Sync {
    fn retrieve(&self, id: &str) -> Result<Option<String>, MtError>;

    fn store(&self, id: &str, value: &str) -> Result<(), MtError>;

    fn remove(&self, id: &str) -> Result<(), MtError>;

    fn is_stored(&self, id: &str) -> Result<bool, MtError> {
        Ok(self.retrieve(id)?.is_some())
    }
}

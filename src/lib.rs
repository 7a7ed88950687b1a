//! Machine translation connectors for Microsoft Azure Translator and
//! self-hosted MTUOC engines.
pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod presentation;
pub mod state;

pub use domain::error::{ErrorKind, MtError};
pub use domain::model::{Backend, ConnectorSettings, EndpointConfig, TranslationRequest};
pub use domain::traits::Translator;

// tracing subscriber setup driven by the `[logging]` section
use crate::domain::error::MtError;
use crate::infrastructure::config::Logging;
use std::fs::OpenOptions;
use tracing_subscriber::EnvFilter;

/// Map the config level (any case) to an `EnvFilter` directive.
///
/// Connector and transport events are kept at the configured level while
/// HTTP internals stay at `warn`, so DEBUG shows requests without hyper noise.
pub fn filter_directive(level: &str) -> String {
    let level = match level.trim().to_ascii_uppercase().as_str() {
        "TRACE" => "trace",
        "DEBUG" => "debug",
        "INFO" => "info",
        "ERROR" => "error",
        "OFF" => "off",
        _ => "warn",
    };
    format!("{level},hyper=warn,reqwest=warn,mt_connectors={level}")
}

pub fn init_logging(logging: &Logging) -> Result<(), MtError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directive(&logging.level)));

    match logging.path.as_deref().filter(|p| !p.is_empty()) {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(file)
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(false)
                .with_writer(std::io::stderr)
                .init();
        }
    }
    Ok(())
}

// Main entry point
use clap::Parser;
use mt_connectors::application::{configure, registry, translate};
use mt_connectors::domain::error::MtError;
use mt_connectors::domain::model::{Backend, ConnectorSettings, ResultSource, TranslationRequest};
use mt_connectors::infrastructure::config::{self, load_config};
use mt_connectors::infrastructure::logging;
use mt_connectors::infrastructure::storage::credentials::FileSecretStore;
use mt_connectors::interfaces::cli::{Cli, Command, ConfigureArgs, TranslateArgs};
use mt_connectors::presentation::theme::Theme;
use mt_connectors::state::AppState;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = load_config()?;

    if config.logging.enable {
        logging::init_logging(&config.logging)?;
    }

    let theme_name = cli.theme.as_deref().unwrap_or(config.theme.as_str());
    let theme = Theme::from_name(theme_name);

    let durable = Arc::new(FileSecretStore::new(config::get_credentials_path()));
    let state = AppState::new(config, durable)?;

    match cli.command {
        Command::Translate(args) => run_translate(&state, args, &theme).await,
        Command::Configure(args) => run_configure(&state, args, &theme).await,
        Command::Show { backend } => print_settings(&state, backend.parse()?, &theme).await,
        Command::GenerateConfig => Ok(config::generate_config_sample()?),
        Command::Status { host_version } => print_status(&state, &host_version, &theme).await,
    }
}

async fn run_translate(state: &AppState, args: TranslateArgs, theme: &Theme) -> anyhow::Result<()> {
    let backend: Backend = args.backend.parse()?;
    if let Some(key) = args.key.as_deref().filter(|k| !k.is_empty()) {
        state.credentials.set(backend.credential_id(), key, true)?;
    }

    let request = TranslationRequest::new(args.from, args.to, args.text.join(" "));
    let result = translate::translate_text(state, backend, &request, args.nocache)
        .await
        .map_err(|e| anyhow::anyhow!(describe_failure(&e)))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    let origin = match result.source {
        ResultSource::Cache => "[cache]",
        ResultSource::Online => "[online]",
    };
    println!(
        "{} {}",
        (theme.title)(backend.display_name()),
        (theme.label)(origin)
    );
    println!(
        "  {} {}",
        (theme.label)(&request.source_language),
        (theme.source)(&request.text)
    );
    println!(
        "  {} {}",
        (theme.label)(&request.target_language),
        (theme.translation)(&result.translation)
    );
    Ok(())
}

/// One-line message telling the user where the failure came from
fn describe_failure(err: &MtError) -> String {
    format!("✘ {} ({})", err, err.hint())
}

async fn run_configure(state: &AppState, args: ConfigureArgs, theme: &Theme) -> anyhow::Result<()> {
    let backend: Backend = args.backend.parse()?;
    let settings = ConnectorSettings {
        endpoint_url: args.url,
        endpoint_port: args.port,
        credential: args.credential,
        persist_credential: args.persist,
    };

    let path = config::get_config_path()
        .ok_or_else(|| MtError::Config("Cannot determine config directory".to_string()))?;
    let saved = configure::save_settings(&path, &state.credentials, backend, &settings)
        .map_err(|e| anyhow::anyhow!(describe_failure(&e)))?;
    *state.config.write().await = saved;

    println!("{}", (theme.ok)(&format!("✔ {} settings saved", backend.display_name())));
    print_settings(state, backend, theme).await
}

async fn print_settings(state: &AppState, backend: Backend, theme: &Theme) -> anyhow::Result<()> {
    let config = state.config.read().await;
    let settings = configure::current_settings(&config, &state.credentials, backend)?;

    println!("{}", (theme.title)(backend.display_name()));
    println!("{}", (theme.line)(&"━".repeat(40)));
    let unset = "(not set)".to_string();
    println!(
        "  {} {}",
        (theme.label)("Endpoint URL: "),
        settings.endpoint_url.as_ref().unwrap_or(&unset)
    );
    if backend == Backend::Mtuoc {
        println!(
            "  {} {}",
            (theme.label)("Endpoint port:"),
            settings.endpoint_port.as_ref().unwrap_or(&unset)
        );
        let endpoint = config.mtuoc.endpoint().translate_endpoint();
        println!(
            "  {} {}",
            (theme.label)("Translate URL:"),
            if endpoint.is_empty() { &unset } else { &endpoint }
        );
    }
    let credential = match (&settings.credential, settings.persist_credential) {
        (None, _) => "Not configured",
        (Some(_), true) => "Configured",
        (Some(_), false) => "Configured (this session only)",
    };
    println!("  {} {}", (theme.label)("Credential:   "), credential);
    println!(
        "  {} {}",
        (theme.label)("Enabled:      "),
        config.is_enabled(backend)
    );
    Ok(())
}

async fn print_status(state: &AppState, host_version: &str, theme: &Theme) -> anyhow::Result<()> {
    let config = state.config.read().await;
    println!("{}", (theme.title)("mtc Status"));
    println!("{}", (theme.line)(&"━".repeat(40)));

    println!(
        "Config: {}",
        config::get_config_path()
            .filter(|p| p.exists())
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "Not found (using defaults)".to_string())
    );
    println!("Memory Cache: {} entries", state.cache.len());

    match registry::negotiate(host_version, &config) {
        Ok(connectors) => {
            for info in connectors {
                let flag = if info.enabled {
                    (theme.ok)("enabled")
                } else {
                    (theme.warn)("disabled")
                };
                println!("  {:<30} {}", info.name, flag);
            }
        }
        Err(e) => eprintln!("{}", (theme.warn)(&describe_failure(&e))),
    }

    Ok(())
}

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "mtc")]
#[command(about = "Machine translation through Azure Translator or an MTUOC engine.")]
#[command(version)]
pub struct Cli {
    /// Choose color theme
    #[arg(short = 'T', long, global = true)]
    pub theme: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Translate text
    #[command(alias = "t")]
    Translate(TranslateArgs),

    /// Change endpoint and credential settings of a connector
    Configure(ConfigureArgs),

    /// Show current settings of a connector
    Show {
        /// Connector: azure or mtuoc
        backend: String,
    },

    /// Generate config sample
    GenerateConfig,

    /// Show connectors available to a host version
    Status {
        /// Host API version to negotiate against
        #[arg(long, default_value = crate::application::registry::REQUIRED_HOST_VERSION)]
        host_version: String,
    },
}

#[derive(Args)]
pub struct TranslateArgs {
    /// Connector: azure or mtuoc
    #[arg(short, long, default_value = "mtuoc")]
    pub backend: String,

    /// Source language tag
    #[arg(short, long)]
    pub from: String,

    /// Target language tag
    #[arg(short, long)]
    pub to: String,

    /// Credential for this run only
    #[arg(long)]
    pub key: Option<String>,

    /// Don't use cached result
    #[arg(short = 'n', long)]
    pub nocache: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Text to translate
    #[arg(num_args = 1.., required = true)]
    pub text: Vec<String>,
}

#[derive(Args)]
pub struct ConfigureArgs {
    /// Connector: azure or mtuoc
    pub backend: String,

    /// Endpoint URL, e.g. http://172.20.137.165
    #[arg(long)]
    pub url: Option<String>,

    /// Endpoint port, e.g. 8011
    #[arg(long)]
    pub port: Option<String>,

    /// API key; an empty value removes it
    #[arg(long)]
    pub credential: Option<String>,

    /// Save the credential to disk (required with --credential)
    #[arg(long)]
    pub persist: bool,
}

//! SafeSpace server
//!
//! Run with: cargo run -- serve
//!
//! # Configuration
//!
//! Read from `--config`, or the first of
//! `~/.config/safespace/config.toml`, `/etc/safespace/config.toml` and
//! `./config.toml`. Environment variables override the file:
//! - `SAFESPACE_HOST`: Host to bind to (default: 0.0.0.0)
//! - `SAFESPACE_PORT`: Port to listen on (default: 8501)
//! - `SAFESPACE_MAX_SESSIONS`: Live session cap (default: 10000)
//! - `SAFESPACE_LOG_LEVEL`: Log level (default: info)
//! - `SAFESPACE_LOG_FORMAT`: `pretty` or `json` (default: pretty)
//! - `RUST_LOG`: Full filter directive, wins over the log level

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use safespace::api::{serve, AppState};
use safespace::config::{generate_default_config, Config, LoggingConfig};
use safespace::faq::KnowledgeBase;

#[derive(Parser)]
#[command(name = "safespace")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "SafeSpace Organisation website server")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the web server (default)
    Serve {
        /// Config file path
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Host to bind to
        #[arg(long)]
        host: Option<String>,
        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Ask the FAQ bot a question
    Ask {
        /// The question, e.g. "what are your hours?"
        #[arg(required = true)]
        question: Vec<String>,
    },

    /// Print a default configuration file
    InitConfig,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Serve {
        config: None,
        host: None,
        port: None,
    }) {
        Commands::Serve { config, host, port } => run_server(config, host, port).await,
        Commands::Ask { question } => {
            let question = question.join(" ");
            println!("{}", KnowledgeBase::builtin().answer(&question));
            Ok(())
        }
        Commands::InitConfig => {
            print!("{}", generate_default_config());
            Ok(())
        }
    }
}

async fn run_server(
    config_path: Option<PathBuf>,
    host: Option<String>,
    port: Option<u16>,
) -> anyhow::Result<()> {
    let (mut config, source, skipped) = match &config_path {
        Some(path) => {
            let config = Config::load_with_env(path)
                .with_context(|| format!("loading config from {}", path.display()))?;
            (config, Some(path.clone()), Vec::new())
        }
        None => {
            let loaded = Config::load_default();
            (loaded.config, loaded.source, loaded.skipped)
        }
    };

    if let Some(host) = host {
        config.server.host = host;
    }
    if let Some(port) = port {
        config.server.port = port;
    }

    init_logging(&config.logging);

    tracing::info!("Starting SafeSpace server v{}", env!("CARGO_PKG_VERSION"));
    for error in &skipped {
        tracing::warn!(error = %error, "Skipped config file");
    }
    match &source {
        Some(path) => tracing::info!("Loaded config from {:?}", path),
        None => tracing::info!("Using default config with environment overrides"),
    }
    tracing::info!(
        max_sessions = config.session.max_sessions,
        idle_timeout_mins = config.session.idle_timeout_mins,
        timezone = %config.site.timezone_label,
        "Configuration loaded"
    );

    let state = AppState::new(config);
    tracing::info!(entries = state.knowledge.len(), "FAQ knowledge base ready");

    serve(state).await.context("server failed")?;
    Ok(())
}

fn init_logging(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("safespace={},tower_http=info", logging.level))
    });

    let registry = tracing_subscriber::registry().with(filter);

    if logging.format.eq_ignore_ascii_case("json") {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

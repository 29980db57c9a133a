mod cli;
mod repl;

use marvin_ai::ollama::{OllamaClient, OllamaConfig};
use marvin_ai::tools::{ToolEngine, ToolRegistry};
use marvin_ai::Session;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Parse CLI arguments
    let args = cli::parse();

    // Initialize logging
    let log_directive = args.log_level.as_deref().unwrap_or("marvin=info");
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(
                log_directive
                    .parse()
                    .unwrap_or_else(|_| "marvin=info".parse().unwrap()),
            ),
        )
        .init();

    tracing::info!("Marvin v{} starting...", env!("CARGO_PKG_VERSION"));

    // Load config
    let config = match args.config {
        Some(ref path) => {
            tracing::info!("Using config override: {path}");
            marvin_config::load_from_path(std::path::Path::new(path))
        }
        None => marvin_config::load_config(),
    }
    .unwrap_or_else(|e| {
        tracing::warn!("Config load failed, using defaults: {e}");
        marvin_config::MarvinConfig::default()
    });

    // CLI flags win over the config file
    let mut settings = config.ollama;
    if let Some(model) = args.model {
        settings.model = model;
    }
    if let Some(url) = args.url {
        settings.base_url = url;
    }
    tracing::info!("Config loaded (model: {})", settings.model);

    let client = OllamaClient::new(
        OllamaConfig::new()
            .with_base_url(settings.base_url)
            .with_model(settings.model)
            .with_temperature(settings.temperature)
            .with_max_tokens(settings.max_tokens),
    );
    let session = Session::new(ToolEngine::new(ToolRegistry::builtin()));

    if let Err(e) = repl::run(&client, session).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    tracing::info!("Shutdown complete");
}

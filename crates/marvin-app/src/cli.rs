use clap::Parser;

/// Marvin: an offline AI assistant with local file and math tools.
#[derive(Parser, Debug)]
#[command(name = "marvin", version, about)]
pub struct Args {
    /// Model tag override (e.g. "llama3.2:3b").
    #[arg(short, long)]
    pub model: Option<String>,

    /// Ollama base URL override.
    #[arg(short, long)]
    pub url: Option<String>,

    /// Config file path override.
    #[arg(long)]
    pub config: Option<String>,

    /// Log level override (debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,
}

pub fn parse() -> Args {
    Args::parse()
}

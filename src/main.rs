use clap::{
    Parser,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};

use kora_bridge::{
    config::{self, Config, TokenSource},
    error, server,
};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    /// Port to listen on (overrides PORT)
    #[clap(long)]
    port: Option<u16>,

    /// Where tokens come from: `broker` or `refresh` (overrides TOKEN_SOURCE)
    #[clap(long)]
    token_source: Option<TokenSource>,
}

#[tokio::main]
async fn main() {
    config::load_env();

    let cli = Cli::parse();

    let mut config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => error!("Cannot load configuration. Err: {}", e),
    };

    if let Some(port) = cli.port {
        config = config.with_port(port);
    }
    if let Some(token_source) = cli.token_source {
        config = config.with_token_source(token_source);
    }

    if let Err(e) = config.validate() {
        error!("Invalid configuration: {}", e);
    }

    if let Err(e) = server::start_api_server(config).await {
        error!("Server stopped: {}", e);
    }
}

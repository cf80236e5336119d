//! KORA Spotify Bridge Library
//!
//! This library provides a small HTTP bridge that forwards playlist actions
//! (create a playlist, add tracks, start playback) to the Spotify Web API. Every
//! inbound request resolves a fresh bearer token, either from a remote token
//! broker or through a direct OAuth refresh-token grant, and then issues one or
//! two upstream calls whose JSON response is relayed back to the caller.
//!
//! # Modules
//!
//! - `api` - HTTP handlers for the bridge routes
//! - `config` - Configuration loading from environment variables and `.env`
//! - `error` - The bridge error type and its HTTP rendering
//! - `server` - Router construction and the listening loop
//! - `spotify` - Token acquisition and Spotify Web API calls
//! - `types` - Request and response payloads
//! - `utils` - Header builders and JSON helpers
//!
//! # Example
//!
//! ```
//! use kora_bridge::{config, server};
//!
//! #[tokio::main]
//! async fn main() -> kora_bridge::Res<()> {
//!     config::load_env();
//!     let config = config::Config::from_env()?;
//!     server::start_api_server(config).await?;
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod server;
pub mod spotify;
pub mod types;
pub mod utils;

/// A convenient Result type alias for operations that may fail.
///
/// Uses a boxed dynamic error trait object with Send + Sync bounds so it can
/// cross await points. Library operations that surface through HTTP use
/// [`error::BridgeError`] instead.
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// # Example
///
/// ```
/// info!("KORA Spotify Bridge running on port {}", port);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Only meant for fatal startup errors. Request handling never calls this;
/// failures there are turned into HTTP responses instead.
///
/// # Example
///
/// ```
/// error!("Invalid configuration: {}", e);
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}

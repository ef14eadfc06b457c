//! Service configuration loaded from environment variables.
//!
//! Follows 12-factor style: all settings come from environment variables
//! (or a `.env` file via `dotenvy`).

use std::net::SocketAddr;
use std::path::PathBuf;

/// Top-level service configuration.
///
/// Loaded once at startup via [`ServerConfig::from_env`].
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// TCP port the HTTP server listens on.
    pub port: u16,

    /// Path of the JSON file backing the reservation store.
    pub data_path: PathBuf,
}

impl ServerConfig {
    /// Loads configuration from environment variables.
    ///
    /// Falls back to defaults when a variable is not set or cannot be
    /// parsed: port `3000` (`PORT`) and `data/reservations.json`
    /// (`RSVP_DATA_PATH`). Calls `dotenvy::dotenv().ok()` to optionally
    /// load a `.env` file.
    #[must_use]
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let port = parse_env("PORT", 3000);
        let data_path = std::env::var("RSVP_DATA_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("data").join("reservations.json"));

        Self { port, data_path }
    }

    /// Socket address to bind the HTTP server to (`0.0.0.0:<port>`).
    #[must_use]
    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}

/// Parses an environment variable as `T`, returning `default` on missing
/// or invalid values.
fn parse_env<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

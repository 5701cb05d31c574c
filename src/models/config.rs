//! Configuration model loaded from external sources.

use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
/// Basic configuration shared across handlers.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    /// Secret backing the session and flash-message cookies; must be at
    /// least 64 bytes.
    pub secret: String,
    /// Glob the Tera template loader scans, e.g. `templates/**/*.html`.
    pub templates_dir: String,
}

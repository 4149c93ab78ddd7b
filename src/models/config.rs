//! Configuration model loaded from external sources.

use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
/// Settings required to boot the HTTP server.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    pub database_url: String,
    /// Insert the demo customers on startup when they are missing.
    #[serde(default)]
    pub seed_demo_data: bool,
}

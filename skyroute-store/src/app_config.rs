use serde::Deserialize;
use skyroute_core::routes::RouteFinderSettings;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub collections: CollectionsConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub route_finder: RouteFinderSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    pub port: u16,
}

fn default_host() -> String { "0.0.0.0".to_string() }

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub uri: String,
    pub name: String,
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u64,
}

fn default_connect_timeout() -> u64 { 10 }

#[derive(Debug, Deserialize, Clone)]
pub struct CollectionsConfig {
    pub routes: String,
    pub airports: String,
    pub airlines: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SearchConfig {
    /// Atlas Search index over the airports collection
    pub index: String,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { index: "default".to_string() }
    }
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            .add_source(config::File::with_name("config/default"))
            // Per-environment overrides, optional
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Local overrides, never checked in
            .add_source(config::File::with_name("config/local").required(false))
            // Eg.. `SKYROUTE__DATABASE__URI=mongodb://...`
            .add_source(config::Environment::with_prefix("SKYROUTE").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}

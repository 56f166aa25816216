use serde::{Serialize, Deserialize};
use std::collections::HashMap;
use std::default::Default;
use std::fs;
use std::path::Path;
use log::{info, error, warn};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct RouterConfig {
    #[serde(default = "default_bind")]
    pub bind: String,
    /// Seconds a player must wait between switch commands.
    #[serde(default = "default_cooldown")]
    pub cooldown: u64,
    /// Command name -> backend server id.
    #[serde(default)]
    pub servers: HashMap<String, String>,
    /// Backend server id -> socket address.
    #[serde(default)]
    pub backends: HashMap<String, String>,
}

fn default_bind() -> String {
    String::from("0.0.0.0:25570")
}

fn default_cooldown() -> u64 {
    15
}

impl RouterConfig {
    /// Loads the configuration, creating an empty file first if none exists.
    /// Never fails: an unreadable or malformed file is logged and the defaults
    /// are used, which leaves no commands registered.
    pub fn load(path: &Path) -> RouterConfig {
        if !path.exists() {
            warn!("Configuration file not found!");
            if let Err(e) = fs::write(path, "") {
                error!("Error creating configuration file: {}", e);
                return RouterConfig::default();
            }
        }

        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) => {
                error!("Error loading configuration: {}", e);
                return RouterConfig::default();
            }
        };

        match toml::from_str(&raw) {
            Ok(config) => {
                if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                    info!("Successfully loaded {}!", name);
                }

                config
            }
            Err(e) => {
                error!("Error loading configuration: {}", e);
                RouterConfig::default()
            }
        }
    }
}

impl Default for RouterConfig {
    fn default() -> Self {
        RouterConfig {
            bind: default_bind(),
            cooldown: default_cooldown(),
            servers: HashMap::new(),
            backends: HashMap::new(),
        }
    }
}

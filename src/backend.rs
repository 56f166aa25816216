use crate::config::RouterConfig;
use log::{info, warn};
use std::collections::HashMap;
use std::net::SocketAddr;
use tokio::net::TcpStream;
use uuid::Uuid;

/// A live backend server behind the proxy.
#[derive(Debug, Clone, PartialEq)]
pub struct BackendHandle {
    pub name: String,
    pub address: SocketAddr,
}

pub trait BackendRegistry {
    fn lookup(&self, target: &str) -> Option<BackendHandle>;

    /// Fire-and-forget: the request is issued and nothing is reported back.
    fn connect(&self, player: Uuid, handle: &BackendHandle);
}

/// Registry over the `backends` table of the configuration.
pub struct StaticRegistry {
    backends: HashMap<String, SocketAddr>,
}

impl StaticRegistry {
    pub fn from_config(config: &RouterConfig) -> Self {
        let mut backends = HashMap::new();

        for (name, address) in &config.backends {
            match address.parse::<SocketAddr>() {
                Ok(address) => {
                    backends.insert(name.clone(), address);
                }
                Err(_) => warn!("Skipping backend \"{}\": bad address \"{}\".", name, address),
            }
        }

        StaticRegistry { backends }
    }
}

impl BackendRegistry for StaticRegistry {
    fn lookup(&self, target: &str) -> Option<BackendHandle> {
        self.backends.get(target).map(|address| BackendHandle {
            name: target.to_owned(),
            address: *address,
        })
    }

    fn connect(&self, player: Uuid, handle: &BackendHandle) {
        let name = handle.name.clone();
        let address = handle.address;

        tokio::spawn(async move {
            match TcpStream::connect(address).await {
                Ok(_) => info!("Opened connection to {} for {}.", name, player),
                Err(e) => warn!("Connection to {} for {} failed: {}", name, player, e),
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RouterConfig;

    fn config_with_backends(entries: &[(&str, &str)]) -> RouterConfig {
        let mut config = RouterConfig::default();
        for (name, address) in entries {
            config
                .backends
                .insert((*name).to_owned(), (*address).to_owned());
        }
        config
    }

    #[test]
    fn lookup_finds_configured_backend() {
        let registry =
            StaticRegistry::from_config(&config_with_backends(&[("Lobby-1", "127.0.0.1:25565")]));

        let handle = registry.lookup("Lobby-1").unwrap();
        assert_eq!(handle.name, "Lobby-1");
        assert_eq!(handle.address, "127.0.0.1:25565".parse().unwrap());
    }

    #[test]
    fn lookup_misses_unknown_backend() {
        let registry =
            StaticRegistry::from_config(&config_with_backends(&[("Lobby-1", "127.0.0.1:25565")]));

        assert!(registry.lookup("PvP-1").is_none());
    }

    #[test]
    fn bad_address_is_skipped() {
        let registry = StaticRegistry::from_config(&config_with_backends(&[
            ("Lobby-1", "127.0.0.1:25565"),
            ("Broken", "not-an-address"),
        ]));

        assert!(registry.lookup("Lobby-1").is_some());
        assert!(registry.lookup("Broken").is_none());
    }
}

use crate::backend::BackendRegistry;
use crate::command::{Command, CommandRegistry};
use crate::command::switch::SwitchCommand;
use crate::config::RouterConfig;
use crate::router::Router;
use log::{info, warn};
use std::sync::Arc;

pub struct Engine {
    commands: CommandRegistry,
}

impl Engine {
    pub fn new() -> Self {
        Engine {
            commands: CommandRegistry::new(),
        }
    }

    pub fn command<T: 'static + Command + Sized + Send + Sync>(mut self, command: T) -> Self {
        self.commands.register(Box::new(command));

        self
    }

    pub fn registry(self) -> CommandRegistry {
        self.commands
    }
}

/// Builds the engine from the configuration: one switch command per `servers`
/// entry, all sharing one router over `backends`. Runs once at startup,
/// before anything can be dispatched.
pub fn assemble(config: &RouterConfig, backends: Arc<dyn BackendRegistry + Send + Sync>) -> Engine {
    let router = Arc::new(Router::new(config.cooldown, backends));
    let mut engine = Engine::new();

    if config.servers.is_empty() {
        warn!("No server commands configured.");
        return engine;
    }

    for (label, target) in &config.servers {
        engine = engine.command(SwitchCommand::new(label, target, router.clone()));
    }

    info!("Registered {} server command(s).", engine.commands.len());

    engine
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::{BackendHandle, BackendRegistry};
    use uuid::Uuid;

    struct NoBackends;

    impl BackendRegistry for NoBackends {
        fn lookup(&self, _target: &str) -> Option<BackendHandle> {
            None
        }

        fn connect(&self, _player: Uuid, _handle: &BackendHandle) {}
    }

    #[test]
    fn one_command_per_configured_entry() {
        let mut config = RouterConfig::default();
        config.servers.insert("lobby".to_owned(), "Lobby-1".to_owned());
        config.servers.insert("pvp".to_owned(), "PvP-1".to_owned());

        let engine = assemble(&config, Arc::new(NoBackends));
        assert_eq!(engine.registry().len(), 2);
    }

    #[test]
    fn empty_servers_section_registers_nothing() {
        let config = RouterConfig::default();

        let engine = assemble(&config, Arc::new(NoBackends));
        assert_eq!(engine.registry().len(), 0);
    }
}

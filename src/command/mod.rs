pub mod switch;

use log::debug;
use std::collections::HashMap;
use uuid::Uuid;

pub trait CommandSender {
    fn send_message(&self, message: String);
    fn get_name(&self) -> &str;

    /// `Some` for player-capable actors, `None` for everything else
    /// (console, remote admin).
    fn get_id(&self) -> Option<Uuid>;
}

pub trait Command {
    fn get_label(&self) -> &str;
    fn execute(&self, sender: &dyn CommandSender);
}

/// String-keyed command bindings. Registering a label twice replaces the
/// earlier binding, so the latest registration is the one that answers.
pub struct CommandRegistry {
    commands: HashMap<String, Box<dyn Command + Send + Sync>>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        CommandRegistry {
            commands: HashMap::new(),
        }
    }

    pub fn register(&mut self, command: Box<dyn Command + Send + Sync>) {
        let label = command.get_label().to_owned();

        if self.commands.insert(label.clone(), command).is_some() {
            debug!("Rebinding command \"{}\".", label);
        }
    }

    pub fn dispatch(&self, sender: &dyn CommandSender, label: &str) {
        match self.commands.get(label) {
            Some(command) => command.execute(sender),
            None => sender.send_message(format!("Unknown command \"{}\".", label)),
        }
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }
}

use crate::command::{Command, CommandSender};
use crate::router::{self, Router};
use std::sync::Arc;

/// One of these is registered per `servers` entry in the configuration; the
/// command name is the entry's key and `target` its backend server id.
pub struct SwitchCommand {
    label: String,
    target: String,
    router: Arc<Router>,
}

impl SwitchCommand {
    pub fn new(label: &str, target: &str, router: Arc<Router>) -> Self {
        SwitchCommand {
            label: label.to_owned(),
            target: target.to_owned(),
            router,
        }
    }
}

impl Command for SwitchCommand {
    fn get_label(&self) -> &str {
        &self.label
    }

    fn execute(&self, sender: &dyn CommandSender) {
        self.router.handle(sender, &self.target, router::now_millis());
    }
}

use crate::backend::BackendRegistry;
use crate::command::CommandSender;
use crate::util::color::Color;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

const NOT_PLAYER: &str = "&cOnly players can use this command!";
const COOLDOWN: &str = "&aYou must wait before using this command again.";
const NOT_FOUND: &str = "&cServer not found.";

/// Decides, per invocation, between connecting the player to a backend and a
/// rejection message, keeping one last-invocation timestamp per player.
pub struct Router {
    cooldown: u64,
    cooldowns: Mutex<HashMap<Uuid, u64>>,
    backends: Arc<dyn BackendRegistry + Send + Sync>,
}

impl Router {
    pub fn new(cooldown: u64, backends: Arc<dyn BackendRegistry + Send + Sync>) -> Self {
        Router {
            cooldown,
            cooldowns: Mutex::new(HashMap::new()),
            backends,
        }
    }

    /// Handles one invocation at wall-clock `now` (millis since epoch).
    ///
    /// Every outcome resolves to a message on `sender`; nothing is raised.
    /// The cooldown entry is refreshed after the backend lookup whether or not
    /// the backend exists, and left untouched on the rejection paths.
    pub fn handle(&self, sender: &dyn CommandSender, target: &str, now: u64) {
        let player = match sender.get_id() {
            Some(id) => id,
            None => {
                sender.send_message(NOT_PLAYER.to_owned().colored());
                return;
            }
        };

        {
            let cooldowns = self.cooldowns.lock().unwrap();
            if let Some(&last) = cooldowns.get(&player) {
                if now.saturating_sub(last) < self.cooldown * 1000 {
                    sender.send_message(COOLDOWN.to_owned().colored());
                    return;
                }
            }
        }

        match self.backends.lookup(target) {
            Some(handle) => {
                self.backends.connect(player, &handle);
                sender.send_message(format!("&bConnecting to {}...", target).colored());
            }
            None => sender.send_message(NOT_FOUND.to_owned().colored()),
        }

        self.cooldowns.lock().unwrap().insert(player, now);
    }

    #[cfg(test)]
    pub(crate) fn last_invocation(&self, player: &Uuid) -> Option<u64> {
        self.cooldowns.lock().unwrap().get(player).copied()
    }
}

pub fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as u64)
        .unwrap_or(0)
}

use crate::command::CommandSender;
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};
use uuid::Uuid;

pub struct Player {
    uuid: Uuid,
    name: String,
    outbox: UnboundedSender<String>,
}

impl Player {
    /// The receiver end is drained by the session's writer task.
    pub fn new(name: String) -> (Player, UnboundedReceiver<String>) {
        let (outbox, inbox) = unbounded_channel();

        (
            Player {
                uuid: Uuid::new_v4(),
                name,
                outbox,
            },
            inbox,
        )
    }

    pub fn get_uuid(&self) -> Uuid {
        self.uuid
    }
}

impl CommandSender for Player {
    fn get_name(&self) -> &str {
        &self.name
    }

    fn send_message(&self, message: String) {
        // A failed send means the session is already gone.
        let _ = self.outbox.clone().send(message);
    }

    fn get_id(&self) -> Option<Uuid> {
        Some(self.uuid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_reach_the_outbox() {
        let (player, mut inbox) = Player::new(String::from("Steve"));

        player.send_message(String::from("Connecting to Lobby-1..."));

        assert_eq!(
            inbox.try_recv().ok(),
            Some(String::from("Connecting to Lobby-1..."))
        );
    }

    #[test]
    fn player_is_a_player_capable_sender() {
        let (player, _inbox) = Player::new(String::from("Alex"));

        assert_eq!(player.get_name(), "Alex");
        assert_eq!(player.get_id(), Some(player.get_uuid()));
    }
}

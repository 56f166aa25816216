use std::io;
use std::fmt::Display;
use std::net::ToSocketAddrs;
use std::sync::Arc;
use tokio::net::{TcpListener, TcpStream};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::time::Instant;
use log::{info, warn, debug};
use uuid::Uuid;
use crate::command::{CommandRegistry, CommandSender};
use crate::player::Player;

/// Line-based front for the command registry: every TCP connection is a
/// player session, stdin is the console. The Minecraft side of the original
/// proxy is out of scope here; this is just enough surface to invoke
/// commands against.
pub struct ProxyServer {
    registry: Arc<CommandRegistry>,
    listeners: Vec<TcpListener>,
    pub created_time: Instant,
}

impl ProxyServer {
    pub fn new(registry: CommandRegistry) -> Self {
        ProxyServer {
            registry: Arc::new(registry),
            listeners: Vec::new(),
            created_time: Instant::now(),
        }
    }

    async fn attempt_bind<A: ToSocketAddrs>(&self, address: A) -> io::Result<Vec<TcpListener>> {
        let mut sockets = Vec::new();
        let mut error: Option<io::Error> = None;

        for address in address.to_socket_addrs()? {
            match TcpListener::bind(address).await {
                Ok(socket) => sockets.push(socket),
                Err(e) => error = Some(e),
            }
        }

        return if sockets.is_empty() {
            if let Some(e) = error.take() {
                Err(e)
            } else {
                Err(io::Error::new(
                    io::ErrorKind::Other,
                    "Failed to bind to address!",
                ))
            }
        } else {
            Ok(sockets)
        }
    }

    pub async fn bind<A: ToSocketAddrs + Display>(mut self, address: A) -> io::Result<Self> {
        for listener in self.attempt_bind(address).await? {
            debug!("Binded to address {}.", listener.local_addr()?);
            self.listeners.push(listener);
        }

        Ok(self)
    }

    pub async fn run(mut self) -> io::Result<()> {
        if self.listeners.is_empty() {
            panic!("Must be bound to at least one address");
        }

        info!("Started in {:?}.", self.created_time.elapsed());

        for listener in self.listeners.drain(..) {
            tokio::spawn(accept_loop(listener, self.registry.clone()));
        }

        // Console: one command per line, rejected by the switch commands as a
        // non-player actor.
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        while let Some(line) = lines.next_line().await? {
            if let Some(input) = line.split_ascii_whitespace().next() {
                self.registry.dispatch(&ConsoleCommandSender, input);
            }
        }

        Ok(())
    }
}

async fn accept_loop(mut listener: TcpListener, registry: Arc<CommandRegistry>) {
    loop {
        match listener.accept().await {
            Ok((stream, address)) => {
                debug!("Session opened from {}.", address);
                tokio::spawn(handle_session(stream, registry.clone()));
            }
            Err(e) => warn!("Failed to accept session: {}", e),
        }
    }
}

/// First line is the player name, every later line a command invocation.
async fn handle_session(stream: TcpStream, registry: Arc<CommandRegistry>) {
    let (read, mut write) = stream.into_split();
    let mut lines = BufReader::new(read).lines();

    let name = match lines.next_line().await {
        Ok(Some(line)) if !line.trim().is_empty() => line.trim().to_owned(),
        _ => return,
    };

    let (player, mut inbox) = Player::new(name);
    info!("Player {} ({}) joined.", player.get_name(), player.get_uuid());

    tokio::spawn(async move {
        while let Some(message) = inbox.recv().await {
            if write.write_all(format!("{}\n", message).as_bytes()).await.is_err() {
                break;
            }
        }
    });

    while let Ok(Some(line)) = lines.next_line().await {
        if let Some(input) = line.split_ascii_whitespace().next() {
            registry.dispatch(&player, input);
        }
    }

    info!("Player {} ({}) left.", player.get_name(), player.get_uuid());
}

struct ConsoleCommandSender;
impl CommandSender for ConsoleCommandSender {
    fn get_name(&self) -> &str {
        "Console"
    }

    fn send_message(&self, message: String) {
        info!("{}", message)
    }

    fn get_id(&self) -> Option<Uuid> {
        None
    }
}

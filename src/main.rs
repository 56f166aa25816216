mod backend;
mod server;
mod command;
mod player;
mod engine;
mod config;
mod router;
mod util;

use std::io;

use crate::server::ProxyServer;
use pretty_env_logger;
use log::{info};
use crate::backend::StaticRegistry;
use crate::config::RouterConfig;
use std::path::Path;
use std::sync::Arc;

const VERSION: &'static str = env!("CARGO_PKG_VERSION");

#[tokio::main]
async fn main() -> io::Result<()> {
   std::env::set_var("RUST_LOG", "shunt");

   pretty_env_logger::init_timed();

   info!("You're running shunt v{}.", VERSION);

   let config = RouterConfig::load(Path::new("./config.toml"));
   let bind = config.bind.clone();

   let backends = Arc::new(StaticRegistry::from_config(&config));
   let engine = engine::assemble(&config, backends);

   ProxyServer::new(engine.registry())
    .bind(bind)
    .await?
    .run()
    .await
}

pub mod cli;
pub mod fallback;
pub mod gateway;
pub mod models;
pub mod server;
pub mod store;

use cli::Args;
use gateway::CompletionGateway;
use log::info;
use server::Server;
use std::error::Error;
use std::sync::Arc;

pub async fn run(args: Args) -> Result<(), Box<dyn Error + Send + Sync>> {
    info!("--- Core Configuration ---");
    info!("HTTP Port: {}", args.port);
    info!("History Store Type: {}", args.history_type);
    if args.history_type.eq_ignore_ascii_case("redis") {
        info!("History Store Host: {}", args.history_host);
    }
    info!("-------------------------");

    let store = store::initialize_store(&args).await?;
    let gateway = CompletionGateway::initialize(&args).map(Arc::new);
    if gateway.is_none() {
        info!("No completion API key configured. Replies come from the canned-response engine.");
    }

    let server = Server::new(args.port, store, gateway);
    server.run().await?;

    Ok(())
}

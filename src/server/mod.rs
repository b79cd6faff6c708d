pub mod api;

use std::error::Error;
use std::sync::Arc;

use crate::gateway::CompletionGateway;
use crate::store::ConversationStore;

pub struct Server {
    port: u16,
    state: api::AppState,
}

impl Server {
    pub fn new(
        port: u16,
        store: Arc<dyn ConversationStore>,
        gateway: Option<Arc<CompletionGateway>>
    ) -> Self {
        Self {
            port,
            state: api::AppState { store, gateway },
        }
    }

    pub async fn run(&self) -> Result<(), Box<dyn Error + Send + Sync>> {
        api::start_http_server(self.port, self.state.clone()).await
    }
}

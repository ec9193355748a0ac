use std::sync::Arc;

use tokio::net::TcpListener;
use todo_core::TodoService;
use todo_server::{logging::init_logging, ServerConfig, ServerError};

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    let config = ServerConfig::from_env()?;
    init_logging(&config);

    let listener = TcpListener::bind(config.addr).await?;
    tracing::info!(addr = %listener.local_addr()?, cors = config.cors, "server is running");

    todo_server::run(listener, Arc::new(TodoService::seeded()), &config).await?;
    Ok(())
}

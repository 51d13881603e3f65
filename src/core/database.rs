use crate::core::config::DatabaseConfig;
use mongodb::{options::ClientOptions, Client, Database};

/// Build the shared MongoDB client.
///
/// The driver keeps its own connection pool; one client is created at startup
/// and handed to every handler.
pub async fn create_client(config: &DatabaseConfig) -> Result<Client, mongodb::error::Error> {
    let mut options = ClientOptions::parse(&config.connection_string).await?;
    options.app_name = Some(env!("CARGO_PKG_NAME").to_string());
    options.max_pool_size = Some(config.max_pool_size);
    options.min_pool_size = Some(config.min_pool_size);
    options.connect_timeout = Some(config.connect_timeout);
    options.server_selection_timeout = Some(config.server_selection_timeout);

    Client::with_options(options)
}

pub fn database(client: &Client) -> Database {
    client.database(DatabaseConfig::DATABASE_NAME)
}

//! Builder for the HTTP state from the configured user store.

use std::sync::Arc;

use actix_web::web;
use tracing::info;

use users_api::domain::ports::UserRepository;
use users_api::inbound::http::state::HttpState;
use users_api::outbound::persistence::{DieselUserRepository, InMemoryUserRepository};

use super::ServerConfig;

/// Wire the user ports to PostgreSQL when a pool is configured, otherwise to
/// a process-local store.
pub(crate) fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let repository: Arc<dyn UserRepository> = match &config.db_pool {
        Some(pool) => {
            info!("using PostgreSQL user store");
            Arc::new(DieselUserRepository::new(pool.clone()))
        }
        None => {
            info!("using in-memory user store");
            Arc::new(InMemoryUserRepository::new())
        }
    };
    web::Data::new(HttpState::from_repository(repository))
}

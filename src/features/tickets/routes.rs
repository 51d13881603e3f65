use std::sync::Arc;

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::features::tickets::handlers;
use crate::features::tickets::services::TicketService;

/// Create routes for the tickets feature
///
/// Note: These endpoints are anonymous
pub fn routes(service: Arc<TicketService>) -> Router {
    Router::new()
        .route("/ticket/create", post(handlers::create_ticket))
        .route("/ticket/addMessage", post(handlers::add_message_to_ticket))
        .route("/ticket/get", get(handlers::get_ticket))
        .route("/ticket/update", put(handlers::update_ticket))
        .route("/ticket/delete", delete(handlers::delete_ticket))
        .with_state(service)
}

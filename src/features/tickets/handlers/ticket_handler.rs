use std::sync::Arc;

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};

use crate::core::error::{AppError, Result};
use crate::features::tickets::dtos::{
    AddMessageParams, CreateTicketParams, TicketIdParams, TicketMessageDto, UpdateTicketParams,
};
use crate::features::tickets::services::TicketService;

/// Unwrap query params, reporting a malformed query string as a failure of `operation`
fn query_params<T>(
    query: std::result::Result<Query<T>, QueryRejection>,
    operation: &str,
) -> Result<T> {
    query.map(|Query(params)| params).map_err(|rejection| {
        AppError::BadRequest(rejection.body_text()).for_operation(operation)
    })
}

/// Open a new support ticket
#[utoipa::path(
    post,
    path = "/ticket/create",
    params(CreateTicketParams),
    responses(
        (status = 200, description = "Ticket created", body = String, content_type = "text/plain"),
        (status = 400, description = "Ticket could not be created", body = String, content_type = "text/plain")
    ),
    tag = "tickets"
)]
pub async fn create_ticket(
    State(service): State<Arc<TicketService>>,
    query: std::result::Result<Query<CreateTicketParams>, QueryRejection>,
) -> Result<String> {
    let params = query_params(query, "creating ticket")?;

    let id = service
        .create(params)
        .await
        .map_err(|e| e.for_operation("creating ticket"))?;

    Ok(format!("Ticket created with ID: {}", id))
}

/// Append a message to a ticket
#[utoipa::path(
    post,
    path = "/ticket/addMessage",
    params(AddMessageParams),
    responses(
        (status = 200, description = "Message appended", body = String, content_type = "text/plain"),
        (status = 404, description = "Ticket not found", body = String, content_type = "text/plain"),
        (status = 400, description = "Malformed id or store failure", body = String, content_type = "text/plain")
    ),
    tag = "tickets"
)]
pub async fn add_message_to_ticket(
    State(service): State<Arc<TicketService>>,
    query: std::result::Result<Query<AddMessageParams>, QueryRejection>,
) -> Result<String> {
    let params = query_params(query, "adding message to ticket")?;

    service
        .add_message(params)
        .await
        .map_err(|e| e.for_operation("adding message to ticket"))?;

    Ok("Message added to ticket".to_string())
}

/// Get the message history of a ticket
#[utoipa::path(
    get,
    path = "/ticket/get",
    params(TicketIdParams),
    responses(
        (status = 200, description = "Messages in the order they were added", body = Vec<TicketMessageDto>),
        (status = 404, description = "Ticket not found", body = String, content_type = "text/plain"),
        (status = 400, description = "Malformed id or store failure", body = String, content_type = "text/plain")
    ),
    tag = "tickets"
)]
pub async fn get_ticket(
    State(service): State<Arc<TicketService>>,
    query: std::result::Result<Query<TicketIdParams>, QueryRejection>,
) -> Result<Json<Vec<TicketMessageDto>>> {
    let params = query_params(query, "retrieving ticket")?;

    let messages = service
        .get_messages(&params.ticket_id)
        .await
        .map_err(|e| e.for_operation("retrieving ticket"))?;

    Ok(Json(messages))
}

/// Change a ticket's title and assigned admin
#[utoipa::path(
    put,
    path = "/ticket/update",
    params(UpdateTicketParams),
    responses(
        (status = 200, description = "Ticket updated", body = String, content_type = "text/plain"),
        (status = 404, description = "Ticket not found", body = String, content_type = "text/plain"),
        (status = 400, description = "Malformed id or store failure", body = String, content_type = "text/plain")
    ),
    tag = "tickets"
)]
pub async fn update_ticket(
    State(service): State<Arc<TicketService>>,
    query: std::result::Result<Query<UpdateTicketParams>, QueryRejection>,
) -> Result<String> {
    let params = query_params(query, "updating ticket")?;

    service
        .update(params)
        .await
        .map_err(|e| e.for_operation("updating ticket"))?;

    Ok("Ticket updated successfully".to_string())
}

/// Delete a ticket
#[utoipa::path(
    delete,
    path = "/ticket/delete",
    params(TicketIdParams),
    responses(
        (status = 200, description = "Ticket deleted", body = String, content_type = "text/plain"),
        (status = 404, description = "Ticket not found", body = String, content_type = "text/plain"),
        (status = 400, description = "Malformed id or store failure", body = String, content_type = "text/plain")
    ),
    tag = "tickets"
)]
pub async fn delete_ticket(
    State(service): State<Arc<TicketService>>,
    query: std::result::Result<Query<TicketIdParams>, QueryRejection>,
) -> Result<String> {
    let params = query_params(query, "deleting ticket")?;

    service
        .delete(&params.ticket_id)
        .await
        .map_err(|e| e.for_operation("deleting ticket"))?;

    Ok("Ticket deleted successfully".to_string())
}

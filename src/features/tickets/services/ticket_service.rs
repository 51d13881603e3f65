use std::sync::Arc;

use bson::oid::ObjectId;

use crate::core::error::{AppError, Result};
use crate::features::tickets::dtos::{
    AddMessageParams, CreateTicketParams, TicketMessageDto, UpdateTicketParams,
};
use crate::features::tickets::models::{Ticket, TicketMessage};
use crate::features::tickets::store::TicketStore;

/// Parse a ticket id from its 24-character hex form
pub fn parse_ticket_id(raw: &str) -> Result<ObjectId> {
    ObjectId::parse_str(raw)
        .map_err(|e| AppError::InvalidId(format!("'{}' is not a valid ticket id: {}", raw, e)))
}

/// Service for ticket operations
pub struct TicketService {
    store: Arc<dyn TicketStore>,
}

impl TicketService {
    pub fn new(store: Arc<dyn TicketStore>) -> Self {
        Self { store }
    }

    /// Open a ticket whose first message is authored by the requesting user
    pub async fn create(&self, params: CreateTicketParams) -> Result<ObjectId> {
        let ticket = Ticket::open(
            params.user_id,
            params.admin_id,
            params.title,
            params.message_content,
        );

        let id = self.store.insert(&ticket).await?;

        tracing::info!("Ticket created: id={}, user={}", id, ticket.user_id);

        Ok(id)
    }

    /// Append a message to an existing ticket
    pub async fn add_message(&self, params: AddMessageParams) -> Result<()> {
        let id = parse_ticket_id(&params.ticket_id)?;

        if self.store.find_by_id(id).await?.is_none() {
            return Err(AppError::NotFound(format!("Ticket '{}' not found", id)));
        }

        let message = TicketMessage::new(params.sender_id, params.message_content);
        let matched = self.store.push_message(id, &message).await?;

        // The ticket can be deleted between the lookup and the push
        if matched == 0 {
            return Err(AppError::NotFound(format!(
                "Ticket '{}' was removed before the message was added",
                id
            )));
        }

        tracing::info!(
            "Message added: ticket={}, message={}, sender={}",
            id,
            message.id,
            message.sender_id
        );

        Ok(())
    }

    /// Message history of a ticket, in the order the messages were added
    pub async fn get_messages(&self, ticket_id: &str) -> Result<Vec<TicketMessageDto>> {
        let id = parse_ticket_id(ticket_id)?;

        let ticket = self
            .store
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Ticket '{}' not found", id)))?;

        ticket
            .messages
            .iter()
            .map(|m| {
                TicketMessageDto::try_from(m)
                    .map_err(|e| AppError::Internal(format!("Failed to render message: {}", e)))
            })
            .collect()
    }

    /// Replace title and assigned admin
    pub async fn update(&self, params: UpdateTicketParams) -> Result<()> {
        let id = parse_ticket_id(&params.ticket_id)?;

        let matched = self
            .store
            .update_metadata(id, &params.title, &params.admin_id)
            .await?;

        if matched == 0 {
            return Err(AppError::NotFound(format!("Ticket '{}' not found", id)));
        }

        tracing::info!("Ticket updated: id={}, admin={}", id, params.admin_id);

        Ok(())
    }

    pub async fn delete(&self, ticket_id: &str) -> Result<()> {
        let id = parse_ticket_id(ticket_id)?;

        let deleted = self.store.delete(id).await?;

        if deleted == 0 {
            return Err(AppError::NotFound(format!("Ticket '{}' not found", id)));
        }

        tracing::info!("Ticket deleted: id={}", id);

        Ok(())
    }
}

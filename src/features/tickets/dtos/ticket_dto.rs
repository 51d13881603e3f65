use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::features::tickets::models::TicketMessage;

// =============================================================================
// QUERY PARAMS
// =============================================================================
//
// All parameters arrive on the query string. Absent values are read as empty
// strings; only the ticket id is checked, when it is parsed.

/// Query params for opening a ticket
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
#[serde(rename_all = "camelCase")]
pub struct CreateTicketParams {
    /// Requesting user
    #[serde(default)]
    pub user_id: String,
    /// Assigned administrator
    #[serde(default)]
    pub admin_id: String,
    #[serde(default)]
    pub title: String,
    /// Content of the first message
    #[serde(default)]
    pub message_content: String,
}

/// Query params for appending a message
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
#[serde(rename_all = "camelCase")]
pub struct AddMessageParams {
    /// 24-character hex ticket id
    #[serde(default)]
    pub ticket_id: String,
    #[serde(default)]
    pub sender_id: String,
    #[serde(default)]
    pub message_content: String,
}

/// Query params addressing a single ticket
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
#[serde(rename_all = "camelCase")]
pub struct TicketIdParams {
    /// 24-character hex ticket id
    #[serde(default)]
    pub ticket_id: String,
}

/// Query params for changing ticket metadata
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTicketParams {
    /// 24-character hex ticket id
    #[serde(default)]
    pub ticket_id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub admin_id: String,
}

// =============================================================================
// RESPONSES
// =============================================================================

/// One entry of a ticket's message history
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TicketMessageDto {
    /// Sender of the message
    #[serde(rename = "Usuario")]
    pub usuario: String,
    /// Stored message document as extended JSON
    #[serde(rename = "Mensagem")]
    pub mensagem: String,
}

impl TryFrom<&TicketMessage> for TicketMessageDto {
    type Error = bson::ser::Error;

    fn try_from(message: &TicketMessage) -> Result<Self, Self::Error> {
        Ok(Self {
            usuario: message.sender_id.clone(),
            mensagem: message.to_extended_json()?,
        })
    }
}

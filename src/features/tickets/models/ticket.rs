use bson::oid::ObjectId;
use bson::serde_helpers::chrono_datetime_as_bson_datetime;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Current version of the ticket document layout
pub const TICKET_SCHEMA_VERSION: i32 = 1;

fn default_schema_version() -> i32 {
    TICKET_SCHEMA_VERSION
}

/// Older documents may carry `null` where a string is expected.
fn nullable_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Support ticket document stored in the `suporte` collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    #[serde(default, deserialize_with = "nullable_string")]
    pub user_id: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub admin_id: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub title: String,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
    /// Conversation history in append order. The stored key is `message`.
    #[serde(rename = "message", default)]
    pub messages: Vec<TicketMessage>,
    #[serde(default = "default_schema_version")]
    pub schema_version: i32,
}

/// One entry of a ticket conversation, embedded in [`Ticket::messages`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketMessage {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
    #[serde(default, deserialize_with = "nullable_string")]
    pub sender_id: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub content: String,
}

impl Ticket {
    /// Open a new ticket whose first message comes from the requesting user.
    pub fn open(user_id: String, admin_id: String, title: String, content: String) -> Self {
        let now = Utc::now();
        let first = TicketMessage {
            id: ObjectId::new(),
            created_at: now,
            sender_id: user_id.clone(),
            content,
        };

        Self {
            id: None,
            user_id,
            admin_id,
            title,
            created_at: now,
            messages: vec![first],
            schema_version: TICKET_SCHEMA_VERSION,
        }
    }
}

impl TicketMessage {
    pub fn new(sender_id: String, content: String) -> Self {
        Self {
            id: ObjectId::new(),
            created_at: Utc::now(),
            sender_id,
            content,
        }
    }

    /// Render the message the way it is stored, as relaxed extended JSON.
    pub fn to_extended_json(&self) -> Result<String, bson::ser::Error> {
        let doc = bson::to_document(self)?;
        Ok(bson::Bson::Document(doc).into_relaxed_extjson().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bson::{doc, Bson};

    #[test]
    fn test_open_inserts_first_message_from_creator() {
        let ticket = Ticket::open(
            "307".to_string(),
            "551".to_string(),
            "fan".to_string(),
            "hi".to_string(),
        );

        assert!(ticket.id.is_none());
        assert_eq!(ticket.messages.len(), 1);
        assert_eq!(ticket.messages[0].sender_id, "307");
        assert_eq!(ticket.messages[0].content, "hi");
        assert_eq!(ticket.messages[0].created_at, ticket.created_at);
        assert_eq!(ticket.schema_version, TICKET_SCHEMA_VERSION);
    }

    #[test]
    fn test_document_layout() {
        let ticket = Ticket::open(
            "u".to_string(),
            "a".to_string(),
            "t".to_string(),
            "c".to_string(),
        );
        let doc = bson::to_document(&ticket).unwrap();

        assert!(!doc.contains_key("_id"));
        assert_eq!(doc.get_str("userId").unwrap(), "u");
        assert_eq!(doc.get_str("adminId").unwrap(), "a");
        assert_eq!(doc.get_str("title").unwrap(), "t");
        assert!(matches!(doc.get("createdAt"), Some(Bson::DateTime(_))));
        assert_eq!(doc.get_i32("schemaVersion").unwrap(), 1);

        let messages = doc.get_array("message").unwrap();
        let first = messages[0].as_document().unwrap();
        assert!(matches!(first.get("_id"), Some(Bson::ObjectId(_))));
        assert_eq!(first.get_str("senderId").unwrap(), "u");
        assert_eq!(first.get_str("content").unwrap(), "c");
    }

    #[test]
    fn test_reads_legacy_document() {
        let id = ObjectId::new();
        let message_id = ObjectId::new();
        let legacy = doc! {
            "_id": id,
            "userId": "307",
            "adminId": Bson::Null,
            "title": Bson::Null,
            "createdAt": bson::DateTime::now(),
            "message": [
                {
                    "_id": message_id,
                    "createdAt": bson::DateTime::now(),
                    "senderId": "307",
                    "content": "hello",
                }
            ],
            "somethingElse": true,
        };

        let ticket: Ticket = bson::from_document(legacy).unwrap();

        assert_eq!(ticket.id, Some(id));
        assert_eq!(ticket.admin_id, "");
        assert_eq!(ticket.title, "");
        assert_eq!(ticket.schema_version, TICKET_SCHEMA_VERSION);
        assert_eq!(ticket.messages.len(), 1);
        assert_eq!(ticket.messages[0].id, message_id);
    }

    #[test]
    fn test_message_extended_json() {
        let message = TicketMessage::new("551".to_string(), "hi".to_string());
        let json = message.to_extended_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["_id"]["$oid"], message.id.to_hex());
        assert_eq!(value["senderId"], "551");
        assert_eq!(value["content"], "hi");
        assert!(value["createdAt"]["$date"].is_string());
    }
}

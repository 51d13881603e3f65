use async_trait::async_trait;
use bson::{doc, oid::ObjectId, Document};
use mongodb::{Collection, Database};

use crate::core::config::DatabaseConfig;
use crate::core::error::{AppError, Result};
use crate::features::tickets::models::{Ticket, TicketMessage};
use crate::features::tickets::store::TicketStore;

/// [`TicketStore`] backed by the `suporte` MongoDB collection
#[derive(Clone)]
pub struct MongoTicketStore {
    collection: Collection<Ticket>,
}

impl MongoTicketStore {
    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.collection(DatabaseConfig::TICKET_COLLECTION),
        }
    }
}

/// Filter matching one ticket by `_id`
fn by_id(id: ObjectId) -> Document {
    doc! { "_id": id }
}

/// Atomic append of `message` to the `message` array
fn push_message_update(message: &TicketMessage) -> Result<Document> {
    let message = bson::to_bson(message)
        .map_err(|e| AppError::Internal(format!("Failed to encode message: {}", e)))?;

    Ok(doc! { "$push": { "message": message } })
}

fn metadata_update(title: &str, admin_id: &str) -> Document {
    doc! { "$set": { "title": title, "adminId": admin_id } }
}

#[async_trait]
impl TicketStore for MongoTicketStore {
    async fn insert(&self, ticket: &Ticket) -> Result<ObjectId> {
        let result = self.collection.insert_one(ticket).await.map_err(|e| {
            tracing::error!("Failed to insert ticket: {:?}", e);
            AppError::Database(e)
        })?;

        result.inserted_id.as_object_id().ok_or_else(|| {
            AppError::Internal(format!(
                "Inserted ticket id is not an ObjectId: {}",
                result.inserted_id
            ))
        })
    }

    async fn find_by_id(&self, id: ObjectId) -> Result<Option<Ticket>> {
        self.collection
            .find_one(by_id(id))
            .await
            .map_err(|e| {
                tracing::error!("Failed to find ticket by ID: {:?}", e);
                AppError::Database(e)
            })
    }

    async fn push_message(&self, id: ObjectId, message: &TicketMessage) -> Result<u64> {
        let result = self
            .collection
            .update_one(by_id(id), push_message_update(message)?)
            .await
            .map_err(|e| {
                tracing::error!("Failed to push ticket message: {:?}", e);
                AppError::Database(e)
            })?;

        Ok(result.matched_count)
    }

    async fn update_metadata(&self, id: ObjectId, title: &str, admin_id: &str) -> Result<u64> {
        let result = self
            .collection
            .update_one(by_id(id), metadata_update(title, admin_id))
            .await
            .map_err(|e| {
                tracing::error!("Failed to update ticket: {:?}", e);
                AppError::Database(e)
            })?;

        Ok(result.matched_count)
    }

    async fn delete(&self, id: ObjectId) -> Result<u64> {
        let result = self
            .collection
            .delete_one(by_id(id))
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete ticket: {:?}", e);
                AppError::Database(e)
            })?;

        Ok(result.deleted_count)
    }
}

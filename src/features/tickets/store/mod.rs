//! Persistence seam for ticket documents
//!
//! The service only sees [`TicketStore`]. Production uses the MongoDB
//! collection; tests run against the in-memory store.

#[cfg(test)]
mod memory;
mod mongo;

use async_trait::async_trait;
use bson::oid::ObjectId;

use crate::core::error::Result;
use crate::features::tickets::models::{Ticket, TicketMessage};

#[cfg(test)]
pub use memory::InMemoryTicketStore;
pub use mongo::MongoTicketStore;

/// Single-document operations on the ticket collection.
///
/// Counts returned by the mutating methods are the number of documents the
/// store matched, which is either 0 or 1.
#[async_trait]
pub trait TicketStore: Send + Sync {
    /// Insert a new ticket and return the id the store assigned to it.
    async fn insert(&self, ticket: &Ticket) -> Result<ObjectId>;

    async fn find_by_id(&self, id: ObjectId) -> Result<Option<Ticket>>;

    /// Atomically append `message` to the ticket's conversation.
    async fn push_message(&self, id: ObjectId, message: &TicketMessage) -> Result<u64>;

    /// Replace `title` and `adminId`, leaving every other field untouched.
    async fn update_metadata(&self, id: ObjectId, title: &str, admin_id: &str) -> Result<u64>;

    async fn delete(&self, id: ObjectId) -> Result<u64>;
}

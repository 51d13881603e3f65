use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use bson::oid::ObjectId;

use crate::core::error::{AppError, Result};
use crate::features::tickets::models::{Ticket, TicketMessage};
use crate::features::tickets::store::TicketStore;

/// In-process [`TicketStore`] for tests
#[derive(Default)]
pub struct InMemoryTicketStore {
    tickets: Mutex<HashMap<ObjectId, Ticket>>,
    unavailable: bool,
}

impl InMemoryTicketStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose every call fails like an unreachable server.
    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Self::default()
        }
    }

    pub fn len(&self) -> usize {
        self.tickets.lock().unwrap().len()
    }

    pub fn get(&self, id: ObjectId) -> Option<Ticket> {
        self.tickets.lock().unwrap().get(&id).cloned()
    }

    fn check(&self) -> Result<()> {
        if self.unavailable {
            return Err(AppError::Internal("store unreachable".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl TicketStore for InMemoryTicketStore {
    async fn insert(&self, ticket: &Ticket) -> Result<ObjectId> {
        self.check()?;
        let id = ObjectId::new();
        let mut stored = ticket.clone();
        stored.id = Some(id);
        self.tickets.lock().unwrap().insert(id, stored);
        Ok(id)
    }

    async fn find_by_id(&self, id: ObjectId) -> Result<Option<Ticket>> {
        self.check()?;
        Ok(self.get(id))
    }

    async fn push_message(&self, id: ObjectId, message: &TicketMessage) -> Result<u64> {
        self.check()?;
        match self.tickets.lock().unwrap().get_mut(&id) {
            Some(ticket) => {
                ticket.messages.push(message.clone());
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn update_metadata(&self, id: ObjectId, title: &str, admin_id: &str) -> Result<u64> {
        self.check()?;
        match self.tickets.lock().unwrap().get_mut(&id) {
            Some(ticket) => {
                ticket.title = title.to_string();
                ticket.admin_id = admin_id.to_string();
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete(&self, id: ObjectId) -> Result<u64> {
        self.check()?;
        Ok(self.tickets.lock().unwrap().remove(&id).map_or(0, |_| 1))
    }
}

mod ticket;

pub use ticket::{Ticket, TicketMessage};

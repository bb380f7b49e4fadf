//! Ticket-marketplace backend library modules.

pub mod domain;
pub mod inbound;
pub mod middleware;

/// Request-id middleware re-exported for server wiring.
pub use middleware::RequestId;

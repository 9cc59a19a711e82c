#![deny(missing_docs)]

//! # Effio Contracts
//!
//! String constants shared between the Effio services: HTTP endpoints per
//! service, the environment variables holding each service's base URL, and
//! the event bus detail types and sources.

/// Service endpoint contracts.
pub mod endpoints;

/// Event bus contracts and payloads.
pub mod events;

pub use endpoints::{AccountServiceContract, AccountV1Endpoint, AuthEndpoint, AuthServiceContract};
pub use events::{AccountCreatedEvent, DetailType, EventSource};

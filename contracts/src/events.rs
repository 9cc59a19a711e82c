//! # Events
//!
//! Detail types and source namespaces used on the event bus, plus the payloads
//! published with them.

use derive_more::Display;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Event detail types.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DetailType {
    /// An account was created.
    #[display("AccountCreated")]
    AccountCreated,
    /// An account was updated.
    #[display("AccountUpdated")]
    AccountUpdated,
    /// An account was deleted.
    #[display("AccountDeleted")]
    AccountDeleted,
}

/// Event source namespaces.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventSource {
    /// Account service events.
    #[display("effio.accounts")]
    #[serde(rename = "effio.accounts")]
    Accounts,
    /// Auth service events.
    #[display("effio.auth")]
    #[serde(rename = "effio.auth")]
    Auth,
    /// Payment service events.
    #[display("effio.payments")]
    #[serde(rename = "effio.payments")]
    Payments,
}

/// Payload of [`DetailType::AccountCreated`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountCreatedEvent {
    /// The new account.
    pub account_id: Uuid,
    /// Email the account registered with.
    pub email: String,
    /// Given name of the account holder.
    pub first_name: String,
}

impl AccountCreatedEvent {
    /// Detail type this payload is published under.
    pub const DETAIL_TYPE: DetailType = DetailType::AccountCreated;
    /// Source this payload is published from.
    pub const SOURCE: EventSource = EventSource::Accounts;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_names() {
        assert_eq!(DetailType::AccountDeleted.to_string(), "AccountDeleted");
        assert_eq!(EventSource::Payments.to_string(), "effio.payments");
        assert_eq!(
            serde_json::to_string(&EventSource::Auth).unwrap(),
            r#""effio.auth""#
        );
        assert_eq!(
            serde_json::from_str::<DetailType>(r#""AccountUpdated""#).unwrap(),
            DetailType::AccountUpdated
        );
    }

    #[test]
    fn test_account_created_payload() {
        let event = AccountCreatedEvent {
            account_id: Uuid::new_v4(),
            email: "ada@example.com".into(),
            first_name: "Ada".into(),
        };
        let value = serde_json::to_value(&event).unwrap();
        assert_eq!(value["account_id"], event.account_id.to_string());
        assert_eq!(value["first_name"], "Ada");

        let back: AccountCreatedEvent = serde_json::from_value(value).unwrap();
        assert_eq!(back, event);
        assert_eq!(AccountCreatedEvent::SOURCE, EventSource::Accounts);
    }
}

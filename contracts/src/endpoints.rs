//! # Endpoints
//!
//! Paths served by each service. Every enum displays as its path.

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Account service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccountServiceContract;

impl AccountServiceContract {
    /// Service name, as derived from its paths.
    pub const SERVICE: &'static str = "account";
    /// Environment variable holding the service base URL.
    pub const ENV_URL: &'static str = "ACCOUNT_SERVICE_URL";
}

/// Version 1 endpoints of the account service.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AccountV1Endpoint {
    /// Fetch one account.
    #[display("/v1/account/get_by_id")]
    #[serde(rename = "/v1/account/get_by_id")]
    GetById,
    /// List accounts.
    #[display("/v1/account/get_all")]
    #[serde(rename = "/v1/account/get_all")]
    GetAll,
    /// Create an account.
    #[display("/v1/account/create")]
    #[serde(rename = "/v1/account/create")]
    Create,
    /// Update an account.
    #[display("/v1/account/update")]
    #[serde(rename = "/v1/account/update")]
    Update,
    /// Delete an account.
    #[display("/v1/account/delete")]
    #[serde(rename = "/v1/account/delete")]
    Delete,
    /// Confirm an email address.
    #[display("/v1/account/verify_email")]
    #[serde(rename = "/v1/account/verify_email")]
    VerifyEmail,
    /// Confirm a phone number.
    #[display("/v1/account/verify_phone_number")]
    #[serde(rename = "/v1/account/verify_phone_number")]
    VerifyPhoneNumber,
}

impl AccountV1Endpoint {
    /// Every endpoint, in declaration order.
    pub const ALL: [Self; 7] = [
        Self::GetById,
        Self::GetAll,
        Self::Create,
        Self::Update,
        Self::Delete,
        Self::VerifyEmail,
        Self::VerifyPhoneNumber,
    ];

    /// The endpoint path.
    pub const fn path(self) -> &'static str {
        match self {
            Self::GetById => "/v1/account/get_by_id",
            Self::GetAll => "/v1/account/get_all",
            Self::Create => "/v1/account/create",
            Self::Update => "/v1/account/update",
            Self::Delete => "/v1/account/delete",
            Self::VerifyEmail => "/v1/account/verify_email",
            Self::VerifyPhoneNumber => "/v1/account/verify_phone_number",
        }
    }
}

/// Auth service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthServiceContract;

impl AuthServiceContract {
    /// Service name, as derived from its paths.
    pub const SERVICE: &'static str = "auth";
    /// Environment variable holding the service base URL.
    pub const ENV_URL: &'static str = "AUTH_SERVICE_URL";
}

/// Endpoints of the auth service.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AuthEndpoint {
    /// Register credentials for an account.
    #[display("/v1/auth/create_credentials")]
    #[serde(rename = "/v1/auth/create_credentials")]
    CreateCredentials,
    /// Exchange credentials for tokens.
    #[display("/v1/auth/login")]
    #[serde(rename = "/v1/auth/login")]
    Login,
    /// Exchange a refresh token for new tokens.
    #[display("/v1/auth/refresh")]
    #[serde(rename = "/v1/auth/refresh")]
    Refresh,
}

impl AuthEndpoint {
    /// Every endpoint, in declaration order.
    pub const ALL: [Self; 3] = [Self::CreateCredentials, Self::Login, Self::Refresh];

    /// The endpoint path.
    pub const fn path(self) -> &'static str {
        match self {
            Self::CreateCredentials => "/v1/auth/create_credentials",
            Self::Login => "/v1/auth/login",
            Self::Refresh => "/v1/auth/refresh",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_matches_path() {
        for endpoint in AccountV1Endpoint::ALL {
            assert_eq!(endpoint.to_string(), endpoint.path());
        }
        for endpoint in AuthEndpoint::ALL {
            assert_eq!(endpoint.to_string(), endpoint.path());
        }
    }

    #[test]
    fn test_serde_uses_path() {
        let json = serde_json::to_string(&AuthEndpoint::Login).unwrap();
        assert_eq!(json, r#""/v1/auth/login""#);

        let parsed: AccountV1Endpoint =
            serde_json::from_str(r#""/v1/account/verify_email""#).unwrap();
        assert_eq!(parsed, AccountV1Endpoint::VerifyEmail);
    }

    #[test]
    fn test_env_urls_are_distinct() {
        assert_ne!(AccountServiceContract::ENV_URL, AuthServiceContract::ENV_URL);
    }
}

//! Endpoint Registry
//!
//! Maps each gateway resource onto the path segment it lives under.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Gateway resource families
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Endpoint {
    Transfer,
    Customer,
    TransferRecipient,
    Plan,
    Transaction,
    Subscription,
    Page,
    Subaccount,
}

impl Endpoint {
    /// Every registered resource, in registry order
    pub const ALL: [Self; 8] = [
        Self::Transfer,
        Self::Customer,
        Self::TransferRecipient,
        Self::Plan,
        Self::Transaction,
        Self::Subscription,
        Self::Page,
        Self::Subaccount,
    ];

    /// Path segment relative to the gateway base URL
    pub const fn path(self) -> &'static str {
        match self {
            Self::Transfer => "/transfer",
            Self::Customer => "/customer",
            Self::TransferRecipient => "/transferrecipient",
            Self::Plan => "/plan",
            Self::Transaction => "/transaction",
            Self::Subscription => "/subscription",
            Self::Page => "/page",
            Self::Subaccount => "/subaccount",
        }
    }

    /// Logical resource name
    pub const fn name(self) -> &'static str {
        match self {
            Self::Transfer => "transfer",
            Self::Customer => "customer",
            Self::TransferRecipient => "transferrecipient",
            Self::Plan => "plan",
            Self::Transaction => "transaction",
            Self::Subscription => "subscription",
            Self::Page => "page",
            Self::Subaccount => "subaccount",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

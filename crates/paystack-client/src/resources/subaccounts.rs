//! Subaccounts

use paystack_core::{Endpoint, Envelope, ParameterSource, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{Pagination, decimal, structured};
use crate::client::{GatewayClient, Route};

/// Subaccount create/update payload
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SubaccountPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_name: Option<String>,

    /// Bank code of the settlement account
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settlement_bank: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_number: Option<String>,

    /// Share of each transaction the main account keeps
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub percentage_charge: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_contact_email: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_contact_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_contact_phone: Option<String>,

    /// `auto`, `weekly`, `monthly` or `manual`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settlement_schedule: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,
}

impl SubaccountPayload {
    pub fn from_params(params: &dyn ParameterSource) -> Self {
        Self {
            business_name: params.text("business_name"),
            settlement_bank: params.text("settlement_bank"),
            account_number: params.text("account_number"),
            percentage_charge: decimal(params, "percentage_charge"),
            primary_contact_email: params.text("primary_contact_email"),
            primary_contact_name: params.text("primary_contact_name"),
            primary_contact_phone: params.text("primary_contact_phone"),
            settlement_schedule: params.text("settlement_schedule"),
            metadata: structured(params, "metadata"),
        }
    }
}

impl GatewayClient {
    /// Create a subaccount
    pub async fn create_subaccount(&self, payload: &SubaccountPayload) -> Result<Envelope> {
        self.post(Route::new(Endpoint::Subaccount), payload).await
    }

    /// Fetch a subaccount by id or subaccount code
    pub async fn fetch_subaccount(&self, id_or_code: &str) -> Result<Envelope> {
        self.get(Route::new(Endpoint::Subaccount).segment(id_or_code))
            .await
    }

    /// Update a subaccount
    pub async fn update_subaccount(&self, id_or_code: &str, payload: &SubaccountPayload) -> Result<Envelope> {
        self.put(Route::new(Endpoint::Subaccount).segment(id_or_code), payload)
            .await
    }

    /// List subaccounts one page at a time
    ///
    /// Both arguments are coerced to integers; non-numeric input becomes 0.
    pub async fn list_subaccounts(
        &self,
        per_page: impl Into<Value> + Send,
        page: impl Into<Value> + Send,
    ) -> Result<Vec<Value>> {
        let pagination = Pagination::coerce(&per_page.into(), &page.into());
        self.list(
            Route::new(Endpoint::Subaccount)
                .query("perPage", pagination.per_page)
                .query("page", pagination.page),
        )
        .await
    }
}

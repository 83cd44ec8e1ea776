//! Customers

use paystack_core::{Endpoint, Envelope, ParameterSource, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::structured;
use crate::client::{GatewayClient, Route};

/// Customer create/update payload
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomerPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,
}

impl CustomerPayload {
    pub fn from_params(params: &dyn ParameterSource) -> Self {
        Self {
            email: params.text("email"),
            first_name: params.text("first_name"),
            last_name: params.text("last_name"),
            phone: params.text("phone"),
            metadata: structured(params, "metadata"),
        }
    }
}

impl GatewayClient {
    /// Create a customer
    pub async fn create_customer(&self, payload: &CustomerPayload) -> Result<Envelope> {
        self.post(Route::new(Endpoint::Customer), payload).await
    }

    /// Fetch a customer by id or customer code
    pub async fn fetch_customer(&self, id_or_code: &str) -> Result<Envelope> {
        self.get(Route::new(Endpoint::Customer).segment(id_or_code)).await
    }

    /// Update a customer
    pub async fn update_customer(&self, id_or_code: &str, payload: &CustomerPayload) -> Result<Envelope> {
        self.put(Route::new(Endpoint::Customer).segment(id_or_code), payload)
            .await
    }

    /// List customers
    pub async fn list_customers(&self) -> Result<Vec<Value>> {
        self.list(Route::new(Endpoint::Customer)).await
    }
}

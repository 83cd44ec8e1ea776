//! Payment Pages

use paystack_core::{Endpoint, Envelope, ParameterSource, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::structured;
use crate::client::{GatewayClient, Route};

/// Payment page create/update payload
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PagePayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Fixed amount; leave empty to let the customer choose
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redirect_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_fields: Option<Value>,
}

impl PagePayload {
    pub fn from_params(params: &dyn ParameterSource) -> Self {
        Self {
            name: params.text("name"),
            description: params.text("description"),
            amount: params.integer("amount"),
            slug: params.text("slug"),
            redirect_url: params.text("redirect_url"),
            custom_fields: structured(params, "custom_fields"),
        }
    }
}

impl GatewayClient {
    /// Create a payment page
    pub async fn create_page(&self, payload: &PagePayload) -> Result<Envelope> {
        self.post(Route::new(Endpoint::Page), payload).await
    }

    /// Fetch a payment page by id or slug
    pub async fn fetch_page(&self, id_or_slug: &str) -> Result<Envelope> {
        self.get(Route::new(Endpoint::Page).segment(id_or_slug)).await
    }

    /// Update a payment page
    pub async fn update_page(&self, id_or_slug: &str, payload: &PagePayload) -> Result<Envelope> {
        self.put(Route::new(Endpoint::Page).segment(id_or_slug), payload)
            .await
    }

    /// List payment pages
    pub async fn list_pages(&self) -> Result<Vec<Value>> {
        self.list(Route::new(Endpoint::Page)).await
    }
}

//! Plans

use paystack_core::{Endpoint, Envelope, ParameterSource, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::flag;
use crate::client::{GatewayClient, Route};

/// Plan create/update payload
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<i64>,

    /// `daily`, `weekly`, `monthly`, `quarterly`, `biannually` or `annually`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interval: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub send_invoices: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub send_sms: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
}

impl PlanPayload {
    pub fn from_params(params: &dyn ParameterSource) -> Self {
        Self {
            name: params.text("name"),
            description: params.text("description"),
            amount: params.integer("amount"),
            interval: params.text("interval"),
            send_invoices: flag(params, "send_invoices"),
            send_sms: flag(params, "send_sms"),
            currency: params.text("currency"),
        }
    }
}

impl GatewayClient {
    /// Create a plan
    pub async fn create_plan(&self, payload: &PlanPayload) -> Result<Envelope> {
        self.post(Route::new(Endpoint::Plan), payload).await
    }

    /// Fetch a plan by id or plan code
    pub async fn fetch_plan(&self, plan_code: &str) -> Result<Envelope> {
        self.get(Route::new(Endpoint::Plan).segment(plan_code)).await
    }

    /// Update a plan
    pub async fn update_plan(&self, plan_code: &str, payload: &PlanPayload) -> Result<Envelope> {
        self.put(Route::new(Endpoint::Plan).segment(plan_code), payload)
            .await
    }

    /// List plans
    pub async fn list_plans(&self) -> Result<Vec<Value>> {
        self.list(Route::new(Endpoint::Plan)).await
    }
}

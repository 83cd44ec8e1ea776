//! Subscriptions

use paystack_core::{Endpoint, Envelope, ParameterSource, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::client::{GatewayClient, Route};

/// Subscription create payload
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscriptionPayload {
    /// Customer email or code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plan: Option<String>,

    /// Authorization code to charge; defaults to the customer's latest
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authorization: Option<String>,

    /// ISO 8601 first charge date
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
}

impl SubscriptionPayload {
    pub fn from_params(params: &dyn ParameterSource) -> Self {
        Self {
            customer: params.text("customer"),
            plan: params.text("plan"),
            authorization: params.text("authorization"),
            start_date: params.text("start_date"),
        }
    }
}

/// Code and email token identifying a subscription to enable or disable
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscriptionToggle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

impl SubscriptionToggle {
    pub fn new(code: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            code: Some(code.into()),
            token: Some(token.into()),
        }
    }

    pub fn from_params(params: &dyn ParameterSource) -> Self {
        Self {
            code: params.text("code"),
            token: params.text("token"),
        }
    }
}

impl GatewayClient {
    /// Create a subscription
    pub async fn create_subscription(&self, payload: &SubscriptionPayload) -> Result<Envelope> {
        self.post(Route::new(Endpoint::Subscription), payload).await
    }

    /// List subscriptions
    pub async fn list_subscriptions(&self) -> Result<Vec<Value>> {
        self.list(Route::new(Endpoint::Subscription)).await
    }

    /// List a customer's subscriptions
    pub async fn list_customer_subscriptions(&self, customer_id: &str) -> Result<Vec<Value>> {
        self.list(Route::new(Endpoint::Subscription).query("customer", customer_id))
            .await
    }

    /// List subscriptions on a plan
    pub async fn list_plan_subscriptions(&self, plan_id: &str) -> Result<Vec<Value>> {
        self.list(Route::new(Endpoint::Subscription).query("plan", plan_id))
            .await
    }

    /// Enable a subscription
    pub async fn enable_subscription(&self, toggle: &SubscriptionToggle) -> Result<Envelope> {
        self.post(Route::new(Endpoint::Subscription).segment("enable"), toggle)
            .await
    }

    /// Disable a subscription
    pub async fn disable_subscription(&self, toggle: &SubscriptionToggle) -> Result<Envelope> {
        self.post(Route::new(Endpoint::Subscription).segment("disable"), toggle)
            .await
    }

    /// Fetch a subscription by id or subscription code
    pub async fn fetch_subscription(&self, id_or_code: &str) -> Result<Envelope> {
        self.get(Route::new(Endpoint::Subscription).segment(id_or_code))
            .await
    }
}

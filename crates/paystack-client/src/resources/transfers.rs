//! Transfers

use paystack_core::{Endpoint, Envelope, ParameterSource, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::client::{GatewayClient, Route};

/// Balance transfers are drawn from
pub const DEFAULT_TRANSFER_SOURCE: &str = "balance";

/// Payload for initiating a transfer
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferPayload {
    pub source: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<i64>,

    /// Recipient code, e.g. `RCP_...`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipient: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
}

impl Default for TransferPayload {
    fn default() -> Self {
        Self {
            source: DEFAULT_TRANSFER_SOURCE.into(),
            amount: None,
            recipient: None,
            reason: None,
            currency: None,
            reference: None,
        }
    }
}

impl TransferPayload {
    pub fn new(amount: i64, recipient: impl Into<String>) -> Self {
        Self {
            amount: Some(amount),
            recipient: Some(recipient.into()),
            ..Default::default()
        }
    }

    pub fn from_params(params: &dyn ParameterSource) -> Self {
        Self {
            source: params
                .text("source")
                .unwrap_or_else(|| DEFAULT_TRANSFER_SOURCE.into()),
            amount: params.integer("amount"),
            recipient: params.text("recipient"),
            reason: params.text("reason"),
            currency: params.text("currency"),
            reference: params.text("reference"),
        }
    }
}

impl GatewayClient {
    /// Send money to a transfer recipient
    pub async fn initiate_transfer(&self, payload: &TransferPayload) -> Result<Envelope> {
        self.post(Route::new(Endpoint::Transfer), payload).await
    }

    /// Fetch a transfer by id or transfer code
    pub async fn fetch_transfer(&self, id_or_code: &str) -> Result<Envelope> {
        self.get(Route::new(Endpoint::Transfer).segment(id_or_code)).await
    }

    /// List transfers
    pub async fn list_transfers(&self) -> Result<Vec<Value>> {
        self.list(Route::new(Endpoint::Transfer)).await
    }
}

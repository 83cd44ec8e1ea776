//! Transfer Recipients

use paystack_core::{Endpoint, Envelope, GatewayError, ParameterSource, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{DEFAULT_CURRENCY, structured};
use crate::client::{GatewayClient, Route, encode};

/// Fields a recipient must carry before it is sent
pub const REQUIRED_RECIPIENT_FIELDS: [&str; 4] = ["type", "name", "account_number", "bank_code"];

/// Transfer recipient create/update payload
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RecipientPayload {
    /// `nuban`, `mobile_money`, `basa` or `authorization`
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub recipient_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_number: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank_code: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authorization_code: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,
}

impl RecipientPayload {
    pub fn from_params(params: &dyn ParameterSource) -> Self {
        Self {
            recipient_type: params.text("type"),
            name: params.text("name"),
            account_number: params.text("account_number"),
            bank_code: params.text("bank_code"),
            currency: params.text("currency"),
            description: params.text("description"),
            email: params.text("email"),
            authorization_code: params.text("authorization_code"),
            metadata: structured(params, "metadata"),
        }
    }
}

impl GatewayClient {
    /// Create a transfer recipient
    ///
    /// Rejects payloads missing any of [`REQUIRED_RECIPIENT_FIELDS`] without
    /// contacting the gateway. Currency defaults to NGN.
    pub async fn create_transfer_recipient(&self, payload: &RecipientPayload) -> Result<Envelope> {
        let Value::Object(mut body) = encode(payload)? else {
            return Err(GatewayError::Shape("recipient payload is not an object".into()));
        };

        self.validator()
            .validate(&body, &REQUIRED_RECIPIENT_FIELDS)?;

        body.entry("currency")
            .or_insert_with(|| Value::String(DEFAULT_CURRENCY.into()));

        self.post(Route::new(Endpoint::TransferRecipient), &body)
            .await
    }

    /// Fetch a transfer recipient by id or recipient code
    pub async fn fetch_transfer_recipient(&self, id_or_code: &str) -> Result<Envelope> {
        self.get(Route::new(Endpoint::TransferRecipient).segment(id_or_code))
            .await
    }

    /// Update a transfer recipient
    pub async fn update_transfer_recipient(
        &self,
        id_or_code: &str,
        payload: &RecipientPayload,
    ) -> Result<Envelope> {
        self.put(Route::new(Endpoint::TransferRecipient).segment(id_or_code), payload)
            .await
    }

    /// List transfer recipients
    pub async fn list_transfer_recipients(&self) -> Result<Vec<Value>> {
        self.list(Route::new(Endpoint::TransferRecipient)).await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::mock::MockTransport;
    use paystack_core::{GatewayConfig, HttpMethod, Params, ValidationErrors, Validator};
    use serde_json::{Map, json};

    fn client(transport: &Arc<MockTransport>) -> GatewayClient {
        GatewayClient::with_transport(
            GatewayConfig::new("sk_test_key", "https://api.paystack.co").unwrap(),
            transport.clone(),
        )
    }

    fn complete() -> RecipientPayload {
        RecipientPayload {
            recipient_type: Some("nuban".into()),
            name: Some("Tolu Robert".into()),
            account_number: Some("01000000010".into()),
            bank_code: Some("058".into()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_missing_fields_rejected_without_dispatch() {
        for field in REQUIRED_RECIPIENT_FIELDS {
            let mut payload = complete();
            match field {
                "type" => payload.recipient_type = None,
                "name" => payload.name = None,
                "account_number" => payload.account_number = None,
                _ => payload.bank_code = None,
            }

            let transport = Arc::new(MockTransport::new());
            let err = client(&transport)
                .create_transfer_recipient(&payload)
                .await
                .unwrap_err();

            match err {
                GatewayError::Validation(errors) => assert_eq!(errors.fields(), vec![field]),
                other => panic!("unexpected error: {other:?}"),
            }
            assert_eq!(transport.request_count(), 0);
        }
    }

    #[tokio::test]
    async fn test_currency_defaults_to_ngn() {
        let transport = Arc::new(MockTransport::new().respond_json(
            201,
            json!({"status": true, "message": "Transfer recipient created successfully", "data": {"recipient_code": "RCP_1"}}),
        ));

        client(&transport)
            .create_transfer_recipient(&complete())
            .await
            .unwrap();

        let request = transport.last_request().unwrap();
        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(request.url, "https://api.paystack.co/transferrecipient");
        let body = request.body.unwrap();
        assert_eq!(body["currency"], json!("NGN"));
        assert_eq!(body["type"], json!("nuban"));
    }

    #[tokio::test]
    async fn test_explicit_currency_kept() {
        let transport = Arc::new(MockTransport::new().respond_json(201, json!({"status": true, "data": {}})));
        let params = Params::new()
            .with("type", "mobile_money")
            .with("name", "Abena")
            .with("account_number", "0551234987")
            .with("bank_code", "MTN")
            .with("currency", "GHS");

        client(&transport)
            .create_transfer_recipient(&RecipientPayload::from_params(&params))
            .await
            .unwrap();

        assert_eq!(transport.last_request().unwrap().body.unwrap()["currency"], json!("GHS"));
    }

    struct RejectAll;

    impl Validator for RejectAll {
        fn validate(&self, _payload: &Map<String, Value>, _required: &[&str]) -> std::result::Result<(), ValidationErrors> {
            Err(ValidationErrors::required("everything"))
        }
    }

    #[tokio::test]
    async fn test_custom_validator_used() {
        let transport = Arc::new(MockTransport::new());
        let client = client(&transport).with_validator(Arc::new(RejectAll));

        let err = client.create_transfer_recipient(&complete()).await.unwrap_err();
        assert!(matches!(err, GatewayError::Validation(_)));
        assert_eq!(transport.request_count(), 0);
    }

    #[tokio::test]
    async fn test_fetch_update_list() {
        let transport = Arc::new(
            MockTransport::new()
                .respond_json(200, json!({"status": true, "data": {}}))
                .respond_json(200, json!({"status": true, "data": {}}))
                .respond_json(200, json!({"status": true, "data": [{"recipient_code": "RCP_1"}]})),
        );
        let client = client(&transport);

        client.fetch_transfer_recipient("RCP_1").await.unwrap();
        client
            .update_transfer_recipient("RCP_1", &RecipientPayload {
                name: Some("Rick Sanchez".into()),
                ..Default::default()
            })
            .await
            .unwrap();
        let recipients = client.list_transfer_recipients().await.unwrap();

        let requests = transport.requests();
        assert_eq!(requests[0].url, "https://api.paystack.co/transferrecipient/RCP_1");
        assert_eq!(requests[1].method, HttpMethod::Put);
        assert_eq!(requests[1].body, Some(json!({"name": "Rick Sanchez"})));
        assert_eq!(recipients, vec![json!({"recipient_code": "RCP_1"})]);
    }
}

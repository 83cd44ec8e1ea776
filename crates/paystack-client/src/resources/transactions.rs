//! Transactions
//!
//! Payment initiation, verification and reporting.

use chrono::NaiveDate;
use paystack_core::{
    Endpoint, Envelope, GatewayError, ParameterSource, Result, ValidationErrors,
    VerificationOutcome, generate_reference,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{DEFAULT_CURRENCY, structured};
use crate::client::{GatewayClient, Route};
use crate::redirect::Redirect;

/// Query parameter the gateway appends to the callback URL
pub const CALLBACK_REFERENCE_PARAM: &str = "trxref";

const EXPORT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Payload for initializing a transaction
///
/// Amounts are in the currency's subunit (kobo for NGN).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct InitializeTransaction {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,

    /// Payment channels to offer, e.g. `["card", "bank"]`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channels: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plan: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub callback_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subaccount: Option<String>,

    /// Flat fee in subunits that overrides the subaccount split
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_charge: Option<i64>,

    /// Who bears gateway fees: `account` or `subaccount`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bearer: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub split_code: Option<String>,

    /// Dynamic multi-split definition
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub split: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,
}

impl InitializeTransaction {
    pub fn new(amount: i64, email: impl Into<String>) -> Self {
        Self {
            amount: Some(amount),
            email: Some(email.into()),
            currency: Some(DEFAULT_CURRENCY.into()),
            ..Default::default()
        }
    }

    /// Build from inbound fields
    ///
    /// `amount` is multiplied by `quantity` (default 1); a zero total is
    /// dropped. `currency` falls back to NGN.
    pub fn from_params(params: &dyn ParameterSource) -> Self {
        let quantity = params.integer("quantity").unwrap_or(1);
        let amount = params.integer("amount").unwrap_or(0).saturating_mul(quantity);

        Self {
            amount: (amount != 0).then_some(amount),
            email: params.text("email"),
            reference: params.text("reference"),
            channels: params.provided("channels"),
            plan: params.text("plan"),
            first_name: params.text("first_name"),
            last_name: params.text("last_name"),
            callback_url: params.text("callback_url"),
            currency: params
                .text("currency")
                .or_else(|| Some(DEFAULT_CURRENCY.into())),
            subaccount: params.text("subaccount"),
            transaction_charge: params.integer("transaction_charge").filter(|c| *c != 0),
            bearer: params.text("bearer"),
            split_code: params.text("split_code"),
            split: structured(params, "split"),
            metadata: structured(params, "metadata"),
        }
    }

    /// Attach a freshly generated reference
    #[must_use]
    pub fn with_generated_reference(mut self) -> Self {
        self.reference = Some(generate_reference());
        self
    }
}

/// Hosted checkout details from an initialize call
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Authorization {
    pub authorization_url: String,
    pub access_code: Option<String>,
    pub reference: Option<String>,
}

impl Authorization {
    pub fn from_envelope(envelope: &Envelope) -> Result<Self> {
        let data = envelope.data()?;
        let field = |name: &str| data.get(name).and_then(Value::as_str).map(str::to_owned);

        Ok(Self {
            authorization_url: envelope.data_str("authorization_url")?.to_owned(),
            access_code: field("access_code"),
            reference: field("reference"),
        })
    }

    /// Send the customer to the hosted payment page
    pub fn redirect(&self) -> Redirect {
        Redirect::to(self.authorization_url.clone())
    }
}

/// Result of a verify-transaction call
#[derive(Clone, Debug, PartialEq)]
pub struct Verification {
    pub reference: String,
    pub outcome: VerificationOutcome,
    pub envelope: Envelope,
}

impl Verification {
    pub const fn is_valid(&self) -> bool {
        self.outcome.is_valid()
    }
}

/// Filters for a transaction export
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportTransactions {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub settled: Option<bool>,
}

impl ExportTransactions {
    /// Build from inbound fields; dates must be `YYYY-MM-DD`
    pub fn from_params(params: &dyn ParameterSource) -> std::result::Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let mut date = |key: &str| -> Option<NaiveDate> {
            let raw = params.text(key)?;
            match NaiveDate::parse_from_str(&raw, EXPORT_DATE_FORMAT) {
                Ok(date) => Some(date),
                Err(_) => {
                    errors.add(key, format!("The {key} field must be a date (YYYY-MM-DD)."));
                    None
                }
            }
        };

        let export = Self {
            from: date("from"),
            to: date("to"),
            settled: super::flag(params, "settled"),
        };
        errors.into_result().map(|()| export)
    }

    fn route(&self) -> Route {
        let mut route = Route::new(Endpoint::Transaction).segment("export");
        if let Some(from) = self.from {
            route = route.query("from", from.format(EXPORT_DATE_FORMAT));
        }
        if let Some(to) = self.to {
            route = route.query("to", to.format(EXPORT_DATE_FORMAT));
        }
        if let Some(settled) = self.settled {
            route = route.query("settled", settled);
        }
        route
    }
}

impl GatewayClient {
    /// Initialize a transaction
    pub async fn initialize_transaction(&self, payload: &InitializeTransaction) -> Result<Envelope> {
        self.post(Route::new(Endpoint::Transaction).segment("initialize"), payload)
            .await
    }

    /// Initialize a transaction and return the hosted checkout details
    pub async fn authorization_url(&self, payload: &InitializeTransaction) -> Result<Authorization> {
        let envelope = self.initialize_transaction(payload).await?;
        Authorization::from_envelope(&envelope)
    }

    /// Initialize a transaction and return only its access code
    pub async fn access_code(&self, payload: &InitializeTransaction) -> Result<String> {
        self.authorization_url(payload)
            .await?
            .access_code
            .ok_or_else(|| GatewayError::Shape("`data.access_code` is missing".into()))
    }

    /// Initialize a transaction and return the full gateway response
    pub async fn authorization_response(&self, payload: &InitializeTransaction) -> Result<Envelope> {
        self.initialize_transaction(payload).await
    }

    /// Verify a transaction and classify the result
    ///
    /// Without an explicit reference the `trxref` callback parameter is used.
    pub async fn verify(
        &self,
        reference: Option<&str>,
        params: &dyn ParameterSource,
    ) -> Result<Verification> {
        let reference = reference
            .map(|r| r.trim().trim_matches('/').to_owned())
            .filter(|r| !r.is_empty())
            .or_else(|| params.text(CALLBACK_REFERENCE_PARAM))
            .ok_or_else(|| ValidationErrors::required("reference"))?;

        let envelope = self
            .get(Route::new(Endpoint::Transaction).segment("verify").segment(&reference))
            .await?;
        let outcome = VerificationOutcome::from_envelope(&envelope);

        tracing::debug!(reference = %reference, outcome = ?outcome, "Transaction verified");

        Ok(Verification {
            reference,
            outcome,
            envelope,
        })
    }

    /// Verify a transaction at the gateway
    pub async fn verify_transaction(
        &self,
        reference: Option<&str>,
        params: &dyn ParameterSource,
    ) -> Result<Envelope> {
        Ok(self.verify(reference, params).await?.envelope)
    }

    /// Whether the gateway reports the transaction as verified
    pub async fn is_transaction_verification_valid(
        &self,
        reference: Option<&str>,
        params: &dyn ParameterSource,
    ) -> Result<bool> {
        Ok(self.verify(reference, params).await?.is_valid())
    }

    /// Verified transaction details
    ///
    /// Fails with [`GatewayError::VerificationFailed`] when the gateway does
    /// not confirm the transaction.
    pub async fn payment_data(
        &self,
        reference: Option<&str>,
        params: &dyn ParameterSource,
    ) -> Result<Envelope> {
        let verification = self.verify(reference, params).await?;
        if verification.is_valid() {
            return Ok(verification.envelope);
        }

        Err(GatewayError::VerificationFailed {
            reference: verification.reference,
            message: verification.envelope.message,
        })
    }

    /// List transactions
    pub async fn list_transactions(&self) -> Result<Vec<Value>> {
        self.list(Route::new(Endpoint::Transaction)).await
    }

    /// Export transactions for a date range
    pub async fn export_transactions(&self, export: &ExportTransactions) -> Result<Envelope> {
        self.get(export.route()).await
    }

    /// Generate a unique transaction reference
    pub fn generate_reference(&self) -> String {
        generate_reference()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::mock::MockTransport;
    use paystack_core::{GatewayConfig, HttpMethod, Params, TransportError};
    use serde_json::json;

    fn client(transport: &Arc<MockTransport>) -> GatewayClient {
        GatewayClient::with_transport(
            GatewayConfig::new("sk_test_key", "https://api.paystack.co").unwrap(),
            transport.clone(),
        )
    }

    fn verify_response(message: &str) -> Value {
        json!({
            "status": true,
            "message": message,
            "data": {"status": "success", "reference": "T123", "amount": 2000}
        })
    }

    #[test]
    fn test_from_params_multiplies_quantity_and_drops_absent() {
        let params = Params::new().with("amount", "1000").with("quantity", 2);
        let payload = serde_json::to_value(InitializeTransaction::from_params(&params)).unwrap();

        assert_eq!(payload["amount"], json!(2000));
        assert_eq!(payload["currency"], json!("NGN"));
        let object = payload.as_object().unwrap();
        for absent in ["subaccount", "split", "split_code", "metadata", "email", "reference", "bearer"] {
            assert!(!object.contains_key(absent), "{absent} should be absent");
        }
        assert!(!object.contains_key("quantity"));
    }

    #[test]
    fn test_from_params_keeps_nested_and_currency() {
        let params = Params::new()
            .with("amount", 500)
            .with("email", "ada@example.com")
            .with("currency", "GHS")
            .with("split", json!({"type": "percentage", "subaccounts": []}))
            .with("metadata", r#"{"cart_id": 398}"#)
            .with("subaccount", "");

        let payload = InitializeTransaction::from_params(&params);
        assert_eq!(payload.amount, Some(500));
        assert_eq!(payload.currency.as_deref(), Some("GHS"));
        assert_eq!(payload.split, Some(json!({"type": "percentage", "subaccounts": []})));
        assert_eq!(payload.metadata, Some(json!({"cart_id": 398})));
        assert_eq!(payload.subaccount, None);
    }

    #[test]
    fn test_zero_amount_is_dropped() {
        let payload = InitializeTransaction::from_params(&Params::new().with("amount", "abc"));
        assert_eq!(payload.amount, None);
    }

    #[tokio::test]
    async fn test_authorization_url_and_redirect() {
        let transport = Arc::new(MockTransport::new().respond_json(
            200,
            json!({
                "status": true,
                "message": "Authorization URL created",
                "data": {
                    "authorization_url": "https://checkout.paystack.com/0peioxfhpn",
                    "access_code": "0peioxfhpn",
                    "reference": "7PVGX8MEk85tgeEpVDtD"
                }
            }),
        ));

        let authorization = client(&transport)
            .authorization_url(&InitializeTransaction::new(20_000, "ada@example.com"))
            .await
            .unwrap();

        assert_eq!(authorization.access_code.as_deref(), Some("0peioxfhpn"));
        assert_eq!(
            authorization.redirect().location(),
            "https://checkout.paystack.com/0peioxfhpn"
        );

        let request = transport.last_request().unwrap();
        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(request.url, "https://api.paystack.co/transaction/initialize");
        assert_eq!(
            request.body,
            Some(json!({"amount": 20_000, "email": "ada@example.com", "currency": "NGN"}))
        );
    }

    #[tokio::test]
    async fn test_access_code_missing_is_shape_error() {
        let transport = Arc::new(MockTransport::new().respond_json(
            200,
            json!({"status": true, "data": {"authorization_url": "https://checkout.paystack.com/x"}}),
        ));
        let err = client(&transport)
            .access_code(&InitializeTransaction::new(100, "a@b.co"))
            .await
            .unwrap_err();
        assert!(matches!(err, GatewayError::Shape(_)));
    }

    #[tokio::test]
    async fn test_verify_uses_callback_reference() {
        let transport = Arc::new(
            MockTransport::new().respond_json(200, verify_response("Verification successful")),
        );
        let params = Params::from_pairs([("trxref", "T123")]);

        let valid = client(&transport)
            .is_transaction_verification_valid(None, &params)
            .await
            .unwrap();

        assert!(valid);
        let request = transport.last_request().unwrap();
        assert_eq!(request.method, HttpMethod::Get);
        assert_eq!(request.url, "https://api.paystack.co/transaction/verify/T123");
        assert_eq!(request.body, None);
    }

    #[tokio::test]
    async fn test_explicit_reference_wins() {
        let transport = Arc::new(
            MockTransport::new().respond_json(200, verify_response("Verification successful")),
        );
        let params = Params::from_pairs([("trxref", "FROM_QUERY")]);

        client(&transport)
            .verify_transaction(Some("EXPLICIT"), &params)
            .await
            .unwrap();

        assert!(transport.last_request().unwrap().url.ends_with("/verify/EXPLICIT"));
    }

    #[tokio::test]
    async fn test_verification_negative_outcomes() {
        for message in ["Invalid transaction reference", "Transaction reference not found"] {
            let transport = Arc::new(MockTransport::new().respond_json(200, verify_response(message)));
            let valid = client(&transport)
                .is_transaction_verification_valid(Some("T123"), &Params::new())
                .await
                .unwrap();
            assert!(!valid, "{message}");
        }

        let transport = Arc::new(MockTransport::new().respond_json(200, json!({"status": true})));
        let valid = client(&transport)
            .is_transaction_verification_valid(Some("T123"), &Params::new())
            .await
            .unwrap();
        assert!(!valid);
    }

    #[tokio::test]
    async fn test_missing_reference_fails_before_dispatch() {
        let transport = Arc::new(MockTransport::new());
        let err = client(&transport)
            .verify_transaction(None, &Params::new())
            .await
            .unwrap_err();

        assert!(matches!(err, GatewayError::Validation(_)));
        assert_eq!(transport.request_count(), 0);
    }

    #[tokio::test]
    async fn test_blank_reference_fails_before_dispatch() {
        let transport = Arc::new(MockTransport::new());
        for reference in ["/", " ", ""] {
            let err = client(&transport)
                .verify_transaction(Some(reference), &Params::new())
                .await
                .unwrap_err();
            assert!(matches!(err, GatewayError::Validation(_)), "{reference:?}");
        }
        assert_eq!(transport.request_count(), 0);
    }

    #[tokio::test]
    async fn test_non_string_message_is_shape_error() {
        let transport = Arc::new(MockTransport::new().respond_json(
            200,
            json!({"status": true, "message": 5, "data": {"status": "success"}}),
        ));
        let err = client(&transport)
            .is_transaction_verification_valid(Some("T123"), &Params::new())
            .await
            .unwrap_err();

        assert!(matches!(err, GatewayError::Shape(_)));
        assert_eq!(transport.request_count(), 1);
    }

    #[tokio::test]
    async fn test_payment_data_valid() {
        let transport = Arc::new(
            MockTransport::new().respond_json(200, verify_response("Verification successful")),
        );
        let envelope = client(&transport)
            .payment_data(Some("T123"), &Params::new())
            .await
            .unwrap();

        assert_eq!(envelope.data_str("status").unwrap(), "success");
        assert_eq!(transport.request_count(), 1);
    }

    #[tokio::test]
    async fn test_payment_data_invalid() {
        let transport = Arc::new(
            MockTransport::new().respond_json(200, verify_response("Invalid transaction reference")),
        );
        let err = client(&transport)
            .payment_data(Some("T123"), &Params::new())
            .await
            .unwrap_err();

        match err {
            GatewayError::VerificationFailed { reference, message } => {
                assert_eq!(reference, "T123");
                assert_eq!(message.as_deref(), Some("Invalid transaction reference"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(transport.request_count(), 1);
    }

    #[tokio::test]
    async fn test_payment_data_transport_error_is_distinct() {
        let transport = Arc::new(
            MockTransport::new().fail_with(TransportError::Network("timed out".into())),
        );
        let err = client(&transport)
            .payment_data(Some("T123"), &Params::new())
            .await
            .unwrap_err();
        assert!(err.is_transport());
    }

    #[tokio::test]
    async fn test_list_transactions_returns_data() {
        let transport = Arc::new(MockTransport::new().respond_json(
            200,
            json!({"status": true, "message": "Transactions retrieved", "data": [{"id": 1}], "meta": {"total": 1}}),
        ));
        let transactions = client(&transport).list_transactions().await.unwrap();

        assert_eq!(transactions, vec![json!({"id": 1})]);
        assert_eq!(transport.last_request().unwrap().url, "https://api.paystack.co/transaction");
    }

    #[tokio::test]
    async fn test_export_query() {
        let transport = Arc::new(MockTransport::new().respond_json(
            200,
            json!({"status": true, "data": {"path": "https://files.paystack.co/export.csv"}}),
        ));
        let params = Params::new()
            .with("from", "2024-01-01")
            .with("to", "2024-01-31")
            .with("settled", "true");
        let export = ExportTransactions::from_params(&params).unwrap();

        client(&transport).export_transactions(&export).await.unwrap();

        let request = transport.last_request().unwrap();
        assert_eq!(
            request.url,
            "https://api.paystack.co/transaction/export?from=2024-01-01&to=2024-01-31&settled=true"
        );
        assert_eq!(request.body, None);
    }

    #[test]
    fn test_export_rejects_bad_dates() {
        let params = Params::new().with("from", "01/02/2024");
        let errors = ExportTransactions::from_params(&params).unwrap_err();
        assert_eq!(errors.fields(), vec!["from"]);
    }

    #[test]
    fn test_generated_reference_attached() {
        let payload = InitializeTransaction::new(100, "a@b.co").with_generated_reference();
        assert_eq!(payload.reference.map(|r| r.len()), Some(25));
    }
}

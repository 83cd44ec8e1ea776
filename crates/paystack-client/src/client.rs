//! Gateway Client
//!
//! Holds credentials and turns each operation into one call through the
//! configured [`Transport`].

use std::sync::Arc;

use paystack_core::{
    ConfigProvider, Endpoint, Envelope, GatewayConfig, GatewayError, GatewayRequest, HttpMethod,
    RequiredFields, Result, Transport, TransportError, ValidationErrors, Validator,
};
use reqwest::Url;
use serde::Serialize;
use serde_json::Value;

use crate::http::HttpTransport;

/// Target of a single call: endpoint, extra path segments, query pairs
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Route {
    endpoint: Endpoint,
    segments: Vec<String>,
    query: Vec<(String, String)>,
}

impl Route {
    pub const fn new(endpoint: Endpoint) -> Self {
        Self {
            endpoint,
            segments: Vec::new(),
            query: Vec::new(),
        }
    }

    /// Append a path segment such as a resource id
    #[must_use]
    pub fn segment(mut self, segment: impl AsRef<str>) -> Self {
        self.segments
            .push(segment.as_ref().trim_matches('/').to_owned());
        self
    }

    /// Append a query pair
    #[must_use]
    pub fn query(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.query.push((key.into(), value.to_string()));
        self
    }

    pub const fn endpoint(&self) -> Endpoint {
        self.endpoint
    }

    /// Full URL under `base`
    ///
    /// A segment that is empty once slashes are trimmed fails validation.
    pub fn url(&self, base: &str) -> Result<String> {
        if self.segments.iter().any(String::is_empty) {
            return Err(ValidationErrors::required("id").into());
        }

        let mut url = Url::parse(&format!("{base}{}", self.endpoint.path()))
            .map_err(|e| GatewayError::Config(format!("invalid payment URL '{base}': {e}")))?;

        if !self.segments.is_empty() {
            url.path_segments_mut()
                .map_err(|()| GatewayError::Config(format!("payment URL '{base}' cannot take a path")))?
                .extend(&self.segments);
        }

        if !self.query.is_empty() {
            url.query_pairs_mut().extend_pairs(&self.query);
        }

        Ok(url.into())
    }
}

/// Paystack gateway client
///
/// Construction fails fast when credentials are missing; after that the
/// client holds no mutable state and can be shared freely.
#[derive(Clone)]
pub struct GatewayClient {
    config: GatewayConfig,
    transport: Arc<dyn Transport>,
    validator: Arc<dyn Validator>,
}

impl GatewayClient {
    /// Create a client backed by [`HttpTransport`]
    pub fn new(config: GatewayConfig) -> Result<Self> {
        Ok(Self::with_transport(config, Arc::new(HttpTransport::new()?)))
    }

    /// Create a client with a custom transport
    pub fn with_transport(config: GatewayConfig, transport: Arc<dyn Transport>) -> Self {
        tracing::info!(payment_url = %config.payment_url(), "Paystack client configured");
        Self {
            config,
            transport,
            validator: Arc::new(RequiredFields),
        }
    }

    /// Create from a config provider
    pub fn from_provider(provider: &impl ConfigProvider) -> Result<Self> {
        Self::new(GatewayConfig::from_provider(provider)?)
    }

    /// Create from environment variables
    pub fn from_env() -> Result<Self> {
        Self::new(GatewayConfig::from_env()?)
    }

    /// Replace the validator used for required-field checks
    #[must_use]
    pub fn with_validator(mut self, validator: Arc<dyn Validator>) -> Self {
        self.validator = validator;
        self
    }

    pub const fn config(&self) -> &GatewayConfig {
        &self.config
    }

    pub(crate) fn validator(&self) -> &dyn Validator {
        self.validator.as_ref()
    }

    /// Build the outbound request for a route
    pub fn request(&self, method: HttpMethod, route: &Route, body: Option<Value>) -> Result<GatewayRequest> {
        Ok(GatewayRequest {
            method,
            url: route.url(self.config.payment_url())?,
            headers: vec![
                (
                    "Authorization".into(),
                    format!("Bearer {}", self.config.secret_key().expose()),
                ),
                ("Content-Type".into(), "application/json".into()),
                ("Accept".into(), "application/json".into()),
            ],
            body,
        })
    }

    /// Send one request and normalize the response
    pub async fn dispatch(&self, method: HttpMethod, route: Route, body: Option<Value>) -> Result<Envelope> {
        let request = self.request(method, &route, body)?;

        tracing::debug!(method = %method, endpoint = %route.endpoint(), "Sending gateway request");

        let response = self.transport.send(request).await?;

        tracing::debug!(
            method = %method,
            endpoint = %route.endpoint(),
            status = response.status,
            "Gateway responded"
        );

        if !response.is_success() {
            return Err(TransportError::Status {
                status: response.status,
                message: status_message(&response.body),
            }
            .into());
        }

        Envelope::from_slice(&response.body)
    }

    pub(crate) async fn get(&self, route: Route) -> Result<Envelope> {
        self.dispatch(HttpMethod::Get, route, None).await
    }

    pub(crate) async fn list(&self, route: Route) -> Result<Vec<Value>> {
        self.get(route).await?.into_list()
    }

    pub(crate) async fn post(&self, route: Route, payload: &impl Serialize) -> Result<Envelope> {
        self.dispatch(HttpMethod::Post, route, Some(encode(payload)?)).await
    }

    pub(crate) async fn put(&self, route: Route, payload: &impl Serialize) -> Result<Envelope> {
        self.dispatch(HttpMethod::Put, route, Some(encode(payload)?)).await
    }
}

pub(crate) fn encode(payload: &impl Serialize) -> Result<Value> {
    serde_json::to_value(payload).map_err(GatewayError::Encode)
}

/// Error text from a failed response: its `message` field, else the raw body
fn status_message(body: &[u8]) -> String {
    serde_json::from_slice::<Value>(body)
        .ok()
        .and_then(|v| v.get("message").and_then(Value::as_str).map(str::to_owned))
        .unwrap_or_else(|| String::from_utf8_lossy(body).into_owned())
}

//! # paystack-client
//!
//! Async client for the Paystack payment gateway REST API.
//!
//! ## Flow
//!
//! ```text
//! ┌─────────────┐  initialize   ┌─────────────────┐  callback   ┌─────────────┐
//! │  Your Site  │──────────────▶│  Paystack Hosted │────────────▶│  Your Site  │
//! │  (checkout) │   Redirect    │   Payment Page   │  ?trxref=   │  (verify)   │
//! └─────────────┘               └─────────────────┘             └─────────────┘
//! ```
//!
//! Every operation is one HTTP call against `<payment_url><endpoint>`,
//! authenticated with the secret key as a bearer token. Responses come back
//! as an [`Envelope`]; list operations return just its `data` array.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use paystack_client::{GatewayClient, InitializeTransaction, Params};
//!
//! let client = GatewayClient::from_env()?;
//!
//! // Start a payment and send the customer to the hosted page
//! let authorization = client
//!     .authorization_url(&InitializeTransaction::new(20_000, "ada@example.com"))
//!     .await?;
//! let redirect = authorization.redirect();
//!
//! // On the callback, confirm it
//! let query = Params::from_pairs([("trxref", "T123")]);
//! let payment = client.payment_data(None, &query).await?;
//! ```

mod client;
mod http;
mod mock;
mod redirect;
pub mod resources;

pub use client::{GatewayClient, Route};
pub use http::{DEFAULT_TIMEOUT_SECS, HttpTransport};
pub use mock::MockTransport;
pub use redirect::Redirect;
pub use resources::Pagination;
pub use resources::customers::CustomerPayload;
pub use resources::pages::PagePayload;
pub use resources::plans::PlanPayload;
pub use resources::recipients::RecipientPayload;
pub use resources::subaccounts::SubaccountPayload;
pub use resources::subscriptions::{SubscriptionPayload, SubscriptionToggle};
pub use resources::transactions::{
    Authorization, ExportTransactions, InitializeTransaction, Verification,
};
pub use resources::transfers::TransferPayload;

// Re-export core types for convenience
pub use paystack_core::{
    ConfigProvider, Endpoint, EnvConfig, Envelope, GatewayConfig, GatewayError, ParameterSource,
    Params, Result, StaticConfig, Transport, TransportError, VerificationOutcome,
};

//! # paystack-core
//!
//! Building blocks shared by the Paystack gateway client.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐   GatewayRequest   ┌─────────────┐
//! │ GatewayClient│───────────────────▶│  Transport  │──▶ gateway
//! │  (client     │◀───────────────────│  (Strategy) │
//! │   crate)     │    RawResponse     └─────────────┘
//! └──────┬───────┘
//!        │ Envelope::from_slice
//!        ▼
//! ┌──────────────┐
//! │   Envelope   │──▶ data / message / VerificationOutcome
//! └──────────────┘
//! ```
//!
//! Host applications plug in through three traits: [`ParameterSource`] for
//! inbound form values, [`ConfigProvider`] for credentials and
//! [`Transport`] for the HTTP call itself.

pub mod config;
pub mod endpoint;
pub mod envelope;
pub mod error;
pub mod params;
pub mod reference;
pub mod transport;
pub mod validation;
pub mod verification;

pub use config::{ConfigProvider, EnvConfig, GatewayConfig, SecretKey, StaticConfig};
pub use endpoint::Endpoint;
pub use envelope::Envelope;
pub use error::{GatewayError, Result, TransportError};
pub use params::{ParameterSource, Params, coerce_int};
pub use reference::generate_reference;
pub use transport::{GatewayRequest, HttpMethod, RawResponse, Transport};
pub use validation::{FieldError, RequiredFields, ValidationErrors, Validator};
pub use verification::VerificationOutcome;

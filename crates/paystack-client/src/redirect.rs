//! Hosted Payment Page Redirect

use serde::{Deserialize, Serialize};

/// Instruction to send the customer to the hosted payment page
///
/// The client never performs the redirect itself. Enable the `axum-handlers`
/// feature to return this straight from a handler.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Redirect {
    location: String,
}

impl Redirect {
    pub fn to(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
        }
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn into_location(self) -> String {
        self.location
    }
}

#[cfg(feature = "axum-handlers")]
impl axum::response::IntoResponse for Redirect {
    fn into_response(self) -> axum::response::Response {
        use axum::http::{StatusCode, header};

        (StatusCode::FOUND, [(header::LOCATION, self.location)]).into_response()
    }
}

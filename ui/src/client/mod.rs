//! Personnel API Client
//!
//! The directory page only ever needs one thing from the backend: the full
//! personnel collection. That contract is the [`EmployeeSource`] trait so
//! the page can be driven by something other than HTTP (tests, demos).
//!
//! - **HttpEmployeeClient**: `GET`s the configured endpoint with `gloo-net`

mod http;

pub use http::HttpEmployeeClient;

use async_trait::async_trait;
use personnel_shared::Employee;

/// Error types for personnel client operations
#[derive(Debug, thiserror::Error)]
pub enum EmployeeClientError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Anything that can produce the full employee collection
#[async_trait(?Send)]
pub trait EmployeeSource {
    /// Fetch every employee
    ///
    /// A well-formed response without a usable `result` list is an empty
    /// collection, not an error.
    async fn fetch_employees(&self) -> Result<Vec<Employee>, EmployeeClientError>;
}

/// Origin the UI was served from, used when no API base URL is configured
pub fn window_origin() -> String {
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_else(|| "http://localhost:8080".to_string())
}

//! HTTP Personnel Client
//!
//! Fetches the personnel collection from the REST endpoint with a single
//! `GET`. No retries and no timeout; the page shows the failure instead.

use async_trait::async_trait;
use gloo_net::http::Request;
use personnel_shared::{employees_from_response, ApiConfig, Employee};

use super::{window_origin, EmployeeClientError, EmployeeSource};

/// Client for the personnel REST API
#[derive(Debug, Clone)]
pub struct HttpEmployeeClient {
    employees_url: String,
}

impl HttpEmployeeClient {
    /// Create a client for an explicit endpoint URL
    pub fn new(employees_url: impl Into<String>) -> Self {
        Self {
            employees_url: employees_url.into(),
        }
    }

    /// Create a client from configuration, resolving against the window origin
    pub fn from_config(api: &ApiConfig) -> Self {
        Self::new(api.employees_url(&window_origin()))
    }

    pub fn employees_url(&self) -> &str {
        &self.employees_url
    }
}

#[async_trait(?Send)]
impl EmployeeSource for HttpEmployeeClient {
    async fn fetch_employees(&self) -> Result<Vec<Employee>, EmployeeClientError> {
        tracing::debug!(url = %self.employees_url, "fetching personnel");

        let response = Request::get(&self.employees_url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| EmployeeClientError::ConnectionFailed(e.to_string()))?;

        if !response.ok() {
            return Err(EmployeeClientError::RequestFailed(format!(
                "HTTP {}: {}",
                response.status(),
                response.status_text()
            )));
        }

        let body: serde_json::Value = response
            .json()
            .await
            .map_err(|e| EmployeeClientError::InvalidResponse(e.to_string()))?;

        Ok(employees_from_response(body))
    }
}

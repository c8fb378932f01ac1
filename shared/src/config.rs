//! Directory configuration
//!
//! Read from TOML:
//!
//! ```toml
//! [api]
//! employees_path = "/api/v1/personnels"
//!
//! [view]
//! items_per_page = 8
//! page_overflow = "preserve"
//! ```
//!
//! Every key is optional; missing keys fall back to the defaults below.

use serde::{Deserialize, Serialize};

use crate::page::{PageOverflow, PageState, DEFAULT_ITEMS_PER_PAGE};

/// Default path of the "all personnel" endpoint
pub const DEFAULT_EMPLOYEES_PATH: &str = "/api/v1/personnels";

/// Errors from loading or validating a configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to serialize configuration: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("view.items_per_page must be at least 1")]
    ZeroPageSize,

    #[error("api.employees_path must not be empty")]
    EmptyEmployeesPath,
}

/// Top-level directory configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DirectoryConfig {
    pub api: ApiConfig,
    pub view: ViewConfig,
}

/// Where to fetch personnel from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// API origin; `None` means the origin the UI was served from
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    /// Path of the endpoint returning the full personnel collection
    pub employees_path: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            employees_path: DEFAULT_EMPLOYEES_PATH.to_string(),
        }
    }
}

impl ApiConfig {
    /// Full endpoint URL, resolving against `origin` when no base URL is set
    pub fn employees_url(&self, origin: &str) -> String {
        let base = self.base_url.as_deref().unwrap_or(origin);
        let path = self.employees_path.trim_start_matches('/');
        format!("{}/{}", base.trim_end_matches('/'), path)
    }
}

/// Page layout settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    pub items_per_page: usize,
    pub page_overflow: PageOverflow,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            items_per_page: DEFAULT_ITEMS_PER_PAGE,
            page_overflow: PageOverflow::default(),
        }
    }
}

impl ViewConfig {
    /// Initial page state for this layout
    pub fn initial_page(&self) -> PageState {
        PageState::with_page_size(self.items_per_page)
    }
}

impl DirectoryConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and validate from a TOML string
    pub fn from_toml(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Convert to a TOML string
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.view.items_per_page == 0 {
            return Err(ConfigError::ZeroPageSize);
        }
        if self.api.employees_path.trim().is_empty() {
            return Err(ConfigError::EmptyEmployeesPath);
        }
        Ok(())
    }
}

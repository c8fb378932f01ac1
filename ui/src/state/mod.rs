//! Application State
//!
//! State is held in explicit objects handed to components rather than
//! looked up ad hoc:
//! - [`AppState`]: configuration, theme and the personnel source, provided
//!   once through Leptos context by the root component
//! - [`DirectoryState`]: the directory page's employees, load phase,
//!   filters and page, owned by one page instance

mod directory;

pub use directory::DirectoryState;

use std::rc::Rc;

use leptos::*;
use personnel_shared::DirectoryConfig;

use crate::client::{EmployeeSource, HttpEmployeeClient};

/// Configuration embedded at build time
const EMBEDDED_CONFIG: &str = include_str!("../../personnel.toml");

/// Colour theme
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Class applied to the `<html>` element
    pub fn root_class(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Page background and text classes
    pub fn page_class(self) -> &'static str {
        match self {
            Theme::Light => "bg-gray-50 text-gray-800",
            Theme::Dark => "bg-gray-900 text-white",
        }
    }

    /// Surface classes for panels and cards
    pub fn surface_class(self) -> &'static str {
        match self {
            Theme::Light => "bg-white border-gray-200",
            Theme::Dark => "bg-gray-800 border-gray-700",
        }
    }
}

/// Global application state
#[derive(Clone)]
pub struct AppState {
    /// Current colour theme (not persisted)
    pub theme: RwSignal<Theme>,

    /// Directory configuration
    pub config: DirectoryConfig,

    /// Where personnel come from
    source: Rc<dyn EmployeeSource>,
}

impl AppState {
    /// State backed by the HTTP client described in `config`
    pub fn new(config: DirectoryConfig) -> Self {
        let source = Rc::new(HttpEmployeeClient::from_config(&config.api));
        Self::with_source(config, source)
    }

    /// State backed by an arbitrary personnel source
    pub fn with_source(config: DirectoryConfig, source: Rc<dyn EmployeeSource>) -> Self {
        Self {
            theme: create_rw_signal(Theme::default()),
            config,
            source,
        }
    }

    pub fn source(&self) -> Rc<dyn EmployeeSource> {
        Rc::clone(&self.source)
    }

    pub fn toggle_theme(&self) {
        self.theme.update(|theme| *theme = theme.toggled());
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(load_config())
    }
}

/// Parse the embedded configuration, falling back to defaults if it is invalid
pub fn load_config() -> DirectoryConfig {
    parse_config(EMBEDDED_CONFIG)
}

fn parse_config(raw: &str) -> DirectoryConfig {
    match DirectoryConfig::from_toml(raw) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!(error = %e, "invalid personnel.toml, using defaults");
            DirectoryConfig::default()
        }
    }
}

//! Personnel UI Library
//!
//! This crate provides the Personnel directory user interface: a single page
//! listing every employee with search, filters and pagination.
//!
//! # Modules
//!
//! - [`app`]: Root application component and routing
//! - [`client`]: Personnel API client ([`client::EmployeeSource`])
//! - [`components`]: UI components (directory page, layout, common)
//! - [`state`]: Application and page state

pub mod app;
pub mod client;
pub mod components;
pub mod state;

pub use app::App;

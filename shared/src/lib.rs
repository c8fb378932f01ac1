//! Shared types for the Personnel directory
//!
//! This crate holds everything that does not depend on the browser:
//! - Employee records and the personnel API response shape
//! - The filter-and-paginate engine ([`derive_view`])
//! - Directory configuration

pub mod config;
pub mod employee;
pub mod filter;
pub mod load;
pub mod page;
pub mod view;

pub use config::*;
pub use employee::*;
pub use filter::*;
pub use load::*;
pub use page::*;
pub use view::*;

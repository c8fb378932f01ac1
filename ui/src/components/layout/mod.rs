//! Layout Components
//!
//! - `AppShell` - Top bar with theme switch around the routed page

mod app_shell;

pub use app_shell::AppShell;

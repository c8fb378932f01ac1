//! Common/Shared UI Components
//!
//! Reusable components used throughout the application.

mod icons;
mod loading;

pub use icons::*;
pub use loading::Loading;

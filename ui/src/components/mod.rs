//! UI Components
//!
//! This module contains all UI components organized by feature:
//! - `employees`: The employee directory page
//! - `layout`: Application shell
//! - `common`: Shared/reusable components

pub mod common;
pub mod employees;
pub mod layout;

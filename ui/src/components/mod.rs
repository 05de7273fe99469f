//! UI Components
//!
//! This module contains all UI components organized by feature:
//! - `dashboard`: the three dashboard sections
//! - `layout`: page chrome (shell, status bar)
//! - `common`: shared/reusable components

pub mod common;
pub mod dashboard;
pub mod layout;

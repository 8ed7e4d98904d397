//! Render module - UI components for visualization
//!
//! This module provides:
//! - Time-vs-Voltage scatter plot widget

mod scatter;

pub use scatter::{ScatterSettings, ScatterView};

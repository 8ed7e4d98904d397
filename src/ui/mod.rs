//! UI module - the two application panels
//!
//! This module provides:
//! - Sample data generator panel (left side panel)
//! - Voltage viewer panel (central panel)

mod generator;
mod viewer;

pub use generator::GeneratorPanel;
pub use viewer::ViewerPanel;

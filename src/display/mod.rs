//! Display formatting for terminal output
//!
//! Provides utilities for formatting reports for terminal display.

pub mod report;

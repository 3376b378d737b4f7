//! CLI library components for the salary survey tool.

pub mod logging;
pub mod pipeline;
pub mod types;

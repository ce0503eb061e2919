//! Command handlers.
//!
//! This module contains handlers for the generate, preview, and plan commands.

pub mod generate;
pub mod plan;
pub mod preview;

pub use generate::run_generate;
pub use plan::run_plan;
pub use preview::run_preview;

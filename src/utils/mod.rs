//! Shared utilities
//!
//! Logging helpers, progress spinners and console output used by the
//! pipeline and the binary.

pub mod logging;

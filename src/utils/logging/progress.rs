//! Progress reporting utilities
//!
//! Spinners for the blocking steps of the binary, using the indicatif crate.

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

/// Default template of a spinner
pub const DEFAULT_SPINNER_TEMPLATE: &str = "{spinner:.green} {elapsed_precise} {msg}";

/// Create a spinner with a standardized style
///
/// # Arguments
/// * `message` - Optional message to display next to the spinner
///
/// # Returns
/// A ticking `ProgressBar`
#[must_use]
pub fn create_spinner(message: Option<&str>) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template(DEFAULT_SPINNER_TEMPLATE) {
        pb.set_style(style);
    }

    if let Some(msg) = message {
        pb.set_message(msg.to_string());
    }

    pb.enable_steady_tick(Duration::from_millis(100));

    pb
}

/// Stop a spinner and remove it from the terminal
pub fn finish_and_clear(pb: &ProgressBar) {
    pb.finish_and_clear();
}

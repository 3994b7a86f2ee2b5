//! `SuiteScope` - desktop browser for suite API monitoring servers
//!
//! A GTK4/libadwaita client that connects to a monitoring/management
//! server, browses adapter instances and resource kinds, lists matching
//! resources in a table, and shows per-resource metrics and properties in
//! a detail window.

// Global clippy lint configuration for GUI code
#![allow(clippy::too_many_lines)] // GUI setup functions are inherently long
#![allow(clippy::missing_errors_doc)] // Internal GUI functions don't need error docs
#![allow(clippy::missing_panics_doc)] // Internal GUI functions don't need panic docs

mod app;
mod details;
mod window;

use suitescope_core::tracing::{TracingConfig, init_tracing};

fn main() -> gtk4::glib::ExitCode {
    // Initialize logging with environment filter (RUST_LOG)
    if let Err(e) = init_tracing(&TracingConfig::new()) {
        eprintln!("could not initialize logging: {e}");
    }

    app::run()
}

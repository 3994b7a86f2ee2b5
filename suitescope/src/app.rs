//! GTK4 Application setup and initialization
//!
//! Builds the adw::Application, assembles the browser from the persisted
//! settings, and creates the main window on activation.

use adw::prelude::*;
use gtk4::glib;
use libadwaita as adw;

use suitescope_core::browser::{Browser, Connector};
use suitescope_core::client::{HttpClient, SuiteClient};
use suitescope_core::completion::CompletionStore;
use suitescope_core::config::{APP_DIR_NAME, Settings};

use crate::window::MainWindow;

/// Application ID for `SuiteScope`
pub const APP_ID: &str = "io.github.suitescope.SuiteScope";

/// Creates and configures the GTK4 Application
#[must_use]
pub fn create_application() -> adw::Application {
    let app = adw::Application::builder()
        .application_id(APP_ID)
        .build();

    app.connect_activate(build_ui);
    app.set_accels_for_action("window.close", &["<Control>q"]);

    app
}

/// Builds the main UI when the application is activated
fn build_ui(app: &adw::Application) {
    let settings = Settings::load_or_create(&Settings::default_config_dir()).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "could not load settings, using defaults");
        Settings::default()
    });

    let store = match settings.completion_file.clone() {
        Some(path) => CompletionStore::new(path),
        None => CompletionStore::default_location(APP_DIR_NAME),
    };

    let browser = Browser::new(http_connector(&settings), store);
    let window = MainWindow::new(app, browser);
    window.present();
}

/// Builds the connector the address bar uses: every connect attempt
/// constructs a fresh blocking HTTP client against the entered hostname.
fn http_connector(settings: &Settings) -> Connector {
    let port = settings.api_port;
    let verify_tls = settings.verify_tls;
    Box::new(move |hostname| {
        let client = HttpClient::connect(hostname, port, verify_tls)?;
        Ok(Box::new(client) as Box<dyn SuiteClient>)
    })
}

/// Shows a modal warning dialog over `parent`.
///
/// Every error a command handler returns is surfaced through here; the
/// browser state is already consistent by the time the dialog appears.
pub fn show_warning(parent: &impl IsA<gtk4::Widget>, message: &str) {
    let dialog = adw::AlertDialog::new(Some("Warning"), Some(message));
    dialog.add_response("ok", "OK");
    dialog.set_default_response(Some("ok"));
    dialog.present(Some(parent));
}

/// Runs the GTK4 application
///
/// This is the main entry point that initializes libadwaita and runs the
/// event loop until the window closes.
///
/// # Returns
///
/// Returns `glib::ExitCode::FAILURE` if libadwaita initialization fails,
/// otherwise returns the application's exit code.
pub fn run() -> glib::ExitCode {
    if let Err(e) = adw::init() {
        tracing::error!(error = %e, "failed to initialize libadwaita");
        return glib::ExitCode::FAILURE;
    }

    create_application().run()
}

//! `SuiteScope` Core Library
//!
//! This crate provides the GUI-free functionality for the `SuiteScope`
//! monitoring-server browser: the client contract and its HTTP
//! implementation, the browsing view-model, and local persistence.
//!
//! # Crate Structure
//!
//! - [`models`] - Core data structures (adapter kinds, resources, metrics)
//! - [`client`] - The `SuiteClient` trait, hostname validation, and the
//!   blocking HTTP implementation
//! - [`browser`] - Application state and command handlers that any UI
//!   binding layer can attach to
//! - [`clipboard`] - Tab-separated serialization of table selections
//! - [`completion`] - Persisted hostname history for address autocomplete
//! - [`config`] - Application settings and persistence
//! - [`tracing`] - Structured logging setup

// Enable missing_docs warning for public API documentation
#![warn(missing_docs)]

pub mod browser;
pub mod client;
pub mod clipboard;
pub mod completion;
pub mod config;
pub mod error;
pub mod models;
pub mod testing;
pub mod tracing;

pub use browser::{Browser, Connector, ResourceDetails, SelectedCell};
pub use client::{HttpClient, SuiteClient, validate_hostname};
pub use clipboard::serialize_selection;
pub use completion::CompletionStore;
pub use config::{ConfigError, ConfigResult, Settings};
pub use error::{
    BrowserError, BrowserResult, ClientError, ClientResult, SelectionError,
};
pub use models::{
    AdapterInstance, AdapterKind, MetricSample, MetricsData, PropertiesData, Property,
    ResourceKind, ResourcePage, ResourceRow,
};
pub use testing::{MockClient, MockFailure};
pub use tracing::{TracingConfig, TracingError, TracingLevel, init_tracing};

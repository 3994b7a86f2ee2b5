//! Behavioral tests for the browser command handlers
//!
//! These exercise the connect / cascade / activation flows against the
//! mock client, including every error path the main window surfaces as a
//! modal warning.

use suitescope_core::{
    Browser, BrowserError, ClientError, CompletionStore, MockClient, MockFailure, SelectedCell,
    SelectionError,
};
use tempfile::TempDir;

fn store_in(dir: &TempDir) -> CompletionStore {
    CompletionStore::new(dir.path().join("completion_list"))
}

fn sample_browser(dir: &TempDir) -> Browser {
    Browser::new(MockClient::with_sample_data().into_connector(), store_in(dir))
}

fn cell(row: usize, column: usize, text: &str) -> SelectedCell {
    SelectedCell {
        row,
        column,
        text: text.to_string(),
    }
}

// ========== Connect ==========

#[test]
fn malformed_hostname_leaves_state_untouched() {
    let dir = TempDir::new().unwrap();
    let mut browser = sample_browser(&dir);

    let err = browser.connect("not a hostname").unwrap_err();
    assert!(matches!(
        err,
        BrowserError::Client(ClientError::InvalidAddress(_))
    ));
    assert!(!browser.is_connected());
    assert!(browser.adapter_kinds().is_empty());
    // Nothing persisted for a failed connect
    assert!(store_in(&dir).load().is_empty());
}

#[test]
fn failed_kind_fetch_stays_disconnected() {
    let dir = TempDir::new().unwrap();
    let connector = MockClient::with_sample_data()
        .with_failure(MockFailure::AdapterKinds)
        .into_connector();
    let mut browser = Browser::new(connector, store_in(&dir));

    let err = browser.connect("host1").unwrap_err();
    assert!(matches!(err, BrowserError::Client(ClientError::Api { .. })));
    assert!(!browser.is_connected());
    assert!(browser.adapter_kinds().is_empty());
    assert!(store_in(&dir).load().is_empty());
}

#[test]
fn successful_connect_populates_kinds_and_appends_history() {
    let dir = TempDir::new().unwrap();
    let mut browser = sample_browser(&dir);

    browser.connect("host1").unwrap();

    assert!(browser.is_connected());
    assert_eq!(browser.host(), Some("host1"));
    assert_eq!(browser.adapter_kinds().len(), 1);
    assert_eq!(browser.adapter_kinds()[0].label, "vCenter Adapter");
    assert_eq!(store_in(&dir).load(), vec!["host1"]);
    assert_eq!(browser.completions(), ["host1"]);
}

#[test]
fn reconnect_appends_duplicate_history_entry() {
    let dir = TempDir::new().unwrap();
    let mut browser = sample_browser(&dir);

    browser.connect("host1").unwrap();
    browser.connect("host1").unwrap();

    let raw = std::fs::read_to_string(dir.path().join("completion_list")).unwrap();
    assert_eq!(raw, "host1\nhost1\n");
    assert_eq!(browser.completions(), ["host1", "host1"]);
}

#[test]
fn reconnect_discards_deeper_state() {
    let dir = TempDir::new().unwrap();
    let mut browser = sample_browser(&dir);

    browser.connect("host1").unwrap();
    browser.select_adapter_kind(0).unwrap();
    browser.select_adapter_instance(0, 0).unwrap();
    assert!(!browser.resources().is_empty());

    browser.connect("host1").unwrap();
    assert!(browser.adapter_instances().is_empty());
    assert!(browser.resource_kinds().is_empty());
    assert!(browser.resources().is_empty());
}

// ========== Adapter-kind cascade ==========

#[test]
fn kind_selection_replaces_both_dependent_lists() {
    let dir = TempDir::new().unwrap();
    let mut browser = sample_browser(&dir);
    browser.connect("host1").unwrap();

    browser.select_adapter_kind(0).unwrap();
    assert_eq!(browser.adapter_instances().len(), 1);
    assert_eq!(browser.resource_kinds().len(), 1);

    // Re-selection replaces, not appends
    browser.select_adapter_kind(0).unwrap();
    assert_eq!(browser.adapter_instances().len(), 1);
    assert_eq!(browser.resource_kinds().len(), 1);
}

#[test]
fn kind_selection_clears_the_resource_table() {
    let dir = TempDir::new().unwrap();
    let mut browser = sample_browser(&dir);
    browser.connect("host1").unwrap();
    browser.select_adapter_kind(0).unwrap();
    browser.select_adapter_instance(0, 0).unwrap();
    assert_eq!(browser.resources().rows.len(), 2);

    browser.select_adapter_kind(0).unwrap();
    assert!(browser.resources().is_empty());
}

#[test]
fn failed_cascade_is_reported_and_leaves_no_stale_state() {
    let dir = TempDir::new().unwrap();
    let connector = MockClient::with_sample_data()
        .with_failure(MockFailure::AdapterInstances)
        .into_connector();
    let mut browser = Browser::new(connector, store_in(&dir));
    browser.connect("host1").unwrap();

    let err = browser.select_adapter_kind(0).unwrap_err();
    assert!(matches!(err, BrowserError::Client(ClientError::Api { .. })));
    assert!(browser.adapter_instances().is_empty());
    assert!(browser.resource_kinds().is_empty());
    assert!(browser.resources().is_empty());
}

#[test]
fn kind_selection_before_connect_is_rejected() {
    let dir = TempDir::new().unwrap();
    let mut browser = sample_browser(&dir);
    assert!(matches!(
        browser.select_adapter_kind(0),
        Err(BrowserError::StaleSelection)
    ));
}

// ========== Instance selection ==========

#[test]
fn instance_selection_rebuilds_the_table() {
    let dir = TempDir::new().unwrap();
    let mut browser = sample_browser(&dir);
    browser.connect("host1").unwrap();
    browser.select_adapter_kind(0).unwrap();

    browser.select_adapter_instance(0, 0).unwrap();
    let page = browser.resources();
    assert_eq!(page.columns, vec!["Name", "UUID"]);
    assert_eq!(page.rows.len(), 2);
    assert_eq!(page.rows[0].name(), Some("alpha"));
    assert_eq!(page.rows[0].uuid(), Some("u1"));

    // Full replace on re-selection
    browser.select_adapter_instance(0, 0).unwrap();
    assert_eq!(browser.resources().rows.len(), 2);
}

#[test]
fn failed_resource_fetch_leaves_table_empty() {
    let dir = TempDir::new().unwrap();
    let connector = MockClient::with_sample_data()
        .with_failure(MockFailure::Resources)
        .into_connector();
    let mut browser = Browser::new(connector, store_in(&dir));
    browser.connect("host1").unwrap();
    browser.select_adapter_kind(0).unwrap();

    assert!(browser.select_adapter_instance(0, 0).is_err());
    assert!(browser.resources().is_empty());
}

#[test]
fn stale_instance_index_is_rejected() {
    let dir = TempDir::new().unwrap();
    let mut browser = sample_browser(&dir);
    browser.connect("host1").unwrap();
    browser.select_adapter_kind(0).unwrap();

    assert!(matches!(
        browser.select_adapter_instance(7, 0),
        Err(BrowserError::StaleSelection)
    ));
}

// ========== Row activation ==========

#[test]
fn activation_returns_details_for_one_row() {
    let dir = TempDir::new().unwrap();
    let mut browser = sample_browser(&dir);
    browser.connect("host1").unwrap();
    browser.select_adapter_kind(0).unwrap();
    browser.select_adapter_instance(0, 0).unwrap();

    let details = browser
        .activate_selection(&[cell(0, 0, "alpha"), cell(0, 1, "u1")])
        .unwrap();
    assert_eq!(details.title, "alpha");
    assert_eq!(details.metrics.len(), 1);
    assert_eq!(details.metrics[0].key, "cpu|usage_average");
    assert_eq!(details.properties.len(), 1);
}

#[test]
fn activation_spanning_two_rows_is_rejected() {
    let dir = TempDir::new().unwrap();
    let mut browser = sample_browser(&dir);
    browser.connect("host1").unwrap();

    let err = browser
        .activate_selection(&[cell(0, 0, "alpha"), cell(1, 0, "beta")])
        .unwrap_err();
    assert!(matches!(
        err,
        BrowserError::Selection(SelectionError::MultipleRows)
    ));
}

#[test]
fn activation_without_uuid_column_is_rejected() {
    let dir = TempDir::new().unwrap();
    let mut browser = sample_browser(&dir);
    browser.connect("host1").unwrap();

    let err = browser
        .activate_selection(&[cell(0, 0, "alpha")])
        .unwrap_err();
    assert!(matches!(
        err,
        BrowserError::Selection(SelectionError::MissingField)
    ));
}

#[test]
fn empty_activation_is_rejected() {
    let dir = TempDir::new().unwrap();
    let mut browser = sample_browser(&dir);
    browser.connect("host1").unwrap();

    let err = browser.activate_selection(&[]).unwrap_err();
    assert!(matches!(
        err,
        BrowserError::Selection(SelectionError::Empty)
    ));
}

#[test]
fn failed_metrics_fetch_propagates() {
    let dir = TempDir::new().unwrap();
    let connector = MockClient::with_sample_data()
        .with_failure(MockFailure::Metrics)
        .into_connector();
    let mut browser = Browser::new(connector, store_in(&dir));
    browser.connect("host1").unwrap();

    let err = browser
        .activate_selection(&[cell(0, 0, "alpha"), cell(0, 1, "u1")])
        .unwrap_err();
    assert!(matches!(err, BrowserError::Client(ClientError::Api { .. })));
}

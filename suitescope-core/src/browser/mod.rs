//! Browsing view-model: explicit application state plus command handlers
//!
//! The [`Browser`] owns everything the main window displays - the current
//! host, the three selector lists, and the resource table - as plain data.
//! The view is a projection of this state; any UI binding layer attaches
//! its signals to the command handlers and repaints from the accessors.
//! Keeping orchestration here makes it testable without instantiating
//! widgets.
//!
//! State machine: Disconnected → Connected (kind list populated) →
//! KindSelected (instance + resource-kind lists populated) →
//! ResourcesLoaded (table populated). Re-selection at any populated state
//! re-enters that state and discards deeper state.

use crate::client::SuiteClient;
use crate::completion::CompletionStore;
use crate::error::{BrowserError, BrowserResult, ClientResult, SelectionError};
use crate::models::{
    AdapterInstance, AdapterKind, MetricsData, NAME_COLUMN, PropertiesData, ResourceKind,
    ResourcePage, UUID_COLUMN,
};

/// Factory producing a connected client from an entered hostname.
///
/// Injectable so tests can run the browser against
/// [`crate::testing::MockClient`].
pub type Connector = Box<dyn Fn(&str) -> ClientResult<Box<dyn SuiteClient>>>;

/// One selected table cell, addressed by `(row, column)` with its
/// displayed text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedCell {
    /// Row index in the resource table
    pub row: usize,
    /// Column index in the resource table
    pub column: usize,
    /// Displayed cell text
    pub text: String,
}

/// Payload for a resource details window
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceDetails {
    /// Window title: the resource display name
    pub title: String,
    /// Latest metric samples
    pub metrics: MetricsData,
    /// Configuration properties
    pub properties: PropertiesData,
}

/// Application state and command handlers for the main window
pub struct Browser {
    connector: Connector,
    store: CompletionStore,
    client: Option<Box<dyn SuiteClient>>,
    host: Option<String>,
    adapter_kinds: Vec<AdapterKind>,
    adapter_instances: Vec<AdapterInstance>,
    resource_kinds: Vec<ResourceKind>,
    resources: ResourcePage,
    completions: Vec<String>,
}

impl Browser {
    /// Creates a disconnected browser.
    ///
    /// Loads the completion snapshot from `store` immediately so the
    /// address bar can offer history before the first connect.
    #[must_use]
    pub fn new(connector: Connector, store: CompletionStore) -> Self {
        let completions = store.load();
        Self {
            connector,
            store,
            client: None,
            host: None,
            adapter_kinds: Vec::new(),
            adapter_instances: Vec::new(),
            resource_kinds: Vec::new(),
            resources: ResourcePage::default(),
            completions,
        }
    }

    // ========== Command handlers ==========

    /// Connects to `hostname` and populates the adapter-kind list.
    ///
    /// On success the hostname is appended to the completion list and the
    /// completion snapshot refreshed. A failed history write is logged and
    /// otherwise ignored - persistence must not undo a successful connect.
    ///
    /// # Errors
    ///
    /// [`ClientError::InvalidAddress`](crate::error::ClientError) for a
    /// malformed hostname, or the fetch failure from the adapter-kind
    /// query. In both cases the state stays pre-connect: selectors
    /// unpopulated, no client held.
    pub fn connect(&mut self, hostname: &str) -> BrowserResult<()> {
        let client = (self.connector)(hostname)?;

        let kinds = match client.adapter_kinds() {
            Ok(kinds) => kinds,
            Err(e) => {
                tracing::warn!(host = hostname, error = %e, "adapter kind fetch failed");
                return Err(e.into());
            }
        };

        tracing::info!(host = hostname, kinds = kinds.len(), "connected");

        self.client = Some(client);
        self.host = Some(hostname.trim().to_string());
        self.adapter_kinds = kinds;
        self.clear_kind_scoped_state();

        if let Err(e) = self.store.append(hostname.trim()) {
            tracing::warn!(error = %e, "could not append hostname to completion list");
        }
        self.completions = self.store.load();

        Ok(())
    }

    /// Handles an adapter-kind selection: fetches the adapter instances
    /// and resource kinds scoped to it and fully replaces both dependent
    /// lists, discarding the resource table.
    ///
    /// # Errors
    ///
    /// Fetch failures are reported instead of propagating unhandled; the
    /// dependent selectors and the table are cleared so no stale cascade
    /// state survives a failed fetch.
    pub fn select_adapter_kind(&mut self, index: usize) -> BrowserResult<()> {
        let kind_id = self
            .adapter_kinds
            .get(index)
            .map(|kind| kind.id.clone())
            .ok_or(BrowserError::StaleSelection)?;
        let client = self.client.as_ref().ok_or(BrowserError::NotConnected)?;

        self.adapter_instances.clear();
        self.resource_kinds.clear();
        self.resources = ResourcePage::default();

        let instances = client.adapter_instances(&kind_id)?;
        let resource_kinds = client.resource_kinds_by_adapter_kind(&kind_id)?;

        tracing::debug!(
            kind = %kind_id,
            instances = instances.len(),
            resource_kinds = resource_kinds.len(),
            "adapter kind selected"
        );

        self.adapter_instances = instances;
        self.resource_kinds = resource_kinds;
        Ok(())
    }

    /// Handles an adapter-instance selection: fetches the resources
    /// matching the instance and the currently selected resource kind and
    /// fully replaces the table (clear + rebuild, not incremental).
    ///
    /// # Errors
    ///
    /// [`BrowserError::StaleSelection`] when either index no longer maps
    /// to a known entry, otherwise the fetch failure. The table is left
    /// empty on failure.
    pub fn select_adapter_instance(
        &mut self,
        instance_index: usize,
        resource_kind_index: usize,
    ) -> BrowserResult<()> {
        let instance_id = self
            .adapter_instances
            .get(instance_index)
            .map(|instance| instance.id.clone())
            .ok_or(BrowserError::StaleSelection)?;
        let resource_kind_id = self
            .resource_kinds
            .get(resource_kind_index)
            .map(|kind| kind.id.clone())
            .ok_or(BrowserError::StaleSelection)?;
        let client = self.client.as_ref().ok_or(BrowserError::NotConnected)?;

        self.resources = ResourcePage::default();
        self.resources = client.resources(&instance_id, &resource_kind_id)?;

        tracing::debug!(
            instance = %instance_id,
            resource_kind = %resource_kind_id,
            rows = self.resources.rows.len(),
            "resource table rebuilt"
        );
        Ok(())
    }

    /// Handles a row activation (double-click): resolves the selection to
    /// exactly one resource and fetches its metrics and properties.
    ///
    /// The caller opens the returned payload as an independent top-level
    /// window titled with the resource name.
    ///
    /// # Errors
    ///
    /// [`SelectionError::MultipleRows`] when the selected cells span more
    /// than one row, [`SelectionError::MissingField`] when the row lacks a
    /// name or UUID, or the fetch failure from the detail queries.
    pub fn activate_selection(&self, cells: &[SelectedCell]) -> BrowserResult<ResourceDetails> {
        let client = self.client.as_ref().ok_or(BrowserError::NotConnected)?;

        let first = cells.first().ok_or(SelectionError::Empty)?;
        if cells.iter().any(|cell| cell.row != first.row) {
            return Err(SelectionError::MultipleRows.into());
        }

        let name = cells
            .iter()
            .find(|cell| cell.column == NAME_COLUMN)
            .map(|cell| cell.text.clone());
        let uuid = cells
            .iter()
            .find(|cell| cell.column == UUID_COLUMN)
            .map(|cell| cell.text.clone());
        let (Some(name), Some(uuid)) = (name, uuid) else {
            return Err(SelectionError::MissingField.into());
        };

        let metrics = client.metrics_by_resource_uuid(&uuid)?;
        let properties = client.properties_by_resource_uuid(&uuid)?;

        tracing::debug!(resource = %name, %uuid, "resource details fetched");

        Ok(ResourceDetails {
            title: name,
            metrics,
            properties,
        })
    }

    // ========== State accessors (view projection) ==========

    /// The connected host, if any
    #[must_use]
    pub fn host(&self) -> Option<&str> {
        self.host.as_deref()
    }

    /// True once a connect has succeeded
    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.client.is_some()
    }

    /// Current adapter-kind selector contents
    #[must_use]
    pub fn adapter_kinds(&self) -> &[AdapterKind] {
        &self.adapter_kinds
    }

    /// Current adapter-instance selector contents
    #[must_use]
    pub fn adapter_instances(&self) -> &[AdapterInstance] {
        &self.adapter_instances
    }

    /// Current resource-kind selector contents
    #[must_use]
    pub fn resource_kinds(&self) -> &[ResourceKind] {
        &self.resource_kinds
    }

    /// Current resource table contents
    #[must_use]
    pub fn resources(&self) -> &ResourcePage {
        &self.resources
    }

    /// Snapshot of the hostname history for the address bar
    #[must_use]
    pub fn completions(&self) -> &[String] {
        &self.completions
    }

    /// Discards everything scoped to an adapter-kind selection
    fn clear_kind_scoped_state(&mut self) {
        self.adapter_instances.clear();
        self.resource_kinds.clear();
        self.resources = ResourcePage::default();
    }
}

impl std::fmt::Debug for Browser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Browser")
            .field("host", &self.host)
            .field("connected", &self.client.is_some())
            .field("adapter_kinds", &self.adapter_kinds.len())
            .field("adapter_instances", &self.adapter_instances.len())
            .field("resource_kinds", &self.resource_kinds.len())
            .field("resource_rows", &self.resources.rows.len())
            .finish_non_exhaustive()
    }
}

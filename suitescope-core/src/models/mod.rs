//! Data models for the suite API entities shown in the browser
//!
//! All types are GUI-free and serializable. Adapter kinds, adapter
//! instances, resource kinds, and resources are ephemeral: fetched on
//! demand, discarded and replaced on each cascading selection change.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Column position of the resource display name in a [`ResourceRow`]
pub const NAME_COLUMN: usize = 0;

/// Column position of the resource UUID in a [`ResourceRow`]
pub const UUID_COLUMN: usize = 1;

/// A category of monitored system/plugin exposed by the server
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdapterKind {
    /// Human-readable label shown in the selector
    pub label: String,
    /// Opaque server-side identifier
    pub id: String,
}

/// A specific configured instance of an [`AdapterKind`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdapterInstance {
    /// Human-readable label shown in the selector
    pub label: String,
    /// Opaque server-side identifier
    pub id: String,
}

/// A category of monitored entity belonging to an [`AdapterKind`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceKind {
    /// Human-readable label shown in the selector
    pub label: String,
    /// Opaque server-side identifier
    pub id: String,
}

/// One row of the resource table.
///
/// Invariant: column 0 holds the display name and column 1 the UUID.
/// Detail lookup reads exactly those positions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceRow {
    /// Displayable cell values, in column order
    pub cells: Vec<String>,
}

impl ResourceRow {
    /// Creates a row from its cell values
    #[must_use]
    pub fn new(cells: Vec<String>) -> Self {
        Self { cells }
    }

    /// Returns the cell at `column`, if present
    #[must_use]
    pub fn cell(&self, column: usize) -> Option<&str> {
        self.cells.get(column).map(String::as_str)
    }

    /// Returns the resource display name (column 0), if present
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.cell(NAME_COLUMN)
    }

    /// Returns the resource UUID (column 1), if present
    #[must_use]
    pub fn uuid(&self) -> Option<&str> {
        self.cell(UUID_COLUMN)
    }
}

/// The resource table contents: header labels plus rows.
///
/// The table view and clipboard serialization both need the headers, so
/// they travel with the rows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourcePage {
    /// Column header labels, in column order
    pub columns: Vec<String>,
    /// Resource rows, in server order
    pub rows: Vec<ResourceRow>,
}

impl ResourcePage {
    /// Creates a page from headers and rows
    #[must_use]
    pub fn new(columns: Vec<String>, rows: Vec<ResourceRow>) -> Self {
        Self { columns, rows }
    }

    /// True when the page holds no rows
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// A single latest-value metric sample for a resource
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricSample {
    /// Stat key (e.g. "cpu|usage_average")
    pub key: String,
    /// Latest reported value
    pub value: f64,
    /// When the sample was reported, if the server included a timestamp
    pub timestamp: Option<DateTime<Utc>>,
}

/// All latest metric samples for one resource
pub type MetricsData = Vec<MetricSample>;

/// A single configuration property of a resource
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Property {
    /// Property name (e.g. "config|hostname")
    pub name: String,
    /// Property value
    pub value: String,
}

/// All properties for one resource
pub type PropertiesData = Vec<Property>;

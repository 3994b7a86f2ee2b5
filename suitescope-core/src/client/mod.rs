//! Client contract for the monitoring/management server
//!
//! The browser only ever talks to the server through the [`SuiteClient`]
//! trait, so the GUI can be exercised against the mock in
//! [`crate::testing`] without a network.

mod address;
mod http;

pub use address::validate_hostname;
pub use http::HttpClient;

use crate::error::ClientResult;
use crate::models::{
    AdapterInstance, AdapterKind, MetricsData, PropertiesData, ResourceKind, ResourcePage,
};

/// Query operations exposed by a connected suite API server.
///
/// All calls are synchronous and blocking; the UI runs them on its own
/// thread in response to discrete user actions.
pub trait SuiteClient {
    /// Lists all adapter kinds known to the server
    fn adapter_kinds(&self) -> ClientResult<Vec<AdapterKind>>;

    /// Lists the configured adapter instances of one adapter kind
    fn adapter_instances(&self, kind_id: &str) -> ClientResult<Vec<AdapterInstance>>;

    /// Lists the resource kinds belonging to one adapter kind
    fn resource_kinds_by_adapter_kind(&self, kind_id: &str) -> ClientResult<Vec<ResourceKind>>;

    /// Lists the resources matching an adapter instance and resource kind
    fn resources(&self, instance_id: &str, resource_kind_id: &str) -> ClientResult<ResourcePage>;

    /// Fetches the latest metric samples for one resource
    fn metrics_by_resource_uuid(&self, uuid: &str) -> ClientResult<MetricsData>;

    /// Fetches the configuration properties for one resource
    fn properties_by_resource_uuid(&self, uuid: &str) -> ClientResult<PropertiesData>;
}

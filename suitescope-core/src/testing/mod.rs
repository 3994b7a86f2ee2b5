//! Mock client for exercising the browser without a server
//!
//! [`MockClient`] serves canned data for every [`SuiteClient`] operation
//! and can be scripted to fail any single operation, which is how the
//! error paths of the browser command handlers are tested.

use std::collections::HashMap;

use crate::client::{SuiteClient, validate_hostname};
use crate::error::{ClientError, ClientResult};
use crate::models::{
    AdapterInstance, AdapterKind, MetricSample, MetricsData, PropertiesData, Property,
    ResourceKind, ResourcePage, ResourceRow,
};

/// Operation to fail when scripted via [`MockClient::with_failure`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockFailure {
    /// Fail `adapter_kinds`
    AdapterKinds,
    /// Fail `adapter_instances`
    AdapterInstances,
    /// Fail `resource_kinds_by_adapter_kind`
    ResourceKinds,
    /// Fail `resources`
    Resources,
    /// Fail `metrics_by_resource_uuid`
    Metrics,
    /// Fail `properties_by_resource_uuid`
    Properties,
}

/// In-memory [`SuiteClient`] with canned data
#[derive(Debug, Clone, Default)]
pub struct MockClient {
    adapter_kinds: Vec<AdapterKind>,
    instances_by_kind: HashMap<String, Vec<AdapterInstance>>,
    resource_kinds_by_kind: HashMap<String, Vec<ResourceKind>>,
    resources_by_query: HashMap<(String, String), ResourcePage>,
    metrics_by_uuid: HashMap<String, MetricsData>,
    properties_by_uuid: HashMap<String, PropertiesData>,
    failure: Option<MockFailure>,
}

impl MockClient {
    /// Creates an empty mock
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a mock pre-populated with one small but complete dataset:
    /// one adapter kind ("vCenter Adapter"/`VMWARE`), one instance, one
    /// resource kind, two resources with metrics and properties.
    #[must_use]
    pub fn with_sample_data() -> Self {
        let mut mock = Self::new();
        mock.adapter_kinds = vec![AdapterKind {
            label: "vCenter Adapter".into(),
            id: "VMWARE".into(),
        }];
        mock.instances_by_kind.insert(
            "VMWARE".into(),
            vec![AdapterInstance {
                label: "vcenter-01".into(),
                id: "inst-1".into(),
            }],
        );
        mock.resource_kinds_by_kind.insert(
            "VMWARE".into(),
            vec![ResourceKind {
                label: "Virtual Machine".into(),
                id: "VirtualMachine".into(),
            }],
        );
        mock.resources_by_query.insert(
            ("inst-1".into(), "VirtualMachine".into()),
            ResourcePage::new(
                vec!["Name".into(), "UUID".into()],
                vec![
                    ResourceRow::new(vec!["alpha".into(), "u1".into()]),
                    ResourceRow::new(vec!["beta".into(), "u2".into()]),
                ],
            ),
        );
        mock.metrics_by_uuid.insert(
            "u1".into(),
            vec![MetricSample {
                key: "cpu|usage_average".into(),
                value: 42.5,
                timestamp: None,
            }],
        );
        mock.properties_by_uuid.insert(
            "u1".into(),
            vec![Property {
                name: "config|hostname".into(),
                value: "alpha.example.com".into(),
            }],
        );
        mock
    }

    /// Scripts one operation to fail with an API error
    #[must_use]
    pub fn with_failure(mut self, failure: MockFailure) -> Self {
        self.failure = Some(failure);
        self
    }

    /// Wraps this mock in a [`crate::browser::Connector`] that validates
    /// the hostname like the real client does
    #[must_use]
    pub fn into_connector(self) -> crate::browser::Connector {
        Box::new(move |hostname| {
            validate_hostname(hostname)?;
            Ok(Box::new(self.clone()) as Box<dyn SuiteClient>)
        })
    }

    fn check(&self, op: MockFailure, endpoint: &str) -> ClientResult<()> {
        if self.failure == Some(op) {
            return Err(ClientError::Api {
                status: 500,
                endpoint: endpoint.to_string(),
            });
        }
        Ok(())
    }
}

impl SuiteClient for MockClient {
    fn adapter_kinds(&self) -> ClientResult<Vec<AdapterKind>> {
        self.check(MockFailure::AdapterKinds, "/adapterkinds")?;
        Ok(self.adapter_kinds.clone())
    }

    fn adapter_instances(&self, kind_id: &str) -> ClientResult<Vec<AdapterInstance>> {
        self.check(MockFailure::AdapterInstances, "/adapters")?;
        Ok(self
            .instances_by_kind
            .get(kind_id)
            .cloned()
            .unwrap_or_default())
    }

    fn resource_kinds_by_adapter_kind(&self, kind_id: &str) -> ClientResult<Vec<ResourceKind>> {
        self.check(MockFailure::ResourceKinds, "/resourcekinds")?;
        Ok(self
            .resource_kinds_by_kind
            .get(kind_id)
            .cloned()
            .unwrap_or_default())
    }

    fn resources(&self, instance_id: &str, resource_kind_id: &str) -> ClientResult<ResourcePage> {
        self.check(MockFailure::Resources, "/resources")?;
        Ok(self
            .resources_by_query
            .get(&(instance_id.to_string(), resource_kind_id.to_string()))
            .cloned()
            .unwrap_or_default())
    }

    fn metrics_by_resource_uuid(&self, uuid: &str) -> ClientResult<MetricsData> {
        self.check(MockFailure::Metrics, "/stats/latest")?;
        Ok(self.metrics_by_uuid.get(uuid).cloned().unwrap_or_default())
    }

    fn properties_by_resource_uuid(&self, uuid: &str) -> ClientResult<PropertiesData> {
        self.check(MockFailure::Properties, "/properties")?;
        Ok(self
            .properties_by_uuid
            .get(uuid)
            .cloned()
            .unwrap_or_default())
    }
}

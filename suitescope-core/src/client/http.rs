//! Blocking HTTP implementation of [`SuiteClient`]
//!
//! Talks to the suite REST API (`https://<host>/suite-api/api/...`) and
//! maps the JSON payloads onto the crate's models. Calls are synchronous;
//! the UI issues them one at a time in response to user actions.

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde_json::Value;

use super::{SuiteClient, validate_hostname};
use crate::error::{ClientError, ClientResult};
use crate::models::{
    AdapterInstance, AdapterKind, MetricSample, MetricsData, PropertiesData, Property,
    ResourceKind, ResourcePage, ResourceRow,
};

/// Request timeout for all API calls
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Columns of the resource table as served by [`HttpClient::resources`].
/// Name and UUID must stay at positions 0 and 1 for detail lookup.
const RESOURCE_COLUMNS: [&str; 4] = ["Name", "UUID", "Adapter Kind", "Resource Kind"];

/// A connected suite API client over blocking HTTP
#[derive(Debug)]
pub struct HttpClient {
    base: String,
    http: reqwest::blocking::Client,
}

impl HttpClient {
    /// Connects to the suite API on `hostname`.
    ///
    /// The hostname is validated before any I/O; network problems only
    /// surface on the first query, matching the address-bar flow where a
    /// malformed address must be reported without touching the network.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidAddress`] for a malformed hostname, or
    /// [`ClientError::Http`] if the HTTP client cannot be built.
    pub fn connect(hostname: &str, port: u16, verify_tls: bool) -> ClientResult<Self> {
        let host = validate_hostname(hostname)?;

        let http = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .danger_accept_invalid_certs(!verify_tls)
            .build()?;

        tracing::info!(host = %host, port, "suite API client created");

        Ok(Self {
            base: format!("https://{host}:{port}/suite-api/api"),
            http,
        })
    }

    /// Issues a GET and returns the parsed JSON body
    fn get_json(&self, endpoint: &str) -> ClientResult<Value> {
        let url = format!("{}{endpoint}", self.base);
        tracing::debug!(%url, "suite API request");

        let response = self
            .http
            .get(&url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Api {
                status: status.as_u16(),
                endpoint: endpoint.to_string(),
            });
        }

        Ok(response.json()?)
    }

    /// Extracts `(label, id)` pairs from an array of objects, reading the
    /// label from `label_key` and the identifier from `id_key`
    fn labeled_pairs(
        body: &Value,
        endpoint: &str,
        array_key: &str,
        label_key: &str,
        id_key: &str,
    ) -> ClientResult<Vec<(String, String)>> {
        let items = body
            .get(array_key)
            .and_then(Value::as_array)
            .ok_or_else(|| ClientError::Parse {
                endpoint: endpoint.to_string(),
                reason: format!("missing '{array_key}' array"),
            })?;

        Ok(items
            .iter()
            .filter_map(|item| {
                let label = item.get(label_key).and_then(Value::as_str)?;
                let id = item.get(id_key).and_then(Value::as_str)?;
                Some((label.to_string(), id.to_string()))
            })
            .collect())
    }
}

impl SuiteClient for HttpClient {
    fn adapter_kinds(&self) -> ClientResult<Vec<AdapterKind>> {
        let endpoint = "/adapterkinds";
        let body = self.get_json(endpoint)?;
        let pairs = Self::labeled_pairs(&body, endpoint, "adapter-kind", "name", "key")?;
        Ok(pairs
            .into_iter()
            .map(|(label, id)| AdapterKind { label, id })
            .collect())
    }

    fn adapter_instances(&self, kind_id: &str) -> ClientResult<Vec<AdapterInstance>> {
        let endpoint = format!("/adapters?adapterKindKey={kind_id}");
        let body = self.get_json(&endpoint)?;

        let items = body
            .get("adapterInstancesInfoDto")
            .and_then(Value::as_array)
            .ok_or_else(|| ClientError::Parse {
                endpoint: endpoint.clone(),
                reason: "missing 'adapterInstancesInfoDto' array".into(),
            })?;

        Ok(items
            .iter()
            .filter_map(|item| {
                let label = item
                    .pointer("/resourceKey/name")
                    .and_then(Value::as_str)?;
                let id = item.get("id").and_then(Value::as_str)?;
                Some(AdapterInstance {
                    label: label.to_string(),
                    id: id.to_string(),
                })
            })
            .collect())
    }

    fn resource_kinds_by_adapter_kind(&self, kind_id: &str) -> ClientResult<Vec<ResourceKind>> {
        let endpoint = format!("/adapterkinds/{kind_id}/resourcekinds");
        let body = self.get_json(&endpoint)?;
        let pairs = Self::labeled_pairs(&body, &endpoint, "resource-kind", "name", "key")?;
        Ok(pairs
            .into_iter()
            .map(|(label, id)| ResourceKind { label, id })
            .collect())
    }

    fn resources(&self, instance_id: &str, resource_kind_id: &str) -> ClientResult<ResourcePage> {
        let endpoint =
            format!("/resources?adapterInstanceId={instance_id}&resourceKind={resource_kind_id}");
        let body = self.get_json(&endpoint)?;

        let items = body
            .get("resourceList")
            .and_then(Value::as_array)
            .ok_or_else(|| ClientError::Parse {
                endpoint: endpoint.clone(),
                reason: "missing 'resourceList' array".into(),
            })?;

        let rows = items
            .iter()
            .filter_map(|item| {
                let name = item.pointer("/resourceKey/name").and_then(Value::as_str)?;
                let uuid = item.get("identifier").and_then(Value::as_str)?;
                let adapter_kind = item
                    .pointer("/resourceKey/adapterKindKey")
                    .and_then(Value::as_str)
                    .unwrap_or_default();
                let resource_kind = item
                    .pointer("/resourceKey/resourceKindKey")
                    .and_then(Value::as_str)
                    .unwrap_or_default();
                Some(ResourceRow::new(vec![
                    name.to_string(),
                    uuid.to_string(),
                    adapter_kind.to_string(),
                    resource_kind.to_string(),
                ]))
            })
            .collect();

        Ok(ResourcePage::new(
            RESOURCE_COLUMNS.iter().map(ToString::to_string).collect(),
            rows,
        ))
    }

    fn metrics_by_resource_uuid(&self, uuid: &str) -> ClientResult<MetricsData> {
        let endpoint = format!("/resources/{uuid}/stats/latest");
        let body = self.get_json(&endpoint)?;

        let stats = body
            .pointer("/values/0/stat-list/stat")
            .and_then(Value::as_array)
            .cloned()
            .unwrap_or_default();

        Ok(stats
            .iter()
            .filter_map(|stat| {
                let key = stat.pointer("/statKey/key").and_then(Value::as_str)?;
                let value = stat.pointer("/data/0").and_then(Value::as_f64)?;
                let timestamp = stat
                    .pointer("/timestamps/0")
                    .and_then(Value::as_i64)
                    .and_then(millis_to_datetime);
                Some(MetricSample {
                    key: key.to_string(),
                    value,
                    timestamp,
                })
            })
            .collect())
    }

    fn properties_by_resource_uuid(&self, uuid: &str) -> ClientResult<PropertiesData> {
        let endpoint = format!("/resources/{uuid}/properties");
        let body = self.get_json(&endpoint)?;

        let items = body
            .get("property")
            .and_then(Value::as_array)
            .cloned()
            .unwrap_or_default();

        Ok(items
            .iter()
            .filter_map(|item| {
                let name = item.get("name").and_then(Value::as_str)?;
                let value = item.get("value").and_then(Value::as_str)?;
                Some(Property {
                    name: name.to_string(),
                    value: value.to_string(),
                })
            })
            .collect())
    }
}

/// Converts a millisecond epoch timestamp to a UTC datetime
fn millis_to_datetime(millis: i64) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp_millis(millis)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connect_rejects_malformed_hostname_before_io() {
        let err = HttpClient::connect("bad host", 443, true).unwrap_err();
        assert!(matches!(err, ClientError::InvalidAddress(_)));
    }

    #[test]
    fn connect_builds_base_url_from_host_and_port() {
        let client = HttpClient::connect("ops.example.com", 8443, true).unwrap();
        assert_eq!(client.base, "https://ops.example.com:8443/suite-api/api");
    }

    #[test]
    fn labeled_pairs_requires_the_array() {
        let body = serde_json::json!({ "something-else": [] });
        let err =
            HttpClient::labeled_pairs(&body, "/adapterkinds", "adapter-kind", "name", "key")
                .unwrap_err();
        assert!(matches!(err, ClientError::Parse { .. }));
    }

    #[test]
    fn labeled_pairs_skips_entries_missing_fields() {
        let body = serde_json::json!({
            "adapter-kind": [
                { "name": "vCenter Adapter", "key": "VMWARE" },
                { "name": "no key here" },
                { "key": "NO_NAME" },
            ]
        });
        let pairs =
            HttpClient::labeled_pairs(&body, "/adapterkinds", "adapter-kind", "name", "key")
                .unwrap();
        assert_eq!(pairs, vec![("vCenter Adapter".into(), "VMWARE".into())]);
    }

    #[test]
    fn millis_conversion_roundtrips() {
        let ts = millis_to_datetime(1_700_000_000_000).unwrap();
        assert_eq!(ts.timestamp_millis(), 1_700_000_000_000);
    }
}

//! Fleet indexing: what the registry index covers, searching it, and
//! aggregate statistics over a query.

use iot_model_types::{Shape, service_enum};
use std::collections::BTreeMap;

service_enum! {
    pub enum ThingIndexingMode {
        Off = "OFF",
        Registry = "REGISTRY",
        RegistryAndShadow = "REGISTRY_AND_SHADOW",
    }
}

service_enum! {
    pub enum ThingConnectivityIndexingMode {
        Off = "OFF",
        Status = "STATUS",
    }
}

service_enum! {
    pub enum ThingGroupIndexingMode {
        Off = "OFF",
        On = "ON",
    }
}

service_enum! {
    pub enum DeviceDefenderIndexingMode {
        Off = "OFF",
        Violations = "VIOLATIONS",
    }
}

service_enum! {
    pub enum NamedShadowIndexingMode {
        Off = "OFF",
        On = "ON",
    }
}

service_enum! {
    pub enum FieldType {
        Number = "Number",
        String = "String",
        Boolean = "Boolean",
    }
}

/// An indexed field and its data type.
#[derive(Debug, Clone, Default, Shape)]
pub struct Field {
    name: Option<String>,
    #[shape(rename = "type", enumeration = "FieldType")]
    field_type: Option<String>,
}

/// Named shadows and geolocations to index.
#[derive(Debug, Clone, Default, Shape)]
pub struct IndexingFilter {
    /// Named shadows to index, when named shadow indexing is on.
    named_shadow_names: Option<Vec<String>>,
}

/// Fleet indexing settings for things.
#[derive(Debug, Clone, Default, Shape)]
pub struct ThingIndexingConfiguration {
    #[shape(enumeration = "ThingIndexingMode")]
    thing_indexing_mode: Option<String>,
    #[shape(enumeration = "ThingConnectivityIndexingMode")]
    thing_connectivity_indexing_mode: Option<String>,
    #[shape(enumeration = "DeviceDefenderIndexingMode")]
    device_defender_indexing_mode: Option<String>,
    #[shape(enumeration = "NamedShadowIndexingMode")]
    named_shadow_indexing_mode: Option<String>,
    managed_fields: Option<Vec<Field>>,
    custom_fields: Option<Vec<Field>>,
    filter: Option<IndexingFilter>,
}

/// Fleet indexing settings for thing groups.
#[derive(Debug, Clone, Default, Shape)]
pub struct ThingGroupIndexingConfiguration {
    #[shape(enumeration = "ThingGroupIndexingMode")]
    thing_group_indexing_mode: Option<String>,
    managed_fields: Option<Vec<Field>>,
    custom_fields: Option<Vec<Field>>,
}

/// Input of `GetIndexingConfiguration`.
#[derive(Debug, Clone, Default, Shape)]
pub struct GetIndexingConfigurationRequest {}

/// Output of `GetIndexingConfiguration`.
#[derive(Debug, Clone, Default, Shape)]
pub struct GetIndexingConfigurationResult {
    thing_indexing_configuration: Option<ThingIndexingConfiguration>,
    thing_group_indexing_configuration: Option<ThingGroupIndexingConfiguration>,
}

/// Input of `UpdateIndexingConfiguration`.
#[derive(Debug, Clone, Default, Shape)]
pub struct UpdateIndexingConfigurationRequest {
    thing_indexing_configuration: Option<ThingIndexingConfiguration>,
    thing_group_indexing_configuration: Option<ThingGroupIndexingConfiguration>,
}

/// Output of `UpdateIndexingConfiguration`.
#[derive(Debug, Clone, Default, Shape)]
pub struct UpdateIndexingConfigurationResult {}

/// Input of `SearchIndex`.
#[derive(Debug, Clone, Default, Shape)]
pub struct SearchIndexRequest {
    #[shape(min_length = 1, max_length = 128, pattern = "[a-zA-Z0-9:_-]+")]
    index_name: Option<String>,
    #[shape(min_length = 1)]
    query_string: Option<String>,
    next_token: Option<String>,
    #[shape(min = 1, max = 500)]
    max_results: Option<i32>,
    query_version: Option<String>,
}

/// Last known connection state of a thing.
#[derive(Debug, Clone, Default, Shape)]
pub struct ThingConnectivity {
    connected: Option<bool>,
    /// Epoch milliseconds of the last connect or disconnect.
    timestamp: Option<i64>,
    disconnect_reason: Option<String>,
}

/// One thing as returned by an index search.
#[derive(Debug, Clone, Default, Shape)]
pub struct ThingDocument {
    thing_name: Option<String>,
    thing_id: Option<String>,
    thing_type_name: Option<String>,
    thing_group_names: Option<Vec<String>>,
    attributes: Option<BTreeMap<String, String>>,
    /// Shadow document as a JSON string.
    shadow: Option<String>,
    device_defender: Option<String>,
    connectivity: Option<ThingConnectivity>,
}

/// Output of `SearchIndex`.
#[derive(Debug, Clone, Default, Shape)]
pub struct SearchIndexResult {
    next_token: Option<String>,
    things: Option<Vec<ThingDocument>>,
}

/// Aggregates computed over a numeric index field.
#[derive(Debug, Clone, Default, Shape)]
pub struct Statistics {
    count: Option<i32>,
    average: Option<f64>,
    sum: Option<f64>,
    minimum: Option<f64>,
    maximum: Option<f64>,
    sum_of_squares: Option<f64>,
    variance: Option<f64>,
    std_deviation: Option<f64>,
}

/// Input of `GetStatistics`.
#[derive(Debug, Clone, Default, Shape)]
pub struct GetStatisticsRequest {
    #[shape(min_length = 1, max_length = 128, pattern = "[a-zA-Z0-9:_-]+")]
    index_name: Option<String>,
    #[shape(min_length = 1)]
    query_string: Option<String>,
    aggregation_field: Option<String>,
    query_version: Option<String>,
}

/// Output of `GetStatistics`.
#[derive(Debug, Clone, Default, Shape)]
pub struct GetStatisticsResult {
    statistics: Option<Statistics>,
}

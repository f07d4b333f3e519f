//! Thing registry: create, describe, update, delete and list things, and
//! attach principals to them.

use iot_model_types::Shape;
use std::collections::BTreeMap;

/// Searchable attributes attached to a thing.
#[derive(Debug, Clone, Default, Shape)]
pub struct AttributePayload {
    attributes: Option<BTreeMap<String, String>>,
    /// Merge with the stored attributes instead of replacing them.
    merge: Option<bool>,
}

/// One entry in a thing listing.
#[derive(Debug, Clone, Default, Shape)]
pub struct ThingAttribute {
    thing_name: Option<String>,
    thing_type_name: Option<String>,
    thing_arn: Option<String>,
    attributes: Option<BTreeMap<String, String>>,
    version: Option<i64>,
}

/// Input of `CreateThing`.
#[derive(Debug, Clone, Default, Shape)]
pub struct CreateThingRequest {
    #[shape(min_length = 1, max_length = 128, pattern = "[a-zA-Z0-9:_-]+")]
    thing_name: Option<String>,
    #[shape(min_length = 1, max_length = 128, pattern = "[a-zA-Z0-9:_-]+")]
    thing_type_name: Option<String>,
    attribute_payload: Option<AttributePayload>,
    #[shape(min_length = 1, max_length = 128, pattern = "[a-zA-Z0-9:_-]+")]
    billing_group_name: Option<String>,
}

/// Output of `CreateThing`.
#[derive(Debug, Clone, Default, Shape)]
pub struct CreateThingResult {
    thing_name: Option<String>,
    thing_arn: Option<String>,
    thing_id: Option<String>,
}

/// Input of `DescribeThing`.
#[derive(Debug, Clone, Default, Shape)]
pub struct DescribeThingRequest {
    #[shape(min_length = 1, max_length = 128, pattern = "[a-zA-Z0-9:_-]+")]
    thing_name: Option<String>,
}

/// Output of `DescribeThing`.
#[derive(Debug, Clone, Default, Shape)]
pub struct DescribeThingResult {
    default_client_id: Option<String>,
    thing_name: Option<String>,
    thing_id: Option<String>,
    thing_arn: Option<String>,
    thing_type_name: Option<String>,
    attributes: Option<BTreeMap<String, String>>,
    version: Option<i64>,
    billing_group_name: Option<String>,
}

/// Input of `UpdateThing`.
#[derive(Debug, Clone, Default, Shape)]
pub struct UpdateThingRequest {
    #[shape(min_length = 1, max_length = 128, pattern = "[a-zA-Z0-9:_-]+")]
    thing_name: Option<String>,
    thing_type_name: Option<String>,
    attribute_payload: Option<AttributePayload>,
    /// Optimistic-locking guard; the update is rejected on mismatch.
    expected_version: Option<i64>,
    remove_thing_type: Option<bool>,
}

/// Output of `UpdateThing`.
#[derive(Debug, Clone, Default, Shape)]
pub struct UpdateThingResult {}

/// Input of `DeleteThing`.
#[derive(Debug, Clone, Default, Shape)]
pub struct DeleteThingRequest {
    #[shape(min_length = 1, max_length = 128, pattern = "[a-zA-Z0-9:_-]+")]
    thing_name: Option<String>,
    expected_version: Option<i64>,
}

/// Output of `DeleteThing`.
#[derive(Debug, Clone, Default, Shape)]
pub struct DeleteThingResult {}

/// Input of `ListThings`.
#[derive(Debug, Clone, Default, Shape)]
pub struct ListThingsRequest {
    next_token: Option<String>,
    #[shape(min = 1, max = 250)]
    max_results: Option<i32>,
    #[shape(max_length = 128, pattern = "[a-zA-Z0-9_.,@/:#-]+")]
    attribute_name: Option<String>,
    #[shape(max_length = 800, pattern = "[a-zA-Z0-9_.,@/:#-]*")]
    attribute_value: Option<String>,
    thing_type_name: Option<String>,
    use_prefix_attribute_value: Option<bool>,
}

/// Output of `ListThings`.
#[derive(Debug, Clone, Default, Shape)]
pub struct ListThingsResult {
    things: Option<Vec<ThingAttribute>>,
    next_token: Option<String>,
}

/// Input of `AttachThingPrincipal`.
#[derive(Debug, Clone, Default, Shape)]
pub struct AttachThingPrincipalRequest {
    #[shape(min_length = 1, max_length = 128, pattern = "[a-zA-Z0-9:_-]+")]
    thing_name: Option<String>,
    /// Certificate ARN or Cognito identity.
    principal: Option<String>,
}

/// Output of `AttachThingPrincipal`.
#[derive(Debug, Clone, Default, Shape)]
pub struct AttachThingPrincipalResult {}

/// Input of `DetachThingPrincipal`.
#[derive(Debug, Clone, Default, Shape)]
pub struct DetachThingPrincipalRequest {
    #[shape(min_length = 1, max_length = 128, pattern = "[a-zA-Z0-9:_-]+")]
    thing_name: Option<String>,
    principal: Option<String>,
}

/// Output of `DetachThingPrincipal`.
#[derive(Debug, Clone, Default, Shape)]
pub struct DetachThingPrincipalResult {}

/// Input of `ListThingPrincipals`.
#[derive(Debug, Clone, Default, Shape)]
pub struct ListThingPrincipalsRequest {
    next_token: Option<String>,
    #[shape(min = 1, max = 250)]
    max_results: Option<i32>,
    thing_name: Option<String>,
}

/// Output of `ListThingPrincipals`.
#[derive(Debug, Clone, Default, Shape)]
pub struct ListThingPrincipalsResult {
    principals: Option<Vec<String>>,
    next_token: Option<String>,
}

/// Input of `ListPrincipalThings`.
#[derive(Debug, Clone, Default, Shape)]
pub struct ListPrincipalThingsRequest {
    next_token: Option<String>,
    #[shape(min = 1, max = 250)]
    max_results: Option<i32>,
    principal: Option<String>,
}

/// Output of `ListPrincipalThings`.
#[derive(Debug, Clone, Default, Shape)]
pub struct ListPrincipalThingsResult {
    things: Option<Vec<String>>,
    next_token: Option<String>,
}

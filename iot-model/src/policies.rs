//! Authorization policies and their versions, plus account-level logging
//! options and endpoint discovery.

use crate::common::{LogLevel, Tag};
use iot_model_types::{Shape, Timestamp};

/// One entry in a policy listing.
#[derive(Debug, Clone, Default, Shape)]
pub struct Policy {
    #[shape(min_length = 1, max_length = 128, pattern = r"[\w+=,.@-]+")]
    policy_name: Option<String>,
    policy_arn: Option<String>,
}

/// One entry in a policy version listing.
#[derive(Debug, Clone, Default, Shape)]
pub struct PolicyVersion {
    #[shape(pattern = "[0-9]+")]
    version_id: Option<String>,
    is_default_version: Option<bool>,
    create_date: Option<Timestamp>,
}

/// Input of `CreatePolicy`.
#[derive(Debug, Clone, Default, Shape)]
pub struct CreatePolicyRequest {
    #[shape(min_length = 1, max_length = 128, pattern = r"[\w+=,.@-]+")]
    policy_name: Option<String>,
    /// JSON policy document.
    #[shape(max_length = 404600, pattern = r"[\s\S]*")]
    policy_document: Option<String>,
    tags: Option<Vec<Tag>>,
}

/// Output of `CreatePolicy`.
#[derive(Debug, Clone, Default, Shape)]
pub struct CreatePolicyResult {
    policy_name: Option<String>,
    policy_arn: Option<String>,
    policy_document: Option<String>,
    policy_version_id: Option<String>,
}

/// Input of `GetPolicy`.
#[derive(Debug, Clone, Default, Shape)]
pub struct GetPolicyRequest {
    #[shape(min_length = 1, max_length = 128, pattern = r"[\w+=,.@-]+")]
    policy_name: Option<String>,
}

/// Output of `GetPolicy`.
#[derive(Debug, Clone, Default, Shape)]
pub struct GetPolicyResult {
    policy_name: Option<String>,
    policy_arn: Option<String>,
    policy_document: Option<String>,
    default_version_id: Option<String>,
    creation_date: Option<Timestamp>,
    last_modified_date: Option<Timestamp>,
    generation_id: Option<String>,
}

/// Input of `DeletePolicy`.
#[derive(Debug, Clone, Default, Shape)]
pub struct DeletePolicyRequest {
    #[shape(min_length = 1, max_length = 128, pattern = r"[\w+=,.@-]+")]
    policy_name: Option<String>,
}

/// Input of `CreatePolicyVersion`.
#[derive(Debug, Clone, Default, Shape)]
pub struct CreatePolicyVersionRequest {
    #[shape(min_length = 1, max_length = 128, pattern = r"[\w+=,.@-]+")]
    policy_name: Option<String>,
    #[shape(max_length = 404600, pattern = r"[\s\S]*")]
    policy_document: Option<String>,
    /// Make the new version the default; attached principals pick it up.
    set_as_default: Option<bool>,
}

/// Output of `CreatePolicyVersion`.
#[derive(Debug, Clone, Default, Shape)]
pub struct CreatePolicyVersionResult {
    policy_arn: Option<String>,
    policy_document: Option<String>,
    policy_version_id: Option<String>,
    is_default_version: Option<bool>,
}

/// Input of `ListPolicyVersions`.
#[derive(Debug, Clone, Default, Shape)]
pub struct ListPolicyVersionsRequest {
    #[shape(min_length = 1, max_length = 128, pattern = r"[\w+=,.@-]+")]
    policy_name: Option<String>,
}

/// Output of `ListPolicyVersions`.
#[derive(Debug, Clone, Default, Shape)]
pub struct ListPolicyVersionsResult {
    policy_versions: Option<Vec<PolicyVersion>>,
}

/// Input of `SetDefaultPolicyVersion`.
#[derive(Debug, Clone, Default, Shape)]
pub struct SetDefaultPolicyVersionRequest {
    #[shape(min_length = 1, max_length = 128, pattern = r"[\w+=,.@-]+")]
    policy_name: Option<String>,
    #[shape(pattern = "[0-9]+")]
    policy_version_id: Option<String>,
}

/// Input of `AttachPrincipalPolicy`.
#[derive(Debug, Clone, Default, Shape)]
pub struct AttachPrincipalPolicyRequest {
    #[shape(min_length = 1, max_length = 128, pattern = r"[\w+=,.@-]+")]
    policy_name: Option<String>,
    principal: Option<String>,
}

/// Input of `DetachPrincipalPolicy`.
#[derive(Debug, Clone, Default, Shape)]
pub struct DetachPrincipalPolicyRequest {
    #[shape(min_length = 1, max_length = 128, pattern = r"[\w+=,.@-]+")]
    policy_name: Option<String>,
    principal: Option<String>,
}

/// Input of `ListPolicies`.
#[derive(Debug, Clone, Default, Shape)]
pub struct ListPoliciesRequest {
    #[shape(pattern = "[A-Za-z0-9+/]+={0,2}")]
    marker: Option<String>,
    #[shape(min = 1, max = 250)]
    page_size: Option<i32>,
    ascending_order: Option<bool>,
}

/// Output of `ListPolicies`.
#[derive(Debug, Clone, Default, Shape)]
pub struct ListPoliciesResult {
    policies: Option<Vec<Policy>>,
    next_marker: Option<String>,
}

/// Service logging role and level.
#[derive(Debug, Clone, Default, Shape)]
pub struct LoggingOptionsPayload {
    role_arn: Option<String>,
    #[shape(enumeration = "LogLevel")]
    log_level: Option<String>,
}

/// Input of `SetLoggingOptions`.
#[derive(Debug, Clone, Default, Shape)]
pub struct SetLoggingOptionsRequest {
    logging_options_payload: Option<LoggingOptionsPayload>,
}

/// Input of `GetLoggingOptions`.
#[derive(Debug, Clone, Default, Shape)]
pub struct GetLoggingOptionsRequest {}

/// Output of `GetLoggingOptions`.
#[derive(Debug, Clone, Default, Shape)]
pub struct GetLoggingOptionsResult {
    role_arn: Option<String>,
    #[shape(enumeration = "LogLevel")]
    log_level: Option<String>,
}

/// Input of `DescribeEndpoint`.
#[derive(Debug, Clone, Default, Shape)]
pub struct DescribeEndpointRequest {
    /// `iot:Data`, `iot:Data-ATS`, `iot:CredentialProvider` or `iot:Jobs`.
    #[shape(max_length = 128)]
    endpoint_type: Option<String>,
}

/// Output of `DescribeEndpoint`.
#[derive(Debug, Clone, Default, Shape)]
pub struct DescribeEndpointResult {
    endpoint_address: Option<String>,
}

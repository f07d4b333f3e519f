//! Audit mitigation actions: reusable remediation steps and the tasks that
//! apply them to audit findings.

use crate::common::{LogLevel, Tag};
use iot_model_types::{Shape, Timestamp, service_enum};
use std::collections::BTreeMap;

service_enum! {
    pub enum MitigationActionType {
        UpdateDeviceCertificate = "UPDATE_DEVICE_CERTIFICATE",
        UpdateCaCertificate = "UPDATE_CA_CERTIFICATE",
        AddThingsToThingGroup = "ADD_THINGS_TO_THING_GROUP",
        ReplaceDefaultPolicyVersion = "REPLACE_DEFAULT_POLICY_VERSION",
        EnableIotLogging = "ENABLE_IOT_LOGGING",
        PublishFindingToSns = "PUBLISH_FINDING_TO_SNS",
    }
}

service_enum! {
    pub enum CACertificateUpdateAction {
        Deactivate = "DEACTIVATE",
    }
}

service_enum! {
    pub enum DeviceCertificateUpdateAction {
        Deactivate = "DEACTIVATE",
    }
}

service_enum! {
    pub enum PolicyTemplateName {
        BlankPolicy = "BLANK_POLICY",
    }
}

service_enum! {
    pub enum AuditMitigationActionsTaskStatus {
        InProgress = "IN_PROGRESS",
        Completed = "COMPLETED",
        Failed = "FAILED",
        Canceled = "CANCELED",
    }
}

service_enum! {
    pub enum AuditMitigationActionsExecutionStatus {
        InProgress = "IN_PROGRESS",
        Completed = "COMPLETED",
        Failed = "FAILED",
        Canceled = "CANCELED",
        Skipped = "SKIPPED",
        Pending = "PENDING",
    }
}

/// Mitigation that sets a device certificate's status.
#[derive(Debug, Clone, Default, Shape)]
pub struct UpdateDeviceCertificateParams {
    #[shape(enumeration = "DeviceCertificateUpdateAction")]
    action: Option<String>,
}

/// Mitigation that sets a CA certificate's status.
#[derive(Debug, Clone, Default, Shape)]
pub struct UpdateCACertificateParams {
    #[shape(enumeration = "CACertificateUpdateAction")]
    action: Option<String>,
}

/// Mitigation that moves the offending things into groups.
#[derive(Debug, Clone, Default, Shape)]
pub struct AddThingsToThingGroupParams {
    #[shape(min_length = 1, max_length = 10)]
    thing_group_names: Option<Vec<String>>,
    /// Also remove the things from dynamic groups when needed.
    override_dynamic_groups: Option<bool>,
}

/// Mitigation that swaps in a blank default policy version.
#[derive(Debug, Clone, Default, Shape)]
pub struct ReplaceDefaultPolicyVersionParams {
    #[shape(enumeration = "PolicyTemplateName")]
    template_name: Option<String>,
}

/// Mitigation that turns on service logging.
#[derive(Debug, Clone, Default, Shape)]
pub struct EnableIoTLoggingParams {
    #[shape(min_length = 20, max_length = 2048)]
    role_arn_for_logging: Option<String>,
    #[shape(enumeration = "LogLevel")]
    log_level: Option<String>,
}

/// Mitigation that publishes the finding to a topic.
#[derive(Debug, Clone, Default, Shape)]
pub struct PublishFindingToSnsParams {
    #[shape(max_length = 350)]
    topic_arn: Option<String>,
}

/// Parameters for exactly one mitigation action type.
#[derive(Debug, Clone, Default, Shape)]
pub struct MitigationActionParams {
    update_device_certificate_params: Option<UpdateDeviceCertificateParams>,
    #[shape(rename = "updateCACertificateParams")]
    update_ca_certificate_params: Option<UpdateCACertificateParams>,
    add_things_to_thing_group_params: Option<AddThingsToThingGroupParams>,
    replace_default_policy_version_params: Option<ReplaceDefaultPolicyVersionParams>,
    #[shape(rename = "enableIoTLoggingParams")]
    enable_iot_logging_params: Option<EnableIoTLoggingParams>,
    publish_finding_to_sns_params: Option<PublishFindingToSnsParams>,
}

/// A named mitigation action and the role it runs as.
#[derive(Debug, Clone, Default, Shape)]
pub struct MitigationAction {
    #[shape(max_length = 128, pattern = "[a-zA-Z0-9_-]+")]
    name: Option<String>,
    id: Option<String>,
    #[shape(min_length = 20, max_length = 2048)]
    role_arn: Option<String>,
    action_params: Option<MitigationActionParams>,
}

/// Input of `CreateMitigationAction`.
#[derive(Debug, Clone, Default, Shape)]
pub struct CreateMitigationActionRequest {
    #[shape(max_length = 128, pattern = "[a-zA-Z0-9_-]+")]
    action_name: Option<String>,
    #[shape(min_length = 20, max_length = 2048)]
    role_arn: Option<String>,
    action_params: Option<MitigationActionParams>,
    tags: Option<Vec<Tag>>,
}

/// Output of `CreateMitigationAction`.
#[derive(Debug, Clone, Default, Shape)]
pub struct CreateMitigationActionResult {
    action_arn: Option<String>,
    action_id: Option<String>,
}

/// Input of `DescribeMitigationAction`.
#[derive(Debug, Clone, Default, Shape)]
pub struct DescribeMitigationActionRequest {
    #[shape(max_length = 128, pattern = "[a-zA-Z0-9_-]+")]
    action_name: Option<String>,
}

/// Output of `DescribeMitigationAction`.
#[derive(Debug, Clone, Default, Shape)]
pub struct DescribeMitigationActionResult {
    action_name: Option<String>,
    #[shape(enumeration = "MitigationActionType")]
    action_type: Option<String>,
    action_arn: Option<String>,
    action_id: Option<String>,
    role_arn: Option<String>,
    action_params: Option<MitigationActionParams>,
    creation_date: Option<Timestamp>,
    last_modified_date: Option<Timestamp>,
}

/// Which findings a mitigation task applies to. Set one member only.
#[derive(Debug, Clone, Default, Shape)]
pub struct AuditMitigationActionsTaskTarget {
    #[shape(min_length = 1, max_length = 40, pattern = "[a-zA-Z0-9_-]+")]
    audit_task_id: Option<String>,
    #[shape(min_length = 1, max_length = 25)]
    finding_ids: Option<Vec<String>>,
    /// Audit check name to the reason codes selected for it.
    audit_check_to_reason_code_filter: Option<BTreeMap<String, Vec<String>>>,
}

/// Input of `StartAuditMitigationActionsTask`.
#[derive(Debug, Clone, Default, Shape)]
pub struct StartAuditMitigationActionsTaskRequest {
    #[shape(min_length = 1, max_length = 128, pattern = "[a-zA-Z0-9_-]+")]
    task_id: Option<String>,
    target: Option<AuditMitigationActionsTaskTarget>,
    /// Audit check name to the mitigation action names to run for it.
    audit_check_to_actions_mapping: Option<BTreeMap<String, Vec<String>>>,
    #[shape(min_length = 1, max_length = 64, pattern = "^[a-zA-Z0-9-_]+$")]
    client_request_token: Option<String>,
}

/// Output of `StartAuditMitigationActionsTask`.
#[derive(Debug, Clone, Default, Shape)]
pub struct StartAuditMitigationActionsTaskResult {
    task_id: Option<String>,
}

/// Finding counts for one audit check within a task.
#[derive(Debug, Clone, Default, Shape)]
pub struct TaskStatisticsForAuditCheck {
    total_findings_count: Option<i64>,
    failed_findings_count: Option<i64>,
    succeeded_findings_count: Option<i64>,
    skipped_findings_count: Option<i64>,
    canceled_findings_count: Option<i64>,
}

/// Input of `DescribeAuditMitigationActionsTask`.
#[derive(Debug, Clone, Default, Shape)]
pub struct DescribeAuditMitigationActionsTaskRequest {
    #[shape(min_length = 1, max_length = 128, pattern = "[a-zA-Z0-9_-]+")]
    task_id: Option<String>,
}

/// Output of `DescribeAuditMitigationActionsTask`.
#[derive(Debug, Clone, Default, Shape)]
pub struct DescribeAuditMitigationActionsTaskResult {
    #[shape(enumeration = "AuditMitigationActionsTaskStatus")]
    task_status: Option<String>,
    start_time: Option<Timestamp>,
    end_time: Option<Timestamp>,
    /// Per audit check counters, keyed by check name.
    task_statistics: Option<BTreeMap<String, TaskStatisticsForAuditCheck>>,
    target: Option<AuditMitigationActionsTaskTarget>,
    audit_check_to_actions_mapping: Option<BTreeMap<String, Vec<String>>>,
    actions_definition: Option<Vec<MitigationAction>>,
}

/// Outcome of one mitigation run against one finding.
#[derive(Debug, Clone, Default, Shape)]
pub struct AuditMitigationActionExecutionMetadata {
    task_id: Option<String>,
    finding_id: Option<String>,
    action_name: Option<String>,
    action_id: Option<String>,
    #[shape(enumeration = "AuditMitigationActionsExecutionStatus")]
    status: Option<String>,
    start_time: Option<Timestamp>,
    end_time: Option<Timestamp>,
    error_code: Option<String>,
    #[shape(max_length = 2048)]
    message: Option<String>,
}

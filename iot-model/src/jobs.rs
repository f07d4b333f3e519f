//! Job scheduling: remote operations pushed to a set of targets, with
//! rollout, abort, retry and timeout policies.

use crate::common::Tag;
use iot_model_types::{Shape, Timestamp, service_enum};
use std::collections::BTreeMap;

service_enum! {
    pub enum JobStatus {
        InProgress = "IN_PROGRESS",
        Canceled = "CANCELED",
        Completed = "COMPLETED",
        DeletionInProgress = "DELETION_IN_PROGRESS",
        Scheduled = "SCHEDULED",
    }
}

service_enum! {
    /// Whether a job keeps running on things added to a target group later.
    pub enum TargetSelection {
        Continuous = "CONTINUOUS",
        Snapshot = "SNAPSHOT",
    }
}

service_enum! {
    pub enum JobExecutionFailureType {
        Failed = "FAILED",
        Rejected = "REJECTED",
        TimedOut = "TIMED_OUT",
        All = "ALL",
    }
}

service_enum! {
    pub enum AbortAction {
        Cancel = "CANCEL",
    }
}

service_enum! {
    pub enum RetryableFailureType {
        Failed = "FAILED",
        TimedOut = "TIMED_OUT",
        All = "ALL",
    }
}

service_enum! {
    /// What happens to outstanding executions when the schedule ends.
    pub enum JobEndBehavior {
        StopRollout = "STOP_ROLLOUT",
        Cancel = "CANCEL",
        ForceCancel = "FORCE_CANCEL",
    }
}

/// Pre-signed S3 URLs handed to devices with the job document.
#[derive(Debug, Clone, Default, Shape)]
pub struct PresignedUrlConfig {
    #[shape(min_length = 20, max_length = 2048)]
    role_arn: Option<String>,
    #[shape(min = 60, max = 3600)]
    expires_in_sec: Option<i64>,
}

/// Threshold that bumps an exponential rollout to its next rate.
#[derive(Debug, Clone, Default, Shape)]
pub struct RateIncreaseCriteria {
    #[shape(min = 1)]
    number_of_notified_things: Option<i32>,
    #[shape(min = 1)]
    number_of_succeeded_things: Option<i32>,
}

/// Growth schedule for the rollout rate.
#[derive(Debug, Clone, Default, Shape)]
pub struct ExponentialRolloutRate {
    #[shape(min = 1, max = 1000)]
    base_rate_per_minute: Option<i32>,
    /// Multiplier applied each time the criteria are met, between 1.1 and 5.
    increment_factor: Option<f64>,
    rate_increase_criteria: Option<RateIncreaseCriteria>,
}

/// How fast job executions are handed out.
#[derive(Debug, Clone, Default, Shape)]
pub struct JobExecutionsRolloutConfig {
    #[shape(min = 1, max = 1000)]
    maximum_per_minute: Option<i32>,
    exponential_rate: Option<ExponentialRolloutRate>,
}

/// Failure threshold that aborts a job.
#[derive(Debug, Clone, Default, Shape)]
pub struct AbortCriteria {
    #[shape(enumeration = "JobExecutionFailureType")]
    failure_type: Option<String>,
    #[shape(enumeration = "AbortAction")]
    action: Option<String>,
    /// Percentage of executed things that must fail, at most 100.
    threshold_percentage: Option<f64>,
    #[shape(min = 1)]
    min_number_of_executed_things: Option<i32>,
}

/// Abort criteria applied to a job.
#[derive(Debug, Clone, Default, Shape)]
pub struct AbortConfig {
    #[shape(min_length = 1)]
    criteria_list: Option<Vec<AbortCriteria>>,
}

/// In-progress timeout of a job execution.
#[derive(Debug, Clone, Default, Shape)]
pub struct TimeoutConfig {
    in_progress_timeout_in_minutes: Option<i64>,
}

/// Retry allowance for one failure type.
#[derive(Debug, Clone, Default, Shape)]
pub struct RetryCriteria {
    #[shape(enumeration = "RetryableFailureType")]
    failure_type: Option<String>,
    #[shape(min = 0, max = 10)]
    number_of_retries: Option<i32>,
}

/// Retry criteria applied to job executions.
#[derive(Debug, Clone, Default, Shape)]
pub struct JobExecutionsRetryConfig {
    #[shape(min_length = 1, max_length = 2)]
    criteria_list: Option<Vec<RetryCriteria>>,
}

/// A recurring window, as a cron expression plus a duration.
#[derive(Debug, Clone, Default, Shape)]
pub struct MaintenanceWindow {
    #[shape(min_length = 1, max_length = 256)]
    start_time: Option<String>,
    #[shape(min = 1, max = 1430)]
    duration_in_minutes: Option<i32>,
}

/// Start and end window of a scheduled job.
#[derive(Debug, Clone, Default, Shape)]
pub struct SchedulingConfig {
    #[shape(min_length = 1, max_length = 64)]
    start_time: Option<String>,
    #[shape(min_length = 1, max_length = 64)]
    end_time: Option<String>,
    #[shape(enumeration = "JobEndBehavior")]
    end_behavior: Option<String>,
    maintenance_windows: Option<Vec<MaintenanceWindow>>,
}

/// Planned start of one rollout wave.
#[derive(Debug, Clone, Default, Shape)]
pub struct ScheduledJobRollout {
    start_time: Option<String>,
}

/// Execution counters for a job.
#[derive(Debug, Clone, Default, Shape)]
pub struct JobProcessDetails {
    processing_targets: Option<Vec<String>>,
    number_of_canceled_things: Option<i32>,
    number_of_succeeded_things: Option<i32>,
    number_of_failed_things: Option<i32>,
    number_of_rejected_things: Option<i32>,
    number_of_queued_things: Option<i32>,
    number_of_in_progress_things: Option<i32>,
    number_of_removed_things: Option<i32>,
    number_of_timed_out_things: Option<i32>,
}

/// A job as the service describes it.
#[derive(Debug, Clone, Default, Shape)]
pub struct Job {
    job_arn: Option<String>,
    #[shape(min_length = 1, max_length = 64, pattern = "[a-zA-Z0-9_-]+")]
    job_id: Option<String>,
    #[shape(enumeration = "TargetSelection")]
    target_selection: Option<String>,
    #[shape(enumeration = "JobStatus")]
    status: Option<String>,
    force_canceled: Option<bool>,
    #[shape(max_length = 128, pattern = r"[\p{Upper}\p{Digit}_]+")]
    reason_code: Option<String>,
    #[shape(max_length = 2028)]
    comment: Option<String>,
    #[shape(min_length = 1)]
    targets: Option<Vec<String>>,
    #[shape(max_length = 2028)]
    description: Option<String>,
    presigned_url_config: Option<PresignedUrlConfig>,
    job_executions_rollout_config: Option<JobExecutionsRolloutConfig>,
    abort_config: Option<AbortConfig>,
    created_at: Option<Timestamp>,
    last_updated_at: Option<Timestamp>,
    completed_at: Option<Timestamp>,
    job_process_details: Option<JobProcessDetails>,
    timeout_config: Option<TimeoutConfig>,
    namespace_id: Option<String>,
    job_template_arn: Option<String>,
    job_executions_retry_config: Option<JobExecutionsRetryConfig>,
    document_parameters: Option<BTreeMap<String, String>>,
    is_concurrent: Option<bool>,
    scheduling_config: Option<SchedulingConfig>,
    scheduled_job_rollouts: Option<Vec<ScheduledJobRollout>>,
}

/// One entry in a job listing.
#[derive(Debug, Clone, Default, Shape)]
pub struct JobSummary {
    job_arn: Option<String>,
    job_id: Option<String>,
    thing_group_id: Option<String>,
    #[shape(enumeration = "TargetSelection")]
    target_selection: Option<String>,
    #[shape(enumeration = "JobStatus")]
    status: Option<String>,
    created_at: Option<Timestamp>,
    last_updated_at: Option<Timestamp>,
    completed_at: Option<Timestamp>,
    is_concurrent: Option<bool>,
}

/// Input of `CreateJob`.
#[derive(Debug, Clone, Default, Shape)]
pub struct CreateJobRequest {
    #[shape(min_length = 1, max_length = 64, pattern = "[a-zA-Z0-9_-]+")]
    job_id: Option<String>,
    #[shape(min_length = 1)]
    targets: Option<Vec<String>>,
    #[shape(min_length = 1, max_length = 1350)]
    document_source: Option<String>,
    #[shape(max_length = 32768)]
    document: Option<String>,
    #[shape(max_length = 2028)]
    description: Option<String>,
    presigned_url_config: Option<PresignedUrlConfig>,
    #[shape(enumeration = "TargetSelection")]
    target_selection: Option<String>,
    job_executions_rollout_config: Option<JobExecutionsRolloutConfig>,
    abort_config: Option<AbortConfig>,
    timeout_config: Option<TimeoutConfig>,
    tags: Option<Vec<Tag>>,
    #[shape(pattern = "[a-zA-Z0-9_-]+")]
    namespace_id: Option<String>,
    #[shape(min_length = 1, max_length = 1600)]
    job_template_arn: Option<String>,
    job_executions_retry_config: Option<JobExecutionsRetryConfig>,
    /// Substitution values for placeholders in a template-based document.
    document_parameters: Option<BTreeMap<String, String>>,
    scheduling_config: Option<SchedulingConfig>,
    #[shape(min_length = 1, max_length = 25)]
    destination_package_versions: Option<Vec<String>>,
}

/// Output of `CreateJob`.
#[derive(Debug, Clone, Default, Shape)]
pub struct CreateJobResult {
    job_arn: Option<String>,
    job_id: Option<String>,
    description: Option<String>,
}

/// Input of `DescribeJob`.
#[derive(Debug, Clone, Default, Shape)]
pub struct DescribeJobRequest {
    #[shape(min_length = 1, max_length = 64, pattern = "[a-zA-Z0-9_-]+")]
    job_id: Option<String>,
    before_substitution: Option<bool>,
}

/// Output of `DescribeJob`.
#[derive(Debug, Clone, Default, Shape)]
pub struct DescribeJobResult {
    document_source: Option<String>,
    job: Option<Job>,
}

/// Input of `CancelJob`.
#[derive(Debug, Clone, Default, Shape)]
pub struct CancelJobRequest {
    #[shape(min_length = 1, max_length = 64, pattern = "[a-zA-Z0-9_-]+")]
    job_id: Option<String>,
    #[shape(max_length = 128, pattern = r"[\p{Upper}\p{Digit}_]+")]
    reason_code: Option<String>,
    #[shape(max_length = 2028)]
    comment: Option<String>,
    force: Option<bool>,
}

/// Output of `CancelJob`.
#[derive(Debug, Clone, Default, Shape)]
pub struct CancelJobResult {
    job_arn: Option<String>,
    job_id: Option<String>,
    description: Option<String>,
}

/// Input of `ListJobs`.
#[derive(Debug, Clone, Default, Shape)]
pub struct ListJobsRequest {
    #[shape(enumeration = "JobStatus")]
    status: Option<String>,
    #[shape(enumeration = "TargetSelection")]
    target_selection: Option<String>,
    #[shape(min = 1, max = 250)]
    max_results: Option<i32>,
    next_token: Option<String>,
    #[shape(min_length = 1, max_length = 128, pattern = "[a-zA-Z0-9:_-]+")]
    thing_group_name: Option<String>,
    #[shape(min_length = 1, max_length = 128, pattern = "[a-zA-Z0-9_-]+")]
    thing_group_id: Option<String>,
    namespace_id: Option<String>,
}

/// Output of `ListJobs`.
#[derive(Debug, Clone, Default, Shape)]
pub struct ListJobsResult {
    jobs: Option<Vec<JobSummary>>,
    next_token: Option<String>,
}

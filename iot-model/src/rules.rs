//! Topic rules: SQL selections over MQTT topics and the actions their
//! matches are routed to.

use iot_model_types::{Shape, Timestamp, service_enum};

service_enum! {
    pub enum MessageFormat {
        Raw = "RAW",
        Json = "JSON",
    }
}

service_enum! {
    pub enum CannedAccessControlList {
        Private = "private",
        PublicRead = "public-read",
        PublicReadWrite = "public-read-write",
        AwsExecRead = "aws-exec-read",
        AuthenticatedRead = "authenticated-read",
        BucketOwnerRead = "bucket-owner-read",
        BucketOwnerFullControl = "bucket-owner-full-control",
        LogDeliveryWrite = "log-delivery-write",
    }
}

service_enum! {
    pub enum DynamoKeyType {
        String = "STRING",
        Number = "NUMBER",
    }
}

/// Invokes a function with the message.
#[derive(Debug, Clone, Default, Shape)]
pub struct LambdaAction {
    function_arn: Option<String>,
}

/// Publishes the message to a notification topic.
#[derive(Debug, Clone, Default, Shape)]
pub struct SnsAction {
    target_arn: Option<String>,
    role_arn: Option<String>,
    #[shape(enumeration = "MessageFormat")]
    message_format: Option<String>,
}

/// Sends the message to a queue.
#[derive(Debug, Clone, Default, Shape)]
pub struct SqsAction {
    role_arn: Option<String>,
    queue_url: Option<String>,
    use_base64: Option<bool>,
}

/// Re-publishes the message to another topic.
#[derive(Debug, Clone, Default, Shape)]
pub struct RepublishAction {
    role_arn: Option<String>,
    topic: Option<String>,
    #[shape(min = 0, max = 1)]
    qos: Option<i32>,
}

/// Writes the message to a bucket.
#[derive(Debug, Clone, Default, Shape)]
pub struct S3Action {
    role_arn: Option<String>,
    bucket_name: Option<String>,
    key: Option<String>,
    #[shape(enumeration = "CannedAccessControlList")]
    canned_acl: Option<String>,
}

/// Writes the message to a table.
#[derive(Debug, Clone, Default, Shape)]
pub struct DynamoDBAction {
    table_name: Option<String>,
    role_arn: Option<String>,
    operation: Option<String>,
    hash_key_field: Option<String>,
    hash_key_value: Option<String>,
    #[shape(enumeration = "DynamoKeyType")]
    hash_key_type: Option<String>,
    range_key_field: Option<String>,
    range_key_value: Option<String>,
    #[shape(enumeration = "DynamoKeyType")]
    range_key_type: Option<String>,
    payload_field: Option<String>,
}

/// Records the message as a metric datapoint.
#[derive(Debug, Clone, Default, Shape)]
pub struct CloudwatchMetricAction {
    role_arn: Option<String>,
    metric_namespace: Option<String>,
    metric_name: Option<String>,
    metric_value: Option<String>,
    metric_unit: Option<String>,
    metric_timestamp: Option<String>,
}

/// One rule action. Exactly one member is expected to be set.
#[derive(Debug, Clone, Default, Shape)]
pub struct Action {
    #[shape(rename = "dynamoDB")]
    dynamo_db: Option<DynamoDBAction>,
    lambda: Option<LambdaAction>,
    sns: Option<SnsAction>,
    sqs: Option<SqsAction>,
    republish: Option<RepublishAction>,
    s3: Option<S3Action>,
    cloudwatch_metric: Option<CloudwatchMetricAction>,
}

/// Definition of a topic rule as written by the caller.
#[derive(Debug, Clone, Default, Shape)]
pub struct TopicRulePayload {
    sql: Option<String>,
    description: Option<String>,
    actions: Option<Vec<Action>>,
    rule_disabled: Option<bool>,
    aws_iot_sql_version: Option<String>,
    error_action: Option<Action>,
}

/// A topic rule as the service describes it.
#[derive(Debug, Clone, Default, Shape)]
pub struct TopicRule {
    #[shape(min_length = 1, max_length = 128, pattern = "^[a-zA-Z0-9_]+$")]
    rule_name: Option<String>,
    sql: Option<String>,
    description: Option<String>,
    created_at: Option<Timestamp>,
    actions: Option<Vec<Action>>,
    rule_disabled: Option<bool>,
    aws_iot_sql_version: Option<String>,
    error_action: Option<Action>,
}

/// One entry in a topic rule listing.
#[derive(Debug, Clone, Default, Shape)]
pub struct TopicRuleListItem {
    rule_arn: Option<String>,
    rule_name: Option<String>,
    topic_pattern: Option<String>,
    created_at: Option<Timestamp>,
    rule_disabled: Option<bool>,
}

/// Input of `CreateTopicRule`.
#[derive(Debug, Clone, Default, Shape)]
pub struct CreateTopicRuleRequest {
    #[shape(min_length = 1, max_length = 128, pattern = "^[a-zA-Z0-9_]+$")]
    rule_name: Option<String>,
    topic_rule_payload: Option<TopicRulePayload>,
    /// URL query encoded, e.g. `key1=value1&key2=value2`.
    tags: Option<String>,
}

/// Input of `GetTopicRule`.
#[derive(Debug, Clone, Default, Shape)]
pub struct GetTopicRuleRequest {
    #[shape(min_length = 1, max_length = 128, pattern = "^[a-zA-Z0-9_]+$")]
    rule_name: Option<String>,
}

/// Output of `GetTopicRule`.
#[derive(Debug, Clone, Default, Shape)]
pub struct GetTopicRuleResult {
    rule_arn: Option<String>,
    rule: Option<TopicRule>,
}

/// Input of `ReplaceTopicRule`.
#[derive(Debug, Clone, Default, Shape)]
pub struct ReplaceTopicRuleRequest {
    #[shape(min_length = 1, max_length = 128, pattern = "^[a-zA-Z0-9_]+$")]
    rule_name: Option<String>,
    topic_rule_payload: Option<TopicRulePayload>,
}

/// Input of `EnableTopicRule`.
#[derive(Debug, Clone, Default, Shape)]
pub struct EnableTopicRuleRequest {
    #[shape(min_length = 1, max_length = 128, pattern = "^[a-zA-Z0-9_]+$")]
    rule_name: Option<String>,
}

/// Input of `DisableTopicRule`.
#[derive(Debug, Clone, Default, Shape)]
pub struct DisableTopicRuleRequest {
    #[shape(min_length = 1, max_length = 128, pattern = "^[a-zA-Z0-9_]+$")]
    rule_name: Option<String>,
}

/// Input of `DeleteTopicRule`.
#[derive(Debug, Clone, Default, Shape)]
pub struct DeleteTopicRuleRequest {
    #[shape(min_length = 1, max_length = 128, pattern = "^[a-zA-Z0-9_]+$")]
    rule_name: Option<String>,
}

/// Input of `ListTopicRules`.
#[derive(Debug, Clone, Default, Shape)]
pub struct ListTopicRulesRequest {
    topic: Option<String>,
    #[shape(min = 1, max = 10000)]
    max_results: Option<i32>,
    next_token: Option<String>,
    rule_disabled: Option<bool>,
}

/// Output of `ListTopicRules`.
#[derive(Debug, Clone, Default, Shape)]
pub struct ListTopicRulesResult {
    rules: Option<Vec<TopicRuleListItem>>,
    next_token: Option<String>,
}

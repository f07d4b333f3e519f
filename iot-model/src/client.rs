//! The invocation seam between the shapes and an SDK pipeline.
//!
//! Each operation is a zero-sized marker implementing [`Operation`], which
//! ties its request shape to its response type and service name. A pipeline
//! implements [`IotApi::invoke`] once; the per-operation methods are
//! provided on top of it.

use crate::audit::*;
use crate::certificates::*;
use crate::indexing::*;
use crate::jobs::*;
use crate::policies::*;
use crate::rules::*;
use crate::things::*;
use iot_model_types::Shape;
use serde::de::DeserializeOwned;

/// Binds a request shape to the response it produces.
pub trait Operation {
    /// Service operation name, e.g. `CreateThing`.
    const NAME: &'static str;

    type Request: Shape;

    /// The result shape, or `()` for operations without a response body.
    type Response: DeserializeOwned;
}

macro_rules! operations {
    ($($op:ident => $method:ident($request:ty) -> $response:ty;)+) => {
        $(
            #[doc = concat!("The `", stringify!($op), "` operation.")]
            #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
            pub struct $op;

            impl Operation for $op {
                const NAME: &'static str = stringify!($op);
                type Request = $request;
                type Response = $response;
            }
        )+

        /// Every operation name, in declaration order.
        pub const OPERATION_NAMES: &[&str] = &[$(stringify!($op)),+];

        /// Client surface of the IoT device-management API.
        ///
        /// Implementors supply transport, signing, marshaling and retries
        /// through [`invoke`](IotApi::invoke).
        pub trait IotApi {
            type Error: std::error::Error;

            /// Sends one request and returns the decoded response.
            fn invoke<O: Operation>(&self, request: O::Request) -> Result<O::Response, Self::Error>;

            $(
                fn $method(&self, request: $request) -> Result<$response, Self::Error> {
                    self.invoke::<$op>(request)
                }
            )+
        }
    };
}

operations! {
    // things
    CreateThing => create_thing(CreateThingRequest) -> CreateThingResult;
    DescribeThing => describe_thing(DescribeThingRequest) -> DescribeThingResult;
    UpdateThing => update_thing(UpdateThingRequest) -> UpdateThingResult;
    DeleteThing => delete_thing(DeleteThingRequest) -> DeleteThingResult;
    ListThings => list_things(ListThingsRequest) -> ListThingsResult;
    AttachThingPrincipal => attach_thing_principal(AttachThingPrincipalRequest) -> AttachThingPrincipalResult;
    DetachThingPrincipal => detach_thing_principal(DetachThingPrincipalRequest) -> DetachThingPrincipalResult;
    ListThingPrincipals => list_thing_principals(ListThingPrincipalsRequest) -> ListThingPrincipalsResult;
    ListPrincipalThings => list_principal_things(ListPrincipalThingsRequest) -> ListPrincipalThingsResult;

    // certificates
    CreateKeysAndCertificate => create_keys_and_certificate(CreateKeysAndCertificateRequest) -> CreateKeysAndCertificateResult;
    CreateCertificateFromCsr => create_certificate_from_csr(CreateCertificateFromCsrRequest) -> CreateCertificateFromCsrResult;
    DescribeCertificate => describe_certificate(DescribeCertificateRequest) -> DescribeCertificateResult;
    UpdateCertificate => update_certificate(UpdateCertificateRequest) -> ();
    DeleteCertificate => delete_certificate(DeleteCertificateRequest) -> ();
    TransferCertificate => transfer_certificate(TransferCertificateRequest) -> TransferCertificateResult;
    AcceptCertificateTransfer => accept_certificate_transfer(AcceptCertificateTransferRequest) -> ();
    RejectCertificateTransfer => reject_certificate_transfer(RejectCertificateTransferRequest) -> ();
    CancelCertificateTransfer => cancel_certificate_transfer(CancelCertificateTransferRequest) -> ();
    ListCertificates => list_certificates(ListCertificatesRequest) -> ListCertificatesResult;

    // jobs
    CreateJob => create_job(CreateJobRequest) -> CreateJobResult;
    DescribeJob => describe_job(DescribeJobRequest) -> DescribeJobResult;
    CancelJob => cancel_job(CancelJobRequest) -> CancelJobResult;
    ListJobs => list_jobs(ListJobsRequest) -> ListJobsResult;

    // indexing
    GetIndexingConfiguration => get_indexing_configuration(GetIndexingConfigurationRequest) -> GetIndexingConfigurationResult;
    UpdateIndexingConfiguration => update_indexing_configuration(UpdateIndexingConfigurationRequest) -> UpdateIndexingConfigurationResult;
    SearchIndex => search_index(SearchIndexRequest) -> SearchIndexResult;
    GetStatistics => get_statistics(GetStatisticsRequest) -> GetStatisticsResult;

    // rules
    CreateTopicRule => create_topic_rule(CreateTopicRuleRequest) -> ();
    GetTopicRule => get_topic_rule(GetTopicRuleRequest) -> GetTopicRuleResult;
    ReplaceTopicRule => replace_topic_rule(ReplaceTopicRuleRequest) -> ();
    EnableTopicRule => enable_topic_rule(EnableTopicRuleRequest) -> ();
    DisableTopicRule => disable_topic_rule(DisableTopicRuleRequest) -> ();
    DeleteTopicRule => delete_topic_rule(DeleteTopicRuleRequest) -> ();
    ListTopicRules => list_topic_rules(ListTopicRulesRequest) -> ListTopicRulesResult;

    // audit
    CreateMitigationAction => create_mitigation_action(CreateMitigationActionRequest) -> CreateMitigationActionResult;
    DescribeMitigationAction => describe_mitigation_action(DescribeMitigationActionRequest) -> DescribeMitigationActionResult;
    StartAuditMitigationActionsTask => start_audit_mitigation_actions_task(StartAuditMitigationActionsTaskRequest) -> StartAuditMitigationActionsTaskResult;
    DescribeAuditMitigationActionsTask => describe_audit_mitigation_actions_task(DescribeAuditMitigationActionsTaskRequest) -> DescribeAuditMitigationActionsTaskResult;

    // policies, logging, endpoints
    CreatePolicy => create_policy(CreatePolicyRequest) -> CreatePolicyResult;
    GetPolicy => get_policy(GetPolicyRequest) -> GetPolicyResult;
    DeletePolicy => delete_policy(DeletePolicyRequest) -> ();
    CreatePolicyVersion => create_policy_version(CreatePolicyVersionRequest) -> CreatePolicyVersionResult;
    ListPolicyVersions => list_policy_versions(ListPolicyVersionsRequest) -> ListPolicyVersionsResult;
    SetDefaultPolicyVersion => set_default_policy_version(SetDefaultPolicyVersionRequest) -> ();
    AttachPrincipalPolicy => attach_principal_policy(AttachPrincipalPolicyRequest) -> ();
    DetachPrincipalPolicy => detach_principal_policy(DetachPrincipalPolicyRequest) -> ();
    ListPolicies => list_policies(ListPoliciesRequest) -> ListPoliciesResult;
    SetLoggingOptions => set_logging_options(SetLoggingOptionsRequest) -> ();
    GetLoggingOptions => get_logging_options(GetLoggingOptionsRequest) -> GetLoggingOptionsResult;
    DescribeEndpoint => describe_endpoint(DescribeEndpointRequest) -> DescribeEndpointResult;
}

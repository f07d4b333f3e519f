//! Drives the client surface through an in-memory pipeline that records
//! requests as JSON and answers with canned response bodies.

use iot_model::certificates::{CertificateStatus, UpdateCertificateRequest};
use iot_model::client::{CreateThing, IotApi, OPERATION_NAMES, Operation, UpdateCertificate};
use iot_model::jobs::{CreateJobRequest, ListJobsRequest};
use iot_model::policies::DescribeEndpointRequest;
use iot_model::things::{CreateThingRequest, DescribeThingRequest};
use iot_model::Shape;
use pretty_assertions::assert_eq;
use std::cell::RefCell;
use std::collections::{BTreeMap, HashSet};

#[derive(Debug, thiserror::Error)]
enum FakeError {
    #[error("no canned response for {0}")]
    NotStubbed(&'static str),

    #[error(transparent)]
    Model(#[from] iot_model::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

#[derive(Default)]
struct FakePipeline {
    responses: BTreeMap<&'static str, String>,
    calls: RefCell<Vec<(&'static str, String)>>,
}

impl FakePipeline {
    fn respond(mut self, operation: &'static str, body: &str) -> Self {
        self.responses.insert(operation, body.to_string());
        self
    }

    fn calls(&self) -> Vec<(&'static str, String)> {
        self.calls.borrow().clone()
    }
}

impl IotApi for FakePipeline {
    type Error = FakeError;

    fn invoke<O: Operation>(&self, request: O::Request) -> Result<O::Response, FakeError> {
        self.calls.borrow_mut().push((O::NAME, request.to_json()?));
        let body = self
            .responses
            .get(O::NAME)
            .ok_or(FakeError::NotStubbed(O::NAME))?;
        Ok(serde_json::from_str(body)?)
    }
}

// ── Typed operations ─────────────────────────────────────────────

#[test]
fn create_thing_goes_through_invoke() {
    let api = FakePipeline::default().respond(
        "CreateThing",
        r#"{"thingName":"sensor-1","thingArn":"arn:thing/sensor-1","thingId":"abc"}"#,
    );

    let result = api
        .create_thing(CreateThingRequest::new().with_thing_name("sensor-1"))
        .unwrap();

    assert_eq!(result.thing_arn(), Some("arn:thing/sensor-1"));
    assert_eq!(
        api.calls(),
        vec![("CreateThing", r#"{"thingName":"sensor-1"}"#.to_string())]
    );
}

#[test]
fn void_operation_returns_unit() {
    let api = FakePipeline::default().respond("UpdateCertificate", "null");
    let request = UpdateCertificateRequest::new()
        .with_certificate_id("c0ffee")
        .with_new_status_enum(CertificateStatus::Inactive);

    api.update_certificate(request).unwrap();

    let (name, body) = &api.calls()[0];
    assert_eq!(*name, "UpdateCertificate");
    assert_eq!(body, r#"{"certificateId":"c0ffee","newStatus":"INACTIVE"}"#);
}

#[test]
fn pipeline_errors_propagate() {
    let api = FakePipeline::default();
    let err = api
        .describe_thing(DescribeThingRequest::new().with_thing_name("missing"))
        .unwrap_err();
    assert!(matches!(err, FakeError::NotStubbed("DescribeThing")));
    assert_eq!(api.calls().len(), 1);
}

#[test]
fn malformed_response_is_reported() {
    let api = FakePipeline::default().respond("ListJobs", r#"{"jobs": "nope"}"#);
    let err = api.list_jobs(ListJobsRequest::new()).unwrap_err();
    assert!(matches!(err, FakeError::Json(_)));
}

#[test]
fn requests_keep_map_entries_on_the_wire() {
    let api = FakePipeline::default().respond("CreateJob", r#"{"jobId":"j"}"#);
    let mut request = CreateJobRequest::new().with_job_id("j");
    request.add_document_parameters_entry("b", "2").unwrap();
    request.add_document_parameters_entry("a", "1").unwrap();

    let result = api.create_job(request).unwrap();
    assert_eq!(result.job_id(), Some("j"));
    assert_eq!(
        api.calls()[0].1,
        r#"{"jobId":"j","documentParameters":{"a":"1","b":"2"}}"#
    );
}

#[test]
fn explicit_invoke_by_marker() {
    let api = FakePipeline::default()
        .respond("DescribeEndpoint", r#"{"endpointAddress":"x-ats.iot.example.com"}"#);
    let result = api
        .invoke::<iot_model::client::DescribeEndpoint>(
            DescribeEndpointRequest::new().with_endpoint_type("iot:Data-ATS"),
        )
        .unwrap();
    assert_eq!(result.endpoint_address(), Some("x-ats.iot.example.com"));
}

// ── Operation table ──────────────────────────────────────────────

#[test]
fn operation_names_are_unique() {
    let unique: HashSet<&str> = OPERATION_NAMES.iter().copied().collect();
    assert_eq!(unique.len(), OPERATION_NAMES.len());
    assert!(OPERATION_NAMES.contains(&"StartAuditMitigationActionsTask"));
    assert_eq!(CreateThing::NAME, "CreateThing");
    assert_eq!(UpdateCertificate::NAME, "UpdateCertificate");
}

//! Request, result and value shapes for the IoT device-management API.
//!
//! Shapes are grouped by the part of the API they belong to:
//! - [`things`]: the thing registry
//! - [`certificates`]: device certificate lifecycle
//! - [`jobs`]: job scheduling and rollout policies
//! - [`indexing`]: fleet indexing, search and statistics
//! - [`rules`]: topic rules and their actions
//! - [`audit`]: audit mitigation actions and tasks
//! - [`policies`]: policies, logging options and endpoints
//!
//! [`client::IotApi`] is the seam an SDK pipeline implements to send them.
//!
//! ```
//! use iot_model::jobs::{CreateJobRequest, TargetSelection};
//!
//! let mut request = CreateJobRequest::new()
//!     .with_job_id("firmware-42")
//!     .with_targets(["arn:aws:iot:us-east-1:123456789012:thing/sensor-1"])
//!     .with_target_selection_enum(TargetSelection::Snapshot);
//! request.add_document_parameters_entry("version", "4.2").unwrap();
//!
//! assert_eq!(request.target_selection(), Some("SNAPSHOT"));
//! assert!(request.add_document_parameters_entry("version", "4.3").is_err());
//! ```

pub mod audit;
pub mod certificates;
pub mod client;
pub mod common;
pub mod indexing;
pub mod jobs;
pub mod policies;
pub mod rules;
pub mod things;

pub use common::{LogLevel, Tag};
pub use iot_model_types::{
    Blob, Constraints, Error, FieldDescriptor, FieldKind, Result, ServiceEnum, Shape, ShapeValue,
    Timestamp,
};

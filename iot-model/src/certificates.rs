//! Device certificate lifecycle: issue, describe, activate, revoke and
//! transfer certificates between accounts.

use iot_model_types::{Shape, Timestamp, service_enum};

service_enum! {
    pub enum CertificateStatus {
        Active = "ACTIVE",
        Inactive = "INACTIVE",
        Revoked = "REVOKED",
        PendingTransfer = "PENDING_TRANSFER",
        RegisterInactive = "REGISTER_INACTIVE",
        PendingActivation = "PENDING_ACTIVATION",
    }
}

service_enum! {
    pub enum CertificateMode {
        Default = "DEFAULT",
        SniOnly = "SNI_ONLY",
    }
}

/// Summary of a certificate as returned by listings.
#[derive(Debug, Clone, Default, Shape)]
pub struct Certificate {
    certificate_arn: Option<String>,
    #[shape(min_length = 64, max_length = 64, pattern = "(0x)?[a-fA-F0-9]+")]
    certificate_id: Option<String>,
    #[shape(enumeration = "CertificateStatus")]
    status: Option<String>,
    #[shape(enumeration = "CertificateMode")]
    certificate_mode: Option<String>,
    creation_date: Option<Timestamp>,
}

/// Validity window of a certificate.
#[derive(Debug, Clone, Default, Shape)]
pub struct CertificateValidity {
    not_before: Option<Timestamp>,
    not_after: Option<Timestamp>,
}

/// State of a pending or finished cross-account transfer.
#[derive(Debug, Clone, Default, Shape)]
pub struct TransferData {
    #[shape(max_length = 128)]
    transfer_message: Option<String>,
    #[shape(max_length = 128)]
    reject_reason: Option<String>,
    transfer_date: Option<Timestamp>,
    accept_date: Option<Timestamp>,
    reject_date: Option<Timestamp>,
}

/// Full description of a device certificate.
#[derive(Debug, Clone, Default, Shape)]
pub struct CertificateDescription {
    certificate_arn: Option<String>,
    #[shape(min_length = 64, max_length = 64, pattern = "(0x)?[a-fA-F0-9]+")]
    certificate_id: Option<String>,
    #[shape(min_length = 64, max_length = 64, pattern = "(0x)?[a-fA-F0-9]+")]
    ca_certificate_id: Option<String>,
    #[shape(enumeration = "CertificateStatus")]
    status: Option<String>,
    #[shape(min_length = 1, max_length = 65536)]
    certificate_pem: Option<String>,
    #[shape(pattern = "[0-9]+")]
    owned_by: Option<String>,
    #[shape(pattern = "[0-9]+")]
    previous_owned_by: Option<String>,
    creation_date: Option<Timestamp>,
    last_modified_date: Option<Timestamp>,
    #[shape(min = 1)]
    customer_version: Option<i32>,
    transfer_data: Option<TransferData>,
    generation_id: Option<String>,
    validity: Option<CertificateValidity>,
    #[shape(enumeration = "CertificateMode")]
    certificate_mode: Option<String>,
}

/// PEM encoded key pair returned with a new certificate.
#[derive(Debug, Clone, Default, Shape)]
pub struct KeyPair {
    #[shape(rename = "PublicKey", min_length = 1)]
    public_key: Option<String>,
    #[shape(rename = "PrivateKey", min_length = 1)]
    private_key: Option<String>,
}

/// Input of `CreateKeysAndCertificate`.
#[derive(Debug, Clone, Default, Shape)]
pub struct CreateKeysAndCertificateRequest {
    set_as_active: Option<bool>,
}

/// Output of `CreateKeysAndCertificate`.
#[derive(Debug, Clone, Default, Shape)]
pub struct CreateKeysAndCertificateResult {
    certificate_arn: Option<String>,
    certificate_id: Option<String>,
    certificate_pem: Option<String>,
    key_pair: Option<KeyPair>,
}

/// Input of `CreateCertificateFromCsr`.
#[derive(Debug, Clone, Default, Shape)]
pub struct CreateCertificateFromCsrRequest {
    #[shape(min_length = 1, max_length = 4096)]
    certificate_signing_request: Option<String>,
    set_as_active: Option<bool>,
}

/// Output of `CreateCertificateFromCsr`.
#[derive(Debug, Clone, Default, Shape)]
pub struct CreateCertificateFromCsrResult {
    certificate_arn: Option<String>,
    certificate_id: Option<String>,
    certificate_pem: Option<String>,
}

/// Input of `DescribeCertificate`.
#[derive(Debug, Clone, Default, Shape)]
pub struct DescribeCertificateRequest {
    #[shape(min_length = 64, max_length = 64, pattern = "(0x)?[a-fA-F0-9]+")]
    certificate_id: Option<String>,
}

/// Output of `DescribeCertificate`.
#[derive(Debug, Clone, Default, Shape)]
pub struct DescribeCertificateResult {
    certificate_description: Option<CertificateDescription>,
}

/// Input of `UpdateCertificate`.
#[derive(Debug, Clone, Default, Shape)]
pub struct UpdateCertificateRequest {
    #[shape(min_length = 64, max_length = 64, pattern = "(0x)?[a-fA-F0-9]+")]
    certificate_id: Option<String>,
    #[shape(enumeration = "CertificateStatus")]
    new_status: Option<String>,
}

/// Input of `DeleteCertificate`.
#[derive(Debug, Clone, Default, Shape)]
pub struct DeleteCertificateRequest {
    #[shape(min_length = 64, max_length = 64, pattern = "(0x)?[a-fA-F0-9]+")]
    certificate_id: Option<String>,
    force_delete: Option<bool>,
}

/// Input of `TransferCertificate`.
#[derive(Debug, Clone, Default, Shape)]
pub struct TransferCertificateRequest {
    #[shape(min_length = 64, max_length = 64, pattern = "(0x)?[a-fA-F0-9]+")]
    certificate_id: Option<String>,
    #[shape(min_length = 12, max_length = 12, pattern = "[0-9]+")]
    target_aws_account: Option<String>,
    #[shape(max_length = 128)]
    transfer_message: Option<String>,
}

/// Output of `TransferCertificate`.
#[derive(Debug, Clone, Default, Shape)]
pub struct TransferCertificateResult {
    transferred_certificate_arn: Option<String>,
}

/// Input of `AcceptCertificateTransfer`.
#[derive(Debug, Clone, Default, Shape)]
pub struct AcceptCertificateTransferRequest {
    #[shape(min_length = 64, max_length = 64, pattern = "(0x)?[a-fA-F0-9]+")]
    certificate_id: Option<String>,
    set_as_active: Option<bool>,
}

/// Input of `RejectCertificateTransfer`.
#[derive(Debug, Clone, Default, Shape)]
pub struct RejectCertificateTransferRequest {
    #[shape(min_length = 64, max_length = 64, pattern = "(0x)?[a-fA-F0-9]+")]
    certificate_id: Option<String>,
    #[shape(max_length = 128)]
    reject_reason: Option<String>,
}

/// Input of `CancelCertificateTransfer`.
#[derive(Debug, Clone, Default, Shape)]
pub struct CancelCertificateTransferRequest {
    #[shape(min_length = 64, max_length = 64, pattern = "(0x)?[a-fA-F0-9]+")]
    certificate_id: Option<String>,
}

/// Input of `ListCertificates`.
#[derive(Debug, Clone, Default, Shape)]
pub struct ListCertificatesRequest {
    #[shape(min = 1, max = 250)]
    page_size: Option<i32>,
    #[shape(pattern = "[A-Za-z0-9+/]+={0,2}")]
    marker: Option<String>,
    ascending_order: Option<bool>,
}

/// Output of `ListCertificates`.
#[derive(Debug, Clone, Default, Shape)]
pub struct ListCertificatesResult {
    certificates: Option<Vec<Certificate>>,
    next_marker: Option<String>,
}

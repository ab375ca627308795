//! Clinical SDK
//!
//! Typed async clients for two remote services:
//!
//! - [`AnnotatorForClinicalData`] - profiles, flows, annotators, cartridges and
//!   the analysis pipeline
//! - [`InsightsForMedicalLiterature`] - corpora, documents, search and concepts
//!
//! Every method takes [`CallArguments`] (or `None`) keyed by local parameter
//! name and returns a [`Response`]. Missing required parameters fail with
//! [`SdkError::Validation`] before anything is sent.
//!
//! ## Example
//!
//! ```rust,ignore
//! use clinical_sdk::{AnnotatorForClinicalData, BearerToken, CallArguments};
//!
//! let acd = AnnotatorForClinicalData::builder("2023-03-31")
//!     .authenticator(BearerToken::new(token))
//!     .build()?;
//!
//! let response = acd
//!     .create_profile(CallArguments::new().with("newId", "p1").with("newName", "n1"))
//!     .await?;
//! assert_eq!(response.status, 200);
//! ```

mod facade;

pub mod annotator;
pub mod insights;

pub use annotator::AnnotatorForClinicalData;
pub use insights::InsightsForMedicalLiterature;

pub use clinical_define::{
    ArrayStyle, BodyEncoding, OperationSpec, ParamRole, ParameterSpec, RestMethod, ServiceSpec,
};
pub use clinical_definitions::{
    ANNOTATOR_FOR_CLINICAL_DATA, INSIGHTS_FOR_MEDICAL_LITERATURE, Relationship,
    annotator::{
        DEFAULT_SERVICE_NAME as ANNOTATOR_SERVICE_NAME, DEFAULT_SERVICE_URL as ANNOTATOR_SERVICE_URL,
    },
    insights::{
        DEFAULT_SERVICE_NAME as INSIGHTS_SERVICE_NAME, DEFAULT_SERVICE_URL as INSIGHTS_SERVICE_URL,
    },
};
pub use clinical_runtime::{
    ApiKey, Authenticator, BasicAuth, BearerToken, CallArguments, FilePart, Headers, NoAuth,
    RequestDescriptor, RequestExecutor, Response, ResponseBody, SdkError, Service, ServiceBuilder,
    Value,
};
pub use clinical_runtime::testing;

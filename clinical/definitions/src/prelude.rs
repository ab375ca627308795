//! Convenient re-exports of the service tables.

pub use crate::annotator::{
    ANNOTATOR_FOR_CLINICAL_DATA, DEFAULT_SERVICE_NAME as ANNOTATOR_SERVICE_NAME,
    DEFAULT_SERVICE_URL as ANNOTATOR_SERVICE_URL,
};
pub use crate::insights::{
    DEFAULT_SERVICE_NAME as INSIGHTS_SERVICE_NAME, DEFAULT_SERVICE_URL as INSIGHTS_SERVICE_URL,
    INSIGHTS_FOR_MEDICAL_LITERATURE, Relationship,
};

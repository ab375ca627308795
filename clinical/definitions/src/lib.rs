//! Clinical Service Definitions
//!
//! Operation tables for the two remote services, built from the primitives in
//! `clinical-define`. Each service lives in its own module and exposes a
//! `static` [`ServiceSpec`](clinical_define::ServiceSpec).
//!
//! ## Available Services
//!
//! - [`annotator`] - Annotator for Clinical Data (profiles, flows, cartridges, analysis)
//! - [`insights`] - Insights for Medical Literature (corpora, documents, search, concepts)
//!
//! ## Examples
//!
//! ```
//! use clinical_definitions::{ANNOTATOR_FOR_CLINICAL_DATA, INSIGHTS_FOR_MEDICAL_LITERATURE};
//!
//! let get_profile = ANNOTATOR_FOR_CLINICAL_DATA.find("getProfile").unwrap();
//! assert_eq!(get_profile.path, "/v1/profiles/{id}");
//!
//! assert!(INSIGHTS_FOR_MEDICAL_LITERATURE.find("typeahead").is_some());
//! ```

pub mod annotator;
pub mod insights;
pub mod prelude;

pub use annotator::ANNOTATOR_FOR_CLINICAL_DATA;
pub use insights::{INSIGHTS_FOR_MEDICAL_LITERATURE, Relationship};

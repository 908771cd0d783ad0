//! intake-core: Referral case translation logic
//!
//! This crate turns an untrusted inbound JSON payload into the property
//! schema of a Notion database record. It is pure and network-free:
//! field resolution, type coercion, identifier normalization, required
//! field validation, and property-set construction all live here.

pub mod error;
pub mod fields;
pub mod normalize;
pub mod properties;
pub mod submission;
pub mod validate;

pub use error::InvalidDatabaseId;
pub use fields::{FieldSpec, labels};
pub use normalize::normalize_database_id;
pub use properties::{PropertySet, PropertyValue, build_properties};
pub use submission::CaseSubmission;
pub use validate::{REQUIRED_FIELDS, ValidationError, validate};

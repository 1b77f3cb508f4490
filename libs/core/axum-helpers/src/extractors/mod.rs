//! Custom extractors for axum handlers.
//!
//! These standardize rejection handling: a failed extraction produces the
//! same `{"error": ...}` body as every other client error.

pub mod uuid_path;
pub mod validated_form;

pub use uuid_path::UuidPath;
pub use validated_form::ValidatedForm;

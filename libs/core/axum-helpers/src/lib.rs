//! # Axum Helpers
//!
//! Shared utilities for the axum-based HTTP services in this workspace.
//!
//! ## Modules
//!
//! - **[`errors`]**: `AppError` and the single-field `{"error": ...}` JSON body
//! - **[`extractors`]**: custom extractors (UUID path, validated forms)
//! - **[`server`]**: server startup, health endpoint, graceful shutdown

pub mod errors;
pub mod extractors;
pub mod server;

// Re-export error types
pub use errors::{AppError, ErrorResponse};

// Re-export extractors
pub use extractors::{UuidPath, ValidatedForm};

// Re-export server helpers
pub use server::{create_app, health_router, shutdown_signal, HealthResponse};

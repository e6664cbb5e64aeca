//! # lightsail-core
//!
//! Typed model layer for the Lightsail JSON API.
//!
//! This crate provides:
//! - A generic closed-set mapper between enum symbols and their wire strings
//! - Every enumeration the modeled actions use, plus the full action catalog
//! - Nested descriptors and typed request/result shapes
//! - Client-side validation of documented field constraints
//! - The `x-amz-json-1.1` envelope and service error decoding
//!
//! No network I/O happens here; callers bring their own transport.

pub mod wire;

pub mod actions;
pub mod api;
pub mod enums;
pub mod epoch_seconds;
pub mod errors;
pub mod models;
pub mod protocol;
pub mod service_error;
pub mod validate;

pub use actions::ActionName;
pub use errors::CoreError;
pub use protocol::{
    CONTENT_TYPE, LightsailRequest, Paginated, RequestEnvelope, TARGET_PREFIX, decode_response,
    encode_request,
};
pub use service_error::{ServiceError, ServiceErrorKind};
pub use validate::Validate;
pub use wire::{WireEnum, WireValueError};

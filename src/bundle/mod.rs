//! Bundle Module
//!
//! A bundle is a client-submitted batch of intelligence objects. This module
//! decodes the wire payload into the bundle shape and validates each object
//! through the schema validator collaborator before ingestion is triggered.
//!
//! The objects themselves stay opaque (`serde_json::Value`): the exchange
//! protocol moves them, it does not interpret them.

pub mod types;
pub mod validator;

pub use types::{Bundle, BundleError};
pub use validator::{SchemaValidator, StructuralValidator};

#[cfg(test)]
mod tests;

//! Threat-Intelligence Exchange Server Library
//!
//! This library crate defines the core modules of the exchange server.
//! It serves as the foundation for the binary executable (`main.rs`).
//!
//! ## Architecture Modules
//! The system is composed of loosely coupled subsystems:
//!
//! - **`pagination`**: The item-range protocol. Parses and serializes the textual
//!   `Range`/`Content-Range` headers used by every list endpoint.
//! - **`bundle`**: The submission envelope. Decodes posted bytes into an ordered
//!   set of opaque intelligence objects and validates them against a schema
//!   validator collaborator.
//! - **`status`**: The per-submission progress ledger. Tracks success, failure and
//!   pending counts under a monotonic invariant while ingestion runs in the
//!   background.
//! - **`access`**: The write-admission layer. Resolves (user, collection)
//!   capability pairs and extracts an explicit identity from the request.
//! - **`objects`**: The object store collaborator and the read/list endpoints,
//!   including windowed (`206 Partial Content`) responses.
//! - **`ingest`**: The ingestion orchestrator. Composes the modules above to
//!   accept a submission, answer the client immediately, and drive asynchronous
//!   persistence through a detached task.

pub mod access;
pub mod bundle;
pub mod config;
pub mod errors;
pub mod ingest;
pub mod media;
pub mod objects;
pub mod pagination;
pub mod status;

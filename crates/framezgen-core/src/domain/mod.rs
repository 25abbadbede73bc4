//! Domain layer: the manifest and its invariants.
//!
//! Everything in this module is plain data with validation. No I/O happens
//! here; materializing a manifest on disk is the application layer's job.

pub mod error;
pub mod manifest;

pub use error::DomainError;
pub use manifest::{DirectorySpec, FileSpec, Manifest};

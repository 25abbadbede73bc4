//! Infrastructure adapters for Framezgen.
//!
//! Implements the driven ports declared in `framezgen-core`:
//! - [`filesystem::LocalFilesystem`] — production, backed by `std::fs`.
//! - [`filesystem::MemoryFilesystem`] — in-memory fake for tests.
//! - [`reporter::NullReporter`] — discards progress events.
//!
//! Also home to [`builtin_manifest::framez_manifest`], the fixed literal
//! manifest this tool exists to reproduce.

pub mod builtin_manifest;
pub mod filesystem;
pub mod reporter;

pub use builtin_manifest::framez_manifest;
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use reporter::NullReporter;

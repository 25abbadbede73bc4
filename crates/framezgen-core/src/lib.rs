//! Framezgen Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Framezgen
//! project scaffolding tool, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │         framezgen-cli (CLI)             │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Service             │
//! │          (ScaffoldGenerator)            │
//! │     Sequences the generation run        │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │      (Driven: Filesystem, Reporter)     │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    framezgen-adapters (Infrastructure)  │
//! │  (LocalFilesystem, MemoryFilesystem)    │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Data)         │
//! │   (Manifest, DirectorySpec, FileSpec)   │
//! │        No External Dependencies         │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use framezgen_core::prelude::*;
//!
//! // Build a manifest (normally the built-in one from framezgen-adapters)
//! let manifest = Manifest::new()
//!     .with_directory("src/components")
//!     .with_file("README.md", "# My Project\n")
//!     .with_placeholder("src/components/.gitkeep");
//! assert!(manifest.validate().is_ok());
//! ```
//!
//! To materialize a manifest, construct a [`application::ScaffoldGenerator`]
//! with a `Filesystem` and a `Reporter` implementation (both provided by
//! `framezgen-adapters` / the CLI crate) and call `run`.

// Domain layer (stable, well-defined API)
pub mod domain;

// Application layer (run sequencing)
pub mod application;

// Unified error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        RunSummary, ScaffoldGenerator,
        ports::{Filesystem, Reporter},
    };
    pub use crate::domain::{DirectorySpec, FileSpec, Manifest};
    pub use crate::error::{FramezError, FramezResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

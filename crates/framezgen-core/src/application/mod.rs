//! Application layer: the generator service and the ports it drives.
//!
//! The service in this module owns the run sequencing; the traits in
//! [`ports`] define what it needs from the outside world. Implementations
//! live in `framezgen-adapters` (filesystem) and `framezgen-cli` (reporter).

pub mod error;
pub mod generator;
pub mod ports;

pub use error::ApplicationError;
pub use generator::{RunSummary, ScaffoldGenerator};

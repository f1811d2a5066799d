//! Futhark build staging
//!
//! Copies generated and hand-written Futhark sources into a single build
//! directory, then runs the Futhark compiler in library mode over it.

pub mod error;
pub mod mapping;
pub mod request;
pub mod staging;
pub mod invoke;
pub mod driver;

pub use error::{StageError, Result};
pub use mapping::SourceMapping;
pub use request::{Backend, BuildRequest};
pub use staging::stage_sources;
pub use invoke::FutharkInvocation;
pub use driver::{Driver, BuildOutcome};

//! Infrastructure layer: process-environment boundary
//!
//! This layer implements the I/O boundary traits the rest of the crate reads through.

pub mod traits;

pub use traits::{MapEnv, ProcessEnv, RealProcessEnv};

//! Application layer: the script runner and its console
//!
//! This layer orchestrates domain logic and writes through an injected sink.

pub mod console;
pub mod error;
pub mod error_ext;
pub mod runner;

pub use console::Console;
pub use error::{ApplicationError, ApplicationResult};
pub use error_ext::IoResultExt;
pub use runner::Runner;

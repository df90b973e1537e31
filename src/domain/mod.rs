//! Domain layer: invocation model, trace levels and value predicates
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod entities;
pub mod error;
pub mod trace;
pub mod validate;

pub use entities::*;
pub use error::DomainError;
pub use trace::{TraceCategory, TraceLevel};
pub use validate::{is_alpha, is_numeric};

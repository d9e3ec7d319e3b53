//! poe-core: stable foundation for the POE cascade workspace.
//!
//! Contains:
//! - units (uom SI types + constructors for the electrical quantities)
//! - numeric (Real + tolerances + float helpers)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{PoeError, PoeResult};
pub use numeric::*;
pub use units::*;

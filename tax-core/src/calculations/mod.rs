//! Tax calculation modules.
//!
//! The bracket walk is generic over [`crate::models::TaxSchedule`] so each
//! jurisdiction is pure configuration data rather than its own code path.

pub mod common;
pub mod progressive;

pub use progressive::progressive_tax;

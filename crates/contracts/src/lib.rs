//! # Contracts
//!
//! Frozen interface contracts, defining inter-module data structures and traits.
//! All business crates can only depend on this crate, reverse dependencies are prohibited.
//!
//! ## Data Model
//! - `LogRecord` is what a sink receives: optional message, optional opaque payload
//! - `LogRequest` is what a caller hands the hub: a record plus an optional category filter
//! - `LogSink` is the capability every logging backend implements

mod error;
mod record;
mod sink;

pub use error::*;
pub use record::*;
pub use sink::*;

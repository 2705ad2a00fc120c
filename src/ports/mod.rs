//! Port traits. API boundaries for the hexagon.
//!
//! - Outbound: Called by application into infrastructure

pub mod outbound;

pub use outbound::{RawRecord, RecordRepo};

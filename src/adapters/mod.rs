//! Infrastructure adapters. Implement outbound ports.
//!
//! Filesystem record collections. Map errors to DomainError.

pub mod persistence;

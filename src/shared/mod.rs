//! Cross-cutting concerns shared by the binary and the services.

pub mod config;

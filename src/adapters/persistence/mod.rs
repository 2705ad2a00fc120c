//! Persistence adapters.

pub mod jsonl_repo;

pub use jsonl_repo::JsonlRepo;

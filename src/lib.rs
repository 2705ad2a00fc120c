//! zwerm-schema: typed records of the Zwerm chatbot platform contract.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod shared;
pub mod usecases;

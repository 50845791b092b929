// src/utils/mod.rs
//! Helper functions shared by the message types.

pub mod serialization;
pub mod validation;

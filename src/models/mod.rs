// src/models/mod.rs
//! Message data structures.

pub mod candidate;
pub mod ecdh_request;
pub mod enums;
pub mod proof;

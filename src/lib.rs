// src/lib.rs

//! # DID ECDH Request
//!
//! Data contract for the ECDH key-exchange request of a DID credential
//! exchange. A client sends its identifier, a nonce, the curve and its
//! public key, optionally with exchange candidates and a proof.
//!
//! ## Two-phase handling
//! 1. **Decode**: [`EcdhRequest::decode`] maps a JSON payload onto the field
//!    set and rejects malformed JSON or an unknown curve.
//! 2. **Validate**: [`Validate::validate`] enforces required fields and the
//!    nested `candidate` / `proof` rules.
//!
//! Key agreement and proof verification are left to the handshake handler
//! that consumes a validated request.
//!
//! ```
//! use did_ecdh_request::{EccCurveType, EcdhRequest, Validate};
//!
//! let payload = br#"{"client":"c1","clientNonce":"n1","curve":"Secp256r1","publicKey":"04ab"}"#;
//! let request = EcdhRequest::decode(payload).unwrap();
//! assert_eq!(request.curve, Some(EccCurveType::Secp256r1));
//! assert!(request.validate().is_ok());
//! ```

pub mod config;
pub mod errors;
pub mod models;
pub mod utils;

pub use errors::{DecodeError, ValidationError};
pub use models::candidate::Candidate;
pub use models::ecdh_request::EcdhRequest;
pub use models::enums::{EccCurveType, ProofPurpose, ProofType, SymmetricCipherType};
pub use models::proof::Proof;
pub use utils::validation::Validate;

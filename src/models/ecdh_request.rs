// src/models/ecdh_request.rs
//! ECDH key-exchange request data model.
//!
//! The message a client sends to open a shared-secret negotiation with the
//! server. Decoding and validation are separate passes: [`EcdhRequest::decode`]
//! only maps JSON onto the field set, and [`Validate::validate`] enforces the
//! required-field invariants afterwards.

use crate::errors::{DecodeError, ValidationError};
use crate::models::candidate::Candidate;
use crate::models::enums::EccCurveType;
use crate::models::proof::Proof;
use crate::utils::serialization::{from_json_bytes, from_object, to_json_bytes, to_json_pretty};
use crate::utils::validation::{require, require_text, validate_nested, Validate};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// An ECDH request as carried on the wire.
///
/// Required fields are optional in the type so that a payload missing one of
/// them still decodes and can be rejected by validation with the field name.
///
/// # Wire Format
/// ```json
/// {
///   "client": "did:omn:client",
///   "clientNonce": "mHk2dNzAq3e5",
///   "curve": "Secp256r1",
///   "publicKey": "mAj9b...",
///   "candidate": { "ciphers": ["AES-256-CBC"] },
///   "proof": { ... }
/// }
/// ```
/// Absent optional fields are omitted on encode.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EcdhRequest {
    /// Identifier of the requesting party
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client: Option<String>,

    /// Client-generated nonce
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_nonce: Option<String>,

    /// Curve the public key belongs to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub curve: Option<EccCurveType>,

    /// Encoded ECDH public key, opaque to this crate
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_key: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub candidate: Option<Candidate>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proof: Option<Proof>,
}

impl EcdhRequest {
    /// Root name used when reporting field paths to the client.
    pub const MESSAGE_NAME: &'static str = "reqEcdh";

    /// Creates a request with all required fields set and no candidate or proof.
    pub fn new(
        client: impl Into<String>,
        client_nonce: impl Into<String>,
        curve: EccCurveType,
        public_key: impl Into<String>,
    ) -> Self {
        EcdhRequest {
            client: Some(client.into()),
            client_nonce: Some(client_nonce.into()),
            curve: Some(curve),
            public_key: Some(public_key.into()),
            candidate: None,
            proof: None,
        }
    }

    pub fn with_candidate(mut self, candidate: Candidate) -> Self {
        self.candidate = Some(candidate);
        self
    }

    pub fn with_proof(mut self, proof: Proof) -> Self {
        self.proof = Some(proof);
        self
    }

    /// Decodes a request from JSON bytes.
    ///
    /// # Errors
    /// - `DecodeError::UnknownEnumValue` if `curve` is a string naming no known curve
    /// - `DecodeError::MalformedJson` for syntax errors, a non-object top level,
    ///   or fields of the wrong JSON type
    ///
    /// Unknown top-level keys are ignored. Required-field presence is not
    /// checked here.
    pub fn decode(data: &[u8]) -> Result<Self, DecodeError> {
        let object: Map<String, Value> = from_json_bytes(data)?;

        // Resolve the curve by name first so an unrecognised value is reported
        // as such rather than as a generic shape error.
        if let Some(Value::String(curve)) = object.get("curve") {
            curve.parse::<EccCurveType>()?;
        }

        Ok(from_object(object)?)
    }

    /// Encodes the request as compact JSON. Performs no validation.
    pub fn encode(&self) -> Result<Vec<u8>, serde_json::Error> {
        to_json_bytes(self)
    }

    /// Encodes the request as indented JSON. Performs no validation.
    pub fn encode_pretty(&self) -> Result<String, serde_json::Error> {
        to_json_pretty(self)
    }
}

impl Validate for EcdhRequest {
    /// Checks `client`, `clientNonce`, `curve` and `publicKey` in that order,
    /// then the nested `candidate` and `proof` when present.
    fn validate(&self) -> Result<(), ValidationError> {
        require_text("client", self.client.as_deref())?;
        require_text("clientNonce", self.client_nonce.as_deref())?;
        require("curve", self.curve.as_ref())?;
        require_text("publicKey", self.public_key.as_deref())?;
        validate_nested("candidate", self.candidate.as_ref())?;
        validate_nested("proof", self.proof.as_ref())?;
        Ok(())
    }
}

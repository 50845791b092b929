// src/models/proof.rs
//! Cryptographic proof data model.
//!
//! Defines the proof object attached to DID messages. This crate only checks
//! the proof's shape; signature verification against the resolved
//! verification method happens in the handshake handler.

use crate::errors::ValidationError;
use crate::models::enums::{ProofPurpose, ProofType};
use crate::utils::validation::{require, require_text, Validate};
use chrono::DateTime;
use serde::{Deserialize, Serialize};

/// A proof over the enclosing message.
///
/// # Fields
/// - `proof_type`: signature suite used to produce `proof_value`
/// - `created`: RFC 3339 creation time, kept verbatim
/// - `verification_method`: DID URL of the signing key
/// - `proof_purpose`: verification relationship of that key
/// - `proof_value` / `proof_value_list`: encoded signature(s)
///
/// # Wire Format
/// ```json
/// {
///   "type": "Secp256r1Signature2018",
///   "created": "2024-09-10T05:42:13Z",
///   "verificationMethod": "did:omn:client?versionId=1#keyagree",
///   "proofPurpose": "keyAgreement",
///   "proofValue": "z3aq9..."
/// }
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Proof {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub proof_type: Option<ProofType>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verification_method: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proof_purpose: Option<ProofPurpose>,

    /// Single signature value
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proof_value: Option<String>,

    /// Multiple signature values, used instead of `proof_value` by multi-signer proofs
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proof_value_list: Option<Vec<String>>,
}

impl Proof {
    /// Creates a single-value proof.
    pub fn new(
        proof_type: ProofType,
        created: impl Into<String>,
        verification_method: impl Into<String>,
        proof_purpose: ProofPurpose,
        proof_value: impl Into<String>,
    ) -> Self {
        Proof {
            proof_type: Some(proof_type),
            created: Some(created.into()),
            verification_method: Some(verification_method.into()),
            proof_purpose: Some(proof_purpose),
            proof_value: Some(proof_value.into()),
            proof_value_list: None,
        }
    }

    fn has_value(&self) -> bool {
        let single = self.proof_value.as_deref().is_some_and(|v| !v.is_empty());
        let list = self.proof_value_list.as_ref().is_some_and(|l| !l.is_empty());
        single || list
    }
}

impl Validate for Proof {
    fn validate(&self) -> Result<(), ValidationError> {
        require("type", self.proof_type.as_ref())?;
        require_text("created", self.created.as_deref())?;
        require_text("verificationMethod", self.verification_method.as_deref())?;
        require("proofPurpose", self.proof_purpose.as_ref())?;

        if let Some(created) = self.created.as_deref() {
            DateTime::parse_from_rfc3339(created).map_err(|e| ValidationError::InvalidValue {
                field: "created",
                reason: e.to_string(),
            })?;
        }

        if !self.has_value() {
            return Err(ValidationError::MissingField("proofValue"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_proof() -> Proof {
        Proof::new(
            ProofType::Secp256r1Signature2018,
            "2024-09-10T05:42:13Z",
            "did:omn:client?versionId=1#keyagree",
            ProofPurpose::KeyAgreement,
            "z3aq9KbGWfzHh7hQ",
        )
    }

    #[test]
    fn test_valid_proof() {
        assert!(sample_proof().validate().is_ok());
    }

    #[test]
    fn test_missing_fields_reported_in_order() {
        let empty = Proof::default();
        assert_eq!(empty.validate(), Err(ValidationError::MissingField("type")));

        let mut proof = sample_proof();
        proof.verification_method = Some(String::new());
        assert_eq!(
            proof.validate(),
            Err(ValidationError::MissingField("verificationMethod"))
        );

        let mut proof = sample_proof();
        proof.proof_purpose = None;
        assert_eq!(proof.validate(), Err(ValidationError::MissingField("proofPurpose")));
    }

    #[test]
    fn test_created_must_be_rfc3339() {
        let mut proof = sample_proof();
        proof.created = Some("10/09/2024".to_string());
        match proof.validate() {
            Err(ValidationError::InvalidValue { field, .. }) => assert_eq!(field, "created"),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_value_list_satisfies_value_requirement() {
        let mut proof = sample_proof();
        proof.proof_value = None;
        assert_eq!(proof.validate(), Err(ValidationError::MissingField("proofValue")));

        proof.proof_value_list = Some(vec!["zSig1".to_string(), "zSig2".to_string()]);
        assert!(proof.validate().is_ok());
    }

    #[test]
    fn test_wire_keys() {
        let json = serde_json::to_value(sample_proof()).unwrap();
        assert_eq!(json["type"], "Secp256r1Signature2018");
        assert_eq!(json["verificationMethod"], "did:omn:client?versionId=1#keyagree");
        assert_eq!(json["proofPurpose"], "keyAgreement");
        assert!(json.get("proofValueList").is_none());
    }
}

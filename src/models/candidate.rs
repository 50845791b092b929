// src/models/candidate.rs
//! Exchange candidates offered alongside an ECDH request.

use crate::errors::ValidationError;
use crate::models::enums::SymmetricCipherType;
use crate::utils::validation::Validate;
use serde::{Deserialize, Serialize};

/// Symmetric ciphers the client can accept once the shared secret is agreed.
///
/// The responder picks one of `ciphers` for the session; the order carries
/// the client's preference.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    /// Acceptable ciphers, most preferred first
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ciphers: Option<Vec<SymmetricCipherType>>,
}

impl Candidate {
    pub fn new(ciphers: Vec<SymmetricCipherType>) -> Self {
        Candidate { ciphers: Some(ciphers) }
    }
}

impl Validate for Candidate {
    fn validate(&self) -> Result<(), ValidationError> {
        match &self.ciphers {
            Some(ciphers) if !ciphers.is_empty() => Ok(()),
            _ => Err(ValidationError::MissingField("ciphers")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidate_requires_ciphers() {
        assert_eq!(
            Candidate::default().validate(),
            Err(ValidationError::MissingField("ciphers"))
        );
        assert_eq!(
            Candidate::new(vec![]).validate(),
            Err(ValidationError::MissingField("ciphers"))
        );
        assert!(Candidate::new(vec![SymmetricCipherType::Aes256Cbc]).validate().is_ok());
    }

    #[test]
    fn test_candidate_preserves_order_on_wire() {
        let candidate = Candidate::new(vec![
            SymmetricCipherType::Aes256Cbc,
            SymmetricCipherType::Aes128Cbc,
        ]);
        let json = serde_json::to_value(&candidate).unwrap();
        assert_eq!(json, serde_json::json!({ "ciphers": ["AES-256-CBC", "AES-128-CBC"] }));
    }
}

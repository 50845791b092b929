// src/models/enums.rs
//! Closed enumerations shared with the handshake handler.
//!
//! Wire names are fixed and case-sensitive. Adding a variant here must be
//! mirrored by the peer that consumes the request.

use crate::errors::DecodeError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Named elliptic curve an ECDH public key belongs to.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EccCurveType {
    Secp256k1,
    Secp256r1,
}

impl EccCurveType {
    /// Every recognised curve, in wire order.
    pub const ALL: [EccCurveType; 2] = [EccCurveType::Secp256k1, EccCurveType::Secp256r1];

    /// Wire name of the curve.
    pub fn as_str(&self) -> &'static str {
        match self {
            EccCurveType::Secp256k1 => "Secp256k1",
            EccCurveType::Secp256r1 => "Secp256r1",
        }
    }
}

impl fmt::Display for EccCurveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EccCurveType {
    type Err = DecodeError;

    /// Resolves an exact wire name. There is no fallback curve.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EccCurveType::ALL
            .into_iter()
            .find(|curve| curve.as_str() == s)
            .ok_or_else(|| DecodeError::UnknownEnumValue {
                field: "curve",
                value: s.to_string(),
            })
    }
}

/// Symmetric cipher a client is willing to use once the shared secret exists.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SymmetricCipherType {
    #[serde(rename = "AES-128-CBC")]
    Aes128Cbc,
    #[serde(rename = "AES-128-ECB")]
    Aes128Ecb,
    #[serde(rename = "AES-256-CBC")]
    Aes256Cbc,
    #[serde(rename = "AES-256-ECB")]
    Aes256Ecb,
}

/// Signature suite of a [`Proof`](crate::models::proof::Proof).
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProofType {
    RsaSignature2018,
    Secp256k1Signature2018,
    Secp256r1Signature2018,
}

/// Verification relationship the proof key is used under.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum ProofPurpose {
    AssertionMethod,
    Authentication,
    KeyAgreement,
    CapabilityInvocation,
    CapabilityDelegation,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_curve_from_str_exact_match() {
        assert_eq!("Secp256r1".parse::<EccCurveType>().unwrap(), EccCurveType::Secp256r1);
        assert_eq!("Secp256k1".parse::<EccCurveType>().unwrap(), EccCurveType::Secp256k1);
    }

    #[test]
    fn test_curve_from_str_is_case_sensitive() {
        let err = "secp256r1".parse::<EccCurveType>().unwrap_err();
        match err {
            DecodeError::UnknownEnumValue { field, value } => {
                assert_eq!(field, "curve");
                assert_eq!(value, "secp256r1");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_serde_names_match_display() {
        for curve in EccCurveType::ALL {
            let json = serde_json::to_string(&curve).unwrap();
            assert_eq!(json, format!("\"{}\"", curve));
        }
    }

    #[test]
    fn test_cipher_and_purpose_wire_names() {
        assert_eq!(
            serde_json::to_string(&SymmetricCipherType::Aes256Cbc).unwrap(),
            "\"AES-256-CBC\""
        );
        assert_eq!(
            serde_json::to_string(&ProofPurpose::KeyAgreement).unwrap(),
            "\"keyAgreement\""
        );
        let parsed: ProofType = serde_json::from_str("\"Secp256r1Signature2018\"").unwrap();
        assert_eq!(parsed, ProofType::Secp256r1Signature2018);
    }
}

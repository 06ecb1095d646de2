use crate::callback::CallbackFields;
use crate::chain;
use crate::config::Configuration;
use crate::error::PaymentError;
use crate::key::{self, BinaryKey};
use crate::signer;
use serde::Serialize;

/// Semantic classification of a verified callback.
#[derive(Debug, Serialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Success,
    Cancelled,
    Failure,
}

/// A trust verdict paired with the outcome. `outcome` is only meaningful
/// when `signature_verified` is true; an unverified callback is always a
/// `Failure` no matter what response code it claims.
#[derive(Debug, Serialize, PartialEq, Eq, Clone, Copy)]
pub struct Verification {
    pub outcome: Outcome,
    pub signature_verified: bool,
}

impl Verification {
    fn unverified() -> Self {
        Self {
            outcome: Outcome::Failure,
            signature_verified: false,
        }
    }
}

/// Authenticates bank callbacks against the merchant configuration. The
/// signing key is derived once at construction, so configuration problems
/// surface at startup rather than on the first callback.
pub struct ResponseVerifier {
    config: Configuration,
    key: BinaryKey,
}

impl ResponseVerifier {
    pub fn new(config: Configuration) -> Result<Self, PaymentError> {
        let key = key::derive(&config.hmac_key)?;
        Ok(Self { config, key })
    }

    /// Checks the callback's MAC and classifies its response code. Total:
    /// callbacks come from an untrusted network party, so anything
    /// malformed, incomplete, or tampered classifies as an unverified
    /// failure instead of propagating an error.
    ///
    /// The response code is consulted only after the signature matches;
    /// spoofing `code-retour` without the key cannot force a Success or
    /// Cancelled classification.
    pub fn verify(&self, fields: &CallbackFields) -> Verification {
        if fields.mac.is_empty() {
            return Verification::unverified();
        }
        let chain = chain::response_chain(&self.config, fields);
        let expected = match signer::sign(&self.key, &chain) {
            Ok(digest) => digest,
            Err(_) => return Verification::unverified(),
        };
        if !expected.eq_ignore_ascii_case(&fields.mac) {
            return Verification::unverified();
        }

        let outcome = match fields.code_retour.as_str() {
            "Annulation" => Outcome::Cancelled,
            "payetest" | "paiement" => Outcome::Success,
            _ => Outcome::Failure,
        };
        Verification {
            outcome,
            signature_verified: true,
        }
    }
}

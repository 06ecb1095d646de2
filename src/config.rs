use serde::Deserialize;

/// Merchant-side settings issued by the bank. Loaded once at startup and
/// passed by reference into every signing and verification call; nothing in
/// this crate mutates it afterwards.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct Configuration {
    /// Terminal number (TPE) assigned by the bank.
    pub tpe: String,
    /// Protocol version sent with outbound requests, e.g. "3.0".
    pub version: String,
    /// Merchant/company identifier.
    pub societe: String,
    /// Default currency code, e.g. "EUR".
    pub devise: String,
    /// Raw signing secret as delivered by the bank: 40 characters of a
    /// hex-like alphabet whose tail may carry the bank's encoding quirk.
    pub hmac_key: String,
    /// Payment endpoint the outbound form posts to.
    pub target_url: String,
    pub url_retour: String,
    pub url_retour_ok: String,
    pub url_retour_err: String,
}

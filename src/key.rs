use crate::error::PaymentError;

/// The binary HMAC key derived from the configured secret. Always 20 bytes
/// when produced by [`derive`]; arbitrary lengths are accepted so the signer
/// stays generic over key size.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct BinaryKey(Vec<u8>);

impl BinaryKey {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl From<Vec<u8>> for BinaryKey {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

/// Turns the configured secret into the binary signing key.
///
/// The bank delivers a 40-character hex key, but an intermediate encoding
/// step on their side may corrupt the last two characters into a non-hex
/// representation. The fix-up below (shift codepoints in (70, 97) down by
/// 23, or zero the tail after an 'M' marker) restores the original hex
/// before decoding. The thresholds are protocol constants defined solely by
/// agreement with the bank's verifier; do not adjust them.
pub fn derive(secret: &str) -> Result<BinaryKey, PaymentError> {
    let chars: Vec<char> = secret.chars().collect();
    if chars.len() < 40 {
        return Err(PaymentError::SecretTooShort(chars.len()));
    }

    let (c0, c1) = (chars[38], chars[39]);
    let code = c0 as u32;

    let mut hex_key: String = chars[0..38].iter().collect();
    hex_key.reserve(2);
    if code > 70 && code < 97 {
        // 23 below the corrupted codepoint lies the original hex digit
        let fixed = char::from_u32(code - 23).unwrap_or(c0);
        hex_key.push(fixed);
        hex_key.push(c1);
    } else if c1 == 'M' {
        hex_key.push(c0);
        hex_key.push('0');
    } else {
        hex_key.push(c0);
        hex_key.push(c1);
    }

    let bytes = hex::decode(&hex_key)?;
    Ok(BinaryKey(bytes))
}

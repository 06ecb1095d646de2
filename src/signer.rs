use crate::error::PaymentError;
use crate::key::BinaryKey;
use hmac::{Hmac, Mac};
use sha1::Sha1;

type HmacSha1 = Hmac<Sha1>;

/// Computes the HMAC-SHA1 digest of a chain, rendered as 40 lowercase hex
/// characters. Keys of any length are accepted; the primitive hashes keys
/// longer than the 64-byte block size down first, per the standard.
pub fn sign(key: &BinaryKey, chain: &str) -> Result<String, PaymentError> {
    let mut mac = HmacSha1::new_from_slice(key.as_bytes())?;
    mac.update(chain.as_bytes());
    Ok(hex::encode(mac.finalize().into_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;

    // RFC 2202 HMAC-SHA1 test vectors.

    #[test]
    fn test_rfc2202_case_1() {
        let key = BinaryKey::from(vec![0x0b; 20]);
        assert_eq!(
            sign(&key, "Hi There").unwrap(),
            "b617318655057264e28bc0b6fb378c8ef146be00"
        );
    }

    #[test]
    fn test_rfc2202_case_2() {
        let key = BinaryKey::from(b"Jefe".to_vec());
        assert_eq!(
            sign(&key, "what do ya want for nothing?").unwrap(),
            "effcdf6ae5eb2fa2d27416d5f184df9c259a7c79"
        );
    }

    #[test]
    fn test_rfc2202_key_larger_than_block_size() {
        let key = BinaryKey::from(vec![0xaa; 80]);
        assert_eq!(
            sign(&key, "Test Using Larger Than Block-Size Key - Hash Key First").unwrap(),
            "aa4ae5e15272d00e95705637ce8a3b55ed402112"
        );
    }

    #[test]
    fn test_sign_is_deterministic() {
        let key = BinaryKey::from(vec![0x0b; 20]);
        assert_eq!(
            sign(&key, "Hi There").unwrap(),
            sign(&key, "Hi There").unwrap()
        );
    }

    #[test]
    fn test_digest_is_lowercase_and_forty_chars() {
        let key = BinaryKey::from(vec![1, 2, 3]);
        let digest = sign(&key, "chain").unwrap();
        assert_eq!(digest.len(), 40);
        assert_eq!(digest, digest.to_lowercase());
    }
}

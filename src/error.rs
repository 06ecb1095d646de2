use thiserror::Error;

#[derive(Error, Debug)]
pub enum PaymentError {
    #[error("HMAC key must be at least 40 characters, got {0}")]
    SecretTooShort(usize),
    #[error("HMAC key is not valid hex after tail fix-up: {0}")]
    SecretNotHex(#[from] hex::FromHexError),
    #[error("invalid signing key: {0}")]
    InvalidKey(#[from] hmac::digest::InvalidLength),
    #[error("installment schedule takes at most 4 installments, got {0}")]
    TooManyInstallments(usize),
}

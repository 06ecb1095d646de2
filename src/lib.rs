pub mod callback;
pub mod chain;
pub mod config;
pub mod error;
pub mod form;
pub mod key;
pub mod request;
pub mod signer;
pub mod verifier;

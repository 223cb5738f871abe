//! Authentication for the itBit REST API
//!
//! This crate produces the signed headers required by itBit's private
//! endpoints: a monotonic per-client nonce, a millisecond timestamp, and an
//! HMAC-SHA512 signature over a canonical message.
//!
//! # Signing scheme
//!
//! For each private request itBit expects:
//!
//! 1. `message` = nonce concatenated with the JSON array
//!    `[method, uri, body, nonce, timestamp]` (all strings, no whitespace).
//! 2. `digest` = SHA-256 of `message`, kept as raw bytes.
//! 3. `signature` = base64(HMAC-SHA512(secret, uri + digest)).
//!
//! The headers are `Authorization: {key}:{signature}`, `X-Auth-Timestamp`,
//! and `X-Auth-Nonce`.
//!
//! # Example
//!
//! ```no_run
//! use itbit_auth::{Credentials, RequestSigner};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let creds = Credentials::from_env()?;
//!     let signer = RequestSigner::new(creds)?;
//!
//!     let headers = signer.sign_request(
//!         "GET",
//!         "https://api.itbit.com/v1/wallets?userId=123",
//!         "",
//!     )?;
//!     println!("{}", headers.authorization);
//!
//!     Ok(())
//! }
//! ```

mod credentials;
mod error;
mod nonce;
mod signer;

pub use credentials::Credentials;
pub use error::{AuthError, AuthResult};
pub use nonce::NonceCounter;
pub use signer::{AuthHeaders, RequestSigner, HEADER_NONCE, HEADER_TIMESTAMP};

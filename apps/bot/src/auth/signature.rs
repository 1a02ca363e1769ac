//! Ed25519 verification of inbound interaction requests.
//!
//! The platform signs `timestamp || raw_body` with the application's key and
//! sends the signature and timestamp as hex/text headers. Anything that does
//! not verify against the configured public key is rejected before parsing.

use ed25519_dalek::{Signature, VerifyingKey, PUBLIC_KEY_LENGTH};

use crate::error::AppError;
use crate::errors::ErrorCode;

pub const SIGNATURE_HEADER: &str = "X-Signature-Ed25519";
pub const TIMESTAMP_HEADER: &str = "X-Signature-Timestamp";

#[derive(Debug, Clone)]
pub struct SignatureVerifier {
    key: VerifyingKey,
}

impl SignatureVerifier {
    pub fn new(key: VerifyingKey) -> Self {
        Self { key }
    }

    /// Parse the hex-encoded public key from the developer portal.
    pub fn from_hex(public_key: &str) -> Result<Self, AppError> {
        let bytes = hex::decode(public_key.trim())
            .map_err(|e| AppError::config(format!("PUBLIC_KEY is not valid hex: {e}")))?;
        let bytes: [u8; PUBLIC_KEY_LENGTH] = bytes.try_into().map_err(|b: Vec<u8>| {
            AppError::config(format!(
                "PUBLIC_KEY must be {PUBLIC_KEY_LENGTH} bytes, got {}",
                b.len()
            ))
        })?;
        let key = VerifyingKey::from_bytes(&bytes)
            .map_err(|e| AppError::config(format!("PUBLIC_KEY is not a valid ed25519 key: {e}")))?;
        Ok(Self { key })
    }

    pub fn verify(
        &self,
        signature: Option<&str>,
        timestamp: Option<&str>,
        body: &[u8],
    ) -> Result<(), AppError> {
        let (Some(signature), Some(timestamp)) = (signature, timestamp) else {
            return Err(AppError::unauthorized(
                ErrorCode::MissingSignature,
                "Request signature headers are missing",
            ));
        };

        let signature = hex::decode(signature)
            .ok()
            .and_then(|raw| Signature::from_slice(&raw).ok())
            .ok_or_else(invalid)?;

        let mut message = Vec::with_capacity(timestamp.len() + body.len());
        message.extend_from_slice(timestamp.as_bytes());
        message.extend_from_slice(body);

        self.key
            .verify_strict(&message, &signature)
            .map_err(|_| invalid())
    }
}

fn invalid() -> AppError {
    AppError::unauthorized(ErrorCode::InvalidSignature, "Request signature does not verify")
}

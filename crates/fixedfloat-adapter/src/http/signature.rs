/*
[INPUT]:  Raw request body bytes and API secret
[OUTPUT]: Hex HMAC-SHA256 signature (X-API-SIGN header)
[POS]:    HTTP layer - request signing for every endpoint
[UPDATE]: When changing signing algorithm or header format
*/

use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::http::{FixedFloatError, Result};

type HmacSha256 = Hmac<Sha256>;

/// Signs HTTP request bodies with the account API secret
#[derive(Clone)]
pub struct RequestSigner {
    secret: Vec<u8>,
}

impl RequestSigner {
    /// Create a new request signer keyed by the API secret
    pub fn new(secret: impl AsRef<[u8]>) -> Self {
        Self {
            secret: secret.as_ref().to_vec(),
        }
    }

    /// Sign a request body
    ///
    /// Returns the lowercase hex HMAC-SHA256 of `body` under the secret.
    pub fn sign(&self, body: &[u8]) -> Result<String> {
        let mut mac = HmacSha256::new_from_slice(&self.secret)
            .map_err(|e| FixedFloatError::Config(format!("Failed to create HMAC: {e}")))?;
        mac.update(body);
        Ok(hex::encode(mac.finalize().into_bytes()))
    }
}

impl std::fmt::Debug for RequestSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestSigner")
            .field("secret", &"<redacted>")
            .finish()
    }
}

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use rsa::pkcs8::EncodePublicKey;
use rsa::RsaPublicKey;
use sha2::{Digest, Sha256};

use super::error::{KeygenError, Result};

/// Base64 SHA-256 digest of the SubjectPublicKeyInfo DER of `public_key`
pub fn public_key_fingerprint(public_key: &RsaPublicKey) -> Result<String> {
    let der = public_key
        .to_public_key_der()
        .map_err(|e| KeygenError::IllegalState(format!("failed to encode public key: {}", e)))?;

    let mut hasher = Sha256::new();
    hasher.update(der.as_bytes());
    let hash = hasher.finalize();

    Ok(BASE64.encode(hash))
}

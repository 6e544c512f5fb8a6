use rsa::pkcs8::der::pem;
use rsa::pkcs8::{DecodePrivateKey, DecodePublicKey};
use rsa::{RsaPrivateKey, RsaPublicKey};
use std::fs;
use std::path::Path;
use zeroize::Zeroizing;

use super::error::{KeygenError, Result};
use super::keys::{PRIVATE_KEY_LABEL, PUBLIC_KEY_LABEL};

/// Loads an `RSA PUBLIC KEY` PEM file written by the provider
pub fn load_public_key(path: &Path) -> Result<RsaPublicKey> {
    let der = read_pem(path, PUBLIC_KEY_LABEL)?;

    RsaPublicKey::from_public_key_der(&der).map_err(|e| invalid_key(path, e))
}

/// Loads an `RSA PRIVATE KEY` PEM file written by the provider
pub fn load_private_key(path: &Path) -> Result<RsaPrivateKey> {
    let der = read_pem(path, PRIVATE_KEY_LABEL)?;

    RsaPrivateKey::from_pkcs8_der(&der).map_err(|e| invalid_key(path, e))
}

// Returns the DER body of the single PEM block in `path`, which must carry `label`.
fn read_pem(path: &Path, label: &str) -> Result<Zeroizing<Vec<u8>>> {
    let contents = Zeroizing::new(fs::read(path).map_err(|source| KeygenError::io(path, source))?);

    let (found, der) = pem::decode_vec(&contents).map_err(|e| invalid_key(path, e))?;
    let der = Zeroizing::new(der);
    if found != label {
        return Err(invalid_key(
            path,
            format!("expected label {:?}, found {:?}", label, found),
        ));
    }
    Ok(der)
}

fn invalid_key(path: &Path, reason: impl ToString) -> KeygenError {
    KeygenError::InvalidKey {
        path: path.to_path_buf(),
        reason: reason.to_string(),
    }
}

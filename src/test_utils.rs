use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use std::path::PathBuf;
use tempfile::TempDir;

/// Scratch directory holding two not-yet-existing key destinations
pub struct Destinations {
    pub dir: TempDir,
    pub public_key: PathBuf,
    pub private_key: PathBuf,
}

/// Creates a test environment with an empty temporary directory
pub fn destinations() -> Destinations {
    let dir = tempfile::tempdir().unwrap();
    let public_key = dir.path().join("pub1.pem");
    let private_key = dir.path().join("priv1.pem");

    Destinations {
        dir,
        public_key,
        private_key,
    }
}

/// Decodes the Base64 body of a single PEM block carrying `label`
pub fn pem_body(pem: &str, label: &str) -> Option<Vec<u8>> {
    let begin = format!("-----BEGIN {}-----", label);
    let end = format!("-----END {}-----", label);

    let body = pem.trim_end().strip_prefix(&begin)?.strip_suffix(&end)?;
    let joined: String = body.lines().map(str::trim).collect();
    BASE64.decode(joined).ok()
}

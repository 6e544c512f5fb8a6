use rand::rngs::OsRng;
use rsa::pkcs8::der::pem::{self, LineEnding};
use rsa::pkcs8::{EncodePrivateKey, EncodePublicKey};
use rsa::{RsaPrivateKey, RsaPublicKey};
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use tracing::{debug, info};
use zeroize::Zeroizing;

use super::error::{KeygenError, Result};
use super::fingerprint::public_key_fingerprint;
use super::types::KeyFiles;

/// Modulus length of generated keys
pub const DEFAULT_KEY_BITS: usize = 1024;
pub const MIN_KEY_BITS: usize = 1024;
pub const MAX_KEY_BITS: usize = 4096;

pub const PUBLIC_KEY_LABEL: &str = "RSA PUBLIC KEY";
pub const PRIVATE_KEY_LABEL: &str = "RSA PRIVATE KEY";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum KeyKind {
    Public,
    Private,
}

impl KeyKind {
    fn name(self) -> &'static str {
        match self {
            KeyKind::Public => "public",
            KeyKind::Private => "private",
        }
    }

    #[cfg(unix)]
    fn mode(self) -> u32 {
        match self {
            KeyKind::Public => 0o644,
            KeyKind::Private => 0o600,
        }
    }
}

/// Creates RSA key pairs and writes them to PEM files.
///
/// The public key is an X.509 SubjectPublicKeyInfo and the private key a
/// PKCS#8 document, wrapped under the `RSA PUBLIC KEY` and `RSA PRIVATE KEY`
/// labels. Destinations are opened with exclusive create, so an existing file
/// is never overwritten. If the private key cannot be written, the public key
/// file created by the same call is removed again.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyPairProvider {
    key_bits: usize,
}

impl Default for KeyPairProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyPairProvider {
    pub fn new() -> Self {
        Self {
            key_bits: DEFAULT_KEY_BITS,
        }
    }

    /// Uses a modulus of `key_bits`, which must lie in
    /// `MIN_KEY_BITS..=MAX_KEY_BITS`.
    pub fn with_key_bits(key_bits: usize) -> Result<Self> {
        if !(MIN_KEY_BITS..=MAX_KEY_BITS).contains(&key_bits) {
            return Err(KeygenError::InvalidArgument(format!(
                "key size {} is outside {}..={} bits",
                key_bits, MIN_KEY_BITS, MAX_KEY_BITS
            )));
        }
        Ok(Self { key_bits })
    }

    pub fn key_bits(&self) -> usize {
        self.key_bits
    }

    /// Generates a key pair and writes the public and private halves to the
    /// given destinations, neither of which may exist yet.
    pub fn create_key_pair(
        &self,
        public_key_destination: &Path,
        private_key_destination: &Path,
    ) -> Result<KeyFiles> {
        // Argument checks come before any filesystem access
        check_not_empty(public_key_destination, KeyKind::Public)?;
        check_not_empty(private_key_destination, KeyKind::Private)?;
        if public_key_destination == private_key_destination {
            return Err(KeygenError::InvalidArgument(format!(
                "public and private key destinations are both {}",
                public_key_destination.display()
            )));
        }
        check_absent(public_key_destination)?;
        check_absent(private_key_destination)?;

        // Generate a new RSA key pair
        debug!(bits = self.key_bits, "generating RSA key pair");
        let private_key = RsaPrivateKey::new(&mut OsRng, self.key_bits)
            .map_err(|e| KeygenError::IllegalState(format!("failed to generate RSA key pair: {}", e)))?;
        let public_key = RsaPublicKey::from(&private_key);

        // Encode both halves as PEM
        let public_der = public_key
            .to_public_key_der()
            .map_err(|e| KeygenError::IllegalState(format!("failed to encode public key: {}", e)))?;
        let private_der = private_key
            .to_pkcs8_der()
            .map_err(|e| KeygenError::IllegalState(format!("failed to encode private key: {}", e)))?;
        let public_pem = encode_pem(PUBLIC_KEY_LABEL, public_der.as_bytes())?;
        let private_pem = Zeroizing::new(encode_pem(PRIVATE_KEY_LABEL, private_der.as_bytes())?);
        let fingerprint = public_key_fingerprint(&public_key)?;

        // Save the public key, then the private key
        write_new_file(public_key_destination, public_pem.as_bytes(), KeyKind::Public)?;
        if let Err(err) = write_new_file(private_key_destination, private_pem.as_bytes(), KeyKind::Private) {
            return Err(roll_back(public_key_destination, err));
        }

        info!(
            public_key = %public_key_destination.display(),
            private_key = %private_key_destination.display(),
            %fingerprint,
            "wrote RSA key pair"
        );

        Ok(KeyFiles::new(public_key_destination, private_key_destination))
    }
}

fn encode_pem(label: &str, der: &[u8]) -> Result<String> {
    pem::encode_string(label, LineEnding::LF, der)
        .map_err(|e| KeygenError::IllegalState(format!("failed to encode {} PEM: {}", label, e)))
}

fn check_not_empty(path: &Path, kind: KeyKind) -> Result<()> {
    if path.as_os_str().is_empty() {
        return Err(KeygenError::InvalidArgument(format!(
            "{} key destination must not be empty",
            kind.name()
        )));
    }
    Ok(())
}

fn check_absent(path: &Path) -> Result<()> {
    if path.exists() {
        return Err(KeygenError::FileAlreadyExists {
            path: path.to_path_buf(),
        });
    }
    Ok(())
}

fn open_new(path: &Path, kind: KeyKind) -> io::Result<File> {
    let mut options = OpenOptions::new();
    options.write(true).create_new(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(kind.mode());
    }
    #[cfg(not(unix))]
    let _ = kind;
    options.open(path)
}

fn write_new_file(path: &Path, contents: &[u8], kind: KeyKind) -> Result<()> {
    let mut file = open_new(path, kind).map_err(|source| match source.kind() {
        io::ErrorKind::AlreadyExists => KeygenError::FileAlreadyExists {
            path: path.to_path_buf(),
        },
        _ => KeygenError::io(path, source),
    })?;

    let written = file.write_all(contents).and_then(|()| file.sync_all());
    drop(file);
    if let Err(source) = written {
        return Err(roll_back(path, KeygenError::io(path, source)));
    }

    debug!(path = %path.display(), kind = kind.name(), "wrote key file");
    Ok(())
}

/// Removes a file created by the failing call and returns `cause`, or a
/// `RollbackFailed` carrying `cause` when the file cannot be removed.
fn roll_back(path: &Path, cause: KeygenError) -> KeygenError {
    match fs::remove_file(path) {
        Ok(()) => cause,
        Err(source) => KeygenError::RollbackFailed {
            path: path.to_path_buf(),
            source,
            cause: Box::new(cause),
        },
    }
}

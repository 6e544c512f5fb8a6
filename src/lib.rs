//! Generates RSA key pairs and writes them as PEM files labeled `RSA PUBLIC KEY` /
//! `RSA PRIVATE KEY`.
//!
//! ```no_run
//! use std::path::Path;
//! use lockdown_keygen::KeyPairProvider;
//!
//! let files = KeyPairProvider::new()
//!     .create_key_pair(Path::new("public_key.pem"), Path::new("private_key.pem"))?;
//! println!("{}", files.private_key().display());
//! # Ok::<(), lockdown_keygen::KeygenError>(())
//! ```

pub mod common;

#[cfg(test)]
pub mod test_utils;

pub use common::error::{KeygenError, Result};
pub use common::keys::KeyPairProvider;
pub use common::types::KeyFiles;

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Locations of a key pair written by [`KeyPairProvider`](crate::KeyPairProvider)
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyFiles {
    public_key: PathBuf,
    private_key: PathBuf,
}

impl KeyFiles {
    pub fn new(public_key: impl Into<PathBuf>, private_key: impl Into<PathBuf>) -> Self {
        Self {
            public_key: public_key.into(),
            private_key: private_key.into(),
        }
    }

    /// Path of the `RSA PUBLIC KEY` PEM file
    pub fn public_key(&self) -> &Path {
        &self.public_key
    }

    /// Path of the `RSA PRIVATE KEY` PEM file
    pub fn private_key(&self) -> &Path {
        &self.private_key
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_serializes_both_paths() -> Result<(), Box<dyn std::error::Error>> {
        let files = KeyFiles::new("keys/pub.pem", "keys/priv.pem");

        let value = serde_json::to_value(&files)?;
        assert_eq!(
            value,
            json!({
                "public_key": "keys/pub.pem",
                "private_key": "keys/priv.pem"
            })
        );

        let parsed: KeyFiles = serde_json::from_value(value)?;
        assert_eq!(parsed, files);
        Ok(())
    }
}

use std::env;
use std::path::PathBuf;

pub const PUBLIC_KEY_PATH_VAR: &str = "PUBLIC_KEY_PATH";
pub const PRIVATE_KEY_PATH_VAR: &str = "PRIVATE_KEY_PATH";

pub const DEFAULT_PUBLIC_KEY_PATH: &str = "public_key.pem";
pub const DEFAULT_PRIVATE_KEY_PATH: &str = "private_key.pem";

/// Destinations used by the `keygen` binary
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeygenConfig {
    pub public_key_path: PathBuf,
    pub private_key_path: PathBuf,
}

impl KeygenConfig {
    /// Reads the process arguments, then the environment, then falls back to defaults
    pub fn from_env() -> Self {
        Self::resolve(env::args().skip(1), |name| env::var(name).ok())
    }

    /// Positional `args` win over `lookup`, which wins over the defaults.
    /// Empty variables count as unset.
    pub fn resolve<I, F>(args: I, lookup: F) -> Self
    where
        I: IntoIterator<Item = String>,
        F: Fn(&str) -> Option<String>,
    {
        let mut args = args.into_iter();
        let lookup = |name: &str| lookup(name).filter(|value| !value.is_empty());

        let public_key_path = args
            .next()
            .or_else(|| lookup(PUBLIC_KEY_PATH_VAR))
            .unwrap_or_else(|| DEFAULT_PUBLIC_KEY_PATH.to_string());
        let private_key_path = args
            .next()
            .or_else(|| lookup(PRIVATE_KEY_PATH_VAR))
            .unwrap_or_else(|| DEFAULT_PRIVATE_KEY_PATH.to_string());

        Self {
            public_key_path: public_key_path.into(),
            private_key_path: private_key_path.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    #[test]
    fn test_defaults() {
        let config = KeygenConfig::resolve(args(&[]), |_| None);

        assert_eq!(config.public_key_path, PathBuf::from("public_key.pem"));
        assert_eq!(config.private_key_path, PathBuf::from("private_key.pem"));
    }

    #[test]
    fn test_environment_overrides_defaults() {
        let vars = HashMap::from([
            (PUBLIC_KEY_PATH_VAR, "env/pub.pem".to_string()),
            (PRIVATE_KEY_PATH_VAR, String::new()),
        ]);

        let config = KeygenConfig::resolve(args(&[]), |name| vars.get(name).cloned());

        assert_eq!(config.public_key_path, PathBuf::from("env/pub.pem"));
        assert_eq!(config.private_key_path, PathBuf::from("private_key.pem"));
    }

    #[test]
    fn test_arguments_override_environment() {
        let vars = HashMap::from([
            (PUBLIC_KEY_PATH_VAR, "env/pub.pem".to_string()),
            (PRIVATE_KEY_PATH_VAR, "env/priv.pem".to_string()),
        ]);

        let config = KeygenConfig::resolve(args(&["arg/pub.pem"]), |name| vars.get(name).cloned());

        assert_eq!(config.public_key_path, PathBuf::from("arg/pub.pem"));
        assert_eq!(config.private_key_path, PathBuf::from("env/priv.pem"));

        let config = KeygenConfig::resolve(args(&["a.pem", "b.pem"]), |name| vars.get(name).cloned());

        assert_eq!(config.public_key_path, PathBuf::from("a.pem"));
        assert_eq!(config.private_key_path, PathBuf::from("b.pem"));
    }
}

pub mod config;
pub mod error;
pub mod fingerprint;
pub mod keys;
pub mod load;
pub mod types;

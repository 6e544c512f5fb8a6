use lockdown_keygen::common::config::KeygenConfig;
use lockdown_keygen::{KeyFiles, KeyPairProvider};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_line_number(false)
        .init();

    // Usage: keygen [PUBLIC_KEY_PATH [PRIVATE_KEY_PATH]]
    let config = KeygenConfig::from_env();
    let key_files = run(&config)?;

    println!("{}", serde_json::to_string_pretty(&key_files)?);
    Ok(())
}

fn run(config: &KeygenConfig) -> lockdown_keygen::Result<KeyFiles> {
    KeyPairProvider::new().create_key_pair(&config.public_key_path, &config.private_key_path)
}

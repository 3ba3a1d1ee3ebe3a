use anyhow::{Context, Result};

const DEFAULT_PORT: &str = "5000";
const DEFAULT_CERTIFICATE_BASE_URL: &str = "https://panthiya.com/certificates";

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Prefix for certificate display URLs, without a trailing slash.
    pub certificate_base_url: String,
    /// Seeds the shared random source when set, for reproducible runs.
    pub rng_seed: Option<u64>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let rng_seed = match std::env::var("RNG_SEED") {
            Ok(raw) => Some(
                raw.parse::<u64>()
                    .context("RNG_SEED must be an unsigned 64-bit integer")?,
            ),
            Err(_) => None,
        };

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| DEFAULT_PORT.to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            certificate_base_url: normalize_base_url(
                &std::env::var("CERTIFICATE_BASE_URL")
                    .unwrap_or_else(|_| DEFAULT_CERTIFICATE_BASE_URL.to_string()),
            ),
            rng_seed,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 5000,
            rust_log: "info".to_string(),
            certificate_base_url: DEFAULT_CERTIFICATE_BASE_URL.to_string(),
            rng_seed: None,
        }
    }
}

fn normalize_base_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_string()
}

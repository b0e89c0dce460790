mod concurrent;
mod query;
mod standard;

use mkmsign_core::Result;
use mkmsign_oauth1::{ClockSource, Credential, NonceSource, RequestSigner};

pub const NONCE: &str = "LyNoDV8MBnIrpBXtoTGefh9Vvcng5FQ1OCqB3kE5Ryk=";
pub const TIMESTAMP: &str = "1479036986";

#[derive(Debug)]
pub struct FixedNonce;

impl NonceSource for FixedNonce {
    fn nonce(&self) -> Result<String> {
        Ok(NONCE.to_string())
    }
}

#[derive(Debug)]
pub struct FixedClock;

impl ClockSource for FixedClock {
    fn timestamp(&self) -> String {
        TIMESTAMP.to_string()
    }
}

pub fn init_signer() -> RequestSigner {
    let _ = env_logger::builder().is_test(true).try_init();

    RequestSigner::new()
        .with_nonce_source(FixedNonce)
        .with_clock_source(FixedClock)
}

pub fn credential() -> Credential {
    Credential::new("ThisIs&MyKey1", "ThisIs&MyKey2", "ThisIs&MyKey3", "ThisIs&MyKey4")
}

/// Split a rendered header into its `key="value"` fields.
pub fn fields(header: &str) -> Vec<String> {
    header
        .strip_prefix("OAuth ")
        .expect("header must start with `OAuth `")
        .split(", ")
        .map(String::from)
        .collect()
}

/// Value of `oauth_signature` in a rendered header.
pub fn signature(header: &str) -> String {
    fields(header)
        .into_iter()
        .find_map(|f| {
            f.strip_prefix("oauth_signature=\"")
                .map(|v| v.trim_end_matches('"').to_string())
        })
        .expect("header must carry oauth_signature")
}

//! Startup configuration (CLI flags, each with an env var fallback).

use std::time::Duration;

use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;

pub(crate) const DEFAULT_ENDPOINT: &str = "https://dummyjson.com/quotes";

#[derive(Debug, Clone, Parser)]
#[command(name = "quotebox", version, about = "Shows a random quote from a quotes API")]
pub(crate) struct Config {
    /// Quotes API endpoint (GET, JSON body with a `quotes` array)
    #[arg(long, env = "QUOTEBOX_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Request timeout in seconds
    #[arg(
        long = "timeout-secs",
        env = "QUOTEBOX_TIMEOUT_SECS",
        default_value_t = 10,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub timeout_secs: u64,

    /// Fixed RNG seed (same seed -> same sequence of quotes)
    #[arg(long, env = "QUOTEBOX_SEED")]
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_secs: 10,
            seed: None,
        }
    }
}

impl Config {
    pub(crate) fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Seeded RNG if `--seed` was given, otherwise seeded from the OS.
    pub(crate) fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}

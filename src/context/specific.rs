use rand::SeedableRng;

use crate::{config::Config, generic::minimal_pcg::MinimalPCG32};

use super::GenericContext;

/// A context which uses [MinimalPCG32] as a source of randomness.
pub type Context = GenericContext<MinimalPCG32>;

impl Context {
    /// Creates a context from some given configuration, seeded from the clock
    /// so independent contexts sample differently.
    pub fn from_config(config: Config) -> Self {
        let seed = match std::time::SystemTime::now().duration_since(std::time::UNIX_EPOCH) {
            Ok(elapsed) => elapsed.as_nanos() as u64,
            Err(_) => 0x5EED,
        };
        Self::with_seed(config, seed)
    }

    /// Creates a context with a fixed seed, for reproducible runs.
    pub fn with_seed(config: Config, seed: u64) -> Self {
        Self::from_parts(config, MinimalPCG32::from_seed(seed.to_le_bytes()))
    }
}

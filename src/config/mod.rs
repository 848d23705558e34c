/*!
Configuration of a context.

All configuration for a context is contained within the context, set before any
solve and stable across solves. The defaults are tuned for problems of a few
hundred to a few thousand clauses, the scale of typical content-generation
specifications.
*/

/// Representation for the probability of valuing an atom true during initialisation.
pub type PolarityLean = f64;

/// Default values, collected.
pub mod defaults {
    use super::PolarityLean;

    /// See [Config::failsafe](super::Config::failsafe).
    pub const FAILSAFE: u32 = 50_000;

    /// See [Config::noise_raise](super::Config::noise_raise).
    pub const NOISE_RAISE: f64 = 0.2;

    /// See [Config::noise_decay](super::Config::noise_decay).
    pub const NOISE_DECAY: f64 = 0.95;

    /// See [Config::window_floor](super::Config::window_floor).
    pub const WINDOW_FLOOR: usize = 3;

    /// See [Config::window_divisor](super::Config::window_divisor).
    pub const WINDOW_DIVISOR: usize = 6;

    /// See [Config::polarity_lean](super::Config::polarity_lean).
    pub const POLARITY_LEAN: PolarityLean = 0.5;
}

/// The primary configuration structure.
#[derive(Clone)]
pub struct Config {
    /// The iteration cap on a solve. A solve which flips this many times
    /// without finding a satisfying assignment fails with a timeout.
    pub failsafe: u32,

    /// The share of the remaining headroom the noise parameter gains when the
    /// search stalls: `noise ← noise + noise_raise · (1 − noise)`.
    pub noise_raise: f64,

    /// The factor the noise parameter shrinks by while the search progresses.
    pub noise_decay: f64,

    /// The least number of entries in the stagnation window.
    pub window_floor: usize,

    /// The stagnation window holds `max(window_floor, ⌈clauses / window_divisor⌉)` entries.
    pub window_divisor: usize,

    /// The probability of valuing an atom true when initialising an assignment.
    pub polarity_lean: PolarityLean,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            failsafe: defaults::FAILSAFE,
            noise_raise: defaults::NOISE_RAISE,
            noise_decay: defaults::NOISE_DECAY,
            window_floor: defaults::WINDOW_FLOOR,
            window_divisor: defaults::WINDOW_DIVISOR,
            polarity_lean: defaults::POLARITY_LEAN,
        }
    }
}

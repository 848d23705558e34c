/// Counts kept across the lifetime of a context, roughly.
#[derive(Debug, Default)]
pub struct Counters {
    /// A count of every flip made, across every solve.
    pub total_flips: usize,

    /// A count of flips which followed the scoring suggestion.
    pub greedy_flips: usize,

    /// A count of flips of a uniformly chosen atom.
    pub random_flips: usize,

    /// A count of stall-triggered raises of the noise parameter.
    pub noise_raises: usize,

    /// A count of solves which returned a solution.
    pub solves: usize,
}

use crate::{
    config::Config,
    db::{atom::AtomDB, clause::ClauseDB},
};

use super::{ContextState, Counters};

/// A generic context, parameterised over a source of randomness.
///
/// Requires a source of [rng](rand::Rng); the library instantiates this with
/// [MinimalPCG32](crate::generic::minimal_pcg::MinimalPCG32) through
/// [Context](crate::context::Context).
pub struct GenericContext<R: rand::Rng> {
    /// The configuration of the context.
    pub config: Config,

    /// Counters related to the context and its solves.
    pub counters: Counters,

    /// The atom database.
    pub atom_db: AtomDB,

    /// The clause database.
    pub clause_db: ClauseDB,

    /// The state of the context.
    pub state: ContextState,

    /// The source of rng.
    pub rng: R,
}

impl<R: rand::Rng> GenericContext<R> {
    /// Creates a context from a configuration and a source of randomness.
    pub fn from_parts(config: Config, rng: R) -> Self {
        Self {
            config,
            counters: Counters::default(),
            atom_db: AtomDB::default(),
            clause_db: ClauseDB::default(),
            state: ContextState::Input,
            rng,
        }
    }
}

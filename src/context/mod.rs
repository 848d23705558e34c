/*!
The context --- to which attributes and constraints are added and within which solves take place.

Strictly, a [GenericContext] and a [Context].

The generic context is parameterised over the source of randomness. This helps
distinguish generic context methods against those intended for external use:
[from_config](Context::from_config) and [with_seed](Context::with_seed) are
implemented for a context rather than a generic context so a source of
randomness need not be supplied alongside a config.

A context is not safe for concurrent mutation or concurrent solving; callers
wanting parallelism run independent contexts.

# Example
```rust
# use weft_sat::config::Config;
# use weft_sat::context::Context;
let mut ctx = Context::with_seed(Config::default(), 23);

ctx.attribute("lamp", &[]).unwrap();
ctx.attribute("window", &[]).unwrap();
ctx.implies(&["lamp"], "window").unwrap();
ctx.assert("lamp").unwrap();

let solution = ctx.solve().unwrap();
assert_eq!(solution.value_of("window"), Ok(true));
```
*/

mod counters;
pub use counters::Counters;
mod generic;
pub use generic::GenericContext;
mod specific;
pub use specific::Context;

/// The state of a context.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContextState {
    /// The context is accepting attributes and constraints.
    Input,

    /// A search is in progress.
    Solving,

    /// The most recent solve found a satisfying assignment, and nothing has
    /// been added since.
    Satisfiable,
}

impl std::fmt::Display for ContextState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Input => write!(f, "Input"),
            Self::Solving => write!(f, "Solving"),
            Self::Satisfiable => write!(f, "Satisfiable"),
        }
    }
}

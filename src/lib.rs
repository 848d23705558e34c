/*!
A randomized constraint solver for sampling varied worlds from declarative specifications.

weft_sat is a library for procedural content generation by constraint solving.
A problem is described as a vocabulary of boolean attributes --- optionally
parameterized over finite domains --- together with logical constraints over
those attributes: cardinality bounds, implications, equivalences, and rules
with completion. Solving finds a truth assignment satisfying every constraint,
and repeated solves return varied assignments, so a single specification yields
many distinct worlds.

# Orientation

The library is designed around the core structure of a [context].

Attributes and constraints are added through the [builder] methods of a
context. Internally, and at a high level:

- Attributes are interned as atoms in an atom database, which maps between the
  textual and internal representations --- see [db::atom].
- Every constraint compiles to one or more generalized cardinality clauses
  held in a clause database, alongside a justification index for rules --- see
  [db::clause].
- A solve materializes the classical iff-completion of the stated rules and
  runs a stochastic local search --- a WalkSAT-family flip loop with adaptive
  noise --- over total assignments. See the [procedures].
- A successful solve returns a [Solution](reports::Solution), an immutable
  snapshot readable after the context has moved on.

The search is incomplete by design: it cannot conclude unsatisfiability, and a
solve which exhausts its flip budget fails with a timeout regardless of why.
What it gives in exchange is variety, which is the point: initialisation,
tie-breaking, and walk steps are all randomized, so the models of one problem
are sampled rather than enumerated.

# Examples

+ Sample several worlds from one specification.

```rust
use weft_sat::{config::Config, context::Context};

let mut ctx = Context::with_seed(Config::default(), 71);

ctx.attribute("biome", &[&["forest", "desert", "tundra"]]).unwrap();
ctx.attribute("relic", &[]).unwrap();
ctx.attribute("shrine", &[]).unwrap();

ctx.unique(&["biome forest", "biome desert", "biome tundra"]).unwrap();
ctx.rule("shrine", &["relic"]).unwrap();

for _ in 0..8 {
    let world = ctx.solve().unwrap();
    // A shrine never appears without the relic justifying it.
    if world.value_of("shrine").unwrap() {
        assert!(world.value_of("relic").unwrap());
    }
    assert!(world.true_attributes().iter().any(|a| a.starts_with("biome")));
}
```

+ Constraints may be added between solves; earlier solutions stay valid.

```rust
use weft_sat::{config::Config, context::Context};

let mut ctx = Context::with_seed(Config::default(), 3);

ctx.attribute("lamp", &[]).unwrap();
let before = ctx.solve().unwrap();

ctx.attribute("wick", &[]).unwrap();
ctx.assert("wick").unwrap();
let after = ctx.solve().unwrap();

assert_eq!(after.value_of("wick"), Ok(true));
// The earlier solution predates the wick and says so.
assert!(before.value_of("wick").is_err());
```

# Logs

To help diagnose issues, calls to [log] macros are made throughout the
library, narrowed by the targets listed in [misc::log]. No log implementation
is provided; attach one such as env_logger to read them.
*/

pub mod builder;
pub mod procedures;

pub mod config;
pub mod context;
pub mod structures;
pub mod types;

pub mod generic;

pub mod reports;

pub mod db;

pub mod misc;

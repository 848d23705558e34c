/*!
Finds a satisfying assignment for the constraints of a context.

# Overview

A solve is a randomized flip search over total assignments, in the GSAT/WalkSAT
family with the adaptive noise of Hoos (2002):

1. Materialize the completion clause of every rule head (idempotent across
   solves, see the [clause database](crate::db::clause::ClauseDB)).
2. Initialise an assignment uniformly at random, top fixed true.
3. [Assess](crate::procedures::score) the assignment. If every clause is
   satisfied, snapshot a [solution](crate::reports::Solution).
4. Otherwise flip: with probability `1 − noise` the suggested atom, else a
   uniformly chosen atom. Raise the noise by a share of its headroom when every
   entry of a sliding window of recent satisfied counts is at least the current
   count (the search has stalled), and decay it otherwise. Record the count in
   the window, and return to 3.

The loop is bounded by the failsafe; reaching it fails the solve with a timeout
error. The search is Las-Vegas: termination is certain, finding a model on a
satisfiable problem is not, and unsatisfiability is never concluded.

Each solve draws a fresh initial assignment, a fresh tie-break per assessment,
and fresh walk steps, so repeated solves of the same context sample varied
models --- the purpose of the library.

# Example

```rust
# use weft_sat::config::Config;
# use weft_sat::context::Context;
let mut ctx = Context::with_seed(Config::default(), 5);

ctx.attribute("coin", &[&["a", "b"]]).unwrap();
ctx.unique(&["coin a", "coin b"]).unwrap();

let mut faces = std::collections::BTreeSet::new();
for _ in 0..64 {
    faces.insert(ctx.solve().unwrap().true_attributes());
}

// Both models of the problem turn up across solves.
assert_eq!(faces.len(), 2);
```

# Literature

The noise schedule follows "An Adaptive Noise Mechanism for WalkSAT" (Hoos,
AAAI 2002): noise rises by a fixed share of its headroom on stagnation and
decays multiplicatively on progress.
*/

use crate::{
    context::{ContextState, GenericContext},
    misc::log::targets,
    procedures::score::Assessment,
    reports::Solution,
    structures::atom::Atom,
    types::err::{self, SolveError},
};

impl<R: rand::Rng> GenericContext<R> {
    /// Searches for a satisfying assignment, returning a snapshot of the
    /// first one found.
    pub fn solve(&mut self) -> Result<Solution, err::ErrorKind> {
        self.clause_db.materialize_completion();
        self.state = ContextState::Solving;

        let atom_total = self.atom_db.atom_count();
        let clause_total = self.clause_db.clause_count();

        let mut assignment: Vec<bool> = Vec::with_capacity(atom_total);
        assignment.push(true);
        for _ in 1..atom_total {
            assignment.push(self.rng.random_bool(self.config.polarity_lean));
        }

        // The one allocation reused across every iteration of the loop.
        let mut scores = vec![0_i32; atom_total];

        let window_length = std::cmp::max(
            self.config.window_floor,
            clause_total.div_ceil(self.config.window_divisor),
        );
        let mut window = vec![0_usize; window_length];
        let mut noise: f64 = 0.0;

        let (mut satisfied, mut suggestion) =
            match self
                .clause_db
                .assess(&assignment, &mut scores, &mut self.rng)
            {
                Assessment::Satisfied => return Ok(self.conclude(assignment)),
                Assessment::Unsatisfied {
                    satisfied,
                    suggestion,
                } => (satisfied, suggestion),
            };

        for iteration in 0..self.config.failsafe {
            log::trace!(
                target: targets::SEARCH,
                "Iteration {iteration}: {satisfied}/{clause_total} satisfied, noise {noise:.3}"
            );

            let walk = self.rng.random_bool(noise);
            let flip = match suggestion {
                Some(atom) if !walk => {
                    self.counters.greedy_flips += 1;
                    Some(atom)
                }
                _ => {
                    self.counters.random_flips += 1;
                    self.uniform_atom()
                }
            };
            if let Some(atom) = flip {
                assignment[atom as usize] = !assignment[atom as usize];
            }
            self.counters.total_flips += 1;

            if window.iter().all(|&past| past >= satisfied) {
                noise += self.config.noise_raise * (1.0 - noise);
                self.counters.noise_raises += 1;
            } else {
                noise *= self.config.noise_decay;
            }
            window[iteration as usize % window_length] = satisfied;

            match self
                .clause_db
                .assess(&assignment, &mut scores, &mut self.rng)
            {
                Assessment::Satisfied => return Ok(self.conclude(assignment)),
                Assessment::Unsatisfied {
                    satisfied: fresh_satisfied,
                    suggestion: fresh_suggestion,
                } => {
                    satisfied = fresh_satisfied;
                    suggestion = fresh_suggestion;
                }
            }
        }

        log::info!(
            target: targets::SEARCH,
            "Failsafe of {} iterations reached with {satisfied}/{clause_total} satisfied",
            self.config.failsafe
        );
        self.state = ContextState::Input;
        Err(SolveError::Failsafe.into())
    }

    /// A uniformly chosen non-top atom, when one exists.
    fn uniform_atom(&mut self) -> Option<Atom> {
        match self.atom_db.atom_count() as Atom {
            0 | 1 => None,
            limit => Some(self.rng.random_range(1..limit)),
        }
    }

    /// Snapshots the satisfying assignment into a solution.
    fn conclude(&mut self, assignment: Vec<bool>) -> Solution {
        self.counters.solves += 1;
        self.state = ContextState::Satisfiable;

        log::info!(
            target: targets::SEARCH,
            "Satisfied after {} total flip(s) across {} solve(s)",
            self.counters.total_flips,
            self.counters.solves
        );
        Solution::new(assignment, self.atom_db.clone())
    }
}

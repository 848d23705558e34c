/*!
Assessment of an assignment against the clause database.

A single pass over every clause computes the count of satisfied clauses
together with a net per-atom score of the benefit of flipping that atom, summed
across clauses. Only clauses within one flip of a band boundary contribute:

- A violated clause one below its band credits every atom whose literal is
  currently false: the flip enters the band.
- A violated clause one above its band credits every atom whose literal is
  currently true.
- A satisfied clause sitting exactly on its lower boundary debits every atom
  whose literal is currently true: the flip leaves the band. Symmetrically, a
  satisfied clause on its upper boundary debits every atom whose literal is
  currently false.
- A violated clause two or more away from either boundary contributes nothing:
  no single flip helps it.

The suggested flip is drawn uniformly from the atoms with the greatest score,
where the baseline for 'greatest' is zero: when no atom scores positive the
suggestion is a uniformly chosen zero-scored atom, whose flip changes no
near-boundary clause. Should every atom score negative there is no suggestion,
and the caller falls back to a uniform random flip.

Selection uses reservoir sampling, so assessment allocates nothing: the score
vector is supplied by the caller and reused across iterations.
*/

use crate::{
    db::clause::ClauseDB,
    structures::{atom::Atom, literal::Literal},
};

/// The outcome of assessing an assignment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Assessment {
    /// Every clause is satisfied.
    Satisfied,

    /// Some clause is violated.
    Unsatisfied {
        /// The count of satisfied clauses.
        satisfied: usize,

        /// The suggested flip, if any atom scored at least zero.
        suggestion: Option<Atom>,
    },
}

impl ClauseDB {
    /// Assesses the given assignment, writing per-atom flip scores into
    /// `scores` and drawing a suggestion with `rng`.
    ///
    /// `scores` must hold one entry per atom of the assignment.
    pub fn assess<R: rand::Rng>(
        &self,
        assignment: &[bool],
        scores: &mut [i32],
        rng: &mut R,
    ) -> Assessment {
        scores.fill(0);
        let mut satisfied_clauses = 0;

        for clause in self.clauses() {
            let lo = clause.lo as usize;
            let hi = clause.hi as usize;
            let count = clause.satisfied_count(assignment);

            if lo <= count && count <= hi {
                satisfied_clauses += 1;

                if count == lo {
                    for literal in &clause.literals {
                        if assignment[literal.atom() as usize] == literal.polarity() {
                            scores[literal.atom() as usize] -= 1;
                        }
                    }
                }
                if count == hi {
                    for literal in &clause.literals {
                        if assignment[literal.atom() as usize] != literal.polarity() {
                            scores[literal.atom() as usize] -= 1;
                        }
                    }
                }
            } else if count + 1 == lo {
                for literal in &clause.literals {
                    if assignment[literal.atom() as usize] != literal.polarity() {
                        scores[literal.atom() as usize] += 1;
                    }
                }
            } else if count == hi + 1 {
                for literal in &clause.literals {
                    if assignment[literal.atom() as usize] == literal.polarity() {
                        scores[literal.atom() as usize] += 1;
                    }
                }
            }
        }

        if satisfied_clauses == self.clause_count() {
            return Assessment::Satisfied;
        }

        // Reservoir selection among the best-scored atoms, baseline zero, top excluded.
        let mut best: i32 = 0;
        let mut drawn: u32 = 0;
        let mut suggestion: Option<Atom> = None;

        for atom in 1..scores.len() {
            let score = scores[atom];
            if score > best {
                best = score;
                drawn = 1;
                suggestion = Some(atom as Atom);
            } else if score == best {
                drawn += 1;
                if rng.random_ratio(1, drawn) {
                    suggestion = Some(atom as Atom);
                }
            }
        }

        Assessment::Unsatisfied {
            satisfied: satisfied_clauses,
            suggestion,
        }
    }
}

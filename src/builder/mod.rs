/*!
The constraint constructors.

Each public operation validates its arguments eagerly, resolves propositions
against the [atom database](crate::db::atom::AtomDB), and compiles to one or
more [cardinality clauses](crate::structures::clause::CardClause) in the
[clause database](crate::db::clause::ClauseDB). On error nothing is stored and
nothing is minted: the context is exactly as it was before the call.

The cardinality operations are all instances of [quantify](GenericContext::quantify):

| operation            | band                     |
|----------------------|--------------------------|
| `exactly(n, P)`      | `[n, n]`                 |
| `at_least(n, P)`     | `[n, size]`              |
| `at_most(n, P)`      | `[0, n]`                 |
| `all(P)`             | `[size, size]`           |
| `unique(P)`          | `[1, 1]`                 |
| `inconsistent(a, b)` | `[0, 1]` over `{a, b}`   |
| `assert(p)`          | `[1, 1]` over `{p}`      |

where `size` is the number of propositions given.

Bands which admit every count are rejected as vacuous, and bands which admit no
count are rejected as infeasible, in both cases at the call site --- a constraint
which does nothing, or which can never hold, is a mistake in the problem
description rather than something to discover after a failed solve.

[implies](GenericContext::implies), [equal](GenericContext::equal) and
[rule](GenericContext::rule) compile to ordinary CNF clauses, minting anonymous
atoms for conjunctive bodies where needed. A rule additionally records a
justification for its head, consumed by
[completion](crate::db::clause::ClauseDB::materialize_completion) at solve time.

# Example

```rust
# use weft_sat::config::Config;
# use weft_sat::context::Context;
let mut ctx = Context::with_seed(Config::default(), 11);

ctx.attribute("gate", &[&["north", "south", "east"]]).unwrap();
ctx.exactly(2.0, &["gate north", "gate south", "gate east"]).unwrap();

let solution = ctx.solve().unwrap();
assert_eq!(solution.true_attributes().len(), 2);
```
*/

use crate::{
    context::{ContextState, GenericContext},
    misc::log::targets,
    structures::{
        atom::TOP_ATOM,
        clause::CardClause,
        literal::{CLiteral, Literal},
    },
    types::err::{self, InfeasibilityError, ShapeError, VacuityError},
};

impl<R: rand::Rng> GenericContext<R> {
    /// Declares an attribute, with a finite string domain for each argument
    /// position. `&[]` declares a plain boolean attribute.
    ///
    /// Every ground instance is minted immediately.
    pub fn attribute(&mut self, name: &str, domains: &[&[&str]]) -> Result<(), err::ErrorKind> {
        self.atom_db.intern(name, domains)?;
        self.state = ContextState::Input;
        Ok(())
    }

    /// Constrains the count of true propositions to the band `[lo, hi]`.
    ///
    /// The effective band is `[max(0, ⌈lo⌉), min(|P|, ⌊hi⌋)]`. A band which
    /// admits every count is vacuous, and a band which admits none is
    /// infeasible; both are errors.
    pub fn quantify(
        &mut self,
        lo: f64,
        hi: f64,
        propositions: &[&str],
    ) -> Result<(), err::ErrorKind> {
        let literals = self.resolve_all(propositions)?;
        self.band(lo, hi, literals)
    }

    /// Constrains exactly `count` of the propositions to be true.
    pub fn exactly(&mut self, count: f64, propositions: &[&str]) -> Result<(), err::ErrorKind> {
        integral(count)?;
        self.quantify(count, count, propositions)
    }

    /// Constrains at least `min` of the propositions to be true.
    pub fn at_least(&mut self, min: f64, propositions: &[&str]) -> Result<(), err::ErrorKind> {
        integral(min)?;
        self.quantify(min, propositions.len() as f64, propositions)
    }

    /// Constrains at most `max` of the propositions to be true.
    pub fn at_most(&mut self, max: f64, propositions: &[&str]) -> Result<(), err::ErrorKind> {
        self.quantify(0.0, max, propositions)
    }

    /// Constrains every proposition to be true.
    pub fn all(&mut self, propositions: &[&str]) -> Result<(), err::ErrorKind> {
        let size = propositions.len() as f64;
        self.quantify(size, size, propositions)
    }

    /// Constrains exactly one of the propositions to be true.
    pub fn unique(&mut self, propositions: &[&str]) -> Result<(), err::ErrorKind> {
        if propositions.is_empty() {
            return Err(ShapeError::EmptyUnique.into());
        }
        self.quantify(1.0, 1.0, propositions)
    }

    /// Constrains the two propositions to not hold together.
    pub fn inconsistent(&mut self, a: &str, b: &str) -> Result<(), err::ErrorKind> {
        self.quantify(0.0, 1.0, &[a, b])
    }

    /// Constrains the proposition to be true.
    pub fn assert(&mut self, proposition: &str) -> Result<(), err::ErrorKind> {
        self.all(&[proposition])
    }

    /// Constrains the conjunction of the premises to imply the conclusion.
    pub fn implies(
        &mut self,
        premises: &[&str],
        conclusion: &str,
    ) -> Result<(), err::ErrorKind> {
        let premise_literals = self.resolve_all(premises)?;
        let conclusion_literal = self.atom_db.resolve(conclusion)?;

        self.store_implication(&premise_literals, conclusion_literal);
        self.state = ContextState::Input;
        Ok(())
    }

    /// Constrains the conjunction of `left` to be equivalent to the
    /// conjunction of `right`.
    ///
    /// An empty side is the empty conjunction, i.e. truth, so a single empty
    /// side asserts the other. Two empty sides are rejected.
    pub fn equal(&mut self, left: &[&str], right: &[&str]) -> Result<(), err::ErrorKind> {
        match (left.len(), right.len()) {
            (0, 0) => Err(ShapeError::EmptyEquivalence.into()),

            (0, _) => self.all(right),
            (_, 0) => self.all(left),

            (1, 1) => {
                let a = self.atom_db.resolve(left[0])?;
                let b = self.atom_db.resolve(right[0])?;

                self.clause_db
                    .store(CardClause::new(1, 2, vec![a.negate(), b]));
                self.clause_db
                    .store(CardClause::new(1, 2, vec![a, b.negate()]));
                self.state = ContextState::Input;
                Ok(())
            }

            (1, _) => {
                let conclusion = self.atom_db.resolve(left[0])?;
                let premises = self.resolve_all(right)?;
                self.iff(premises, conclusion)
            }

            (_, 1) => {
                let conclusion = self.atom_db.resolve(right[0])?;
                let premises = self.resolve_all(left)?;
                self.iff(premises, conclusion)
            }

            (_, _) => {
                let left_literals = self.resolve_all(left)?;
                let right_literals = self.resolve_all(right)?;

                let bridge = CLiteral::new(self.atom_db.fresh_anonymous(), true);
                self.iff(left_literals, bridge)?;
                self.iff(right_literals, bridge)
            }
        }
    }

    /// States a rule: the conjunction of the premises justifies the conclusion.
    ///
    /// The implication is stored at once; in addition a justification is
    /// recorded for the conclusion, and at solve time every rule head receives
    /// a completion clause requiring at least one of its justifications --- a
    /// head cannot be true without a stated reason. A negated conclusion is
    /// rejected.
    pub fn rule(&mut self, conclusion: &str, premises: &[&str]) -> Result<(), err::ErrorKind> {
        if conclusion.starts_with('!') {
            return Err(ShapeError::NegatedHead.into());
        }
        let head = self.atom_db.resolve(conclusion)?;
        let premise_literals = self.resolve_all(premises)?;

        self.store_implication(&premise_literals, head);

        let justification = match premise_literals.len() {
            0 => CLiteral::new(TOP_ATOM, true),
            1 => premise_literals[0],
            _ => {
                let body = CLiteral::new(self.atom_db.fresh_anonymous(), true);
                self.iff(premise_literals, body)?;
                body
            }
        };

        log::trace!(
            target: targets::ENCODER,
            "Rule for {} justified by {}",
            head.atom(),
            justification
        );
        self.clause_db.note_justification(head.atom(), justification);
        self.state = ContextState::Input;
        Ok(())
    }

    /// A human-readable dump of every stored clause and rule justification.
    pub fn show_constraints(&self) -> String {
        let mut dump = String::new();

        for clause in self.clause_db.clauses() {
            let literals = clause
                .literals
                .iter()
                .map(|literal| self.atom_db.literal_text(*literal))
                .collect::<Vec<_>>()
                .join(", ");
            dump.push_str(&format!("{} <= #{{{literals}}} <= {}\n", clause.lo, clause.hi));
        }

        for (head, justifications) in self.clause_db.rules() {
            let heads = self.atom_db.literal_text(CLiteral::new(*head, true));
            let bodies = justifications
                .iter()
                .map(|justification| self.atom_db.literal_text(*justification))
                .collect::<Vec<_>>()
                .join(" | ");
            dump.push_str(&format!("{heads} <- {bodies}\n"));
        }

        dump
    }

    /// Resolves each proposition, failing on the first which does not resolve.
    fn resolve_all(&self, propositions: &[&str]) -> Result<Vec<CLiteral>, err::ErrorKind> {
        propositions
            .iter()
            .map(|proposition| self.atom_db.resolve(proposition))
            .collect()
    }

    /// Validates a band against the size of the literal multiset and stores
    /// the clause.
    fn band(&mut self, lo: f64, hi: f64, literals: Vec<CLiteral>) -> Result<(), err::ErrorKind> {
        let size = literals.len();

        if hi < 0.0 {
            return Err(InfeasibilityError::NegativeBound.into());
        }
        if !(lo.ceil() <= hi.floor()) {
            return Err(InfeasibilityError::InvertedBand.into());
        }
        if lo > size as f64 {
            return Err(InfeasibilityError::BoundExceedsSize.into());
        }
        if lo <= 0.0 && hi >= size as f64 {
            return Err(VacuityError::FullBand.into());
        }

        let clause_lo = lo.ceil().max(0.0) as u32;
        let clause_hi = (hi.floor() as usize).min(size) as u32;

        log::trace!(
            target: targets::ENCODER,
            "Band [{clause_lo}, {clause_hi}] over {size} literal(s)"
        );
        self.clause_db
            .store(CardClause::new(clause_lo, clause_hi, literals));
        self.state = ContextState::Input;
        Ok(())
    }

    /// Stores the CNF clause `¬p₁ ∨ … ∨ ¬p_k ∨ c`.
    fn store_implication(&mut self, premises: &[CLiteral], conclusion: CLiteral) {
        let mut literals: Vec<CLiteral> = premises.iter().map(CLiteral::negate).collect();
        literals.push(conclusion);

        let size = literals.len() as u32;
        self.clause_db.store(CardClause::new(1, size, literals));
    }

    /// Stores clauses equivalent to `p₁ ∧ … ∧ p_k ↔ c`: each premise is
    /// implied by the conclusion, and the premises together imply it.
    fn iff(
        &mut self,
        premises: Vec<CLiteral>,
        conclusion: CLiteral,
    ) -> Result<(), err::ErrorKind> {
        for premise in &premises {
            self.clause_db
                .store(CardClause::new(1, 2, vec![*premise, conclusion.negate()]));
        }

        self.store_implication(&premises, conclusion);
        self.state = ContextState::Input;
        Ok(())
    }
}

/// Rejects counts which must be integral but are not.
fn integral(count: f64) -> Result<(), err::ErrorKind> {
    if count.fract() != 0.0 {
        return Err(InfeasibilityError::NonIntegral.into());
    }
    Ok(())
}

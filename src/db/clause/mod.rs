/*!
The clause database --- the store of cardinality clauses and rule justifications.

The database holds:
- An append-only sequence of [cardinality clauses](CardClause).
- A map from rule heads to their recorded justifications, in rule order.
- The `non_rule_checkpoint`: the clause count immediately before the completion
  clauses of the rule map were appended for a solve, if they currently are.

# Completion and the checkpoint

Rules are given classical iff-completion: a rule contributes its implication
clause when stated, and at solve time every head `h` with justifications
`j₁ … j_k` additionally receives the clause `¬h ∨ j₁ ∨ … ∨ j_k`, so a head is
true only when at least one of its justifications is.

Completion clauses are appended once per solve and are torn back out before any
later constraint lands. [materialize_completion](ClauseDB::materialize_completion)
is idempotent while the checkpoint stands, and [store](ClauseDB::store)
truncates back to the checkpoint before appending. The result is that the
clause list is always (user constraints) or (user constraints ++ completion),
never anything with duplicated completion clauses.
*/

use std::collections::BTreeMap;

use crate::{
    misc::log::targets,
    structures::{
        atom::Atom,
        clause::CardClause,
        literal::{CLiteral, Literal},
    },
};

/// The clause database.
#[derive(Default)]
pub struct ClauseDB {
    /// Every stored clause, user constraints first, completion clauses (if
    /// materialized) after the checkpoint.
    clauses: Vec<CardClause>,

    /// Justifications recorded for each rule head, in rule order.
    rules: BTreeMap<Atom, Vec<CLiteral>>,

    /// The clause count before completion clauses were appended, while they are.
    non_rule_checkpoint: Option<usize>,
}

impl ClauseDB {
    /// A count of every stored clause, completion clauses included.
    pub fn clause_count(&self) -> usize {
        self.clauses.len()
    }

    /// An iterator over every stored clause.
    pub fn clauses(&self) -> impl Iterator<Item = &CardClause> {
        self.clauses.iter()
    }

    /// The recorded rule justifications, keyed by head.
    pub fn rules(&self) -> &BTreeMap<Atom, Vec<CLiteral>> {
        &self.rules
    }

    /// True exactly when completion clauses are materialized.
    pub fn completion_active(&self) -> bool {
        self.non_rule_checkpoint.is_some()
    }

    /// Appends a user constraint, truncating any materialized completion first.
    pub fn store(&mut self, clause: CardClause) {
        self.retract_completion();
        log::trace!(target: targets::CLAUSE_DB, "Stored {} ≤ |{}| ≤ {}", clause.lo, clause.size(), clause.hi);
        self.clauses.push(clause);
    }

    /// Records a justification for the given head, truncating any materialized
    /// completion first.
    pub fn note_justification(&mut self, head: Atom, justification: CLiteral) {
        self.retract_completion();
        self.rules.entry(head).or_default().push(justification);
    }

    /// Appends the completion clause of every rule head and records the
    /// checkpoint. A second call while the checkpoint stands does nothing.
    pub fn materialize_completion(&mut self) {
        if self.non_rule_checkpoint.is_some() {
            return;
        }
        self.non_rule_checkpoint = Some(self.clauses.len());

        for (head, justifications) in &self.rules {
            let mut literals = Vec::with_capacity(1 + justifications.len());
            literals.push(CLiteral::new(*head, false));
            literals.extend_from_slice(justifications);

            let size = literals.len() as u32;
            self.clauses.push(CardClause::new(1, size, literals));
        }

        log::debug!(
            target: targets::COMPLETION,
            "Materialized completion for {} head(s)",
            self.rules.len()
        );
    }

    /// Truncates the clause list back to the checkpoint, if one stands.
    fn retract_completion(&mut self) {
        if let Some(checkpoint) = self.non_rule_checkpoint.take() {
            self.clauses.truncate(checkpoint);
            log::debug!(target: targets::COMPLETION, "Retracted completion clauses past {checkpoint}");
        }
    }
}

/*!
Solutions --- the immutable result of a successful solve.

A solution owns the satisfying assignment together with a snapshot of the
[atom database](crate::db::atom::AtomDB) taken at the moment of the solve. The
context is free immediately: constraints may be added and further solves run,
and every previously returned solution remains a valid read of its snapshot.

An attribute minted after the snapshot is unknown to it, so looking one up
fails with a stale-lookup error rather than answering from the wrong world.
*/

use crate::{
    db::atom::AtomDB,
    structures::literal::Literal,
    types::err::{self, ErrorKind, SolutionError},
};

/// A satisfying assignment, readable through the attributes of its snapshot.
pub struct Solution {
    /// The assignment found.
    assignment: Box<[bool]>,

    /// The atom database as it stood when the assignment was found.
    atom_db: AtomDB,
}

impl Solution {
    /// Bundles a satisfying assignment with the database snapshot.
    pub(crate) fn new(assignment: Vec<bool>, atom_db: AtomDB) -> Self {
        Self {
            assignment: assignment.into_boxed_slice(),
            atom_db,
        }
    }

    /// The named attributes valued true, sorted lexicographically.
    ///
    /// Anonymous atoms are internal to the solver and never appear here.
    pub fn true_attributes(&self) -> Vec<String> {
        let mut attributes: Vec<String> = (1..self.assignment.len())
            .filter(|&index| self.assignment[index] && !self.atom_db.anonymous(index as u32))
            .map(|index| self.atom_db.name_of(index as u32).to_owned())
            .collect();

        attributes.sort();
        attributes
    }

    /// The value of the given proposition under the assignment.
    ///
    /// Fails with a stale-lookup error for any attribute the snapshot does not
    /// know, i.e. one which did not exist when the solution was produced.
    pub fn value_of(&self, proposition: &str) -> Result<bool, err::ErrorKind> {
        let literal = match self.atom_db.resolve(proposition) {
            Ok(literal) => literal,
            Err(ErrorKind::Reference(_)) => {
                return Err(SolutionError::Stale(proposition.to_owned()).into());
            }
            Err(e) => return Err(e),
        };

        Ok(self.assignment[literal.atom() as usize] == literal.polarity())
    }

    /// The assignment itself, total over every atom of the snapshot.
    pub fn assignment(&self) -> &[bool] {
        &self.assignment
    }
}

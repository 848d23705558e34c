/*!
(The internal representation of) an attribute instance --- an atom.

Broadly, atoms are things to which assigning a (boolean) value is of interest.
- 'Internal' atoms index structures used during a solve.
- 'External' atoms are the textual attributes of a problem, e.g. `treasure` or
  `biome forest`. \
  The external representation of an atom is stored in the
  [atom database](crate::db::atom::AtomDB); atoms minted for solver-internal
  purposes have no external representation at all.

Atoms form a contiguous range from 0 to some limit:
- The atom `0` is [TOP_ATOM], fixed to true on every assignment. It carries the
  constant-true literal used, in particular, to record the unconditional
  justification of a premise-free rule.
- Every other atom stands for a declared attribute instance or an anonymous
  temporary.

This representation allows atoms to be used as the indices of a structure, e.g.
`scores[atom]`, without taking too much space.
*/

/// An atom, aka. an attribute instance.
pub type Atom = u32;

/// The atom fixed to true on every assignment.
pub const TOP_ATOM: Atom = 0;

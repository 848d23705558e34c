/*!
The abstract elements of a problem and their representation.

- [Atoms](atom) --- the internal representation of attribute instances.
- [Literals](literal) --- atoms paired with a polarity.
- [Cardinality clauses](clause) --- the single constraint form the search works over.
- [Assignments](valuation) --- total maps from atoms to truth values.
*/

pub mod atom;
pub mod clause;
pub mod literal;
pub mod valuation;

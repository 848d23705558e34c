/*!
Error types used in the library.

- Most of these are raised eagerly, at the call which supplied the offending
  input, and leave the context untouched.
- The single solve-time error is [SolveError::Failsafe]. The search is
  incomplete, so an unsatisfiable problem and an unlucky run are deliberately
  indistinguishable: both surface as the failsafe.

Names of the error enums --- for the most part --- overlap with the operation
families they belong to.
*/

/// A union of varied error kinds.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    /// A token failed the identifier grammar.
    Grammar(GrammarError),

    /// An error when declaring an attribute.
    Declaration(DeclarationError),

    /// A proposition failed to resolve against the declared attributes.
    Reference(ReferenceError),

    /// A constraint was built from arguments of the wrong shape.
    Shape(ShapeError),

    /// A constraint is trivially true with respect to its arguments.
    Vacuity(VacuityError),

    /// A constraint is unsatisfiable in isolation.
    Infeasibility(InfeasibilityError),

    /// An error during a solve.
    Solve(SolveError),

    /// An error when reading a solution.
    Solution(SolutionError),
}

/// A token failed the identifier grammar `[a-z][A-Za-z0-9_]*`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum GrammarError {
    /// The noted token is not a well-formed identifier.
    Identifier(String),
}

impl From<GrammarError> for ErrorKind {
    fn from(e: GrammarError) -> Self {
        ErrorKind::Grammar(e)
    }
}

/// Errors when declaring an attribute.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DeclarationError {
    /// The noted predicate has already been declared.
    ///
    /// Redeclaration is rejected regardless of whether the arity matches.
    Redeclared(String),

    /// Attributes take at most three arguments.
    ArityLimit(usize),
}

impl From<DeclarationError> for ErrorKind {
    fn from(e: DeclarationError) -> Self {
        ErrorKind::Declaration(e)
    }
}

/// Errors when resolving a proposition against the declared attributes.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ReferenceError {
    /// The noted predicate has not been declared.
    Undeclared(String),

    /// The proposition supplies the wrong number of arguments for the noted predicate.
    Arity(String),

    /// The noted argument is not an element of the domain declared for its position.
    Domain(String),
}

impl From<ReferenceError> for ErrorKind {
    fn from(e: ReferenceError) -> Self {
        ErrorKind::Reference(e)
    }
}

/// Constraints built from arguments of the wrong shape.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ShapeError {
    /// The conclusion of a rule must be a positive proposition.
    NegatedHead,

    /// An equivalence requires at least one non-empty side.
    EmptyEquivalence,

    /// A uniqueness constraint requires at least one proposition.
    EmptyUnique,
}

impl From<ShapeError> for ErrorKind {
    fn from(e: ShapeError) -> Self {
        ErrorKind::Shape(e)
    }
}

/// A constraint which is trivially true with respect to its arguments.
///
/// Vacuous constraints are reported rather than silently accepted, as they are
/// almost always a mistake in the problem description.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum VacuityError {
    /// The cardinality band admits every possible count of true propositions.
    FullBand,
}

impl From<VacuityError> for ErrorKind {
    fn from(e: VacuityError) -> Self {
        ErrorKind::Vacuity(e)
    }
}

/// A constraint which is unsatisfiable in isolation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum InfeasibilityError {
    /// The upper bound of the band is below zero.
    NegativeBound,

    /// The band contains no integer count.
    InvertedBand,

    /// The lower bound exceeds the number of propositions.
    BoundExceedsSize,

    /// A count which must be integral is not.
    NonIntegral,
}

impl From<InfeasibilityError> for ErrorKind {
    fn from(e: InfeasibilityError) -> Self {
        ErrorKind::Infeasibility(e)
    }
}

/// Errors during a solve.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SolveError {
    /// The flip budget was exhausted without finding a satisfying assignment.
    ///
    /// The problem may still be satisfiable.
    Failsafe,
}

impl From<SolveError> for ErrorKind {
    fn from(e: SolveError) -> Self {
        ErrorKind::Solve(e)
    }
}

/// Errors when reading a solution.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SolutionError {
    /// The noted attribute did not exist when the solution was produced.
    Stale(String),
}

impl From<SolutionError> for ErrorKind {
    fn from(e: SolutionError) -> Self {
        ErrorKind::Solution(e)
    }
}

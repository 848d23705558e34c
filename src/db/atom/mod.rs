/*!
The atom database --- the bijection between textual attributes and atoms.

An attribute is declared once, as a predicate name together with a (possibly
empty) finite string domain for each of up to three argument positions. Every
ground instance of the predicate is minted as an atom at declaration time, so
the atoms of the instances of a predicate form a contiguous block and the atom
of a particular instance is recovered by a mixed-radix offset over the argument
positions.

Two structures are maintained:
- A dense vector from atoms to external names. Atoms minted for
  solver-internal purposes hold the empty name, as does
  [TOP_ATOM](crate::structures::atom::TOP_ATOM), and such atoms are excluded
  from every public view of a solution.
- A flat map from predicate names to the first atom of the block and the
  declared domains.

Identifiers --- predicate names and domain elements alike --- must match
`[a-z][A-Za-z0-9_]*`. Propositions are resolved to [literals](CLiteral) by
stripping an optional leading `!`, splitting on whitespace, and checking the
predicate, the argument count, and each argument's domain membership, with a
distinct error for each way this can fail.

Atoms are minted monotonically and never recycled, so a clone of the database
is a consistent snapshot of every atom minted up to the moment of the clone.
*/

use std::collections::HashMap;

use crate::{
    structures::{
        atom::Atom,
        literal::{CLiteral, Literal},
    },
    types::err::{self, DeclarationError, GrammarError, ReferenceError},
};

/// The greatest number of argument positions an attribute may declare.
pub const ARITY_LIMIT: usize = 3;

/// A declared predicate: the first atom of its ground block and its domains.
#[derive(Clone, Debug)]
pub struct Predicate {
    /// The atom of the first ground instance.
    pub first: Atom,

    /// The domain of each argument position, in declaration order.
    pub domains: Vec<Vec<String>>,
}

/// The atom database.
#[derive(Clone)]
pub struct AtomDB {
    /// External names, indexed by atom. Anonymous atoms hold the empty string.
    external_names: Vec<String>,

    /// Declared predicates, keyed by name.
    predicates: HashMap<String, Predicate>,
}

impl Default for AtomDB {
    fn default() -> Self {
        AtomDB {
            // Index zero is top.
            external_names: vec![String::new()],
            predicates: HashMap::default(),
        }
    }
}

impl AtomDB {
    /// A count of every atom minted so far, top included.
    pub fn atom_count(&self) -> usize {
        self.external_names.len()
    }

    /// The external name of the given atom, empty for anonymous atoms and top.
    pub fn name_of(&self, atom: Atom) -> &str {
        &self.external_names[atom as usize]
    }

    /// True exactly when the atom has no external name.
    pub fn anonymous(&self, atom: Atom) -> bool {
        self.external_names[atom as usize].is_empty()
    }

    /// Mints a fresh atom with no external name.
    pub fn fresh_anonymous(&mut self) -> Atom {
        let atom = self.external_names.len() as Atom;
        self.external_names.push(String::new());
        log::trace!(target: crate::misc::log::targets::ATOM_DB, "Anonymous atom {atom}");
        atom
    }

    /// Declares a predicate and eagerly mints an atom for every ground instance.
    ///
    /// Returns the atom of the first instance.
    pub fn intern(&mut self, name: &str, domains: &[&[&str]]) -> Result<Atom, err::ErrorKind> {
        if !well_formed(name) {
            return Err(GrammarError::Identifier(name.to_owned()).into());
        }

        for domain in domains {
            for element in *domain {
                if !well_formed(element) {
                    return Err(GrammarError::Identifier((*element).to_owned()).into());
                }
            }
        }

        if domains.len() > ARITY_LIMIT {
            return Err(DeclarationError::ArityLimit(domains.len()).into());
        }

        if self.predicates.contains_key(name) {
            return Err(DeclarationError::Redeclared(name.to_owned()).into());
        }

        let first = self.external_names.len() as Atom;
        let instances: usize = domains.iter().map(|domain| domain.len()).product();

        for index in 0..instances {
            self.external_names.push(ground_name(name, domains, index));
        }

        let predicate = Predicate {
            first,
            domains: domains
                .iter()
                .map(|domain| domain.iter().map(|element| (*element).to_owned()).collect())
                .collect(),
        };
        self.predicates.insert(name.to_owned(), predicate);

        log::debug!(
            target: crate::misc::log::targets::ATOM_DB,
            "Declared {name} with {instances} ground instance(s) from atom {first}"
        );

        Ok(first)
    }

    /// Resolves a textual proposition to a literal.
    ///
    /// A leading `!` negates; the remainder is a predicate name followed by
    /// whitespace-separated arguments.
    pub fn resolve(&self, proposition: &str) -> Result<CLiteral, err::ErrorKind> {
        let (polarity, body) = match proposition.strip_prefix('!') {
            Some(stripped) => (false, stripped),
            None => (true, proposition),
        };

        let mut tokens = body.split_whitespace();

        let name = match tokens.next() {
            Some(token) => token,
            None => return Err(GrammarError::Identifier(proposition.to_owned()).into()),
        };
        if !well_formed(name) {
            return Err(GrammarError::Identifier(name.to_owned()).into());
        }

        let arguments: Vec<&str> = tokens.collect();
        for argument in &arguments {
            if !well_formed(argument) {
                return Err(GrammarError::Identifier((*argument).to_owned()).into());
            }
        }

        let predicate = match self.predicates.get(name) {
            Some(predicate) => predicate,
            None => return Err(ReferenceError::Undeclared(name.to_owned()).into()),
        };

        if arguments.len() != predicate.domains.len() {
            return Err(ReferenceError::Arity(name.to_owned()).into());
        }

        let mut offset: usize = 0;
        for (argument, domain) in arguments.iter().zip(&predicate.domains) {
            let position = match domain.iter().position(|element| element.as_str() == *argument) {
                Some(position) => position,
                None => return Err(ReferenceError::Domain((*argument).to_owned()).into()),
            };
            offset = offset * domain.len() + position;
        }

        Ok(CLiteral::new(predicate.first + offset as Atom, polarity))
    }

    /// The external text of a literal, anonymous atoms rendered as `_<atom>`.
    pub fn literal_text(&self, literal: CLiteral) -> String {
        let name = self.name_of(literal.atom());
        let name = if name.is_empty() {
            format!("_{}", literal.atom())
        } else {
            name.to_owned()
        };

        match literal.polarity() {
            true => name,
            false => format!("!{name}"),
        }
    }
}

/// True exactly when the token matches `[a-z][A-Za-z0-9_]*`.
fn well_formed(token: &str) -> bool {
    let mut characters = token.chars();

    match characters.next() {
        Some(first) if first.is_ascii_lowercase() => {}
        _ => return false,
    }

    characters.all(|character| character.is_ascii_alphanumeric() || character == '_')
}

/// The external name of the ground instance at the given mixed-radix offset.
fn ground_name(name: &str, domains: &[&[&str]], index: usize) -> String {
    let mut parts = Vec::with_capacity(domains.len());
    let mut remainder = index;

    for domain in domains.iter().rev() {
        parts.push(domain[remainder % domain.len()]);
        remainder /= domain.len();
    }
    parts.reverse();

    let mut ground = String::from(name);
    for part in parts {
        ground.push(' ');
        ground.push_str(part);
    }
    ground
}

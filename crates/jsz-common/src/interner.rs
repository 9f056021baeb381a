//! String interner for identifier deduplication.
//!
//! Identifiers are interned into a pool and passed around as u32 indices
//! (`Atom`s). Scope environments key on atoms, so name lookups during the
//! scope walk are integer comparisons instead of string comparisons.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Handle to a name stored in an `Interner`.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Default, PartialOrd, Ord,
)]
pub struct Atom(pub u32);

impl Atom {
    /// The empty name; also marks "no name" in node data.
    pub const NONE: Atom = Atom(0);

    #[inline]
    pub fn is_none(self) -> bool {
        self == Atom::NONE
    }
}

/// Names the scope analysis looks at by identity, plus the globals that show
/// up in nearly every script.
const COMMON_STRINGS: &[&str] = &[
    "eval",
    "arguments",
    "undefined",
    "this",
    "let",
    "static",
    "yield",
    "async",
    "await",
    "of",
    "Array",
    "Object",
    "String",
    "Number",
    "Boolean",
    "Function",
    "Promise",
    "Map",
    "Set",
    "Date",
    "RegExp",
    "Error",
    "Symbol",
    "JSON",
    "Math",
    "console",
    "document",
    "window",
    "globalThis",
    "module",
    "exports",
    "require",
];

/// Deduplicating string pool handing out `Atom`s.
///
/// ```
/// use jsz_common::interner::Interner;
/// let mut names = Interner::new();
/// let x = names.intern("x");
/// assert_eq!(names.intern("x"), x);
/// assert_eq!(&names[x], "x");
/// ```
#[derive(Clone, Debug)]
pub struct Interner {
    atoms: FxHashMap<Box<str>, Atom>,
    /// Slot 0 holds the empty string behind `Atom::NONE`.
    names: Vec<Box<str>>,
}

impl Default for Interner {
    fn default() -> Self {
        Self::new()
    }
}

impl Interner {
    pub fn new() -> Self {
        let mut atoms = FxHashMap::default();
        atoms.insert(Box::from(""), Atom::NONE);
        Interner {
            atoms,
            names: vec![Box::from("")],
        }
    }

    /// The atom for `name`, allocating one on first sight.
    pub fn intern(&mut self, name: &str) -> Atom {
        if let Some(&atom) = self.atoms.get(name) {
            return atom;
        }
        let atom = Atom(self.names.len() as u32);
        self.names.push(Box::from(name));
        self.atoms.insert(Box::from(name), atom);
        atom
    }

    /// The atom for `name` if it was interned before.
    #[inline]
    pub fn lookup(&self, name: &str) -> Option<Atom> {
        self.atoms.get(name).copied()
    }

    /// Text of `atom`; an atom from another interner resolves to `""`.
    #[inline]
    pub fn resolve(&self, atom: Atom) -> &str {
        self.try_resolve(atom).unwrap_or_default()
    }

    #[inline]
    pub fn try_resolve(&self, atom: Atom) -> Option<&str> {
        self.names.get(atom.0 as usize).map(|name| &**name)
    }

    /// Number of atoms, `Atom::NONE` included.
    #[inline]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.names.len() == 1
    }

    /// Reserve low atoms for the names every script mentions.
    pub fn intern_common(&mut self) {
        for name in COMMON_STRINGS {
            self.intern(name);
        }
    }
}

impl std::ops::Index<Atom> for Interner {
    type Output = str;

    fn index(&self, atom: Atom) -> &str {
        self.resolve(atom)
    }
}

#[cfg(test)]
#[path = "tests/interner_tests.rs"]
mod tests;

use std::{
    fmt::{self, Display, Formatter},
    slice,
};

use crate::{Atom, Charge, Charged, ConstituentEntry, Constituents, Count, Element, Mass, Massive};

impl<'a> Constituents<'a> {
    #[must_use]
    pub fn get(&self, symbol: impl AsRef<str>) -> Option<&ConstituentEntry<'a>> {
        let symbol = symbol.as_ref();
        self.0.iter().find(|entry| entry.element.symbol() == symbol)
    }

    /// Entries in order of each element's first appearance in the formula
    pub fn iter(&self) -> slice::Iter<'_, ConstituentEntry<'a>> {
        self.0.iter()
    }

    pub fn symbols(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.0.iter().map(|entry| entry.element.symbol())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns `None` if the new total wouldn't fit in a [`Count`]
    pub(crate) fn add(&mut self, element: Element<'a>, count: Count) -> Option<()> {
        if let Some(entry) = self.0.iter_mut().find(|entry| entry.element == element) {
            entry.atom_count = entry.atom_count.checked_add(count)?;
        } else {
            self.0.push(ConstituentEntry {
                element,
                atom_count: count,
                atom: Atom::from(element),
            });
        }
        Some(())
    }
}

// NOTE: The order of first appearance is kept for display, but two compositions with the same elements and counts
// are the same composition
impl PartialEq for Constituents<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .all(|entry| other.get(entry.element.symbol()) == Some(entry))
    }
}

impl<'c, 'a> IntoIterator for &'c Constituents<'a> {
    type Item = &'c ConstituentEntry<'a>;
    type IntoIter = slice::Iter<'c, ConstituentEntry<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Display for Constituents<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for entry in self {
            write!(f, "{}{}", entry.element, entry.atom_count)?;
        }
        Ok(())
    }
}

impl<'a> ConstituentEntry<'a> {
    #[must_use]
    pub const fn element(&self) -> Element<'a> {
        self.element
    }

    #[must_use]
    pub const fn atom_count(&self) -> Count {
        self.atom_count
    }

    /// A neutral atom of this element's default nuclide
    #[must_use]
    pub const fn atom(&self) -> Atom<'a> {
        self.atom
    }
}

/// The standard mass of the element, times the number of atoms
impl Massive for ConstituentEntry<'_> {
    fn mass(&self) -> Mass {
        self.atom_count * self.element.standard_mass()
    }
}

impl Charged for ConstituentEntry<'_> {
    fn charge(&self) -> Charge {
        self.atom_count * self.atom.charge()
    }
}

use rust_decimal::Decimal;

use crate::{Atom, AtomSpec, AtomicDatabase, Charge, Charged, Element, Mass, Massive, Particle};

// Public API ==========================================================================================================

impl<'a> Atom<'a> {
    /// Counts left unset in the [`AtomSpec`] fall back to the natural counts of its element, or to zero without one
    #[must_use]
    pub fn new(
        AtomSpec {
            element,
            proton_count,
            neutron_count,
            electron_count,
        }: AtomSpec<'a>,
    ) -> Self {
        let natural = |count: fn(&Element<'a>) -> u32| element.as_ref().map_or(0, count);

        Self {
            element,
            protons: proton_count.unwrap_or_else(|| natural(Element::natural_protons)),
            neutrons: neutron_count.unwrap_or_else(|| natural(Element::natural_neutrons)),
            electrons: electron_count.unwrap_or_else(|| natural(Element::natural_electrons)),
        }
    }

    /// The element this atom was built from, if any
    #[must_use]
    pub const fn element(&self) -> Option<Element<'a>> {
        self.element
    }

    /// The element identified by this atom's proton count, whether or not it was built from one
    #[must_use]
    pub fn element_of(&self, db: &'a AtomicDatabase) -> Option<Element<'a>> {
        db.get_by_atomic_number(self.protons)
    }

    #[must_use]
    pub const fn protons(&self) -> u32 {
        self.protons
    }

    #[must_use]
    pub const fn neutrons(&self) -> u32 {
        self.neutrons
    }

    #[must_use]
    pub const fn electrons(&self) -> u32 {
        self.electrons
    }
}

impl<'a> From<Element<'a>> for Atom<'a> {
    fn from(element: Element<'a>) -> Self {
        Self::new(AtomSpec {
            element: Some(element),
            ..AtomSpec::default()
        })
    }
}

impl Default for Atom<'_> {
    fn default() -> Self {
        Self::new(AtomSpec::default())
    }
}

// Massive and Charged Trait Implementations ===========================================================================

impl Massive for Atom<'_> {
    fn mass(&self) -> Mass {
        [
            (Particle::Proton, self.protons),
            (Particle::Neutron, self.neutrons),
            (Particle::Electron, self.electrons),
        ]
        .into_iter()
        .map(|(particle, count)| particle.mass() * Decimal::from(count))
        .sum()
    }
}

impl Charged for Atom<'_> {
    fn charge(&self) -> Charge {
        let protons = i64::from(self.protons);
        let electrons = i64::from(self.electrons);
        Particle::Proton.charge() * protons + Particle::Electron.charge() * electrons
    }
}

// Module Tests ========================================================================================================

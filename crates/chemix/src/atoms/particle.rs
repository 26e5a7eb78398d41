use std::fmt::{self, Display, Formatter};

use rust_decimal_macros::dec;

use crate::{Charge, Charged, Mass, Massive, Particle};

// CODATA 2018 recommended values, in unified atomic mass units
const PROTON_MASS: Mass = Mass(dec!(1.007276466621));
const NEUTRON_MASS: Mass = Mass(dec!(1.00866491595));
const ELECTRON_MASS: Mass = Mass(dec!(0.000548579909065));

impl Particle {
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Proton => "p",
            Self::Neutron => "n",
            Self::Electron => "e",
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Proton => "Proton",
            Self::Neutron => "Neutron",
            Self::Electron => "Electron",
        }
    }
}

impl Display for Particle {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl Massive for Particle {
    fn mass(&self) -> Mass {
        match self {
            Self::Proton => PROTON_MASS,
            Self::Neutron => NEUTRON_MASS,
            Self::Electron => ELECTRON_MASS,
        }
    }
}

impl Charged for Particle {
    fn charge(&self) -> Charge {
        Charge(match self {
            Self::Proton => 1,
            Self::Neutron => 0,
            Self::Electron => -1,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn particle_display() {
        assert_eq!(Particle::Proton.to_string(), "p");
        assert_eq!(Particle::Neutron.to_string(), "n");
        assert_eq!(Particle::Electron.to_string(), "e");
        assert_eq!(Particle::Neutron.name(), "Neutron");
    }

    #[test]
    fn particle_masses() {
        assert_eq!(Particle::Proton.mass(), Mass(dec!(1.007276466621)));
        assert_eq!(Particle::Neutron.mass(), Mass(dec!(1.00866491595)));
        assert_eq!(Particle::Electron.mass(), Mass(dec!(0.000548579909065)));
        // A free neutron outweighs a hydrogen atom
        assert!(Particle::Neutron.mass() > Particle::Proton.mass() + Particle::Electron.mass());
    }

    #[test]
    fn particle_charges() {
        let proton = Particle::Proton.charge();
        assert_eq!(proton, Charge(1));
        assert_eq!(Particle::Neutron.charge(), Charge(0));
        let electron = Particle::Electron.charge();
        assert_eq!(electron, Charge(-1));

        assert_eq!(proton, -electron);
    }

    #[test]
    fn derive_more_is_variant() {
        assert!(Particle::Proton.is_proton());
        assert!(!Particle::Proton.is_electron());
        assert!(Particle::Neutron.is_neutron());
        assert!(Particle::Electron.is_electron());
    }
}

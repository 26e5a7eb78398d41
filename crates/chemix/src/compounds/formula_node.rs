use std::fmt::{self, Display, Formatter};

use crate::{AtomicDatabase, Constituents, Count, FormulaNode, ParseError, parsers::parse_formula};

impl<'a> FormulaNode<'a> {
    /// Parses a formula like `Ca(OH)2` or `CuSO4·5H2O`, resolving every element symbol against `db`
    pub fn parse(db: &'a AtomicDatabase, formula: impl AsRef<str>) -> Result<Self, ParseError> {
        parse_formula(db, formula.as_ref())
    }

    /// Multiplies out every group and merges repeated elements. Returns `None` if any atom count overflows
    #[must_use]
    pub fn flatten(&self) -> Option<Constituents<'a>> {
        let mut constituents = Constituents::default();
        self.accumulate(Count::default(), &mut constituents)?;
        Some(constituents)
    }

    fn accumulate(&self, multiplier: Count, constituents: &mut Constituents<'a>) -> Option<()> {
        match self {
            Self::Element(element) => constituents.add(*element, multiplier),
            Self::Group(children) => children.iter().try_for_each(|(child, count)| {
                child.accumulate(multiplier.checked_mul(*count)?, constituents)
            }),
        }
    }
}

impl Display for FormulaNode<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Element(element) => write!(f, "{element}"),
            Self::Group(children) => children.iter().try_for_each(|(child, count)| {
                if child.is_group() {
                    write!(f, "({child}){count}")
                } else {
                    write!(f, "{child}{count}")
                }
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use once_cell::sync::Lazy;

    use super::*;

    static DB: Lazy<AtomicDatabase> = Lazy::new(AtomicDatabase::default);

    fn flatten(formula: &str) -> Constituents<'static> {
        FormulaNode::parse(&DB, formula).unwrap().flatten().unwrap()
    }

    fn counts_of(node: &FormulaNode<'static>) -> Vec<(&'static str, u32)> {
        node.flatten()
            .unwrap()
            .iter()
            .map(|entry| (entry.element().symbol(), entry.atom_count().get()))
            .collect()
    }

    fn counts(formula: &str) -> Vec<(&'static str, u32)> {
        counts_of(&FormulaNode::parse(&DB, formula).unwrap())
    }

    #[test]
    fn flatten_formulas() {
        assert_eq!(counts("O3"), vec![("O", 3)]);
        assert_eq!(counts("NaCl"), vec![("Na", 1), ("Cl", 1)]);
        assert_eq!(counts("KClO3"), vec![("K", 1), ("Cl", 1), ("O", 3)]);
        assert_eq!(counts("H2SO4"), vec![("H", 2), ("S", 1), ("O", 4)]);
        assert_eq!(counts("Ca(OH)2"), vec![("Ca", 1), ("O", 2), ("H", 2)]);
        assert_eq!(counts("CH3(CH2)2CH3"), vec![("C", 4), ("H", 10)]);
        assert_eq!(
            counts("K4[Fe(CN)6]"),
            vec![("K", 4), ("Fe", 1), ("C", 6), ("N", 6)]
        );
        assert_eq!(
            counts("CuSO4·5H2O"),
            vec![("Cu", 1), ("S", 1), ("O", 9), ("H", 10)]
        );
        assert_eq!(
            counts("((CH3)3C)2O"),
            vec![("C", 8), ("H", 18), ("O", 1)]
        );
    }

    #[test]
    fn flattening_ignores_nesting() {
        assert_eq!(flatten("Ca(OH)2"), flatten("CaO2H2"));
        assert_eq!(flatten("Ca(OH)2"), flatten("CaH2O2"));
        assert_eq!(flatten("Mg(OH)2"), flatten("Mg((O)(H))2"));
        assert_eq!(flatten("Mg(OH)2"), flatten("MgOHOH"));
        assert_eq!(flatten("(NH4)2SO4"), flatten("N2H8SO4"));
        assert_eq!(flatten("CuSO4·5H2O"), flatten("CuSO4(H2O)5"));
        assert_ne!(flatten("Ca(OH)2"), flatten("CaOH"));
    }

    #[test]
    fn flattening_is_idempotent() {
        for formula in ["H2SO4", "K4[Fe(CN)6]", "CuSO4·5H2O", "CH3(CH2)2CH3"] {
            let node = FormulaNode::parse(&DB, formula).unwrap();
            assert_eq!(node.flatten(), node.flatten());
            assert_eq!(flatten(formula), flatten(formula));
        }
    }

    #[test]
    fn flattening_overflow() {
        let overflowing = FormulaNode::parse(&DB, "(H65536)65536").unwrap();
        assert_eq!(overflowing.flatten(), None);
        let overflowing = FormulaNode::parse(&DB, "H4294967295H").unwrap();
        assert_eq!(overflowing.flatten(), None);
        // Right on the limit is fine
        let limit = FormulaNode::parse(&DB, "(H65535)65537").unwrap();
        assert_eq!(counts_of(&limit), vec![("H", u32::MAX)]);
    }

    #[test]
    fn display_canonical_formulas() {
        let display = |formula: &str| FormulaNode::parse(&DB, formula).unwrap().to_string();
        assert_eq!(display("H2SO4"), "H2SO4");
        assert_eq!(display("H1S1O4"), "HSO4");
        assert_eq!(display("Ca(OH)2"), "Ca(OH)2");
        assert_eq!(display("K4[Fe(CN)6]"), "K4(Fe(CN)6)");
        assert_eq!(display("CuSO4·5H2O"), "(CuSO4)(H2O)5");
        assert_eq!(display("((H))"), "((H))");
    }

    #[test]
    fn display_round_trips() {
        for formula in ["H2SO4", "Ca(OH)2", "K4[Fe(CN)6]", "CuSO4·5H2O", "((CH3)3C)2O"] {
            let node = FormulaNode::parse(&DB, formula).unwrap();
            let reparsed = FormulaNode::parse(&DB, node.to_string()).unwrap();
            assert_eq!(node.flatten(), reparsed.flatten());
            assert_eq!(node.to_string(), reparsed.to_string());
        }
    }
}

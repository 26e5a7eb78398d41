pub mod errors;
mod formula;
mod primitives;
mod tokens;

pub(crate) use formula::parse_formula;

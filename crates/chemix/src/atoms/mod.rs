mod atom;
pub mod atomic_database;
mod charge;
mod count;
mod element;
pub mod errors;
mod mass;
mod particle;
mod periodic_table;

pub use count::InvalidCountError;

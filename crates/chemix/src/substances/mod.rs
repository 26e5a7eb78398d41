pub mod errors;
mod substance;

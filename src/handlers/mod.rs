pub mod products;
pub mod public;

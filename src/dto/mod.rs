pub mod generate;
pub mod products;

// Repository layer - price lookup

pub mod price_repository;

pub use price_repository::{CategoryPriceTable, PriceRepository};

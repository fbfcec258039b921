//! Catalog domain module: the stock lookup engine.
//!
//! This crate contains the product data model and the lookup/classification
//! logic, implemented purely as deterministic domain code (no IO, no
//! rendering, no translation concerns).

pub mod lookup;
pub mod product;

pub use lookup::{FoundItem, Inventory, LookupResult};
pub use product::{ProductRecord, StockTier, WarehouseEntry};

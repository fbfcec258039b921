//! Asset loading boundary.
//!
//! The lookup engine only ever sees a fully validated [`Inventory`]; all
//! tolerance for malformed source data lives here. Records that cannot be
//! made usable are skipped with a warning, and a failed load degrades to the
//! always-empty inventory so later lookups answer `NotFound` instead of
//! faulting.

pub mod inventory;

pub use inventory::{load_inventory, load_inventory_or_empty, AssetError};

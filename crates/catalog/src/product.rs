use serde::{Deserialize, Serialize};

use stockdesk_core::Sku;

/// Fallback display name for warehouse entries that carry no location name.
pub const UNKNOWN_WAREHOUSE: &str = "Unknown Warehouse";

/// Three-tier stock classification.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockTier {
    OutOfStock,
    LowStock,
    InStock,
}

impl StockTier {
    /// Upper bound of the low-stock band for the aggregate item count.
    pub const ITEM_LOW_STOCK_MAX: u64 = 5;

    /// Classify the aggregate unit count of a product.
    ///
    /// Low stock covers 1 through [`Self::ITEM_LOW_STOCK_MAX`] units.
    pub fn for_item(stock: u64) -> Self {
        match stock {
            0 => StockTier::OutOfStock,
            1..=Self::ITEM_LOW_STOCK_MAX => StockTier::LowStock,
            _ => StockTier::InStock,
        }
    }

    /// Classify a single warehouse's unit count.
    ///
    /// Warehouse cards use a tighter low-stock band than the aggregate count:
    /// only exactly one remaining unit counts as low. Both bands replicate
    /// long-standing behavior and must stay distinct.
    pub fn for_warehouse(stock: u64) -> Self {
        match stock {
            0 => StockTier::OutOfStock,
            1 => StockTier::LowStock,
            _ => StockTier::InStock,
        }
    }
}

/// Per-location stock count attached to a product record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WarehouseEntry {
    /// Location name; absent in some source records.
    pub warehouse: Option<String>,
    pub stock: u64,
}

impl WarehouseEntry {
    /// Display name, substituting [`UNKNOWN_WAREHOUSE`] for nameless entries.
    pub fn display_name(&self) -> &str {
        self.warehouse.as_deref().unwrap_or(UNKNOWN_WAREHOUSE)
    }

    /// Tier of this entry's own unit count.
    pub fn tier(&self) -> StockTier {
        StockTier::for_warehouse(self.stock)
    }
}

/// A single product as loaded from the inventory table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRecord {
    pub id: Sku,
    pub name: String,
    pub stock: u64,
    #[serde(default)]
    pub warehouse_stock: Vec<WarehouseEntry>,
}

impl ProductRecord {
    /// Tier of the aggregate unit count.
    pub fn tier(&self) -> StockTier {
        StockTier::for_item(self.stock)
    }
}

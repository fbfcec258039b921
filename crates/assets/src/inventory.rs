//! Inventory file loading and record validation.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use stockdesk_catalog::{Inventory, ProductRecord, WarehouseEntry};
use stockdesk_core::{DomainError, DomainResult, Sku};

/// Failure to obtain the inventory table from its source file.
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Unvalidated record shape, tolerant of missing/odd fields.
///
/// Validation happens in [`validate_record`], not during deserialization, so
/// one bad record never rejects the whole file.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawProductRecord {
    id: Option<String>,
    name: Option<String>,
    stock: Option<i64>,
    #[serde(default)]
    warehouse_stock: Vec<RawWarehouseEntry>,
}

#[derive(Debug, Deserialize)]
struct RawWarehouseEntry {
    warehouse: Option<String>,
    stock: Option<i64>,
}

/// Load and validate the inventory table.
///
/// The file must be a JSON array; elements that are not record objects, or
/// records without a usable id and name, are skipped (warned, not fatal).
pub fn load_inventory(path: &Path) -> Result<Inventory, AssetError> {
    let content = fs::read_to_string(path).map_err(|source| AssetError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let raw: Vec<serde_json::Value> =
        serde_json::from_str(&content).map_err(|source| AssetError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    let mut records = Vec::with_capacity(raw.len());
    for (index, value) in raw.into_iter().enumerate() {
        match serde_json::from_value::<RawProductRecord>(value) {
            Ok(raw_record) => match validate_record(index, raw_record) {
                Ok(record) => records.push(record),
                Err(e) => {
                    tracing::warn!(index, error = %e, "skipping malformed inventory record");
                }
            },
            Err(e) => {
                tracing::warn!(index, error = %e, "skipping non-record inventory entry");
            }
        }
    }

    tracing::debug!(count = records.len(), path = %path.display(), "inventory loaded");
    Ok(Inventory::new(records))
}

/// Load the inventory, treating any failure as an empty table.
///
/// This is the session-startup entry point: the engine's contract is that an
/// unavailable table behaves like an always-empty one.
pub fn load_inventory_or_empty(path: &Path) -> Inventory {
    match load_inventory(path) {
        Ok(inventory) => inventory,
        Err(e) => {
            tracing::warn!(error = %e, "inventory unavailable; continuing with empty table");
            Inventory::unavailable()
        }
    }
}

fn validate_record(index: usize, raw: RawProductRecord) -> DomainResult<ProductRecord> {
    let id = raw
        .id
        .ok_or_else(|| DomainError::invalid_record("missing id"))
        .and_then(Sku::new)?;
    let name = match raw.name {
        Some(name) if !name.trim().is_empty() => name,
        _ => return Err(DomainError::invalid_record("missing name")),
    };

    Ok(ProductRecord {
        stock: clamp_stock(raw.stock, index, &id),
        warehouse_stock: raw
            .warehouse_stock
            .into_iter()
            .map(|entry| WarehouseEntry {
                warehouse: entry.warehouse.filter(|w| !w.trim().is_empty()),
                stock: clamp_stock(entry.stock, index, &id),
            })
            .collect(),
        id,
        name,
    })
}

/// Missing or negative counts become 0 rather than faulting; the engine's
/// domain is non-negative.
fn clamp_stock(stock: Option<i64>, index: usize, id: &Sku) -> u64 {
    match stock {
        Some(s) if s >= 0 => s as u64,
        Some(s) => {
            tracing::warn!(index, id = %id, stock = s, "negative stock clamped to 0");
            0
        }
        None => 0,
    }
}

//! Lookup engine: identifier matching and result classification.

use serde::Serialize;

use crate::product::{ProductRecord, StockTier, WarehouseEntry};

/// The inventory table for one session.
///
/// Populated once at startup and read-only afterwards; every lookup borrows
/// from it. A failed load is represented by [`Inventory::unavailable`], which
/// answers `NotFound` for every identifier instead of faulting.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Inventory {
    records: Vec<ProductRecord>,
}

impl Inventory {
    pub fn new(records: Vec<ProductRecord>) -> Self {
        Self { records }
    }

    /// The always-empty table used when the inventory source failed to load.
    pub fn unavailable() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn records(&self) -> &[ProductRecord] {
        &self.records
    }

    /// Find the first record whose id matches `identifier` case-insensitively.
    ///
    /// `identifier` is expected to be trimmed and non-empty; callers that take
    /// raw user input go through [`Inventory::lookup`], which rejects empty
    /// input up front. Duplicate ids are first-match-wins.
    pub fn find(&self, identifier: &str) -> Option<&ProductRecord> {
        self.records.iter().find(|r| r.id.matches(identifier))
    }

    /// Run a full lookup for raw user input.
    ///
    /// This is the single entry point the rendering side needs: it validates
    /// the input, scans the table, and derives the tier for the item and for
    /// every warehouse entry. Pure with respect to `self`; repeated calls
    /// with the same input yield the same result.
    pub fn lookup(&self, raw_identifier: &str) -> LookupResult<'_> {
        let identifier = raw_identifier.trim();
        if identifier.is_empty() {
            return LookupResult::InputMissing;
        }

        match self.find(identifier) {
            Some(record) => LookupResult::Found(FoundItem::classify(record)),
            None => LookupResult::NotFound,
        }
    }
}

/// Outcome of a single lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum LookupResult<'a> {
    /// The user supplied no identifier (empty or whitespace-only input).
    InputMissing,
    /// No record matched the identifier.
    NotFound,
    /// A record matched; carries the derived tiers.
    Found(FoundItem<'a>),
}

/// A matched record together with its derived stock tiers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FoundItem<'a> {
    #[serde(flatten)]
    pub record: &'a ProductRecord,
    pub tier: StockTier,
    /// Tier per warehouse entry, in source order.
    pub warehouse_tiers: Vec<(&'a WarehouseEntry, StockTier)>,
}

impl<'a> FoundItem<'a> {
    fn classify(record: &'a ProductRecord) -> Self {
        let warehouse_tiers = record
            .warehouse_stock
            .iter()
            .map(|entry| (entry, entry.tier()))
            .collect();
        Self {
            record,
            tier: record.tier(),
            warehouse_tiers,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockdesk_core::Sku;

    fn record(id: &str, name: &str, stock: u64, warehouses: &[(&str, u64)]) -> ProductRecord {
        ProductRecord {
            id: Sku::new(id).unwrap(),
            name: name.to_string(),
            stock,
            warehouse_stock: warehouses
                .iter()
                .map(|(w, s)| WarehouseEntry {
                    warehouse: Some(w.to_string()),
                    stock: *s,
                })
                .collect(),
        }
    }

    fn sample_inventory() -> Inventory {
        Inventory::new(vec![
            record("SKU1", "Widget", 3, &[("A", 0), ("B", 1)]),
            record("SKU2", "Gadget", 0, &[]),
            record("SKU3", "Flange", 12, &[("A", 7), ("C", 5)]),
        ])
    }

    #[test]
    fn find_is_case_insensitive() {
        let inventory = sample_inventory();
        let by_lower = inventory.find("sku1").unwrap();
        let by_upper = inventory.find("SKU1").unwrap();
        let by_mixed = inventory.find("Sku1").unwrap();
        assert_eq!(by_lower, by_upper);
        assert_eq!(by_lower, by_mixed);
        assert_eq!(by_lower.name, "Widget");
    }

    #[test]
    fn find_preserves_stored_case_for_display() {
        let inventory = sample_inventory();
        let found = inventory.find("sku1").unwrap();
        assert_eq!(found.id.as_str(), "SKU1");
    }

    #[test]
    fn lookup_trims_surrounding_whitespace() {
        let inventory = sample_inventory();
        let direct = inventory.lookup("SKU1");
        let padded = inventory.lookup("  SKU1  ");
        assert_eq!(direct, padded);
        assert!(matches!(padded, LookupResult::Found(_)));
    }

    #[test]
    fn lookup_rejects_empty_input_before_scanning() {
        let inventory = sample_inventory();
        assert_eq!(inventory.lookup(""), LookupResult::InputMissing);
        assert_eq!(inventory.lookup("   "), LookupResult::InputMissing);
        // Distinguishable from a miss.
        assert_eq!(inventory.lookup("SKU999"), LookupResult::NotFound);
    }

    #[test]
    fn lookup_against_empty_inventory_is_not_found() {
        let inventory = Inventory::unavailable();
        assert_eq!(inventory.lookup("ANY-SKU"), LookupResult::NotFound);
        // Empty input still wins over the empty table.
        assert_eq!(inventory.lookup(" "), LookupResult::InputMissing);
    }

    #[test]
    fn lookup_classifies_item_and_warehouses() {
        let inventory = sample_inventory();
        let LookupResult::Found(found) = inventory.lookup("sku1") else {
            panic!("expected a match for sku1");
        };

        assert_eq!(found.record.name, "Widget");
        // 3 units total: inside the 1..=5 low band.
        assert_eq!(found.tier, StockTier::LowStock);

        let tiers: Vec<(&str, StockTier)> = found
            .warehouse_tiers
            .iter()
            .map(|(entry, tier)| (entry.display_name(), *tier))
            .collect();
        assert_eq!(
            tiers,
            vec![("A", StockTier::OutOfStock), ("B", StockTier::LowStock)]
        );
    }

    #[test]
    fn duplicate_ids_resolve_to_first_match() {
        let inventory = Inventory::new(vec![
            record("SKU1", "First", 1, &[]),
            record("sku1", "Second", 9, &[]),
        ]);
        let found = inventory.find("SKU1").unwrap();
        assert_eq!(found.name, "First");
    }

    #[test]
    fn record_without_warehouses_yields_no_warehouse_tiers() {
        let inventory = sample_inventory();
        let LookupResult::Found(found) = inventory.lookup("SKU2") else {
            panic!("expected a match for SKU2");
        };
        assert_eq!(found.tier, StockTier::OutOfStock);
        assert!(found.warehouse_tiers.is_empty());
    }

    #[test]
    fn repeated_lookups_do_not_mutate_the_table() {
        let inventory = sample_inventory();
        let before = inventory.clone();
        for _ in 0..3 {
            let _ = inventory.lookup("sku1");
            let _ = inventory.lookup("missing");
            let _ = inventory.lookup("");
        }
        assert_eq!(inventory, before);
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        /// Randomly flip the case of each alphabetic character.
        fn flip_case(id: &str, mask: &[bool]) -> String {
            id.chars()
                .zip(mask.iter().cycle())
                .map(|(c, flip)| {
                    if *flip {
                        if c.is_ascii_lowercase() {
                            c.to_ascii_uppercase()
                        } else {
                            c.to_ascii_lowercase()
                        }
                    } else {
                        c
                    }
                })
                .collect()
        }

        proptest! {
            /// Property: case differences never change which record is found.
            #[test]
            fn lookup_is_case_insensitive(
                id in "[A-Za-z][A-Za-z0-9-]{0,19}",
                mask in proptest::collection::vec(any::<bool>(), 1..20),
                stock in 0u64..1000
            ) {
                let inventory = Inventory::new(vec![ProductRecord {
                    id: Sku::new(id.clone()).unwrap(),
                    name: "Anything".to_string(),
                    stock,
                    warehouse_stock: vec![],
                }]);

                let flipped = flip_case(&id, &mask);
                prop_assert_eq!(inventory.lookup(&id), inventory.lookup(&flipped));
                prop_assert!(matches!(inventory.lookup(&flipped), LookupResult::Found(_)));
            }

            /// Property: surrounding whitespace is invisible to the engine.
            #[test]
            fn lookup_ignores_surrounding_whitespace(
                id in "[A-Za-z0-9-]{1,20}",
                left in "[ \t]{0,4}",
                right in "[ \t]{0,4}"
            ) {
                let inventory = Inventory::new(vec![ProductRecord {
                    id: Sku::new(id.clone()).unwrap(),
                    name: "Anything".to_string(),
                    stock: 1,
                    warehouse_stock: vec![],
                }]);

                let padded = format!("{left}{id}{right}");
                prop_assert_eq!(inventory.lookup(&padded), inventory.lookup(&id));
            }

            /// Property: every warehouse entry gets a tier, in source order.
            #[test]
            fn warehouse_tiers_cover_all_entries_in_order(
                stocks in proptest::collection::vec(0u64..100, 0..8)
            ) {
                let entries: Vec<WarehouseEntry> = stocks
                    .iter()
                    .enumerate()
                    .map(|(i, s)| WarehouseEntry {
                        warehouse: Some(format!("WH-{i}")),
                        stock: *s,
                    })
                    .collect();
                let inventory = Inventory::new(vec![ProductRecord {
                    id: Sku::new("SKU1").unwrap(),
                    name: "Widget".to_string(),
                    stock: 1,
                    warehouse_stock: entries,
                }]);

                let LookupResult::Found(found) = inventory.lookup("SKU1") else {
                    panic!("expected a match");
                };
                prop_assert_eq!(found.warehouse_tiers.len(), stocks.len());
                for (i, ((entry, tier), stock)) in
                    found.warehouse_tiers.iter().zip(&stocks).enumerate()
                {
                    let expected = format!("WH-{i}");
                    prop_assert_eq!(entry.display_name(), expected.as_str());
                    prop_assert_eq!(*tier, StockTier::for_warehouse(*stock));
                }
            }

            /// Property: the engine is a pure function of its inputs.
            #[test]
            fn lookup_is_idempotent(
                query in "[A-Za-z0-9 -]{0,24}",
                stock in 0u64..1000
            ) {
                let inventory = Inventory::new(vec![ProductRecord {
                    id: Sku::new("SKU1").unwrap(),
                    name: "Widget".to_string(),
                    stock,
                    warehouse_stock: vec![],
                }]);
                let snapshot = inventory.clone();

                let first = inventory.lookup(&query);
                let second = inventory.lookup(&query);
                prop_assert_eq!(first, second);
                prop_assert_eq!(inventory, snapshot);
            }
        }
    }
}

//! Session context: the two tables, loaded once before any lookup.

use std::path::Path;

use stockdesk_assets::load_inventory;
use stockdesk_catalog::{Inventory, LookupResult};
use stockdesk_i18n::{keys, Translator};
use stockdesk_render::{render_inventory_list, render_lookup};

/// Read-only state for one invocation: the inventory table and the
/// translation table.
///
/// Both loads complete here, before the first lookup can run; nothing is
/// mutated afterwards.
#[derive(Debug)]
pub struct Session {
    inventory: Inventory,
    translator: Translator,
    data_available: bool,
}

impl Session {
    /// Load both tables from `<data_dir>/data/inventory.json` and
    /// `<data_dir>/i18n/<locale>.json`.
    ///
    /// Neither load can fail the session: a broken translation file falls
    /// back to built-in English, and a broken inventory file yields the
    /// always-empty table (every lookup answers `NotFound`, and the UI gets
    /// a data-unavailable message).
    pub fn open(data_dir: &Path, locale: &str) -> Self {
        let translator = Translator::load(&data_dir.join("i18n"), locale);
        let (inventory, data_available) = match load_inventory(&data_dir.join("data/inventory.json"))
        {
            Ok(inventory) => (inventory, true),
            Err(e) => {
                tracing::warn!(error = %e, "inventory unavailable; continuing with empty table");
                (Inventory::unavailable(), false)
            }
        };
        Self {
            inventory,
            translator,
            data_available,
        }
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn translator(&self) -> &Translator {
        &self.translator
    }

    /// Rendered text for one lookup.
    ///
    /// Input validation comes first; after that, a failed data load surfaces
    /// as its own message even though the engine itself would just answer
    /// `NotFound`.
    pub fn lookup_text(&self, raw_identifier: &str) -> String {
        let result = self.inventory.lookup(raw_identifier);
        if !self.data_available && !matches!(result, LookupResult::InputMissing) {
            return self
                .translator
                .text(keys::ERROR_DATA_UNAVAILABLE)
                .to_string();
        }
        render_lookup(&result, &self.translator)
    }

    /// Structured lookup result for `--json` output.
    pub fn lookup_json(&self, raw_identifier: &str) -> serde_json::Value {
        serde_json::to_value(self.inventory.lookup(raw_identifier))
            .unwrap_or(serde_json::Value::Null)
    }

    /// Rendered inventory list.
    pub fn list_text(&self) -> String {
        render_inventory_list(&self.inventory, &self.translator)
    }
}

//! Rendering adapter: lookup results and list views as terminal text.
//!
//! All display text comes from the translator; tier badges carry the usual
//! traffic-light colors (disabled automatically when stdout is not a tty).

use std::fmt::Write as _;

use colored::Colorize;

use stockdesk_catalog::{FoundItem, Inventory, LookupResult, StockTier, WarehouseEntry};
use stockdesk_i18n::{keys, Translator};

/// Localized label for a tier.
pub fn tier_label<'a>(tier: StockTier, translator: &'a Translator) -> &'a str {
    match tier {
        StockTier::InStock => translator.text(keys::TIER_IN_STOCK),
        StockTier::LowStock => translator.text(keys::TIER_LOW_STOCK),
        StockTier::OutOfStock => translator.text(keys::TIER_OUT_OF_STOCK),
    }
}

fn tier_badge(tier: StockTier, translator: &Translator) -> String {
    let label = format!("[{}]", tier_label(tier, translator));
    match tier {
        StockTier::InStock => label.green().to_string(),
        StockTier::LowStock => label.yellow().to_string(),
        StockTier::OutOfStock => label.red().to_string(),
    }
}

fn warehouse_name<'a>(entry: &'a WarehouseEntry, translator: &'a Translator) -> &'a str {
    entry
        .warehouse
        .as_deref()
        .unwrap_or_else(|| translator.text(keys::LABEL_UNKNOWN_WAREHOUSE))
}

/// Render the outcome of one lookup.
///
/// Every outcome renders to displayable text; nothing in the lookup path is
/// allowed to fault past this point.
pub fn render_lookup(result: &LookupResult<'_>, translator: &Translator) -> String {
    match result {
        LookupResult::InputMissing => translator.text(keys::ERROR_INPUT_MISSING).to_string(),
        LookupResult::NotFound => format!(
            "{}\n  {}",
            translator.text(keys::ERROR_NOT_FOUND).red(),
            translator.text(keys::ERROR_NOT_FOUND_HINT)
        ),
        LookupResult::Found(found) => render_found(found, translator),
    }
}

fn render_found(found: &FoundItem<'_>, translator: &Translator) -> String {
    let mut out = String::new();
    let record = found.record;

    let _ = writeln!(
        out,
        "{}  {}",
        record.name.bold(),
        tier_badge(found.tier, translator)
    );
    let _ = writeln!(
        out,
        "  {}: {}",
        translator.text(keys::LABEL_PRODUCT_ID),
        record.id
    );
    let _ = writeln!(
        out,
        "  {}: {}",
        translator.text(keys::LABEL_TOTAL_UNITS),
        record.stock
    );

    if !found.warehouse_tiers.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", translator.text(keys::WAREHOUSE_HEADING).bold());
        let _ = writeln!(out, "{}", translator.text(keys::WAREHOUSE_SUBHEADING));
        for (entry, tier) in &found.warehouse_tiers {
            let _ = writeln!(
                out,
                "  {:<24} {:<16} {}",
                warehouse_name(entry, translator),
                tier_badge(*tier, translator),
                entry.stock
            );
        }
    }

    out
}

/// Render the full inventory list (id and name per line), or the empty-state
/// message when nothing loaded.
pub fn render_inventory_list(inventory: &Inventory, translator: &Translator) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", translator.text(keys::FORM_TITLE).bold());

    if inventory.is_empty() {
        let _ = writeln!(out, "{}", translator.text(keys::LIST_EMPTY));
        return out;
    }

    for record in inventory.records() {
        let _ = writeln!(out, "{:<16} {}", record.id, record.name);
    }
    out
}

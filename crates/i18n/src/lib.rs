//! Translation table for user-facing text.
//!
//! Locale files are nested JSON (`i18n/<locale>.json`); they are flattened
//! into dot-joined keys once at load time. Every key has a built-in English
//! default, so a missing or unparsable locale file degrades to English
//! instead of failing.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use sys_locale::get_locale;

/// Dot-joined translation keys, mirroring the locale file structure.
pub mod keys {
    pub const FORM_TITLE: &str = "inventoryForm.title";

    pub const ERROR_INPUT_MISSING: &str = "inventoryForm.output.errorInputMissing";
    pub const ERROR_NOT_FOUND: &str = "inventoryForm.output.errorNotFound";
    pub const ERROR_NOT_FOUND_HINT: &str = "inventoryForm.output.errorNotFoundHint";
    pub const ERROR_DATA_UNAVAILABLE: &str = "inventoryForm.output.errorDataUnavailable";

    pub const TIER_IN_STOCK: &str = "stockTier.inStock";
    pub const TIER_LOW_STOCK: &str = "stockTier.lowStock";
    pub const TIER_OUT_OF_STOCK: &str = "stockTier.outOfStock";

    pub const LABEL_PRODUCT_ID: &str = "labels.productId";
    pub const LABEL_TOTAL_UNITS: &str = "labels.totalUnits";
    pub const LABEL_UNKNOWN_WAREHOUSE: &str = "labels.unknownWarehouse";

    pub const WAREHOUSE_HEADING: &str = "warehouse.heading";
    pub const WAREHOUSE_SUBHEADING: &str = "warehouse.subheading";

    pub const LIST_EMPTY: &str = "inventoryList.empty";
}

/// Locales with a checked-in translation file.
const SUPPORTED_LOCALES: &[&str] = &["en-US", "de-DE"];

const DEFAULT_LOCALE: &str = "en-US";

/// Runtime translation table for one session.
#[derive(Debug, Clone, Default)]
pub struct Translator {
    locale: String,
    table: HashMap<String, String>,
}

impl Translator {
    /// Built-in English only; the state after a failed locale load.
    pub fn built_in() -> Self {
        Self {
            locale: DEFAULT_LOCALE.to_string(),
            table: HashMap::new(),
        }
    }

    /// Load `<dir>/<locale>.json`.
    ///
    /// Any failure (missing file, unreadable, not valid JSON) logs a warning
    /// and falls back to the built-in table, so startup never faults on
    /// translations.
    pub fn load(dir: &Path, locale: &str) -> Self {
        let path = dir.join(format!("{locale}.json"));
        let table = match fs::read_to_string(&path) {
            Ok(content) => match serde_json::from_str::<serde_json::Value>(&content) {
                Ok(value) => flatten(&value),
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "failed to parse translations");
                    HashMap::new()
                }
            },
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "failed to load translations");
                HashMap::new()
            }
        };
        Self {
            locale: locale.to_string(),
            table,
        }
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Look up a key, falling back to the built-in English default.
    pub fn text(&self, key: &str) -> &str {
        if let Some(value) = self.table.get(key) {
            return value;
        }
        en(key)
    }
}

/// Flatten nested JSON objects into dot-joined string keys.
///
/// Non-string leaves (numbers, arrays, booleans) are ignored; the table only
/// carries display text.
fn flatten(value: &serde_json::Value) -> HashMap<String, String> {
    fn walk(prefix: &str, value: &serde_json::Value, out: &mut HashMap<String, String>) {
        match value {
            serde_json::Value::String(s) => {
                out.insert(prefix.to_string(), s.clone());
            }
            serde_json::Value::Object(map) => {
                for (k, v) in map {
                    let key = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    walk(&key, v, out);
                }
            }
            _ => {}
        }
    }

    let mut out = HashMap::new();
    walk("", value, &mut out);
    out
}

/// Resolve the session locale: explicit flag first, then the system locale,
/// then the default.
pub fn resolve_locale(explicit: Option<&str>) -> String {
    explicit
        .and_then(normalize)
        .or_else(|| get_locale().as_deref().and_then(normalize))
        .or_else(|| std::env::var("LANG").ok().as_deref().and_then(normalize))
        .unwrap_or_else(|| DEFAULT_LOCALE.to_string())
}

/// Map a locale string onto a supported locale by language prefix.
fn normalize(raw: &str) -> Option<String> {
    let lang = raw
        .trim()
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    if lang.is_empty() {
        return None;
    }
    SUPPORTED_LOCALES
        .iter()
        .find(|l| l.to_lowercase().starts_with(&lang))
        .map(|l| l.to_string())
}

/// Built-in English defaults, one per key.
fn en(key: &str) -> &'static str {
    use keys::*;
    match key {
        FORM_TITLE => "Inventory Stock Lookup",
        ERROR_INPUT_MISSING => "Error: Please enter a Product ID.",
        ERROR_NOT_FOUND => "Product not found",
        ERROR_NOT_FOUND_HINT => "Please check the Product ID and try again",
        ERROR_DATA_UNAVAILABLE => "Error: Inventory data failed to load.",
        TIER_IN_STOCK => "In Stock",
        TIER_LOW_STOCK => "Low Stock",
        TIER_OUT_OF_STOCK => "Out of Stock",
        LABEL_PRODUCT_ID => "Product ID",
        LABEL_TOTAL_UNITS => "Total Units",
        LABEL_UNKNOWN_WAREHOUSE => "Unknown Warehouse",
        WAREHOUSE_HEADING => "Warehouse Distribution",
        WAREHOUSE_SUBHEADING => "Stock levels across all locations",
        LIST_EMPTY => "No inventory items loaded.",
        _ => "[missing translation]",
    }
}

//! Case-insensitive alias tables.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::error::{Result, StandardsError};

#[derive(Debug, Deserialize)]
struct AliasFile {
    #[serde(default)]
    aliases: BTreeMap<String, String>,
}

/// Maps known text variants to one canonical representation.
///
/// Keys are stored in [`alias_key`] form so lookups ignore case and
/// surrounding whitespace. Internal spacing must match exactly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AliasTable {
    name: String,
    entries: BTreeMap<String, String>,
}

impl AliasTable {
    /// Parses a table from TOML with a single `[aliases]` section.
    ///
    /// # Errors
    ///
    /// Returns [`StandardsError::Parse`] for malformed TOML and
    /// [`StandardsError::ConflictingAlias`] when two keys normalize to the
    /// same lookup key but map to different values.
    pub fn from_toml_str(name: &str, source: &str) -> Result<Self> {
        let file: AliasFile = toml::from_str(source).map_err(|e| StandardsError::Parse {
            table: name.to_string(),
            message: e.to_string(),
        })?;
        Self::from_pairs(name, file.aliases)
    }

    /// Builds a table from `(variant, canonical)` pairs.
    pub fn from_pairs<I, K, V>(name: &str, pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut entries: BTreeMap<String, String> = BTreeMap::new();
        for (variant, canonical) in pairs {
            let key = alias_key(variant.as_ref());
            let canonical = canonical.into();
            if let Some(existing) = entries.get(&key) {
                if *existing != canonical {
                    return Err(StandardsError::ConflictingAlias {
                        table: name.to_string(),
                        key,
                        first: existing.clone(),
                        second: canonical,
                    });
                }
                continue;
            }
            entries.insert(key, canonical);
        }
        Ok(Self {
            name: name.to_string(),
            entries,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Looks up the canonical value for a raw variant.
    ///
    /// An empty canonical value is returned as `Some("")`: the variant is
    /// known and explicitly invalid.
    pub fn get(&self, variant: &str) -> Option<&str> {
        self.entries.get(&alias_key(variant)).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Normalizes a variant for alias lookup: trimmed and lower case.
///
/// # Examples
///
/// ```
/// use survey_standards::alias_key;
///
/// assert_eq!(alias_key("  United States "), "united states");
/// assert_eq!(alias_key("US  Dollar"), "us  dollar");
/// assert_eq!(alias_key("U.S."), "u.s.");
/// ```
pub fn alias_key(variant: &str) -> String {
    variant.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_ignores_case_and_surrounding_space() {
        let table = AliasTable::from_pairs("test", [("Chinese Yuan", "CNY")]).unwrap();
        assert_eq!(table.get("chinese yuan"), Some("CNY"));
        assert_eq!(table.get("  CHINESE YUAN "), Some("CNY"));
        assert_eq!(table.get("yuan"), None);
    }

    #[test]
    fn lookup_keeps_internal_spacing() {
        let table = AliasTable::from_pairs("test", [("Chinese Yuan", "CNY")]).unwrap();
        assert_eq!(table.get("chinese   yuan"), None);
    }

    #[test]
    fn empty_target_is_kept() {
        let table = AliasTable::from_pairs("test", [("equity", "")]).unwrap();
        assert_eq!(table.get("Equity"), Some(""));
    }

    #[test]
    fn conflicting_keys_are_rejected() {
        let result = AliasTable::from_pairs("test", [("UK", "United Kingdom"), ("uk", "Ukraine")]);
        assert!(matches!(
            result,
            Err(StandardsError::ConflictingAlias { .. })
        ));
    }

    #[test]
    fn parse_error_names_the_table() {
        let err = AliasTable::from_toml_str("broken", "[aliases\n").unwrap_err();
        assert!(err.to_string().contains("broken"));
    }
}

use crate::error::Error;
use serde_derive::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// The two process-wide lookup tables, injected into the pipeline at
/// construction time. Both are read-only after load.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct NormalizerConfig {
    /// base name -> irregular plural table identifier
    pub naming_exceptions: BTreeMap<String, String>,
    /// capitalized reference literal -> lowercase table identifier
    pub reference_map: BTreeMap<String, String>,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        let mut naming_exceptions = BTreeMap::new();
        naming_exceptions.insert("property".to_string(), "properties".to_string());

        let mut reference_map = BTreeMap::new();
        for (entity, table) in [
            ("Users", "users"),
            ("Properties", "properties"),
            ("Units", "units"),
            ("Tenants", "tenants"),
            ("Leases", "leases"),
            ("Invoices", "invoices"),
            ("Transactions", "transactions"),
            ("Maintenances", "maintenances"),
            ("Expenses", "expenses"),
            ("Payments", "payments"),
            ("MessageTemplates", "messagetemplates"),
            ("Messages", "messages"),
            ("Settings", "settings"),
        ] {
            reference_map.insert(entity.to_string(), table.to_string());
        }

        Self {
            naming_exceptions,
            reference_map,
        }
    }
}

impl NormalizerConfig {
    pub fn from_toml_path(path: &Path) -> Result<Self, Error> {
        let raw = fs::read_to_string(path)?;
        let config = toml::from_str(&raw)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_tables_cover_the_known_entities() {
        let config = NormalizerConfig::default();
        assert_eq!(
            config.naming_exceptions.get("property").map(String::as_str),
            Some("properties")
        );
        assert_eq!(
            config.reference_map.get("Users").map(String::as_str),
            Some("users")
        );
        assert_eq!(
            config.reference_map.get("MessageTemplates").map(String::as_str),
            Some("messagetemplates")
        );
    }

    #[test]
    fn toml_overrides_replace_the_defaults() {
        let raw = "\
[naming_exceptions]\n\
category = \"categories\"\n\
\n\
[reference_map]\n\
Categories = \"categories\"\n";
        let config: NormalizerConfig = toml::from_str(raw).unwrap();
        assert_eq!(
            config.naming_exceptions.get("category").map(String::as_str),
            Some("categories")
        );
        assert_eq!(config.reference_map.len(), 1);
    }

    #[test]
    fn empty_toml_falls_back_to_defaults() {
        let config: NormalizerConfig = toml::from_str("").unwrap();
        assert_eq!(config, NormalizerConfig::default());
    }
}

use heck::ToUpperCamelCase;
use std::collections::BTreeMap;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedName {
    pub class_identifier: String, // CamelCase
    pub table_identifier: String, // lowercase plural
}

/// Maps a base entity name to its class and persisted-table identifiers.
/// The exception table overrides the default `base + "s"` pluralization
/// for irregular plurals; everything else is total over any identifier.
pub fn resolve(base_name: &str, exceptions: &BTreeMap<String, String>) -> ResolvedName {
    let class_identifier = base_name.to_upper_camel_case();
    let table_identifier = exceptions
        .get(base_name)
        .cloned()
        .unwrap_or_else(|| format!("{}s", base_name.to_lowercase()));

    ResolvedName {
        class_identifier,
        table_identifier,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exceptions() -> BTreeMap<String, String> {
        let mut table = BTreeMap::new();
        table.insert("property".to_string(), "properties".to_string());
        table
    }

    #[test]
    fn default_pluralization_appends_s() {
        let resolved = resolve("user", &exceptions());
        assert_eq!(resolved.class_identifier, "User");
        assert_eq!(resolved.table_identifier, "users");
    }

    #[test]
    fn exception_table_overrides_default() {
        let resolved = resolve("property", &exceptions());
        assert_eq!(resolved.class_identifier, "Property");
        assert_eq!(resolved.table_identifier, "properties");
    }

    #[test]
    fn unknown_base_name_still_resolves() {
        let resolved = resolve("lease", &BTreeMap::new());
        assert_eq!(resolved.class_identifier, "Lease");
        assert_eq!(resolved.table_identifier, "leases");
    }
}

/// What the extracted model text tells us about the file's needs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FeatureFlags {
    pub needs_generator_import: bool,   // fields mention UUIDV4
    pub has_explicit_table_name: bool,  // options already declare tableName
    pub has_duplicate_import_lines: bool,
    /// The declared table name value, when one could be extracted.
    pub explicit_table_name: Option<String>,
}

use super::feature_flags::FeatureFlags;

/// Everything needed to regenerate one model file. Built once per file,
/// never shared across files.
#[derive(Clone, Debug)]
pub struct ModelDescriptor {
    pub base_name: String,        // from the file name, e.g. "user"
    pub class_identifier: String, // CamelCase, e.g. "User"
    pub table_identifier: String, // lowercase plural, e.g. "users"
    pub flags: FeatureFlags,
    pub fields_block: String,  // inner text of the field-map literal
    pub options_block: Option<String>, // inner text of the options literal, if any
}

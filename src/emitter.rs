use crate::imports;
use crate::types::ModelDescriptor;

/// Assembles the canonical file: preamble, registration expression, a
/// normalized options block, and the export. The field-map text inside the
/// braces is whatever the descriptor carries, byte for byte.
pub fn emit(descriptor: &ModelDescriptor) -> String {
    let preamble = imports::synthesize(descriptor.flags.needs_generator_import);

    // An explicit tableName already declared in the file wins over the
    // resolver's; the surrounding block is normalized either way.
    let table_name = descriptor
        .flags
        .explicit_table_name
        .as_deref()
        .unwrap_or(&descriptor.table_identifier);

    format!(
        "{preamble}\nconst {class} = sequelize.define('{class}', {{{fields}}}, {{\n  timestamps: true,\n  tableName: '{table}' // Explicitly set table name to lowercase for PostgreSQL\n}});\n\nmodule.exports = {class};\n",
        preamble = preamble,
        class = descriptor.class_identifier,
        fields = descriptor.fields_block,
        table = table_name,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::FeatureFlags;

    fn descriptor() -> ModelDescriptor {
        ModelDescriptor {
            base_name: "user".to_string(),
            class_identifier: "User".to_string(),
            table_identifier: "users".to_string(),
            flags: FeatureFlags::default(),
            fields_block: "\n  name: DataTypes.STRING\n".to_string(),
            options_block: None,
        }
    }

    #[test]
    fn canonical_shape_is_emitted() {
        let text = emit(&descriptor());
        assert!(text.starts_with("const { DataTypes } = require('sequelize');\n"));
        assert!(text.contains("const User = sequelize.define('User', {\n  name: DataTypes.STRING\n}, {"));
        assert!(text.contains("  timestamps: true,\n  tableName: 'users'"));
        assert!(text.ends_with("module.exports = User;\n"));
    }

    #[test]
    fn pre_existing_table_name_is_kept() {
        let mut descriptor = descriptor();
        descriptor.flags.has_explicit_table_name = true;
        descriptor.flags.explicit_table_name = Some("app_users".to_string());
        let text = emit(&descriptor);
        assert!(text.contains("tableName: 'app_users'"));
        assert!(!text.contains("tableName: 'users'"));
    }

    #[test]
    fn field_text_is_preserved_byte_for_byte() {
        let mut descriptor = descriptor();
        descriptor.fields_block = "\n  odd:   'spac  ing',\n\n  tabs:\t1\n".to_string();
        let text = emit(&descriptor);
        assert!(text.contains("{\n  odd:   'spac  ing',\n\n  tabs:\t1\n}"));
    }
}

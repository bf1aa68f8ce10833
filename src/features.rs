use crate::types::FeatureFlags;

/// Pure string inspection of the extracted blocks plus the original raw
/// text. Nothing here mutates or allocates beyond the extracted value.
pub fn detect(raw_source: &str, fields_block: &str, options_block: Option<&str>) -> FeatureFlags {
    let explicit_table_name = options_block.and_then(extract_table_name);

    FeatureFlags {
        needs_generator_import: fields_block.contains("UUIDV4"),
        has_explicit_table_name: options_block.map_or(false, |o| o.contains("tableName")),
        has_duplicate_import_lines: has_duplicate_import_lines(raw_source),
        explicit_table_name,
    }
}

/// Pulls the quoted value of an existing `tableName:` declaration.
fn extract_table_name(options_block: &str) -> Option<String> {
    let at = options_block.find("tableName")?;
    let rest = options_block[at + "tableName".len()..].trim_start();
    let rest = rest.strip_prefix(':')?.trim_start();
    let quote = rest.chars().next()?;
    if quote != '\'' && quote != '"' {
        return None;
    }
    let rest = &rest[1..];
    let end = rest.find(quote)?;
    Some(rest[..end].to_string())
}

/// True when two consecutive import lines pull in the same module.
fn has_duplicate_import_lines(source: &str) -> bool {
    let mut previous: Option<String> = None;
    for line in source.lines() {
        let module = require_target(line);
        if module.is_some() && module == previous {
            return true;
        }
        previous = module;
    }
    false
}

fn require_target(line: &str) -> Option<String> {
    let at = line.find("require(")?;
    let rest = &line[at + "require(".len()..];
    let quote = rest.chars().next()?;
    if quote != '\'' && quote != '"' {
        return None;
    }
    let rest = &rest[1..];
    let end = rest.find(quote)?;
    Some(rest[..end].to_string())
}

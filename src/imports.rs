/// The canonical two-line preamble. Exactly one import per module: the
/// sequelize type facility (with UUIDV4 only when the fields need it) and
/// the shared database configuration.
pub fn synthesize(needs_generator_import: bool) -> String {
    let sequelize_line = if needs_generator_import {
        "const { DataTypes, UUIDV4 } = require('sequelize');"
    } else {
        "const { DataTypes } = require('sequelize');"
    };

    format!(
        "{}\nconst {{ sequelize, shouldUseSqlite }} = require('../config/database');\n",
        sequelize_line
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sequelize_import_count(preamble: &str) -> usize {
        preamble
            .lines()
            .filter(|line| line.contains("require('sequelize')"))
            .count()
    }

    #[test]
    fn generator_symbol_joins_the_single_sequelize_import() {
        let preamble = synthesize(true);
        assert!(preamble.contains("const { DataTypes, UUIDV4 } = require('sequelize');"));
        assert_eq!(sequelize_import_count(&preamble), 1);
    }

    #[test]
    fn plain_fields_get_only_the_type_facility() {
        let preamble = synthesize(false);
        assert!(preamble.contains("const { DataTypes } = require('sequelize');"));
        assert!(!preamble.contains("UUIDV4"));
        assert_eq!(sequelize_import_count(&preamble), 1);
    }

    #[test]
    fn database_import_is_always_present_exactly_once() {
        for needs in [false, true] {
            let preamble = synthesize(needs);
            let count = preamble
                .lines()
                .filter(|line| line.contains("require('../config/database')"))
                .count();
            assert_eq!(count, 1);
        }
    }
}

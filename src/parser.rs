//! Locates the `sequelize.define('Name', { fields }, { options })` call in
//! raw model source and captures the two brace-delimited arguments with a
//! small scanner that tracks strings and comments, so a `define` mentioned
//! inside a comment or string literal never produces a false match and
//! nested braces inside the field map are handled correctly.

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseResult {
    Matched {
        fields_block: String,
        options_block: Option<String>,
    },
    Unmatched,
}

pub fn extract_model_definition(source: &str) -> ParseResult {
    let mut scanner = Scanner::new(source);
    while let Some(candidate) = scanner.find_define() {
        match scanner.parse_call() {
            Some(result) => return result,
            // Malformed call; resume the scan after this occurrence.
            None => scanner.pos = candidate + "sequelize".len(),
        }
    }
    ParseResult::Unmatched
}

struct Scanner<'a> {
    source: &'a str,
    pos: usize,
}

impl<'a> Scanner<'a> {
    fn new(source: &'a str) -> Self {
        Self { source, pos: 0 }
    }

    fn byte(&self, offset: usize) -> Option<u8> {
        self.source.as_bytes().get(self.pos + offset).copied()
    }

    /// Advances to just past the `(` of the next real `sequelize.define(`
    /// and returns the offset the keyword started at.
    fn find_define(&mut self) -> Option<usize> {
        while self.pos < self.source.len() {
            match self.byte(0)? {
                b'\'' | b'"' | b'`' => self.skip_string(),
                b'/' if self.byte(1) == Some(b'/') => self.skip_line_comment(),
                b'/' if self.byte(1) == Some(b'*') => self.skip_block_comment(),
                b's' if self.at_keyword("sequelize") => {
                    let candidate = self.pos;
                    self.pos += "sequelize".len();
                    self.skip_trivia();
                    if self.eat(".") {
                        self.skip_trivia();
                        if self.eat("define") {
                            self.skip_trivia();
                            if self.eat("(") {
                                return Some(candidate);
                            }
                        }
                    }
                    self.pos = candidate + 1;
                }
                _ => self.pos += 1,
            }
        }
        None
    }

    /// Parses the argument list after `define(`: a quoted model name, the
    /// field-map literal, and an optional options literal.
    fn parse_call(&mut self) -> Option<ParseResult> {
        self.skip_trivia();
        self.eat_string()?;
        self.skip_trivia();
        if !self.eat(",") {
            return None;
        }
        self.skip_trivia();
        let fields_block = self.eat_braced_block()?.to_string();
        self.skip_trivia();
        let options_block = if self.eat(",") {
            self.skip_trivia();
            Some(self.eat_braced_block()?.to_string())
        } else {
            None
        };
        self.skip_trivia();
        if !self.eat(")") {
            return None;
        }
        Some(ParseResult::Matched {
            fields_block,
            options_block,
        })
    }

    fn at_keyword(&self, word: &str) -> bool {
        let bytes = self.source.as_bytes();
        if !bytes[self.pos..].starts_with(word.as_bytes()) {
            return false;
        }
        // No identifier character directly before; `db.sequelize` is fine.
        self.pos == 0 || !is_ident_byte(bytes[self.pos - 1])
    }

    fn eat(&mut self, token: &str) -> bool {
        match self.source.as_bytes().get(self.pos..) {
            Some(rest) if rest.starts_with(token.as_bytes()) => {
                self.pos += token.len();
                true
            }
            _ => false,
        }
    }

    /// Consumes a single- or double-quoted literal and returns its value.
    fn eat_string(&mut self) -> Option<&'a str> {
        let quote = self.byte(0)?;
        if quote != b'\'' && quote != b'"' {
            return None;
        }
        let start = self.pos + 1;
        self.pos += 1;
        while self.pos < self.source.len() {
            match self.source.as_bytes()[self.pos] {
                b'\\' => self.pos += 2,
                b if b == quote => {
                    let value = &self.source[start..self.pos];
                    self.pos += 1;
                    return Some(value);
                }
                _ => self.pos += 1,
            }
        }
        None
    }

    /// Consumes a balanced `{ ... }` block and returns the inner text
    /// exactly as written. Braces inside strings and comments don't count.
    fn eat_braced_block(&mut self) -> Option<&'a str> {
        if self.byte(0) != Some(b'{') {
            return None;
        }
        let start = self.pos + 1;
        let mut depth = 1usize;
        self.pos += 1;
        while self.pos < self.source.len() {
            match self.source.as_bytes()[self.pos] {
                b'\'' | b'"' | b'`' => self.skip_string(),
                b'/' if self.byte(1) == Some(b'/') => self.skip_line_comment(),
                b'/' if self.byte(1) == Some(b'*') => self.skip_block_comment(),
                b'{' => {
                    depth += 1;
                    self.pos += 1;
                }
                b'}' => {
                    depth -= 1;
                    if depth == 0 {
                        let inner = &self.source[start..self.pos];
                        self.pos += 1;
                        return Some(inner);
                    }
                    self.pos += 1;
                }
                _ => self.pos += 1,
            }
        }
        None
    }

    /// Skips whitespace and both comment forms.
    fn skip_trivia(&mut self) {
        loop {
            while self.byte(0).map_or(false, |b| b.is_ascii_whitespace()) {
                self.pos += 1;
            }
            if self.byte(0) == Some(b'/') && self.byte(1) == Some(b'/') {
                self.skip_line_comment();
                continue;
            }
            if self.byte(0) == Some(b'/') && self.byte(1) == Some(b'*') {
                self.skip_block_comment();
                continue;
            }
            return;
        }
    }

    // Assumes self.pos sits on the opening quote.
    fn skip_string(&mut self) {
        let quote = self.source.as_bytes()[self.pos];
        self.pos += 1;
        while self.pos < self.source.len() {
            match self.source.as_bytes()[self.pos] {
                b'\\' => self.pos += 2,
                b if b == quote => {
                    self.pos += 1;
                    return;
                }
                _ => self.pos += 1,
            }
        }
    }

    fn skip_line_comment(&mut self) {
        while self.pos < self.source.len() && self.source.as_bytes()[self.pos] != b'\n' {
            self.pos += 1;
        }
    }

    fn skip_block_comment(&mut self) {
        self.pos += 2;
        while self.pos + 1 < self.source.len() {
            if self.source.as_bytes()[self.pos] == b'*'
                && self.source.as_bytes()[self.pos + 1] == b'/'
            {
                self.pos += 2;
                return;
            }
            self.pos += 1;
        }
        self.pos = self.source.len();
    }
}

fn is_ident_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b == b'$'
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields_of(result: ParseResult) -> (String, Option<String>) {
        match result {
            ParseResult::Matched {
                fields_block,
                options_block,
            } => (fields_block, options_block),
            ParseResult::Unmatched => panic!("expected a match"),
        }
    }

    #[test]
    fn captures_fields_and_options() {
        let source = "const { DataTypes } = require('sequelize');\n\n\
            const User = sequelize.define('User', {\n  id: {\n    type: DataTypes.UUID\n  }\n}, {\n  timestamps: true\n});\n";
        let (fields, options) = fields_of(extract_model_definition(source));
        assert_eq!(fields, "\n  id: {\n    type: DataTypes.UUID\n  }\n");
        assert_eq!(options.as_deref(), Some("\n  timestamps: true\n"));
    }

    #[test]
    fn options_block_is_optional() {
        let source = "sequelize.define(\"Lease\", { startDate: DataTypes.DATE });";
        let (fields, options) = fields_of(extract_model_definition(source));
        assert_eq!(fields, " startDate: DataTypes.DATE ");
        assert_eq!(options, None);
    }

    #[test]
    fn nested_braces_and_strings_inside_fields() {
        let source = "sequelize.define('Unit', {\n  status: {\n    type: DataTypes.STRING,\n    defaultValue: 'va}cant',\n    validate: { isIn: [['vacant', 'occupied']] }\n  }\n});";
        let (fields, _) = fields_of(extract_model_definition(source));
        assert!(fields.contains("defaultValue: 'va}cant'"));
        assert!(fields.contains("isIn"));
    }

    #[test]
    fn define_inside_comment_is_skipped() {
        let source = "// sequelize.define('Old', { legacy: true });\n\
            const Tenant = sequelize.define('Tenant', { name: DataTypes.STRING });\n";
        let (fields, _) = fields_of(extract_model_definition(source));
        assert_eq!(fields, " name: DataTypes.STRING ");
    }

    #[test]
    fn define_inside_string_literal_does_not_match() {
        let source = "const snippet = \"sequelize.define('Fake', { a: 1 })\";\n";
        assert_eq!(extract_model_definition(source), ParseResult::Unmatched);
    }

    #[test]
    fn plain_source_without_define_is_unmatched() {
        let source = "module.exports = {};\n";
        assert_eq!(extract_model_definition(source), ParseResult::Unmatched);
    }

    #[test]
    fn tolerates_whitespace_around_the_call() {
        let source = "sequelize . define ( 'Invoice' , {\n  amount: DataTypes.DECIMAL\n} , {\n  timestamps: true\n} ) ;";
        let (fields, options) = fields_of(extract_model_definition(source));
        assert_eq!(fields, "\n  amount: DataTypes.DECIMAL\n");
        assert_eq!(options.as_deref(), Some("\n  timestamps: true\n"));
    }
}

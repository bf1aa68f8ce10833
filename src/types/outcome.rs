/// Result of pushing one file through the pipeline.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FileOutcome {
    /// Canonical text differs from the current content.
    Updated {
        text: String,
        unresolved: Vec<String>,
    },
    /// The file is already in canonical form.
    Unchanged { unresolved: Vec<String> },
    /// No model registration expression was found; file left untouched.
    Unparsed,
}

/// Batch-level totals, plus every reference literal the rewriter could
/// not resolve, keyed by file identifier.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Summary {
    pub updated: usize,
    pub unchanged: usize,
    pub unparsed: usize,
    pub unresolved_references: Vec<(String, String)>,
}

impl Summary {
    pub fn record(&mut self, identifier: &str, outcome: &FileOutcome) {
        match outcome {
            FileOutcome::Updated { unresolved, .. } => {
                self.updated += 1;
                self.push_unresolved(identifier, unresolved);
            }
            FileOutcome::Unchanged { unresolved } => {
                self.unchanged += 1;
                self.push_unresolved(identifier, unresolved);
            }
            FileOutcome::Unparsed => self.unparsed += 1,
        }
    }

    fn push_unresolved(&mut self, identifier: &str, literals: &[String]) {
        for literal in literals {
            self.unresolved_references
                .push((identifier.to_string(), literal.clone()));
        }
    }
}

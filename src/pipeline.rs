use crate::config::NormalizerConfig;
use crate::parser::ParseResult;
use crate::types::{FileOutcome, ModelDescriptor, Summary};
use crate::{emitter, features, naming, parser, references};

pub const MODEL_SUFFIX: &str = ".model.js";

/// The single rewrite pipeline the old per-fix scripts collapse into:
/// parse, detect, rewrite references, emit, compare. Holds only the two
/// read-only lookup tables, so one instance can serve concurrent workers.
pub struct Normalizer {
    config: NormalizerConfig,
}

impl Normalizer {
    pub fn new(config: NormalizerConfig) -> Self {
        Self { config }
    }

    /// Runs one file's raw text through the full pipeline. Pure with
    /// respect to storage; the caller owns reading and writing.
    pub fn normalize_source(&self, base_name: &str, raw: &str) -> FileOutcome {
        let (fields_block, options_block) = match parser::extract_model_definition(raw) {
            ParseResult::Matched {
                fields_block,
                options_block,
            } => (fields_block, options_block),
            ParseResult::Unmatched => return FileOutcome::Unparsed,
        };

        let flags = features::detect(raw, &fields_block, options_block.as_deref());
        let resolved = naming::resolve(base_name, &self.config.naming_exceptions);
        let (fields_block, unresolved) =
            references::rewrite_references(&fields_block, &self.config.reference_map);

        let descriptor = ModelDescriptor {
            base_name: base_name.to_string(),
            class_identifier: resolved.class_identifier,
            table_identifier: resolved.table_identifier,
            flags,
            fields_block,
            options_block,
        };

        let canonical = emitter::emit(&descriptor);
        if canonical == raw {
            FileOutcome::Unchanged { unresolved }
        } else {
            FileOutcome::Updated {
                text: canonical,
                unresolved,
            }
        }
    }

    /// Processes a sequence of (identifier, raw text) pairs and totals the
    /// outcomes. Identifiers keep their suffix for reporting; base names
    /// are derived by stripping it.
    pub fn run<I>(&self, files: I) -> (Vec<(String, FileOutcome)>, Summary)
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut outcomes = Vec::new();
        let mut summary = Summary::default();
        for (identifier, raw) in files {
            let base_name = base_name_of(&identifier);
            let outcome = self.normalize_source(&base_name, &raw);
            summary.record(&identifier, &outcome);
            outcomes.push((identifier, outcome));
        }
        (outcomes, summary)
    }
}

/// "user.model.js" -> "user"; identifiers without the suffix pass through.
pub fn base_name_of(identifier: &str) -> String {
    identifier
        .strip_suffix(MODEL_SUFFIX)
        .unwrap_or(identifier)
        .to_string()
}

use clap::Parser;
use sequelize_model_normalizer::{
    config::NormalizerConfig,
    error::Error,
    pipeline::{self, Normalizer},
    types::{FileOutcome, Summary},
};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::task::JoinSet;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(about = "Rewrites Sequelize model files into a canonical shape")]
struct Args {
    /// Directory containing the model files
    models_dir: PathBuf,

    /// TOML file with naming exceptions and the reference map
    #[arg(long)]
    config: Option<PathBuf>,

    /// File suffix selecting model files
    #[arg(long, default_value = pipeline::MODEL_SUFFIX)]
    suffix: String,

    /// Report what would change without writing anything
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    match run(args).await {
        Ok(0) => {}
        Ok(_) => std::process::exit(1),
        Err(err) => {
            error!("{err}");
            std::process::exit(1);
        }
    }
}

/// Enumerates the model files, pushes each through the pipeline on its own
/// task, and returns the number of files that failed to write. A single
/// bad file never aborts its siblings.
async fn run(args: Args) -> Result<usize, Error> {
    let config = match &args.config {
        Some(path) => NormalizerConfig::from_toml_path(path)?,
        None => NormalizerConfig::default(),
    };
    let normalizer = Arc::new(Normalizer::new(config));

    let mut entries: Vec<(String, PathBuf)> = Vec::new();
    for entry in std::fs::read_dir(&args.models_dir)? {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if name.ends_with(&args.suffix) && name != "index.js" {
            entries.push((name, entry.path()));
        }
    }
    entries.sort();
    info!(count = entries.len(), "found model files to normalize");

    // Each worker reads one file and writes only that same file; the only
    // shared state is the read-only config inside the normalizer.
    let mut tasks = JoinSet::new();
    for (name, path) in entries {
        let normalizer = Arc::clone(&normalizer);
        let suffix = args.suffix.clone();
        let dry_run = args.dry_run;
        tasks.spawn(async move {
            let raw = match tokio::fs::read_to_string(&path).await {
                Ok(raw) => raw,
                Err(source) => return (name, Err(Error::Io(source))),
            };
            let base_name = name.strip_suffix(suffix.as_str()).unwrap_or(&name).to_string();
            let outcome = normalizer.normalize_source(&base_name, &raw);
            if let FileOutcome::Updated { text, .. } = &outcome {
                if !dry_run {
                    if let Err(source) = tokio::fs::write(&path, text).await {
                        return (name, Err(Error::WriteFailure { path, source }));
                    }
                }
            }
            (name, Ok(outcome))
        });
    }

    let mut results: Vec<(String, Result<FileOutcome, Error>)> = Vec::new();
    while let Some(joined) = tasks.join_next().await {
        match joined {
            Ok(result) => results.push(result),
            Err(err) => error!("normalizer task failed: {err}"),
        }
    }
    results.sort_by(|a, b| a.0.cmp(&b.0));

    let mut summary = Summary::default();
    let mut write_failures = 0usize;
    for (name, result) in results {
        match result {
            Ok(outcome) => {
                summary.record(&name, &outcome);
                match outcome {
                    FileOutcome::Updated { .. } => info!(file = %name, "updated"),
                    FileOutcome::Unchanged { .. } => info!(file = %name, "no change"),
                    FileOutcome::Unparsed => {
                        warn!(file = %name, "no model definition found, skipping")
                    }
                }
            }
            Err(err) => {
                write_failures += 1;
                error!(file = %name, "{err}");
            }
        }
    }

    for (file, literal) in &summary.unresolved_references {
        warn!(file = %file, reference = %literal, "unresolved model reference left as-is");
    }
    info!(
        updated = summary.updated,
        unchanged = summary.unchanged,
        unparsed = summary.unparsed,
        "normalization pass complete"
    );

    Ok(write_failures)
}

pub mod feature_flags;
pub mod model_descriptor;
pub mod outcome;

pub use feature_flags::FeatureFlags;
pub use model_descriptor::ModelDescriptor;
pub use outcome::{FileOutcome, Summary};

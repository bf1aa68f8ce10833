//! Rewrites Sequelize model-definition files into one canonical shape:
//! a fixed import preamble, an explicit lowercase `tableName`, lowercased
//! cross-model reference literals, and byte-stable output so re-running
//! the batch converges to a fixed point.

pub mod config;
pub mod emitter;
pub mod error;
pub mod features;
pub mod imports;
pub mod naming;
pub mod parser;
pub mod pipeline;
pub mod references;
pub mod types;

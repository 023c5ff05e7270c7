pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use app::pipelines::postal_pipeline::PostalPipeline;
pub use config::{local::LocalStorage, DefaultConfig, INPUT_FILE};
pub use core::{aggregator::PostalAggregator, etl::AnalyzerEngine, report::Report};
pub use utils::error::{AnalyzerError, Result};

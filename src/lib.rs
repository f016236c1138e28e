pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
pub mod pipeline;
pub mod report;
pub mod schema;
pub mod storage;
pub mod types;

pub use error::{PipelineError, Result};
pub use pipeline::{Pipeline, PipelineOptions, PipelineState};

// Pipeline processing: null normalization and the per-table bulk loader

pub mod loader;
pub mod null_normalizer;

pub use loader::{load_table, LoadObserver, TracingObserver};
pub use null_normalizer::normalize;

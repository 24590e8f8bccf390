pub mod agreement;
pub mod matrix;
pub mod metrics;
pub mod summary;
pub mod thresholds;

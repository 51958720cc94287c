pub mod run_metrics;

pub use run_metrics::RunMetrics;

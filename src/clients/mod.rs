pub mod optimization_client;

pub use optimization_client::{OptimizationClient, RetryPolicy};

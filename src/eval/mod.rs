//! Assembly summary statistics

pub mod metrics;

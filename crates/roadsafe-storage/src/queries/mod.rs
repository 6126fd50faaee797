pub mod aggregation;
pub mod usage_ops;

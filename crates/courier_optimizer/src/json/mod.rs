pub mod error;
pub mod plan_output;
pub mod types;

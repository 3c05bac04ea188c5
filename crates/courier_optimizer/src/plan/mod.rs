pub mod action;
pub mod vehicle_plan;

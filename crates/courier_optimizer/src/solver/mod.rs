pub mod accepted_solution;
pub mod construction;
pub mod cost;
pub mod error;
pub mod neighborhood;
pub mod search;
pub mod solution;
pub mod solver;
pub mod solver_params;
pub mod statistics;

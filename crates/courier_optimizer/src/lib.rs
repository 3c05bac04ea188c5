mod acceptor;
pub mod json;
pub mod plan;
pub mod problem;
mod selector;
pub mod solver;
mod utils;

#[cfg(test)]
pub(crate) mod test_utils;

pub mod accept_solution;
pub mod probabilistic_acceptor;
pub mod solution_acceptor;

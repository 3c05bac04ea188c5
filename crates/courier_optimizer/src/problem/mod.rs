pub mod capacity;
pub mod euclidean_network;
pub mod location;
pub mod pickup_delivery_problem;
pub mod road_network;
pub mod task;
pub mod transport_network;
pub mod vehicle;

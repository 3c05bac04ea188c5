pub mod change_order;
pub mod change_vehicle;
pub mod neighborhood_move;

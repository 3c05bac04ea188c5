/// Capacity of a vehicle, in the same unit as [`Weight`].
pub type Capacity = u32;

/// Weight of a task.
pub type Weight = u32;

/// Signed running load. Deliveries decrease the load, so intermediate sums are
/// kept signed to avoid underflow while scanning partial sequences.
pub type Load = i64;

#[inline(always)]
pub fn is_capacity_satisfied(capacity: Capacity, load: Load) -> bool {
    load <= Load::from(capacity)
}

/// Remaining room in a vehicle carrying `load`. Negative when overloaded.
#[inline(always)]
pub fn headroom(capacity: Capacity, load: Load) -> Load {
    Load::from(capacity) - load
}

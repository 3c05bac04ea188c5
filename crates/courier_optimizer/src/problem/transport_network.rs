use super::location::LocationIdx;

pub type Distance = f64;

/// Read-only view of the network the fleet travels on.
///
/// Implementations must be symmetric and non-negative: the cost evaluator
/// assumes `distance(a, b) == distance(b, a) >= 0`.
pub trait TransportNetwork: Send + Sync {
    /// Shortest travel distance between two locations.
    fn distance(&self, from: LocationIdx, to: LocationIdx) -> Distance;

    /// Locations visited when travelling from `from` to `to` along the
    /// shortest path, excluding `from` and ending with `to`. Empty when
    /// `from == to`.
    fn path(&self, from: LocationIdx, to: LocationIdx) -> Vec<LocationIdx>;
}

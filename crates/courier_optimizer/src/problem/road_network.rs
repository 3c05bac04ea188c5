use std::{cmp::Ordering, collections::BinaryHeap};

use serde::Serialize;

use super::{
    location::{Location, LocationIdx},
    transport_network::{Distance, TransportNetwork},
};

/// Undirected road between two locations.
#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct Road {
    from: LocationIdx,
    to: LocationIdx,
    length: Distance,
}

impl Road {
    pub fn new(from: LocationIdx, to: LocationIdx, length: Distance) -> Self {
        Road { from, to, length }
    }

    /// Road whose length is the straight-line distance between its ends.
    pub fn euclidean(locations: &[Location], from: LocationIdx, to: LocationIdx) -> Self {
        Road::new(from, to, locations[from].euclidean_distance(&locations[to]))
    }

    pub fn from(&self) -> LocationIdx {
        self.from
    }

    pub fn to(&self) -> LocationIdx {
        self.to
    }

    pub fn length(&self) -> Distance {
        self.length
    }
}

#[derive(Copy, Clone, Debug)]
struct HeapItem {
    location: usize,
    distance: Distance,
}

impl PartialEq for HeapItem {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HeapItem {}

impl PartialOrd for HeapItem {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapItem {
    fn cmp(&self, other: &Self) -> Ordering {
        // Flip distance to make this a min-heap
        other
            .distance
            .total_cmp(&self.distance)
            .then_with(|| self.location.cmp(&other.location))
    }
}

/// Road graph with all shortest paths precomputed.
///
/// Distances and predecessors are stored in flat `n * n` vectors, the entry
/// for a pair being at `from * num_locations + to`. `predecessors[from][to]`
/// is the location visited right before `to` on the shortest path from
/// `from`.
pub struct RoadNetwork {
    num_locations: usize,
    distances: Vec<Distance>,
    predecessors: Vec<Option<LocationIdx>>,
}

impl RoadNetwork {
    /// Builds the network and runs one Dijkstra per location.
    ///
    /// Panics if a road references a location outside `0..num_locations` or
    /// has a negative or non-finite length.
    pub fn new(num_locations: usize, roads: &[Road]) -> Self {
        let mut adjacency: Vec<Vec<(usize, Distance)>> = vec![Vec::new(); num_locations];

        for road in roads {
            assert!(
                road.length.is_finite() && road.length >= 0.0,
                "Road {} -> {} has an invalid length {}",
                road.from,
                road.to,
                road.length
            );

            adjacency[road.from.get()].push((road.to.get(), road.length));
            adjacency[road.to.get()].push((road.from.get(), road.length));
        }

        let mut distances = vec![Distance::INFINITY; num_locations * num_locations];
        let mut predecessors = vec![None; num_locations * num_locations];

        for source in 0..num_locations {
            let offset = source * num_locations;
            Self::shortest_paths_from(
                source,
                &adjacency,
                &mut distances[offset..offset + num_locations],
                &mut predecessors[offset..offset + num_locations],
            );
        }

        RoadNetwork {
            num_locations,
            distances,
            predecessors,
        }
    }

    fn shortest_paths_from(
        source: usize,
        adjacency: &[Vec<(usize, Distance)>],
        distances: &mut [Distance],
        predecessors: &mut [Option<LocationIdx>],
    ) {
        let mut settled = vec![false; adjacency.len()];
        let mut heap = BinaryHeap::with_capacity(adjacency.len());

        distances[source] = 0.0;
        heap.push(HeapItem {
            location: source,
            distance: 0.0,
        });

        while let Some(HeapItem { location, distance }) = heap.pop() {
            if settled[location] {
                continue;
            }
            settled[location] = true;

            for &(neighbor, length) in &adjacency[location] {
                let candidate = distance + length;
                if !settled[neighbor] && candidate < distances[neighbor] {
                    distances[neighbor] = candidate;
                    predecessors[neighbor] = Some(LocationIdx::new(location));
                    heap.push(HeapItem {
                        location: neighbor,
                        distance: candidate,
                    });
                }
            }
        }
    }

    #[inline(always)]
    fn index(&self, from: LocationIdx, to: LocationIdx) -> usize {
        from.get() * self.num_locations + to.get()
    }

    pub fn is_reachable(&self, from: LocationIdx, to: LocationIdx) -> bool {
        self.distances[self.index(from, to)].is_finite()
    }
}

impl TransportNetwork for RoadNetwork {
    #[inline(always)]
    fn distance(&self, from: LocationIdx, to: LocationIdx) -> Distance {
        if from == to {
            return 0.0;
        }

        self.distances[self.index(from, to)]
    }

    fn path(&self, from: LocationIdx, to: LocationIdx) -> Vec<LocationIdx> {
        if from == to || !self.is_reachable(from, to) {
            return Vec::new();
        }

        let mut path = vec![to];
        let mut current = to;
        while let Some(previous) = self.predecessors[self.index(from, current)] {
            if previous == from {
                break;
            }
            path.push(previous);
            current = previous;
        }

        path.reverse();
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const fn l(index: usize) -> LocationIdx {
        LocationIdx::new(index)
    }

    // 0 --1-- 1 --1-- 2
    //  \             /
    //   ------5------
    fn triangle() -> RoadNetwork {
        RoadNetwork::new(
            3,
            &[
                Road::new(l(0), l(1), 1.0),
                Road::new(l(1), l(2), 1.0),
                Road::new(l(0), l(2), 5.0),
            ],
        )
    }

    #[test]
    fn test_shortest_distance() {
        let network = triangle();

        assert_eq!(network.distance(l(0), l(2)), 2.0);
        assert_eq!(network.distance(l(2), l(0)), 2.0);
        assert_eq!(network.distance(l(1), l(1)), 0.0);
    }

    #[test]
    fn test_path_excludes_origin_and_ends_at_destination() {
        let network = triangle();

        assert_eq!(network.path(l(0), l(2)), vec![l(1), l(2)]);
        assert_eq!(network.path(l(2), l(0)), vec![l(1), l(0)]);
        assert_eq!(network.path(l(1), l(2)), vec![l(2)]);
        assert!(network.path(l(1), l(1)).is_empty());
    }

    #[test]
    fn test_unreachable_locations() {
        let network = RoadNetwork::new(3, &[Road::new(l(0), l(1), 2.0)]);

        assert!(network.is_reachable(l(0), l(1)));
        assert!(!network.is_reachable(l(0), l(2)));
        assert_eq!(network.distance(l(0), l(2)), Distance::INFINITY);
        assert!(network.path(l(0), l(2)).is_empty());
    }

    #[test]
    #[should_panic(expected = "invalid length")]
    fn test_negative_road_length() {
        RoadNetwork::new(2, &[Road::new(l(0), l(1), -1.0)]);
    }
}

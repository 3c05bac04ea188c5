use super::{
    location::{Location, LocationIdx},
    transport_network::{Distance, TransportNetwork},
};

/// Every pair of locations is linked by a straight road.
///
/// Straight lines already satisfy the triangle inequality, so the direct road
/// is always a shortest path and no graph search is needed. Distances are
/// stored in a flat `n * n` vector.
pub struct EuclideanNetwork {
    num_locations: usize,
    distances: Vec<Distance>,
}

impl EuclideanNetwork {
    pub fn new(locations: &[Location]) -> Self {
        let num_locations = locations.len();
        let mut distances = vec![0.0; num_locations * num_locations];

        for (from, origin) in locations.iter().enumerate() {
            for (to, destination) in locations.iter().enumerate().skip(from + 1) {
                let distance = origin.euclidean_distance(destination);
                distances[from * num_locations + to] = distance;
                distances[to * num_locations + from] = distance;
            }
        }

        EuclideanNetwork {
            num_locations,
            distances,
        }
    }
}

impl TransportNetwork for EuclideanNetwork {
    #[inline(always)]
    fn distance(&self, from: LocationIdx, to: LocationIdx) -> Distance {
        self.distances[from.get() * self.num_locations + to.get()]
    }

    fn path(&self, from: LocationIdx, to: LocationIdx) -> Vec<LocationIdx> {
        if from == to {
            return Vec::new();
        }

        vec![to]
    }
}

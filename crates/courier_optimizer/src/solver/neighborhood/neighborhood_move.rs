use crate::{
    problem::{pickup_delivery_problem::PickupDeliveryProblem, task::TaskIdx, vehicle::VehicleIdx},
    solver::solution::solution::Solution,
};

use super::{change_order::ChangeOrderMove, change_vehicle::ChangeVehicleMove};

/// Vehicle and task a neighborhood is generated around. The task's pickup is
/// expected in the vehicle's sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NeighborhoodFocus {
    pub vehicle_id: VehicleIdx,
    pub task_id: TaskIdx,
}

pub trait NeighborhoodMove {
    /// Calls `consumer` once per candidate. Candidates are independent deep
    /// copies of `solution`, which is left untouched.
    fn generate_candidates<C>(
        problem: &PickupDeliveryProblem,
        solution: &Solution,
        focus: NeighborhoodFocus,
        consumer: C,
    ) where
        C: FnMut(Solution);
}

/// Reordering candidates first, then reassignment candidates.
pub fn generate_neighbors<C>(
    problem: &PickupDeliveryProblem,
    solution: &Solution,
    focus: NeighborhoodFocus,
    mut consumer: C,
) where
    C: FnMut(Solution),
{
    ChangeOrderMove::generate_candidates(problem, solution, focus, &mut consumer);
    ChangeVehicleMove::generate_candidates(problem, solution, focus, &mut consumer);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{solver::solution::task_event::TaskEvent, test_utils};

    fn p(task: usize) -> TaskEvent {
        TaskEvent::Pickup(TaskIdx::new(task))
    }

    fn d(task: usize) -> TaskEvent {
        TaskEvent::Delivery(TaskIdx::new(task))
    }

    fn collect<F>(generate: F) -> Vec<Solution>
    where
        F: FnOnce(&mut dyn FnMut(Solution)),
    {
        let mut candidates = Vec::new();
        generate(&mut |candidate| candidates.push(candidate));
        candidates
    }

    #[test]
    fn test_reordering_then_reassignment() {
        let problem = test_utils::create_test_problem(
            test_utils::create_location_grid(3, 3),
            test_utils::create_basic_vehicles(vec![(0, 10), (8, 10)]),
            test_utils::create_basic_tasks(vec![(2, 1, 2), (3, 4, 5)]),
        );
        let solution = Solution::from_sequences(vec![vec![p(0), d(0), p(1), d(1)], vec![]]);
        let focus = NeighborhoodFocus {
            vehicle_id: VehicleIdx::new(0),
            task_id: TaskIdx::new(0),
        };

        let neighbors = collect(|consumer| generate_neighbors(&problem, &solution, focus, consumer));
        let reorderings = collect(|consumer| {
            ChangeOrderMove::generate_candidates(&problem, &solution, focus, consumer)
        });
        let reassignments = collect(|consumer| {
            ChangeVehicleMove::generate_candidates(&problem, &solution, focus, consumer)
        });

        // Every placement of the pair around [P1, D1], then the other vehicle.
        assert_eq!(reorderings.len(), 6);
        assert_eq!(reassignments.len(), 1);
        assert_eq!(neighbors.len(), 7);
        assert_eq!(&neighbors[..6], reorderings.as_slice());
        assert!(
            neighbors[..6]
                .iter()
                .all(|candidate| candidate.sequence(VehicleIdx::new(1)).is_empty())
        );
        assert_eq!(
            neighbors[6],
            Solution::from_sequences(vec![vec![p(1), d(1)], vec![p(0), d(0)]])
        );
    }
}

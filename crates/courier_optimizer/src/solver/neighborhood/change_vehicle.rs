use tracing::{Level, instrument};

use crate::{
    problem::pickup_delivery_problem::PickupDeliveryProblem,
    solver::solution::{solution::Solution, task_event::TaskEvent},
};

use super::neighborhood_move::{NeighborhoodFocus, NeighborhoodMove};

/// **Change Vehicle**
///
/// Moves the focal task to the front of every other vehicle able to carry it.
///
/// ```text
/// BEFORE:
///    V1: (A) -> [P] -> (B) -> [D] -> (C)
///    V2: (X) -> (Y)
///
/// AFTER:
///    V1: (A) -> (B) -> (C)
///    V2: [P] -> [D] -> (X) -> (Y)
/// ```
///
/// The pair is carried alone and dropped before `V2` resumes its own
/// sequence, so every prefix load of `V2` is unchanged.
#[derive(Debug)]
pub struct ChangeVehicleMove;

impl NeighborhoodMove for ChangeVehicleMove {
    #[instrument(skip_all, level = Level::DEBUG)]
    fn generate_candidates<C>(
        problem: &PickupDeliveryProblem,
        solution: &Solution,
        focus: NeighborhoodFocus,
        mut consumer: C,
    ) where
        C: FnMut(Solution),
    {
        let NeighborhoodFocus {
            vehicle_id,
            task_id,
        } = focus;
        let pickup = TaskEvent::Pickup(task_id);
        let delivery = TaskEvent::Delivery(task_id);

        if !solution.contains(vehicle_id, pickup) {
            return;
        }

        let weight = problem.task(task_id).weight();

        let mut reduced = solution.clone();
        reduced.remove_task(vehicle_id, task_id);

        for other_vehicle_id in problem.vehicle_ids() {
            if other_vehicle_id == vehicle_id
                || problem.vehicle(other_vehicle_id).capacity() <= weight
            {
                continue;
            }

            let mut candidate = reduced.clone();
            candidate.insert(other_vehicle_id, 0, delivery);
            candidate.insert(other_vehicle_id, 0, pickup);

            debug_assert_eq!(
                candidate.check(problem),
                Ok(()),
                "Moving {task_id} to {other_vehicle_id} broke the solution"
            );

            consumer(candidate);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        problem::{task::TaskIdx, vehicle::VehicleIdx},
        test_utils,
    };

    fn p(task: usize) -> TaskEvent {
        TaskEvent::Pickup(TaskIdx::new(task))
    }

    fn d(task: usize) -> TaskEvent {
        TaskEvent::Delivery(TaskIdx::new(task))
    }

    fn collect_candidates(
        problem: &PickupDeliveryProblem,
        solution: &Solution,
        vehicle: usize,
        task: usize,
    ) -> Vec<Solution> {
        let mut candidates = Vec::new();
        ChangeVehicleMove::generate_candidates(
            problem,
            solution,
            NeighborhoodFocus {
                vehicle_id: VehicleIdx::new(vehicle),
                task_id: TaskIdx::new(task),
            },
            |candidate| candidates.push(candidate),
        );
        candidates
    }

    #[test]
    fn test_moves_pair_to_front_of_each_able_vehicle() {
        let problem = test_utils::create_test_problem(
            test_utils::create_location_grid(3, 3),
            test_utils::create_basic_vehicles(vec![(0, 10), (1, 8), (2, 4), (3, 5)]),
            test_utils::create_basic_tasks(vec![(4, 4, 5), (2, 6, 7)]),
        );
        let solution = Solution::from_sequences(vec![
            vec![p(0), d(0)],
            vec![],
            vec![],
            vec![p(1), d(1)],
        ]);

        let candidates = collect_candidates(&problem, &solution, 0, 0);

        // Capacity 4 is not strictly greater than the weight.
        assert_eq!(candidates.len(), 2);
        assert_eq!(
            candidates[0],
            Solution::from_sequences(vec![vec![], vec![p(0), d(0)], vec![], vec![p(1), d(1)]])
        );
        assert_eq!(
            candidates[1],
            Solution::from_sequences(vec![vec![], vec![], vec![], vec![p(0), d(0), p(1), d(1)]])
        );

        // The source solution is left untouched.
        assert_eq!(solution.sequence(VehicleIdx::new(0)), &[p(0), d(0)]);
    }

    #[test]
    fn test_no_candidates_when_task_not_on_vehicle() {
        let problem = test_utils::create_test_problem(
            test_utils::create_location_grid(2, 2),
            test_utils::create_basic_vehicles(vec![(0, 10), (1, 10)]),
            test_utils::create_basic_tasks(vec![(4, 2, 3)]),
        );
        let solution = Solution::from_sequences(vec![vec![], vec![p(0), d(0)]]);

        assert!(collect_candidates(&problem, &solution, 0, 0).is_empty());
    }

    #[test]
    fn test_single_vehicle_has_no_candidates() {
        let problem = test_utils::create_test_problem(
            test_utils::create_location_grid(2, 2),
            test_utils::create_basic_vehicles(vec![(0, 10)]),
            test_utils::create_basic_tasks(vec![(4, 2, 3)]),
        );
        let solution = Solution::from_sequences(vec![vec![p(0), d(0)]]);

        assert!(collect_candidates(&problem, &solution, 0, 0).is_empty());
    }
}

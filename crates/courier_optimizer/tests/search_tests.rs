mod setup;

use courier_optimizer::{
    plan::vehicle_plan::build_plans,
    problem::{task::TaskIdx, vehicle::VehicleIdx},
    solver::{
        error::SolverError,
        solver::{Solver, SolverStatus},
        solver_params::{SolverParams, Termination},
        statistics::TerminationReason,
    },
};
use jiff::SignedDuration;

fn iterations_only(iterations: usize, seed: u64) -> SolverParams {
    SolverParams {
        terminations: vec![Termination::Iterations(iterations)],
        seed,
        ..SolverParams::default()
    }
}

#[test]
fn test_heaviest_task_stays_on_largest_vehicle() {
    for seed in 0..20 {
        let solver = Solver::new(
            setup::create_two_vehicle_problem(),
            iterations_only(200, seed),
        );

        let solution = solver.solve().unwrap();

        assert_eq!(
            solution.solution.vehicle_of_task(TaskIdx::new(2)),
            Some(VehicleIdx::new(0)),
            "seed {seed}"
        );
        assert_eq!(solution.solution.check(solver.problem()), Ok(()));
        assert_eq!(
            solution.solution.assigned_tasks(),
            vec![TaskIdx::new(0), TaskIdx::new(1), TaskIdx::new(2)]
        );
    }
}

#[test]
fn test_zero_deadline_returns_initial_solution() {
    let problem = setup::create_test_problem(
        setup::create_location_grid(2, 2),
        setup::create_vehicles(&[(0, 10)]),
        setup::create_tasks(&[(5, 1, 3)]),
    );
    let solver = Solver::new(
        problem,
        SolverParams {
            terminations: vec![Termination::Duration(SignedDuration::ZERO)],
            ..SolverParams::default()
        },
    );

    let solution = solver.solve().unwrap();
    let statistics = solver.statistics().unwrap();

    assert_eq!(statistics.iterations(), 0);
    assert_eq!(statistics.termination(), Some(TerminationReason::Deadline));
    assert_eq!(solution.solution.sequence(VehicleIdx::new(0)).len(), 2);
    assert_eq!(solver.status(), SolverStatus::Completed);
}

#[test]
fn test_task_heavier_than_every_vehicle() {
    let problem = setup::create_test_problem(
        setup::create_location_grid(2, 2),
        setup::create_vehicles(&[(0, 10), (1, 4)]),
        setup::create_tasks(&[(3, 1, 2), (11, 2, 3)]),
    );
    let solver = Solver::new(problem, SolverParams::default());

    assert_eq!(
        solver.solve(),
        Err(SolverError::InfeasibleInput {
            task: TaskIdx::new(1),
            weight: 11,
            capacity: 10,
        })
    );
}

#[test]
fn test_empty_fleet_or_no_tasks_is_trivial() {
    let no_tasks = Solver::new(
        setup::create_test_problem(
            setup::create_location_grid(2, 2),
            setup::create_vehicles(&[(0, 10)]),
            vec![],
        ),
        SolverParams::default(),
    );
    let solution = no_tasks.solve().unwrap();
    assert!(solution.solution.is_empty());
    assert!(build_plans(no_tasks.problem(), &solution.solution)[0].is_empty());

    let no_vehicles = Solver::new(
        setup::create_test_problem(
            setup::create_location_grid(2, 2),
            vec![],
            setup::create_tasks(&[(3, 1, 2)]),
        ),
        SolverParams::default(),
    );
    let solution = no_vehicles.solve().unwrap();
    assert!(build_plans(no_vehicles.problem(), &solution.solution).is_empty());
}

#[test]
fn test_same_seed_same_solution() {
    let problem = || {
        setup::create_test_problem(
            setup::create_location_grid(4, 4),
            setup::create_vehicles(&[(0, 12), (15, 9), (5, 7)]),
            setup::create_tasks(&[
                (4, 1, 14),
                (3, 2, 7),
                (6, 13, 3),
                (2, 9, 10),
                (5, 11, 4),
                (1, 6, 12),
            ]),
        )
    };

    let first = Solver::new(problem(), iterations_only(300, 99)).solve().unwrap();
    let second = Solver::new(problem(), iterations_only(300, 99)).solve().unwrap();

    assert_eq!(first.solution, second.solution);
    assert_eq!(first.cost, second.cost);
}

#[test]
fn test_search_improves_on_initial_solution() {
    // All tasks start stacked on vehicle 0 in the far corner although each
    // task sits right next to vehicle 1.
    let problem = setup::create_test_problem(
        setup::create_location_grid(5, 5),
        setup::create_vehicles(&[(0, 20), (24, 10)]),
        setup::create_tasks(&[(2, 23, 24), (2, 19, 18), (2, 24, 19)]),
    );
    let solver = Solver::new(
        problem,
        SolverParams {
            acceptance_probability: 1.0,
            ..iterations_only(100, 5)
        },
    );

    let solution = solver.solve().unwrap();
    let statistics = solver.statistics().unwrap();

    assert!(solution.cost < statistics.initial_cost());
    assert!(statistics.improvements() > 0);
    assert_eq!(statistics.final_cost(), solution.cost);
}

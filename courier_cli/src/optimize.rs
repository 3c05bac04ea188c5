use std::path::PathBuf;

use clap::Args;
use comfy_table::Table;
use courier_optimizer::{
    json::plan_output::{FromProblem, JsonAction, JsonPlans},
    plan::vehicle_plan::build_plans,
    problem::{pickup_delivery_problem::PickupDeliveryProblem, transport_network::Distance},
    solver::{
        solver::Solver,
        solver_params::{SolverAcceptorStrategy, SolverParams, Termination},
        statistics::SearchStatistics,
    },
};
use serde::Serialize;
use tracing::info;

use crate::{file_utils, parsers};

#[derive(Args)]
pub struct OptimizeArgs {
    /// The problem file
    #[arg(short = 'i', long)]
    input: PathBuf,

    /// Planning deadline (e.g., "30s", "5m", "PT1H30M")
    #[arg(short, long, value_parser = parsers::parse_duration, default_value = "30s")]
    timeout: jiff::SignedDuration,

    /// Time kept in reserve before the deadline
    #[arg(long, value_parser = parsers::parse_duration, default_value = "500ms")]
    margin: jiff::SignedDuration,

    #[arg(long, short = 'n', default_value_t = 10000)]
    iterations: usize,

    /// Probability of adopting the best neighbor at each iteration
    #[arg(long, short = 'p', value_parser = parsers::parse_probability, default_value_t = 0.3)]
    acceptance: f64,

    /// Always adopt the best neighbor
    #[arg(long, conflicts_with = "acceptance")]
    greedy: bool,

    #[arg(long, short = 's')]
    seed: Option<u64>,

    /// Writes the plans and search statistics as JSON
    #[arg(long, short = 'o')]
    out: Option<PathBuf>,
}

#[derive(Serialize)]
struct OptimizeOutput {
    cost: Distance,
    plans: JsonPlans,
    statistics: Option<SearchStatistics>,
}

pub fn run(args: OptimizeArgs) -> anyhow::Result<()> {
    let content = file_utils::read_problem(&args.input)?;
    let problem = content.build_problem()?;

    let defaults = SolverParams::default();
    let solver = Solver::new(
        problem,
        SolverParams {
            terminations: vec![
                Termination::Iterations(args.iterations),
                Termination::Duration(args.timeout),
            ],
            deadline_margin: args.margin,
            solver_acceptor: if args.greedy {
                SolverAcceptorStrategy::Any
            } else {
                SolverAcceptorStrategy::Probabilistic
            },
            acceptance_probability: args.acceptance,
            seed: args.seed.unwrap_or(defaults.seed),
            ..defaults
        },
    );

    let solution = solver.solve()?;
    let plans = build_plans(solver.problem(), &solution.solution);
    let json_plans = JsonPlans::from_problem(plans.as_slice(), solver.problem());

    info!(
        "Finished: cost = {:.3}, vehicles used = {}",
        solution.cost,
        solution.solution.non_empty_vehicle_ids().count()
    );

    println!("{}", summary_table(solver.problem(), &json_plans));

    if let Some(out) = args.out {
        file_utils::write_json(
            &out,
            &OptimizeOutput {
                cost: solution.cost,
                plans: json_plans,
                statistics: solver.statistics(),
            },
        )?;
        info!("Plans written to {}", out.display());
    }

    Ok(())
}

fn summary_table(problem: &PickupDeliveryProblem, plans: &JsonPlans) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["Vehicle", "Capacity", "Tasks", "Actions", "Distance"]);

    for (vehicle, plan) in problem.vehicles().iter().zip(&plans.vehicles) {
        let tasks = plan
            .actions
            .iter()
            .filter(|action| matches!(action, JsonAction::Pickup { .. }))
            .count();

        table.add_row(vec![
            plan.vehicle.clone(),
            vehicle.capacity().to_string(),
            tasks.to_string(),
            plan.actions.len().to_string(),
            format!("{:.3}", plan.distance),
        ]);
    }

    table.add_row(vec![
        "Total".to_owned(),
        String::new(),
        problem.tasks().len().to_string(),
        String::new(),
        format!("{:.3}", plans.total_distance),
    ]);

    table
}

use good_lp::Solution as LpSolution;
use good_lp::solvers::microlp::microlp;
use good_lp::{Expression, ResolutionError, SolverModel, Variable, variable, variables};

use crate::model::MilpModel;

/// Outcome status reported by a MILP backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MilpStatus {
    /// The returned solution is provably the best feasible one.
    Optimal,
    /// No assignment satisfies the constraints.
    Infeasible,
    /// Anything else the backend can report: unbounded, numerical trouble,
    /// an internal solver error, ...
    Other(String),
}

/// Per-variable solution values and objective, valid only when `status` is
/// [`MilpStatus::Optimal`]. Values of binary variables are nominally 0 or 1
/// but subject to the backend's numerical tolerance.
#[derive(Debug, Clone, PartialEq)]
pub struct MilpSolution {
    pub status: MilpStatus,
    pub variable_values: Vec<f64>,
    pub objective: f64,
}

impl MilpSolution {
    pub fn non_optimal(status: MilpStatus) -> Self {
        Self {
            status,
            variable_values: Vec::new(),
            objective: 0.0,
        }
    }
}

/// A MILP backend. Implementations never panic and never propagate errors:
/// any fault is reported through [`MilpStatus`] so callers can degrade
/// gracefully.
pub trait MilpSolver {
    fn solve(&self, model: &MilpModel) -> MilpSolution;
}

/// Backend translating a [`MilpModel`] into `good_lp` and solving it with
/// the pure-Rust `microlp` solver.
#[derive(Debug, Clone, Copy, Default)]
pub struct GoodLpSolver;

impl MilpSolver for GoodLpSolver {
    fn solve(&self, model: &MilpModel) -> MilpSolution {
        // A model without variables is trivially optimal with objective 0.
        if model.num_vars() == 0 {
            return MilpSolution {
                status: MilpStatus::Optimal,
                variable_values: Vec::new(),
                objective: 0.0,
            };
        }

        let mut problem_vars = variables!();
        let vars: Vec<Variable> = (0..model.num_vars())
            .map(|_| problem_vars.add(variable().binary()))
            .collect();

        let objective = model
            .objective_coeffs()
            .iter()
            .zip(&vars)
            .fold(Expression::from(0.0), |sum, (&coeff, &var)| {
                sum + var * coeff
            });

        let mut lp = problem_vars.maximise(objective).using(microlp);
        for row in model.constraints() {
            let lhs = row
                .terms
                .iter()
                .fold(Expression::from(0.0), |sum, &(var, coeff)| {
                    sum + vars[var] * coeff
                });
            lp = lp.with(lhs.leq(row.upper_bound));
        }

        match lp.solve() {
            Ok(solution) => {
                let variable_values: Vec<f64> =
                    vars.iter().map(|&var| solution.value(var)).collect();
                let objective = model
                    .objective_coeffs()
                    .iter()
                    .zip(&variable_values)
                    .map(|(coeff, value)| coeff * value)
                    .sum();
                MilpSolution {
                    status: MilpStatus::Optimal,
                    variable_values,
                    objective,
                }
            }
            Err(ResolutionError::Infeasible) => MilpSolution::non_optimal(MilpStatus::Infeasible),
            Err(err) => MilpSolution::non_optimal(MilpStatus::Other(err.to_string())),
        }
    }
}

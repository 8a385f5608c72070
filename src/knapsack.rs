use log::warn;

use crate::instance::Instance;
use crate::model::MilpModel;
use crate::solver::{MilpSolver, MilpStatus};

/// Solution values above this threshold count as "selected". Backends report
/// binary variables as floats subject to numerical tolerance, so the
/// nominally-0/1 values need rounding into a hard selection.
pub const SELECTION_THRESHOLD: f64 = 0.5;

/// A 0/1 knapsack problem: pick a subset of items maximizing total value
/// while keeping total weight within `capacity`.
#[derive(Debug, Clone)]
pub struct Knapsack {
    pub weights: Vec<u32>,
    pub values: Vec<u32>,
    pub capacity: i64,
}

/// The chosen item indices plus their exact integer totals and the backend
/// status that produced them. Any non-optimal status comes with an empty
/// item set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub items: Vec<usize>,
    pub total_weight: u64,
    pub total_value: u64,
    pub status: MilpStatus,
}

impl Selection {
    fn empty(status: MilpStatus) -> Self {
        Self {
            items: Vec::new(),
            total_weight: 0,
            total_value: 0,
            status,
        }
    }
}

impl Knapsack {
    pub fn new(weights: Vec<u32>, values: Vec<u32>, capacity: i64) -> Self {
        assert_eq!(
            weights.len(),
            values.len(),
            "weights and values must have the same length"
        );
        Self {
            weights,
            values,
            capacity,
        }
    }

    pub fn from_instance(instance: &Instance, capacity: i64) -> Self {
        Self::new(instance.weights.clone(), instance.values.clone(), capacity)
    }

    pub fn num_items(&self) -> usize {
        self.weights.len()
    }

    /// Formulate the problem as a MILP: one binary variable per item,
    /// objective `max sum(value[i] * x[i])`, a single constraint
    /// `sum(weight[i] * x[i]) <= capacity`.
    pub fn formulate(&self) -> MilpModel {
        let mut model = MilpModel::new();

        let vars: Vec<_> = (0..self.num_items())
            .map(|_| model.add_binary_var())
            .collect();

        for (&var, &value) in vars.iter().zip(&self.values) {
            model.set_objective_coeff(var, value as f64);
        }

        let weight_terms = vars
            .iter()
            .zip(&self.weights)
            .map(|(&var, &weight)| (var, weight as f64))
            .collect();
        model.add_leq_constraint(weight_terms, self.capacity as f64);

        model
    }

    /// Formulate, delegate to `solver`, and convert the solution values back
    /// into a hard item selection.
    ///
    /// Never fails: a non-optimal status (infeasible model, backend error)
    /// degrades to an empty selection carrying that status, with a logged
    /// diagnostic.
    pub fn solve_with(&self, solver: &impl MilpSolver) -> Selection {
        let model = self.formulate();
        let solution = solver.solve(&model);

        if solution.status != MilpStatus::Optimal {
            warn!(
                "no optimal solution ({:?}), falling back to empty selection",
                solution.status
            );
            return Selection::empty(solution.status);
        }

        let items: Vec<usize> = solution
            .variable_values
            .iter()
            .enumerate()
            .filter(|&(_, &value)| value > SELECTION_THRESHOLD)
            .map(|(i, _)| i)
            .collect();

        // Recompute the totals in integer arithmetic rather than trusting
        // the backend's floating-point objective.
        let total_weight = items.iter().map(|&i| self.weights[i] as u64).sum();
        let total_value = items.iter().map(|&i| self.values[i] as u64).sum();

        Selection {
            items,
            total_weight,
            total_value,
            status: MilpStatus::Optimal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::{GoodLpSolver, MilpSolution};
    use test_case::test_case;

    /// Exhaustively enumerate all subsets and return the best feasible total
    /// value. Only usable for small `n`.
    fn brute_force_optimum(weights: &[u32], values: &[u32], capacity: i64) -> u64 {
        let n = weights.len();
        assert!(n <= 20, "brute force is exponential in n");

        let mut best = 0u64;
        for mask in 0u32..(1 << n) {
            let total_weight: u64 = (0..n)
                .filter(|i| mask & (1 << i) != 0)
                .map(|i| weights[i] as u64)
                .sum();
            if capacity >= 0 && total_weight <= capacity as u64 {
                let total_value = (0..n)
                    .filter(|i| mask & (1 << i) != 0)
                    .map(|i| values[i] as u64)
                    .sum();
                best = best.max(total_value);
            }
        }
        best
    }

    struct StubSolver(MilpSolution);

    impl MilpSolver for StubSolver {
        fn solve(&self, _model: &crate::model::MilpModel) -> MilpSolution {
            self.0.clone()
        }
    }

    #[test]
    fn fixed_scenario_matches_brute_force() {
        let weights = vec![2, 3, 4, 5, 9];
        let values = vec![3, 4, 5, 6, 10];
        let capacity = 10;
        let expected = brute_force_optimum(&weights, &values, capacity);

        let selection = Knapsack::new(weights, values, capacity).solve_with(&GoodLpSolver);

        assert_eq!(selection.status, MilpStatus::Optimal);
        assert!(selection.total_weight <= capacity as u64);
        assert_eq!(selection.total_value, expected);
    }

    #[test_case(0)]
    #[test_case(1)]
    #[test_case(7)]
    #[test_case(42)]
    #[test_case(1337)]
    fn generated_instances_are_solved_to_optimality(seed: u64) {
        let instance = Instance::generate(12, seed);
        let capacity = 25;
        let expected = brute_force_optimum(&instance.weights, &instance.values, capacity);

        let selection = Knapsack::from_instance(&instance, capacity).solve_with(&GoodLpSolver);

        assert_eq!(selection.status, MilpStatus::Optimal);
        assert!(selection.total_weight <= capacity as u64);
        assert_eq!(selection.total_value, expected);

        // Totals must be consistent with the reported indices.
        let weight_sum: u64 = selection
            .items
            .iter()
            .map(|&i| instance.weights[i] as u64)
            .sum();
        assert_eq!(selection.total_weight, weight_sum);
    }

    #[test]
    fn zero_capacity_selects_nothing() {
        let instance = Instance::generate(20, 42);
        let selection = Knapsack::from_instance(&instance, 0).solve_with(&GoodLpSolver);

        assert_eq!(selection.status, MilpStatus::Optimal);
        assert!(selection.items.is_empty());
        assert_eq!(selection.total_value, 0);
    }

    #[test]
    fn negative_capacity_degrades_to_empty_selection() {
        let instance = Instance::generate(5, 42);
        let selection = Knapsack::from_instance(&instance, -1).solve_with(&GoodLpSolver);

        assert_eq!(selection.status, MilpStatus::Infeasible);
        assert!(selection.items.is_empty());
    }

    #[test]
    fn empty_instance_yields_empty_optimal_selection() {
        let selection = Knapsack::new(Vec::new(), Vec::new(), 100).solve_with(&GoodLpSolver);

        assert_eq!(selection.status, MilpStatus::Optimal);
        assert!(selection.items.is_empty());
        assert_eq!(selection.total_value, 0);
    }

    #[test]
    fn infeasible_backend_yields_empty_selection_without_panicking() {
        let stub = StubSolver(MilpSolution::non_optimal(MilpStatus::Infeasible));
        let instance = Instance::generate(10, 42);

        let selection = Knapsack::from_instance(&instance, 100).solve_with(&stub);

        assert_eq!(selection.status, MilpStatus::Infeasible);
        assert!(selection.items.is_empty());
    }

    #[test]
    fn backend_error_is_preserved_in_the_status() {
        let stub = StubSolver(MilpSolution::non_optimal(MilpStatus::Other(
            "solver crashed".into(),
        )));
        let instance = Instance::generate(10, 42);

        let selection = Knapsack::from_instance(&instance, 100).solve_with(&stub);

        assert_eq!(
            selection.status,
            MilpStatus::Other("solver crashed".into())
        );
        assert!(selection.items.is_empty());
    }

    #[test]
    fn near_binary_values_are_rounded_through_the_threshold() {
        let stub = StubSolver(MilpSolution {
            status: MilpStatus::Optimal,
            variable_values: vec![0.9999, 0.0001, 1.0],
            objective: 0.0,
        });
        let knapsack = Knapsack::new(vec![1, 2, 3], vec![10, 20, 30], 100);

        let selection = knapsack.solve_with(&stub);

        assert_eq!(selection.items, vec![0, 2]);
        assert_eq!(selection.total_weight, 4);
        assert_eq!(selection.total_value, 40);
    }

    #[test]
    #[should_panic(expected = "same length")]
    fn mismatched_lengths_are_rejected() {
        Knapsack::new(vec![1, 2], vec![1], 10);
    }
}

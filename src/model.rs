/// Index of a decision variable in a [`MilpModel`], dense in insertion order.
pub type VarId = usize;

/// A single `sum(coeff * var) <= upper_bound` row.
#[derive(Debug, Clone, PartialEq)]
pub struct LeqConstraint {
    pub terms: Vec<(VarId, f64)>,
    pub upper_bound: f64,
}

/// A maximization MILP over binary decision variables, described as plain
/// data so that backends (and test stubs) stay decoupled from any particular
/// solver library.
#[derive(Debug, Clone, Default)]
pub struct MilpModel {
    objective: Vec<f64>,
    constraints: Vec<LeqConstraint>,
}

impl MilpModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a 0/1 decision variable with objective coefficient 0.
    pub fn add_binary_var(&mut self) -> VarId {
        self.objective.push(0.0);
        self.objective.len() - 1
    }

    /// Set the variable's coefficient in the (maximized) linear objective.
    pub fn set_objective_coeff(&mut self, var: VarId, coeff: f64) {
        self.objective[var] = coeff;
    }

    /// Add a linear `<=` constraint over the given `(variable, coefficient)`
    /// terms.
    pub fn add_leq_constraint(&mut self, terms: Vec<(VarId, f64)>, upper_bound: f64) {
        debug_assert!(terms.iter().all(|&(var, _)| var < self.num_vars()));
        self.constraints.push(LeqConstraint { terms, upper_bound });
    }

    pub fn num_vars(&self) -> usize {
        self.objective.len()
    }

    pub fn objective_coeffs(&self) -> &[f64] {
        &self.objective
    }

    pub fn constraints(&self) -> &[LeqConstraint] {
        &self.constraints
    }
}

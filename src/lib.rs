//! Solve 0/1 knapsack problems by formulating them as mixed-integer linear
//! programs.
//!
//! The pipeline has three steps: [`instance`] generates a synthetic problem
//! from a fixed seed, [`knapsack`] formulates it as a MILP and delegates to a
//! [`solver::MilpSolver`] backend, and [`plot`] renders the selection as an
//! SVG scatter plot.

pub mod config;
pub mod instance;
pub mod knapsack;
pub mod model;
pub mod plot;
pub mod solver;
pub mod util;

// Copyright (c) 2026 The transport-simplex developers
//
// This program is free software: you can redistribute it and/or
// modify it under the terms of the GNU General Public License as
// published by the Free Software Foundation, either version 3 of the
// License, or (at your option) any later version.
//
// This program is distributed in the hope that it will be useful, but
// WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU
// General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see  <http://www.gnu.org/licenses/>
//

//! A solver for the classical transportation problem.
//!
//! A transportation problem consists of warehouses with capacities,
//! clients with demands and a per-pair shipping cost. The solver
//! balances the instance with a zero-cost dummy node, constructs a
//! basic feasible solution with the least-cost method and improves it
//! to provable optimality with the transportation simplex. The result
//! is the minimal total cost together with a sparse flow map.
//!
//! # Example
//!
//! ```
//! use transport_simplex::{solve, Problem};
//!
//! let mut b = Problem::builder();
//! b.add_warehouse("W1", 20);
//! b.add_warehouse("W2", 30);
//! b.add_client("C1", 25);
//! b.add_client("C2", 25);
//! b.set_cost("W1", "C1", 4);
//! b.set_cost("W1", "C2", 6);
//! b.set_cost("W2", "C1", 8);
//! b.set_cost("W2", "C2", 2);
//!
//! let problem = b.build().unwrap();
//! let solution = solve(&problem).unwrap();
//!
//! assert_eq!(solution.objective, 170);
//! assert_eq!(solution.flows.len(), 3);
//! ```

// # Data structures

pub mod error;
pub use self::error::{Error, Result};

pub mod model;
pub use self::model::{Problem, ProblemBuilder};

pub mod balance;
pub use self::balance::{balance, Balanced, Dummy};

pub mod solution;
pub use self::solution::{Flow, Solution};

// # Algorithms

pub mod simplex;
pub use self::simplex::{SolutionState, TransportSimplex};

use num_traits::{FromPrimitive, NumAssign, Signed};

/// Solve a transportation problem to optimality.
///
/// Balances the problem, builds an initial basic feasible solution and
/// runs the transportation simplex on it. Returns the minimum-cost
/// shipment plan; allocations on the balancing dummy node are not part
/// of the returned flows.
///
/// Fails with [`Error::Infeasible`] if the costed routes cannot carry
/// all demand and with [`Error::IterationLimit`] if the pivot cap is
/// exceeded.
///
/// # Example
///
/// ```
/// use transport_simplex::{solve, Problem};
///
/// // supply exceeds demand, the surplus stays in the warehouse
/// let mut b = Problem::builder();
/// b.add_warehouse("W1", 50);
/// b.add_client("C1", 30);
/// b.set_cost("W1", "C1", 5);
///
/// let solution = solve(&b.build().unwrap()).unwrap();
/// assert_eq!(solution.objective, 150);
/// ```
pub fn solve<F>(problem: &Problem<F>) -> Result<Solution<F>>
where
    F: NumAssign + PartialOrd + Copy + Signed + FromPrimitive,
{
    let tableau = balance(problem);
    let mut spx = TransportSimplex::new(&tableau);
    spx.solve()?;
    Ok(solution::extract(&tableau, spx.basic_cells()))
}

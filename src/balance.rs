/*
 * Copyright (c) 2026 The transport-simplex developers
 *
 * This program is free software: you can redistribute it and/or
 * modify it under the terms of the GNU General Public License as
 * published by the Free Software Foundation, either version 3 of the
 * License, or (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful, but
 * WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU
 * General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program.  If not, see  <http://www.gnu.org/licenses/>
 */

//! Balancing a problem into equality form.
//!
//! The transportation simplex requires total supply and total demand to
//! be equal. [`balance`] establishes this by inserting at most one
//! zero-cost dummy node: a dummy client column absorbing surplus
//! supply, or a dummy warehouse row covering surplus demand. The dummy
//! is tracked so the solution extraction can discard its allocations.

use crate::model::Problem;
use num_traits::NumAssign;

/// Which side of the balanced tableau holds a dummy node, if any.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Dummy {
    /// Supply and demand were already equal.
    None,
    /// The last row is a dummy warehouse covering surplus demand.
    Row,
    /// The last column is a dummy client absorbing surplus supply.
    Column,
}

/// A transportation tableau in balanced equality form.
///
/// The row and column sums of any feasible flow match the supplies and
/// demands exactly; this is the input form of the simplex optimizer.
#[derive(Clone, Debug)]
pub struct Balanced<F> {
    row_names: Vec<String>,
    col_names: Vec<String>,
    supplies: Vec<F>,
    demands: Vec<F>,
    /// Row-major cost table, `None` meaning "no route". Dummy cells
    /// carry an explicit zero cost.
    costs: Vec<Option<F>>,
    dummy: Dummy,
}

impl<F> Balanced<F> {
    /// Return the number of rows (warehouses, including a dummy row).
    pub fn num_rows(&self) -> usize {
        self.row_names.len()
    }

    /// Return the number of columns (clients, including a dummy column).
    pub fn num_cols(&self) -> usize {
        self.col_names.len()
    }

    /// Return the name of row `i`.
    pub fn row_name(&self, i: usize) -> &str {
        &self.row_names[i]
    }

    /// Return the name of column `j`.
    pub fn col_name(&self, j: usize) -> &str {
        &self.col_names[j]
    }

    /// Return which side holds a dummy node.
    pub fn dummy(&self) -> Dummy {
        self.dummy
    }

    /// Return `true` if the cell `(i, j)` touches the dummy node.
    pub fn is_dummy(&self, i: usize, j: usize) -> bool {
        match self.dummy {
            Dummy::None => false,
            Dummy::Row => i + 1 == self.num_rows(),
            Dummy::Column => j + 1 == self.num_cols(),
        }
    }
}

impl<F> Balanced<F>
where
    F: Copy,
{
    /// Return the supply of row `i`.
    pub fn supply(&self, i: usize) -> F {
        self.supplies[i]
    }

    /// Return the demand of column `j`.
    pub fn demand(&self, j: usize) -> F {
        self.demands[j]
    }

    /// Return the cost of cell `(i, j)`, `None` meaning "no route".
    pub fn cost(&self, i: usize, j: usize) -> Option<F> {
        self.costs[i * self.num_cols() + j]
    }
}

impl<F> Balanced<F>
where
    F: NumAssign + Copy,
{
    /// Return the total supply (equals the total demand).
    pub fn total(&self) -> F {
        let mut total = F::zero();
        for &s in &self.supplies {
            total += s;
        }
        total
    }
}

/// Reconcile total supply and total demand of a problem.
///
/// Inserts a single zero-cost dummy node on the deficient side, so that
/// afterwards the row and column totals agree exactly. An already
/// balanced problem is copied unchanged.
pub fn balance<F>(problem: &Problem<F>) -> Balanced<F>
where
    F: NumAssign + PartialOrd + Copy,
{
    let m = problem.num_warehouses();
    let n = problem.num_clients();

    let mut total_supply = F::zero();
    for i in 0..m {
        total_supply += problem.capacity(i);
    }
    let mut total_demand = F::zero();
    for j in 0..n {
        total_demand += problem.demand(j);
    }

    let dummy = if total_supply > total_demand {
        Dummy::Column
    } else if total_demand > total_supply {
        Dummy::Row
    } else {
        Dummy::None
    };

    let rows = if dummy == Dummy::Row { m + 1 } else { m };
    let cols = if dummy == Dummy::Column { n + 1 } else { n };

    let mut costs = vec![None; rows * cols];
    for i in 0..m {
        for j in 0..n {
            costs[i * cols + j] = problem.cost(i, j);
        }
    }

    let mut row_names: Vec<String> = (0..m).map(|i| problem.warehouse(i).to_string()).collect();
    let mut col_names: Vec<String> = (0..n).map(|j| problem.client(j).to_string()).collect();
    let mut supplies: Vec<F> = (0..m).map(|i| problem.capacity(i)).collect();
    let mut demands: Vec<F> = (0..n).map(|j| problem.demand(j)).collect();

    match dummy {
        Dummy::Row => {
            row_names.push("(dummy)".to_string());
            supplies.push(total_demand - total_supply);
            for j in 0..cols {
                costs[m * cols + j] = Some(F::zero());
            }
        }
        Dummy::Column => {
            col_names.push("(dummy)".to_string());
            demands.push(total_supply - total_demand);
            for i in 0..rows {
                costs[i * cols + n] = Some(F::zero());
            }
        }
        Dummy::None => (),
    }

    Balanced {
        row_names,
        col_names,
        supplies,
        demands,
        costs,
        dummy,
    }
}

#[cfg(test)]
mod tests {
    use super::{balance, Dummy};
    use crate::model::Problem;

    fn sample(capacities: &[i64], demands: &[i64]) -> Problem<i64> {
        let mut b = Problem::builder();
        for (i, &c) in capacities.iter().enumerate() {
            b.add_warehouse(format!("W{}", i + 1), c);
        }
        for (j, &d) in demands.iter().enumerate() {
            b.add_client(format!("C{}", j + 1), d);
        }
        for i in 0..capacities.len() {
            for j in 0..demands.len() {
                b.set_cost(format!("W{}", i + 1), format!("C{}", j + 1), (i + j) as i64);
            }
        }
        b.build().unwrap()
    }

    #[test]
    fn test_already_balanced() {
        let t = balance(&sample(&[20, 30], &[25, 25]));
        assert_eq!(t.dummy(), Dummy::None);
        assert_eq!(t.num_rows(), 2);
        assert_eq!(t.num_cols(), 2);
        assert_eq!(t.total(), 50);
    }

    #[test]
    fn test_surplus_supply_adds_dummy_column() {
        let t = balance(&sample(&[30, 20], &[25, 5]));
        assert_eq!(t.dummy(), Dummy::Column);
        assert_eq!(t.num_cols(), 3);
        assert_eq!(t.demand(2), 20);
        assert_eq!(t.cost(0, 2), Some(0));
        assert_eq!(t.cost(1, 2), Some(0));
        assert!(t.is_dummy(0, 2));
        assert!(!t.is_dummy(0, 1));
        // the real cells are untouched
        assert_eq!(t.cost(1, 0), Some(1));
        assert_eq!(t.total(), 50);
    }

    #[test]
    fn test_surplus_demand_adds_dummy_row() {
        let t = balance(&sample(&[10], &[25, 5]));
        assert_eq!(t.dummy(), Dummy::Row);
        assert_eq!(t.num_rows(), 2);
        assert_eq!(t.supply(1), 20);
        assert_eq!(t.cost(1, 0), Some(0));
        assert_eq!(t.cost(1, 1), Some(0));
        assert!(t.is_dummy(1, 1));
        assert_eq!(t.total(), 30);
    }

    #[test]
    fn test_missing_routes_survive_balancing() {
        let mut b = Problem::builder();
        b.add_warehouse("W1", 10);
        b.add_client("C1", 5).add_client("C2", 5);
        b.set_cost("W1", "C1", 3);
        let t = balance(&b.build().unwrap());
        assert_eq!(t.dummy(), Dummy::None);
        assert_eq!(t.cost(0, 0), Some(3));
        assert_eq!(t.cost(0, 1), None);
    }
}

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

//! The least-cost method for an initial basic feasible solution.
//!
//! Repeatedly allocate as much as possible to the cheapest open cell
//! until every supply and demand is exhausted. Ties on equal costs are
//! broken by the lexicographically smallest `(row, col)` pair, which
//! makes the construction deterministic. If a supply and a demand are
//! exhausted simultaneously, only one side is closed and the other
//! later receives a zero allocation, so the basis always reaches its
//! required size of `m + n - 1` cells.
//!
//! Cells without a route are used only when no costed open cell is
//! left. Such artificial cells keep the basis tree connected; the
//! optimizer prices them at an artificial cost and any positive flow
//! remaining on them at the end proves the problem infeasible.

use super::Cell;
use crate::balance::Balanced;
use crate::error::{Error, Result};
use num_traits::NumAssign;

/// Build an initial basic solution with the least-cost method.
///
/// Returns the basic cells forming a spanning tree over the `m + n`
/// row and column nodes, with exactly `m + n - 1` entries. Cells on
/// missing routes appear only if the costed cells alone cannot carry
/// the allocation.
///
/// Fails with [`Error::Infeasible`] if some row or column has no
/// costed route at all.
pub fn initial_basis<F>(tableau: &Balanced<F>) -> Result<Vec<Cell<F>>>
where
    F: NumAssign + PartialOrd + Copy,
{
    let m = tableau.num_rows();
    let n = tableau.num_cols();

    // A node without any costed route can never be served.
    for i in 0..m {
        if (0..n).all(|j| tableau.cost(i, j).is_none()) {
            return Err(Error::Infeasible {
                node: tableau.row_name(i).to_string(),
            });
        }
    }
    for j in 0..n {
        if (0..m).all(|i| tableau.cost(i, j).is_none()) {
            return Err(Error::Infeasible {
                node: tableau.col_name(j).to_string(),
            });
        }
    }

    let mut supply: Vec<F> = (0..m).map(|i| tableau.supply(i)).collect();
    let mut demand: Vec<F> = (0..n).map(|j| tableau.demand(j)).collect();
    let mut row_open = vec![true; m];
    let mut col_open = vec![true; n];
    let mut open_rows = m;
    let mut open_cols = n;

    let mut basis = Vec::with_capacity((m + n).saturating_sub(1));

    while open_rows > 0 && open_cols > 0 {
        // The cheapest costed open cell; the scan order realizes the
        // lexicographic tie-break.
        let mut best: Option<(F, usize, usize)> = None;
        let mut fallback = None;
        for i in (0..m).filter(|&i| row_open[i]) {
            for j in (0..n).filter(|&j| col_open[j]) {
                if let Some(c) = tableau.cost(i, j) {
                    match best {
                        Some((bc, _, _)) if !(c < bc) => (),
                        _ => best = Some((c, i, j)),
                    }
                } else if fallback.is_none() {
                    fallback = Some((i, j));
                }
            }
        }

        let (i, j) = match (best, fallback) {
            (Some((_, i, j)), _) => (i, j),
            // no costed cell left, fall back to an artificial one
            (None, Some((i, j))) => (i, j),
            (None, None) => unreachable!("open rows and columns always share a cell"),
        };

        let quantity = if supply[i] < demand[j] { supply[i] } else { demand[j] };
        supply[i] -= quantity;
        demand[j] -= quantity;
        basis.push(Cell { row: i, col: j, quantity });

        let supply_out = supply[i].is_zero();
        let demand_out = demand[j].is_zero();
        if supply_out && demand_out {
            // Degenerate double exhaustion: close only one side unless
            // this was the final cell, keeping the basis count intact.
            if open_rows == 1 && open_cols == 1 {
                row_open[i] = false;
                col_open[j] = false;
                open_rows -= 1;
                open_cols -= 1;
            } else if open_rows > 1 {
                row_open[i] = false;
                open_rows -= 1;
            } else {
                col_open[j] = false;
                open_cols -= 1;
            }
        } else if supply_out {
            row_open[i] = false;
            open_rows -= 1;
        } else {
            col_open[j] = false;
            open_cols -= 1;
        }
    }

    Ok(basis)
}

#[cfg(test)]
mod tests {
    use super::initial_basis;
    use crate::balance::{balance, Balanced};
    use crate::error::Error;
    use crate::model::Problem;

    fn build(capacities: &[i64], demands: &[i64], costs: &[(usize, usize, i64)]) -> Balanced<i64> {
        let mut b = Problem::builder();
        for (i, &c) in capacities.iter().enumerate() {
            b.add_warehouse(format!("W{}", i + 1), c);
        }
        for (j, &d) in demands.iter().enumerate() {
            b.add_client(format!("C{}", j + 1), d);
        }
        for &(i, j, c) in costs {
            b.set_cost(format!("W{}", i + 1), format!("C{}", j + 1), c);
        }
        balance(&b.build().unwrap())
    }

    #[test]
    fn test_basis_size_and_feasibility() {
        let t = build(
            &[20, 30],
            &[25, 25],
            &[(0, 0, 4), (0, 1, 6), (1, 0, 8), (1, 1, 2)],
        );
        let basis = initial_basis(&t).unwrap();
        assert_eq!(basis.len(), 3);

        // row and column sums match supplies and demands
        for i in 0..2 {
            let sum: i64 = basis.iter().filter(|c| c.row == i).map(|c| c.quantity).sum();
            assert_eq!(sum, t.supply(i));
        }
        for j in 0..2 {
            let sum: i64 = basis.iter().filter(|c| c.col == j).map(|c| c.quantity).sum();
            assert_eq!(sum, t.demand(j));
        }
    }

    #[test]
    fn test_least_cost_order() {
        let t = build(
            &[20, 30],
            &[25, 25],
            &[(0, 0, 4), (0, 1, 6), (1, 0, 8), (1, 1, 2)],
        );
        let basis = initial_basis(&t).unwrap();
        // cheapest cell (W2, C2) is saturated first
        assert_eq!(basis[0].row, 1);
        assert_eq!(basis[0].col, 1);
        assert_eq!(basis[0].quantity, 25);
    }

    #[test]
    fn test_degenerate_allocation_keeps_basis_size() {
        // the first allocation exhausts a row and a column at once
        let t = build(&[10, 10], &[10, 10], &[(0, 0, 1), (0, 1, 2), (1, 0, 2), (1, 1, 4)]);
        let basis = initial_basis(&t).unwrap();
        assert_eq!(basis.len(), 3);
        assert!(basis.iter().any(|c| c.quantity == 0));
    }

    #[test]
    fn test_empty_tableau() {
        let t = balance(&Problem::<i64>::builder().build().unwrap());
        assert!(initial_basis(&t).unwrap().is_empty());
    }

    #[test]
    fn test_unreachable_client_is_infeasible() {
        let t = build(&[10], &[5, 5], &[(0, 0, 3)]);
        assert_eq!(
            initial_basis(&t).unwrap_err(),
            Error::Infeasible { node: "C2".into() }
        );
    }

    #[test]
    fn test_artificial_cell_completes_basis() {
        // greedy exhausts the dummy column on W1, leaving W2 and C1
        // connected only through a routeless cell
        let t = build(&[10, 5], &[10], &[(0, 0, 3)]);
        let basis = initial_basis(&t).unwrap();
        assert_eq!(basis.len(), 3);
        assert!(basis.iter().any(|c| t.cost(c.row, c.col).is_none()));
    }
}

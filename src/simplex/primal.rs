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

//! A primal transportation simplex implementation.
//!
//! The optimizer alternates between a pricing step and a pivoting
//! step. Pricing computes dual potentials `u`, `v` by propagating
//! `u[i] + v[j] = cost[i, j]` along the basis tree and then looks for
//! a non-basic cell with negative reduced cost; if none exists, the
//! current basis is optimal. Pivoting closes the unique cycle formed
//! by the entering cell and the basis tree, shifts the pivot quantity
//! around it and exchanges the entering cell for a leaving cell.
//!
//! Ties in both steps are broken by the lexicographically smallest
//! `(row, col)` cell, so runs are deterministic. A cap on the number
//! of pivots turns a cycling basis, which should not occur with the
//! fixed tie-break, into a reported error instead of an endless loop.

use super::{initial_basis, Cell, SolutionState};
use crate::balance::{Balanced, Dummy};
use crate::error::{Error, Result};
use num_traits::{FromPrimitive, NumAssign, Signed};
use std::collections::VecDeque;

/// A primal transportation simplex algorithm on a balanced tableau.
pub struct TransportSimplex<'a, F> {
    tableau: &'a Balanced<F>,

    basis: Vec<Cell<F>>,
    potentials_u: Vec<F>,
    potentials_v: Vec<F>,
    artificial: F,

    niter: usize,
    solution_state: SolutionState,

    /// The maximal number of pivots before [`Error::IterationLimit`]
    /// is reported. Defaults to `4 * (m + n)^2`.
    pub max_iterations: usize,
    /// The artificial cost value placed on routeless cells.
    ///
    /// Should be larger than the cost of any pivot cycle. If `None`
    /// (the default) the artificial cost is set to
    /// `(max(cost) + 1) * (m + n)`, which is large enough.
    pub artificial_cost: Option<F>,
}

impl<'a, F> TransportSimplex<'a, F>
where
    F: NumAssign + PartialOrd + Copy + Signed + FromPrimitive,
{
    pub fn new(tableau: &'a Balanced<F>) -> Self {
        let nodes = tableau.num_rows() + tableau.num_cols();
        TransportSimplex {
            tableau,
            basis: Vec::new(),
            potentials_u: vec![F::zero(); tableau.num_rows()],
            potentials_v: vec![F::zero(); tableau.num_cols()],
            artificial: F::zero(),
            niter: 0,
            solution_state: SolutionState::Unknown,
            max_iterations: 4 * nodes * nodes,
            artificial_cost: None,
        }
    }

    pub fn as_tableau(&self) -> &'a Balanced<F> {
        self.tableau
    }

    /// Solve the transportation problem on the tableau.
    pub fn solve(&mut self) -> Result<SolutionState> {
        self.niter = 0;
        self.solution_state = SolutionState::Unknown;
        self.basis.clear();

        // check trivial case: nothing to ship
        if self.tableau.total().is_zero() {
            self.solution_state = SolutionState::Optimal;
            return Ok(self.solution_state);
        }

        self.artificial = match self.artificial_cost {
            Some(value) => value,
            None => {
                let mut cmax = F::zero();
                for i in 0..self.tableau.num_rows() {
                    for j in 0..self.tableau.num_cols() {
                        if let Some(c) = self.tableau.cost(i, j) {
                            if c > cmax {
                                cmax = c;
                            }
                        }
                    }
                }
                let nodes = self.tableau.num_rows() + self.tableau.num_cols();
                F::from_usize(nodes).unwrap() * (F::one() + cmax)
            }
        };

        match initial_basis(self.tableau) {
            Ok(basis) => self.basis = basis,
            Err(err) => {
                self.solution_state = SolutionState::Infeasible;
                return Err(err);
            }
        }

        loop {
            self.compute_potentials();
            let (i, j) = match self.find_entering() {
                Some(cell) => cell,
                None => break,
            };
            if self.niter >= self.max_iterations {
                return Err(Error::IterationLimit { iterations: self.niter });
            }
            self.niter += 1;
            self.pivot(i, j);
        }

        // Remaining flow on a routeless cell proves infeasibility. The
        // reported node is the endpoint on the binding side: under
        // surplus demand the warehouse that cannot ship its supply,
        // otherwise the client that cannot be served.
        for k in 0..self.basis.len() {
            let cell = self.basis[k];
            if cell.quantity > F::zero() && self.tableau.cost(cell.row, cell.col).is_none() {
                self.solution_state = SolutionState::Infeasible;
                let node = match self.tableau.dummy() {
                    Dummy::Row => self.tableau.row_name(cell.row),
                    _ => self.tableau.col_name(cell.col),
                };
                return Err(Error::Infeasible {
                    node: node.to_string(),
                });
            }
        }

        self.solution_state = SolutionState::Optimal;
        Ok(self.solution_state)
    }

    /// Return the solution state of the latest computation.
    pub fn solution_state(&self) -> SolutionState {
        self.solution_state
    }

    /// Return the number of pivots of the latest computation.
    pub fn num_iterations(&self) -> usize {
        self.niter
    }

    /// Return the basic cells of the latest computed basis.
    pub fn basic_cells(&self) -> &[Cell<F>] {
        &self.basis
    }

    /// Return the dual potentials `(u, v)` of the latest basis.
    ///
    /// Only meaningful after `solve` returned [`SolutionState::Optimal`]
    /// on a non-trivial tableau.
    pub fn potentials(&self) -> (&[F], &[F]) {
        (&self.potentials_u, &self.potentials_v)
    }

    /// Return the value of the latest computed flow.
    pub fn value(&self) -> F {
        let mut v = F::zero();
        for cell in &self.basis {
            if let Some(c) = self.tableau.cost(cell.row, cell.col) {
                v += c * cell.quantity;
            }
        }
        v
    }

    /// The flow on cell `(i, j)`.
    pub fn flow(&self, i: usize, j: usize) -> F {
        for cell in &self.basis {
            if cell.row == i && cell.col == j {
                return cell.quantity;
            }
        }
        F::zero()
    }

    /// The cost of a cell, with routeless cells at the artificial cost.
    fn cost_of(&self, i: usize, j: usize) -> F {
        match self.tableau.cost(i, j) {
            Some(c) => c,
            None => self.artificial,
        }
    }

    /// Basis cell indices grouped by row and by column.
    fn adjacency(&self) -> (Vec<Vec<usize>>, Vec<Vec<usize>>) {
        let mut row_cells = vec![Vec::new(); self.tableau.num_rows()];
        let mut col_cells = vec![Vec::new(); self.tableau.num_cols()];
        for (k, cell) in self.basis.iter().enumerate() {
            row_cells[cell.row].push(k);
            col_cells[cell.col].push(k);
        }
        (row_cells, col_cells)
    }

    /// Propagate `u[i] + v[j] = cost[i, j]` over the basis tree,
    /// rooted at row 0 with `u[0] = 0`.
    fn compute_potentials(&mut self) {
        let m = self.tableau.num_rows();
        let n = self.tableau.num_cols();
        let (row_cells, col_cells) = self.adjacency();

        // nodes 0..m are rows, m..m+n are columns
        let mut visited = vec![false; m + n];
        visited[0] = true;
        self.potentials_u[0] = F::zero();
        let mut stack = vec![0];
        while let Some(x) = stack.pop() {
            if x < m {
                for &k in &row_cells[x] {
                    let j = self.basis[k].col;
                    if !visited[m + j] {
                        visited[m + j] = true;
                        let v = self.cost_of(x, j) - self.potentials_u[x];
                        self.potentials_v[j] = v;
                        stack.push(m + j);
                    }
                }
            } else {
                let j = x - m;
                for &k in &col_cells[j] {
                    let i = self.basis[k].row;
                    if !visited[i] {
                        visited[i] = true;
                        let u = self.cost_of(i, j) - self.potentials_v[j];
                        self.potentials_u[i] = u;
                        stack.push(i);
                    }
                }
            }
        }
    }

    /// Find the non-basic cell with the most negative reduced cost.
    ///
    /// Ties are broken towards the lexicographically smallest cell by
    /// the scan order. Returns `None` if the basis is optimal.
    fn find_entering(&self) -> Option<(usize, usize)> {
        let m = self.tableau.num_rows();
        let n = self.tableau.num_cols();
        let mut in_basis = vec![false; m * n];
        for cell in &self.basis {
            in_basis[cell.row * n + cell.col] = true;
        }

        let mut best: Option<(F, usize, usize)> = None;
        for i in 0..m {
            for j in 0..n {
                if in_basis[i * n + j] {
                    continue;
                }
                let r = self.cost_of(i, j) - self.potentials_u[i] - self.potentials_v[j];
                if r < F::zero() {
                    match best {
                        Some((br, _, _)) if !(r < br) => (),
                        _ => best = Some((r, i, j)),
                    }
                }
            }
        }

        best.map(|(_, i, j)| (i, j))
    }

    /// Exchange the entering cell `(erow, ecol)` into the basis.
    ///
    /// The entering cell closes a unique cycle with the basis tree.
    /// Flow is shifted around the cycle by the pivot quantity; the
    /// lexicographically smallest decreasing cell attaining it leaves
    /// the basis, other cells reaching zero stay basic (degeneracy).
    fn pivot(&mut self, erow: usize, ecol: usize) {
        let m = self.tableau.num_rows();
        let n = self.tableau.num_cols();
        let (row_cells, col_cells) = self.adjacency();

        // the unique tree path from the entering row to the entering column
        let mut parent: Vec<Option<(usize, usize)>> = vec![None; m + n];
        let mut visited = vec![false; m + n];
        visited[erow] = true;
        let mut queue = VecDeque::new();
        queue.push_back(erow);
        while let Some(x) = queue.pop_front() {
            if x == m + ecol {
                break;
            }
            if x < m {
                for &k in &row_cells[x] {
                    let y = m + self.basis[k].col;
                    if !visited[y] {
                        visited[y] = true;
                        parent[y] = Some((x, k));
                        queue.push_back(y);
                    }
                }
            } else {
                for &k in &col_cells[x - m] {
                    let y = self.basis[k].row;
                    if !visited[y] {
                        visited[y] = true;
                        parent[y] = Some((x, k));
                        queue.push_back(y);
                    }
                }
            }
        }

        // Cells on the cycle from the entering column back to the
        // entering row. The path alternates column and row nodes, so
        // cells at even positions decrease and odd positions increase.
        let mut path = Vec::new();
        let mut x = m + ecol;
        while let Some((p, k)) = parent[x] {
            path.push(k);
            x = p;
        }

        let mut leave = path[0];
        let mut theta = self.basis[leave].quantity;
        for t in (2..path.len()).step_by(2) {
            let k = path[t];
            let q = self.basis[k].quantity;
            if q < theta {
                theta = q;
                leave = k;
            } else if !(theta < q) {
                let cell = self.basis[k];
                let best = self.basis[leave];
                if (cell.row, cell.col) < (best.row, best.col) {
                    leave = k;
                }
            }
        }

        for (t, &k) in path.iter().enumerate() {
            if t % 2 == 0 {
                self.basis[k].quantity -= theta;
            } else {
                self.basis[k].quantity += theta;
            }
        }
        self.basis[leave] = Cell {
            row: erow,
            col: ecol,
            quantity: theta,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::TransportSimplex;
    use crate::balance::{balance, Balanced};
    use crate::error::Error;
    use crate::model::Problem;
    use crate::simplex::SolutionState;

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
    fn test_optimal_without_pivot() {
        let t = build(
            &[20, 30],
            &[25, 25],
            &[(0, 0, 4), (0, 1, 6), (1, 0, 8), (1, 1, 2)],
        );
        let mut spx = TransportSimplex::new(&t);
        assert_eq!(spx.solve().unwrap(), SolutionState::Optimal);
        assert_eq!(spx.value(), 170);
        assert_eq!(spx.num_iterations(), 0);
        assert_eq!(spx.flow(0, 0), 20);
        assert_eq!(spx.flow(1, 0), 5);
        assert_eq!(spx.flow(1, 1), 25);
    }

    #[test]
    fn test_pivot_improves_greedy_start() {
        // the least-cost start picks (W1, C1) and ends up at cost 50,
        // one pivot reaches the optimum 40
        let t = build(&[10, 10], &[10, 10], &[(0, 0, 1), (0, 1, 2), (1, 0, 2), (1, 1, 4)]);
        let mut spx = TransportSimplex::new(&t);
        assert_eq!(spx.solve().unwrap(), SolutionState::Optimal);
        assert_eq!(spx.value(), 40);
        assert_eq!(spx.num_iterations(), 1);
        assert_eq!(spx.flow(0, 1), 10);
        assert_eq!(spx.flow(1, 0), 10);
        // the degenerate companion cell stays basic with quantity zero
        assert_eq!(spx.basic_cells().len(), 3);
    }

    #[test]
    fn test_dual_feasibility_at_optimum() {
        let t = build(
            &[15, 25, 10],
            &[5, 15, 15, 15],
            &[
                (0, 0, 10),
                (0, 1, 2),
                (0, 2, 20),
                (0, 3, 11),
                (1, 0, 12),
                (1, 1, 7),
                (1, 2, 9),
                (1, 3, 20),
                (2, 0, 4),
                (2, 1, 14),
                (2, 2, 16),
                (2, 3, 18),
            ],
        );
        let mut spx = TransportSimplex::new(&t);
        assert_eq!(spx.solve().unwrap(), SolutionState::Optimal);

        let (u, v) = spx.potentials();
        for i in 0..t.num_rows() {
            for j in 0..t.num_cols() {
                if let Some(c) = t.cost(i, j) {
                    if spx.flow(i, j) > 0 {
                        assert_eq!(u[i] + v[j], c);
                    } else {
                        assert!(u[i] + v[j] <= c);
                    }
                }
            }
        }
    }

    #[test]
    fn test_routeless_cell_resolved_by_pivoting() {
        // greedy burns the dummy column on W1 and bridges W2 and C1
        // with a routeless cell; the optimizer pivots the flow away
        let t = build(&[10, 5], &[10], &[(0, 0, 3)]);
        let mut spx = TransportSimplex::new(&t);
        assert_eq!(spx.solve().unwrap(), SolutionState::Optimal);
        assert_eq!(spx.value(), 30);
        assert_eq!(spx.flow(0, 0), 10);
    }

    #[test]
    fn test_structural_infeasibility() {
        // every node has a route, but W2 can only serve C1 and must
        // ship more than C1 demands
        let t = build(
            &[5, 10],
            &[5, 10],
            &[(0, 0, 1), (0, 1, 1), (1, 0, 1)],
        );
        let mut spx = TransportSimplex::new(&t);
        match spx.solve() {
            Err(Error::Infeasible { .. }) => (),
            other => panic!("expected infeasibility, got {:?}", other),
        }
        assert_eq!(spx.solution_state(), SolutionState::Infeasible);
    }

    #[test]
    fn test_stuck_warehouse_is_reported() {
        // W1 holds 10 but its only route leads to C1 demanding 3; the
        // surplus demand on C2 is legitimately left to the dummy row,
        // so the stuck node is the warehouse, not the client
        let t = build(&[10], &[3, 12], &[(0, 0, 2)]);
        let mut spx = TransportSimplex::new(&t);
        assert_eq!(
            spx.solve().unwrap_err(),
            Error::Infeasible { node: "W1".into() }
        );
        assert_eq!(spx.solution_state(), SolutionState::Infeasible);
    }

    #[test]
    fn test_iteration_limit() {
        let t = build(&[10, 10], &[10, 10], &[(0, 0, 1), (0, 1, 2), (1, 0, 2), (1, 1, 4)]);
        let mut spx = TransportSimplex::new(&t);
        spx.max_iterations = 0;
        assert_eq!(
            spx.solve().unwrap_err(),
            Error::IterationLimit { iterations: 0 }
        );
        assert_eq!(spx.solution_state(), SolutionState::Unknown);
    }

    #[test]
    fn test_nothing_to_ship() {
        let t = build(&[0, 0], &[0], &[(0, 0, 1), (1, 0, 2)]);
        let mut spx = TransportSimplex::new(&t);
        assert_eq!(spx.solve().unwrap(), SolutionState::Optimal);
        assert_eq!(spx.value(), 0);
        assert!(spx.basic_cells().is_empty());
    }
}

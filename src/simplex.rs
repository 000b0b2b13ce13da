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

//! The transportation simplex.

pub mod leastcost;
pub mod primal;

pub use self::leastcost::initial_basis;
pub use self::primal::TransportSimplex;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SolutionState {
    /// Unknown state, the problem has not been solved, yet
    Unknown,
    /// The problem has been solved to optimality
    Optimal,
    /// The problem is infeasible
    Infeasible,
}

/// A basic cell of the transportation tableau.
///
/// The basic cells form a spanning tree over the bipartite node set of
/// rows and columns. A basic cell may hold quantity zero (degeneracy).
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Cell<F> {
    pub row: usize,
    pub col: usize,
    pub quantity: F,
}

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

//! Extracting the shipment plan from an optimal basis.
//!
//! The optimal basis still lives on the balanced tableau: it may touch
//! a dummy node and contains zero-quantity cells kept for degeneracy.
//! [`extract`] filters both out and produces the plain value objects
//! handed back to the caller.

use crate::balance::Balanced;
use crate::simplex::Cell;
use num_traits::NumAssign;

#[cfg(feature = "serialize")]
use serde_derive::{Deserialize, Serialize};

/// A single shipment of the returned plan.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Flow<F> {
    pub warehouse: String,
    pub client: String,
    pub quantity: F,
}

/// A minimum-cost shipment plan.
///
/// Holds the objective value and the sparse flow map; quantities of
/// zero and allocations on dummy nodes are omitted. The flows are
/// ordered by warehouse and client insertion order.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Solution<F> {
    pub objective: F,
    pub flows: Vec<Flow<F>>,
}

/// Turn an optimal basis into a [`Solution`].
///
/// Drops every cell touching a dummy node and every zero allocation,
/// and sums `cost * quantity` over the remaining genuine cells.
pub fn extract<F>(tableau: &Balanced<F>, basis: &[Cell<F>]) -> Solution<F>
where
    F: NumAssign + PartialOrd + Copy,
{
    let mut cells: Vec<&Cell<F>> = basis
        .iter()
        .filter(|cell| cell.quantity > F::zero() && !tableau.is_dummy(cell.row, cell.col))
        .collect();
    cells.sort_by_key(|cell| (cell.row, cell.col));

    let mut objective = F::zero();
    let mut flows = Vec::with_capacity(cells.len());
    for cell in cells {
        if let Some(c) = tableau.cost(cell.row, cell.col) {
            objective += c * cell.quantity;
        }
        flows.push(Flow {
            warehouse: tableau.row_name(cell.row).to_string(),
            client: tableau.col_name(cell.col).to_string(),
            quantity: cell.quantity,
        });
    }

    Solution { objective, flows }
}

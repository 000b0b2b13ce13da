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

//! The problem model.
//!
//! A [`Problem`] is the normalized, immutable description of a
//! transportation instance: warehouses with capacities, clients with
//! demands and a per-pair cost table. Pairs without a cost entry have
//! no route and are never assigned flow.
//!
//! Problems are static objects. They are constructed through a
//! [`ProblemBuilder`], which collects the raw data and validates
//! everything in one step, so a `Problem` that exists is always
//! consistent.

use crate::error::{Error, Result};
use num_traits::Zero;
use std::collections::HashMap;

/// An immutable, validated transportation problem instance.
///
/// The cost type `F` may be an integer or a floating point type.
/// Integral capacities and demands always yield integral flows.
#[derive(Clone, Debug)]
pub struct Problem<F> {
    warehouses: Vec<String>,
    capacities: Vec<F>,
    clients: Vec<String>,
    demands: Vec<F>,
    /// Row-major cost table, `None` meaning "no route".
    costs: Vec<Option<F>>,
}

impl<F> Problem<F> {
    /// Create a new builder for a problem.
    pub fn builder() -> ProblemBuilder<F> {
        ProblemBuilder::new()
    }

    /// Return the number of warehouses.
    pub fn num_warehouses(&self) -> usize {
        self.warehouses.len()
    }

    /// Return the number of clients.
    pub fn num_clients(&self) -> usize {
        self.clients.len()
    }

    /// Return the name of warehouse `i`.
    pub fn warehouse(&self, i: usize) -> &str {
        &self.warehouses[i]
    }

    /// Return the name of client `j`.
    pub fn client(&self, j: usize) -> &str {
        &self.clients[j]
    }
}

impl<F> Problem<F>
where
    F: Copy,
{
    /// Return the capacity of warehouse `i`.
    pub fn capacity(&self, i: usize) -> F {
        self.capacities[i]
    }

    /// Return the demand of client `j`.
    pub fn demand(&self, j: usize) -> F {
        self.demands[j]
    }

    /// Return the shipping cost from warehouse `i` to client `j`.
    ///
    /// `None` means there is no route between the two nodes.
    pub fn cost(&self, i: usize, j: usize) -> Option<F> {
        self.costs[i * self.clients.len() + j]
    }
}

/// A builder collecting the raw data of a transportation problem.
///
/// Nothing is validated while the data is added. [`ProblemBuilder::build`]
/// checks the complete instance and either returns a [`Problem`] or the
/// first offending field as [`Error::Validation`]; a partially valid
/// problem is never constructed.
///
/// # Example
///
/// ```
/// use transport_simplex::Problem;
///
/// let mut b = Problem::builder();
/// b.add_warehouse("W1", 10);
/// b.add_client("C1", 10);
/// b.set_cost("W1", "C1", 7);
/// let problem = b.build().unwrap();
///
/// assert_eq!(problem.num_warehouses(), 1);
/// assert_eq!(problem.cost(0, 0), Some(7));
/// ```
#[derive(Clone, Debug)]
pub struct ProblemBuilder<F> {
    warehouses: Vec<(String, F)>,
    clients: Vec<(String, F)>,
    costs: Vec<(String, String, F)>,
}

impl<F> Default for ProblemBuilder<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F> ProblemBuilder<F> {
    /// Create a new, empty builder.
    pub fn new() -> Self {
        ProblemBuilder {
            warehouses: Vec::new(),
            clients: Vec::new(),
            costs: Vec::new(),
        }
    }

    /// Add a warehouse with the given capacity.
    pub fn add_warehouse<S>(&mut self, name: S, capacity: F) -> &mut Self
    where
        S: Into<String>,
    {
        self.warehouses.push((name.into(), capacity));
        self
    }

    /// Add a client with the given demand.
    pub fn add_client<S>(&mut self, name: S, demand: F) -> &mut Self
    where
        S: Into<String>,
    {
        self.clients.push((name.into(), demand));
        self
    }

    /// Set the shipping cost between a warehouse and a client.
    ///
    /// Pairs without a cost entry have no route. Setting the same pair
    /// twice overwrites the earlier value.
    pub fn set_cost<S, T>(&mut self, warehouse: S, client: T, cost: F) -> &mut Self
    where
        S: Into<String>,
        T: Into<String>,
    {
        self.costs.push((warehouse.into(), client.into(), cost));
        self
    }
}

impl<F> ProblemBuilder<F>
where
    F: Copy + PartialOrd + Zero,
{
    /// Validate the collected data and turn it into a [`Problem`].
    ///
    /// Checks, in order of insertion:
    ///
    /// 1. warehouse names are unique and capacities are non-negative,
    /// 2. client names are unique and demands are non-negative,
    /// 3. every cost entry references existing nodes and is non-negative.
    pub fn build(self) -> Result<Problem<F>> {
        let mut wh_index = HashMap::new();
        for (i, (name, capacity)) in self.warehouses.iter().enumerate() {
            if wh_index.insert(name.clone(), i).is_some() {
                return Err(Error::Validation {
                    field: name.clone(),
                    msg: "duplicate warehouse name".into(),
                });
            }
            if *capacity < F::zero() {
                return Err(Error::Validation {
                    field: name.clone(),
                    msg: "negative capacity".into(),
                });
            }
        }

        let mut cl_index = HashMap::new();
        for (j, (name, demand)) in self.clients.iter().enumerate() {
            if cl_index.insert(name.clone(), j).is_some() {
                return Err(Error::Validation {
                    field: name.clone(),
                    msg: "duplicate client name".into(),
                });
            }
            if *demand < F::zero() {
                return Err(Error::Validation {
                    field: name.clone(),
                    msg: "negative demand".into(),
                });
            }
        }

        let n = self.clients.len();
        let mut costs = vec![None; self.warehouses.len() * n];
        for (warehouse, client, cost) in &self.costs {
            let i = *wh_index.get(warehouse).ok_or_else(|| Error::Validation {
                field: warehouse.clone(),
                msg: "cost entry references unknown warehouse".into(),
            })?;
            let j = *cl_index.get(client).ok_or_else(|| Error::Validation {
                field: client.clone(),
                msg: "cost entry references unknown client".into(),
            })?;
            if *cost < F::zero() {
                return Err(Error::Validation {
                    field: format!("{} -> {}", warehouse, client),
                    msg: "negative cost".into(),
                });
            }
            costs[i * n + j] = Some(*cost);
        }

        Ok(Problem {
            warehouses: self.warehouses.iter().map(|(name, _)| name.clone()).collect(),
            capacities: self.warehouses.iter().map(|&(_, capacity)| capacity).collect(),
            clients: self.clients.iter().map(|(name, _)| name.clone()).collect(),
            demands: self.clients.iter().map(|&(_, demand)| demand).collect(),
            costs,
        })
    }
}

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

//! Solve a transportation problem given as a JSON instance.
//!
//! The instance format is the request shape of the original web
//! front-end: a list of warehouse and client names, a `supply` and a
//! `demand` object and a `costMatrix` object keyed `"{w}_{c}"`. Pairs
//! missing from the cost matrix are treated as having no route.

use std::error::Error;
use std::fs;

use rustop::opts;
use serde_json::Value;
use transport_simplex::{solve, Problem};

fn names(value: &Value, what: &str) -> Result<Vec<String>, Box<dyn Error>> {
    value
        .as_array()
        .map(|entries| {
            entries
                .iter()
                .filter_map(|v| v.as_str().map(|s| s.to_string()))
                .collect()
        })
        .ok_or_else(|| format!("'{}' must be an array of names", what).into())
}

fn amount(value: &Value, what: &str, name: &str) -> Result<f64, Box<dyn Error>> {
    value[name]
        .as_f64()
        .ok_or_else(|| format!("'{}' has no numeric entry for '{}'", what, name).into())
}

fn main() -> Result<(), Box<dyn Error>> {
    let (args, _) = opts! {
        synopsis "Solve a transportation problem from a JSON instance.";
        param file:String, desc:"Instance file name";
    }
    .parse_or_exit();

    let data: Value = serde_json::from_str(&fs::read_to_string(&args.file)?)?;

    let warehouses = names(&data["warehouses"], "warehouses")?;
    let clients = names(&data["clients"], "clients")?;

    let mut b = Problem::builder();
    for w in &warehouses {
        b.add_warehouse(w.as_str(), amount(&data["supply"], "supply", w)?);
    }
    for c in &clients {
        b.add_client(c.as_str(), amount(&data["demand"], "demand", c)?);
    }
    for w in &warehouses {
        for c in &clients {
            if let Some(cost) = data["costMatrix"][format!("{}_{}", w, c).as_str()].as_f64() {
                b.set_cost(w.as_str(), c.as_str(), cost);
            }
        }
    }

    let problem = b.build()?;
    let solution = solve(&problem)?;

    println!("Instance            : {}", args.file);
    println!("Number of warehouses: {}", problem.num_warehouses());
    println!("Number of clients   : {}", problem.num_clients());
    println!("Objective value     : {}", solution.objective);
    println!();
    for flow in &solution.flows {
        println!("{} -> {}: {}", flow.warehouse, flow.client, flow.quantity);
    }

    Ok(())
}

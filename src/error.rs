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

//! Error types of the transportation engine.

use std::error;
use std::fmt;

/// An error raised while building or solving a transportation problem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Malformed or inconsistent input data.
    ///
    /// Raised before any optimization starts. The caller may fix the
    /// named field and rebuild the problem.
    Validation { field: String, msg: String },
    /// The problem admits no assignment over the costed routes.
    ///
    /// `node` is a warehouse or client that cannot be served.
    Infeasible { node: String },
    /// The pivot loop exceeded its iteration cap.
    IterationLimit { iterations: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> std::result::Result<(), fmt::Error> {
        use self::Error::*;
        match self {
            Validation { field, msg } => write!(fmt, "invalid field '{}': {}", field, msg),
            Infeasible { node } => write!(fmt, "infeasible problem: no costed route for '{}'", node),
            IterationLimit { iterations } => {
                write!(fmt, "iteration limit exceeded after {} pivots", iterations)
            }
        }
    }
}

impl error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;

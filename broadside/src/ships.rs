// Copyright 2020 Zachary Stewart
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//! Ships and the identifiers a board hands out for them.
use std::fmt;

use thiserror::Error;

/// Identifier of a ship within a single player's board. Boards hand these out in
/// placement order, so they cannot be confused with plain integers or forged by callers.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct ShipId(usize);

impl ShipId {
    /// Wrap a raw counter value.
    pub(crate) fn new(raw: usize) -> Self {
        ShipId(raw)
    }

    /// The placement index of this ship on its board, starting at 0.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for ShipId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Error returned when constructing a ship without a length.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
#[error("ship length must be provided")]
pub struct MissingLength;

/// A ship with a fixed length and a running count of the hits it has taken.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Ship {
    length: usize,
    hit_count: usize,
}

impl Ship {
    /// Construct an undamaged ship of the given length. A length of 0 counts as no length
    /// at all.
    pub fn new(length: usize) -> Result<Self, MissingLength> {
        if length == 0 {
            Err(MissingLength)
        } else {
            Ok(Self {
                length,
                hit_count: 0,
            })
        }
    }

    /// Number of cells this ship covers.
    pub fn length(&self) -> usize {
        self.length
    }

    /// Number of hits taken so far.
    pub fn hit_count(&self) -> usize {
        self.hit_count
    }

    /// Register one hit. The count is not clamped at the ship's length; the board is what
    /// prevents a cell from being counted twice.
    pub fn hit(&mut self) {
        self.hit_count += 1;
    }

    /// Whether the ship has taken at least as many hits as it has cells.
    pub fn is_sunk(&self) -> bool {
        self.hit_count >= self.length
    }
}

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
//! Fixed parameters of the standard game: board size, permitted ship lengths and the
//! fleet each player sets up.

/// Width and height of every board.
pub const BOARD_SIZE: usize = 10;

/// Shortest ship a board accepts.
pub const MIN_SHIP_LENGTH: usize = 1;

/// Longest ship a board accepts.
pub const MAX_SHIP_LENGTH: usize = 5;

/// A named class of ship with a fixed length.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct ShipClass {
    name: &'static str,
    length: usize,
}

impl ShipClass {
    /// Create a new ship class.
    pub const fn new(name: &'static str, length: usize) -> Self {
        Self { name, length }
    }

    /// Display name of the class.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Number of cells a ship of this class covers.
    pub fn length(&self) -> usize {
        self.length
    }
}

/// The standard fleet, in the order ships are placed.
pub static FLEET: [ShipClass; 5] = [
    ShipClass::new("Carrier", 5),
    ShipClass::new("Battleship", 4),
    ShipClass::new("Cruiser", 3),
    ShipClass::new("Submarine", 3),
    ShipClass::new("Destroyer", 2),
];

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
//! The cells that make up a player's side of the ocean.

use std::ops::{Index, IndexMut};

use crate::{board::Coordinate, config::BOARD_SIZE, ships::ShipId};

/// A single cell in the player's grid.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct Cell {
    /// The ID of the ship that occupies this cell, if any.
    pub(super) ship: Option<ShipId>,

    /// Whether this cell has been attacked. Never reset once set.
    pub(super) hit: bool,
}

impl Cell {
    /// The ship occupying this cell, if any.
    pub fn ship(&self) -> Option<ShipId> {
        self.ship
    }

    /// Whether this cell has been attacked previously.
    pub fn hit(&self) -> bool {
        self.hit
    }

    /// Whether no ship occupies this cell.
    pub fn is_empty(&self) -> bool {
        self.ship.is_none()
    }
}

/// Fixed `BOARD_SIZE` x `BOARD_SIZE` grid of [`Cell`]s, stored row by row.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Grid {
    cells: Box<[Cell]>,
}

impl Grid {
    pub(super) fn new() -> Self {
        Self {
            cells: vec![Cell::default(); BOARD_SIZE * BOARD_SIZE].into_boxed_slice(),
        }
    }

    /// Linear index of an in-bounds coordinate.
    fn linearize(coord: Coordinate) -> Option<usize> {
        if coord.in_bounds() {
            Some(coord.row * BOARD_SIZE + coord.col)
        } else {
            None
        }
    }

    /// Get a reference to the cell at the given [`Coordinate`], or `None` if it is off the
    /// board.
    pub fn get(&self, coord: Coordinate) -> Option<&Cell> {
        Self::linearize(coord).and_then(|i| self.cells.get(i))
    }

    /// Get a mutable reference to the cell at the given [`Coordinate`].
    pub(super) fn get_mut(&mut self, coord: Coordinate) -> Option<&mut Cell> {
        Self::linearize(coord).and_then(move |i| self.cells.get_mut(i))
    }

    /// Iterate the rows of the grid from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(BOARD_SIZE)
    }

    /// Iterate every cell together with its coordinate, in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Coordinate, &Cell)> {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, cell)| (Coordinate::new(i / BOARD_SIZE, i % BOARD_SIZE), cell))
    }
}

impl Index<Coordinate> for Grid {
    type Output = Cell;

    fn index(&self, coord: Coordinate) -> &Self::Output {
        self.get(coord).expect("coordinate out of bounds")
    }
}

impl IndexMut<Coordinate> for Grid {
    fn index_mut(&mut self, coord: Coordinate) -> &mut Self::Output {
        self.get_mut(coord).expect("coordinate out of bounds")
    }
}

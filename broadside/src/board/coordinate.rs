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
//! Grid coordinates and the directions used to move between them.
use std::fmt;

use rand::{
    distributions::{Distribution, Standard},
    Rng,
};

use crate::config::BOARD_SIZE;

/// The coordinates of a [`Cell`][crate::board::Cell] on the board.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Coordinate {
    /// Vertical position of the cell, 0 at the top.
    pub row: usize,
    /// Horizontal position of the cell, 0 at the left.
    pub col: usize,
}

impl Coordinate {
    /// Construct a [`Coordinate`] from the given `row` and `col`.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Whether this coordinate lies on a `BOARD_SIZE` x `BOARD_SIZE` board.
    pub fn in_bounds(&self) -> bool {
        self.row < BOARD_SIZE && self.col < BOARD_SIZE
    }

    /// The adjacent coordinate in the given direction, or `None` if that would leave the
    /// board.
    pub fn step(self, dir: Orientation) -> Option<Self> {
        let next = match dir {
            Orientation::Up => Coordinate::new(self.row.checked_sub(1)?, self.col),
            Orientation::Down => Coordinate::new(self.row.checked_add(1)?, self.col),
            Orientation::Left => Coordinate::new(self.row, self.col.checked_sub(1)?),
            Orientation::Right => Coordinate::new(self.row, self.col.checked_add(1)?),
        };
        if next.in_bounds() {
            Some(next)
        } else {
            None
        }
    }

    /// The coordinate `distance` cells further along `axis` towards its high end. Not
    /// bounds checked; returns `None` only on overflow.
    pub fn offset(self, axis: Axis, distance: usize) -> Option<Self> {
        match axis {
            Axis::Horizontal => self
                .col
                .checked_add(distance)
                .map(|col| Coordinate::new(self.row, col)),
            Axis::Vertical => self
                .row
                .checked_add(distance)
                .map(|row| Coordinate::new(row, self.col)),
        }
    }

    /// Iterate the in-bounds neighbors of this coordinate, in the order up, down, left,
    /// right.
    pub fn neighbors(self) -> impl Iterator<Item = Coordinate> {
        let dirs: &'static [Orientation; 4] = &Orientation::ALL;
        dirs.iter().filter_map(move |&dir| self.step(dir))
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// The line a ship lies along.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Axis {
    /// Along a row; the column varies.
    Horizontal,
    /// Along a column; the row varies.
    Vertical,
}

impl Axis {
    /// The axis joining two distinct coordinates, if they share a row or a column.
    pub fn between(a: Coordinate, b: Coordinate) -> Option<Self> {
        match (a.row == b.row, a.col == b.col) {
            (true, false) => Some(Axis::Horizontal),
            (false, true) => Some(Axis::Vertical),
            _ => None,
        }
    }

    /// Position of `coord` along this axis: its column for a horizontal axis, its row for a
    /// vertical one.
    pub fn position(self, coord: Coordinate) -> usize {
        match self {
            Axis::Horizontal => coord.col,
            Axis::Vertical => coord.row,
        }
    }

    /// The coordinate that holds this axis fixed: its row for a horizontal axis, its column
    /// for a vertical one.
    pub fn lane(self, coord: Coordinate) -> usize {
        match self {
            Axis::Horizontal => coord.row,
            Axis::Vertical => coord.col,
        }
    }

    /// Move `coord` along this axis to the given position, keeping its lane.
    pub fn at(self, coord: Coordinate, position: usize) -> Coordinate {
        match self {
            Axis::Horizontal => Coordinate::new(coord.row, position),
            Axis::Vertical => Coordinate::new(position, coord.col),
        }
    }

    /// Direction towards lower positions on this axis.
    pub fn low(self) -> Orientation {
        match self {
            Axis::Horizontal => Orientation::Left,
            Axis::Vertical => Orientation::Up,
        }
    }

    /// Direction towards higher positions on this axis.
    pub fn high(self) -> Orientation {
        match self {
            Axis::Horizontal => Orientation::Right,
            Axis::Vertical => Orientation::Down,
        }
    }
}

impl Distribution<Axis> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Axis {
        if rng.gen() {
            Axis::Vertical
        } else {
            Axis::Horizontal
        }
    }
}

/// A direction of travel on the board.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Orientation {
    Up,
    Down,
    Left,
    Right,
}

impl Orientation {
    /// Every direction, in neighbor iteration order.
    pub const ALL: [Orientation; 4] = [
        Orientation::Up,
        Orientation::Down,
        Orientation::Left,
        Orientation::Right,
    ];
}

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
//! Errors returned by the [`Board`][crate::board::Board].

use std::fmt::{self, Debug};

use thiserror::Error;

use crate::board::{Coordinate, Placement};

/// Reason why a ship could not be placed.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum CannotPlaceReason {
    /// The ship size was outside the permitted range.
    #[error("ship size must be between 1 and 5")]
    InvalidSize,
    /// The starting coordinate was off the board.
    #[error("coordinates must be on the board")]
    InvalidCoordinate,
    /// The ship would run off the board or overlap another ship.
    #[error("there is not enough room for the ship")]
    InsufficientSpace,
}

/// Error caused when attempting to place a ship in an invalid position.
#[derive(Error, Clone, Eq, PartialEq)]
#[error("could not place ship at {}: {reason}", .placement.start)]
pub struct PlaceError {
    #[source]
    reason: CannotPlaceReason,
    placement: Placement,
}

impl Debug for PlaceError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl PlaceError {
    /// Construct a placement error from a reason and the rejected placement.
    pub(crate) fn new(reason: CannotPlaceReason, placement: Placement) -> Self {
        Self { reason, placement }
    }

    /// Get the reason placement was aborted.
    pub fn reason(&self) -> CannotPlaceReason {
        self.reason
    }

    /// Get the [`Placement`] that was attempted.
    pub fn placement(&self) -> &Placement {
        &self.placement
    }
}

/// Reason why a particular cell could not be attacked.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum CannotAttackReason {
    /// The cell selected was off the board.
    #[error("coordinates must be on the board")]
    InvalidCoordinate,

    /// The cell has already been attacked.
    #[error("position already attacked")]
    AlreadyAttacked,
}

/// Error returned when trying to attack a cell.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
#[error("could not attack cell {coord}: {reason}")]
pub struct AttackError {
    /// Reason why the cell could not be attacked.
    #[source]
    reason: CannotAttackReason,

    /// The coordinates of the cell.
    coord: Coordinate,
}

impl AttackError {
    /// Construct an attack error with the given reason for the specified cell.
    pub(super) fn new(reason: CannotAttackReason, coord: Coordinate) -> Self {
        Self { reason, coord }
    }

    /// Get the reason the attack failed.
    pub fn reason(&self) -> CannotAttackReason {
        self.reason
    }

    /// Get the coordinate of the attacked cell.
    pub fn coord(&self) -> Coordinate {
        self.coord
    }
}

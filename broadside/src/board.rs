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
//! Types that make up the game board.

use indexmap::IndexMap;
use log::debug;

use crate::{
    config::{MAX_SHIP_LENGTH, MIN_SHIP_LENGTH},
    ships::{Ship, ShipId},
};

pub use self::{
    coordinate::{Axis, Coordinate, Orientation},
    errors::{AttackError, CannotAttackReason, CannotPlaceReason, PlaceError},
    grid::{Cell, Grid},
};

mod coordinate;
mod errors;
mod grid;

/// A requested ship position: `size` cells starting at `start` and running towards the
/// high end of `axis` (rightwards or downwards).
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Placement {
    pub size: usize,
    pub start: Coordinate,
    pub axis: Axis,
}

impl Placement {
    /// Construct a placement.
    pub fn new(size: usize, start: Coordinate, axis: Axis) -> Self {
        Self { size, start, axis }
    }

    /// Iterate the coordinates this placement would cover. Coordinates past the edge of the
    /// board are yielded as is; iteration stops early only on overflow.
    pub fn coords(&self) -> impl Iterator<Item = Coordinate> {
        let Placement { size, start, axis } = *self;
        (0..size).map_while(move |i| start.offset(axis, i))
    }
}

/// Result of an attack on a single player's board.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ShotOutcome {
    /// The attack did not hit anything.
    Miss,
    /// The attack hit the ship with the given ID, but did not sink it.
    Hit(ShipId),
    /// The attack hit the ship with the given ID and sank it.
    Sunk(ShipId),
}

impl ShotOutcome {
    /// Whether a ship was hit.
    pub fn is_hit(&self) -> bool {
        !matches!(self, ShotOutcome::Miss)
    }

    /// Get the id of the ship that was hit.
    pub fn ship(&self) -> Option<ShipId> {
        match *self {
            ShotOutcome::Miss => None,
            ShotOutcome::Hit(id) | ShotOutcome::Sunk(id) => Some(id),
        }
    }
}

/// Represents a single player's board: their ships and their side of the ocean.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Board {
    /// Grid of cells occupied by ships.
    grid: Grid,

    /// All placed ships, in placement order.
    ships: IndexMap<ShipId, Ship>,

    /// Raw value of the next [`ShipId`] to hand out.
    next_id: usize,
}

impl Board {
    /// Construct an empty board with no ships and no attacks.
    pub fn new() -> Self {
        Self {
            grid: Grid::new(),
            ships: IndexMap::new(),
            next_id: 0,
        }
    }

    /// Read-only view of the grid, for rendering.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// All ships placed on this board, keyed by ID in placement order.
    pub fn ships(&self) -> &IndexMap<ShipId, Ship> {
        &self.ships
    }

    /// Get the ship with the specified ID if it exists.
    pub fn get_ship(&self, id: ShipId) -> Option<&Ship> {
        self.ships.get(&id)
    }

    /// Get a reference to the cell at the given coordinate. Returns None if the
    /// coordinate is out of bounds.
    pub fn get_coord(&self, coord: Coordinate) -> Option<&Cell> {
        self.grid.get(coord)
    }

    /// Check whether `size` consecutive cells from `start` along `axis` are all on the
    /// board and unoccupied. Never modifies the board.
    pub fn enough_place(&self, size: usize, start: Coordinate, axis: Axis) -> bool {
        (0..size).all(|i| {
            start
                .offset(axis, i)
                .and_then(|coord| self.grid.get(coord))
                .map_or(false, Cell::is_empty)
        })
    }

    /// Place a new ship of `size` cells at `start` running along `axis`, returning its ID.
    /// On error the board is left untouched.
    pub fn place_ship(
        &mut self,
        size: usize,
        start: Coordinate,
        axis: Axis,
    ) -> Result<ShipId, PlaceError> {
        let placement = Placement::new(size, start, axis);
        let reason = if size < MIN_SHIP_LENGTH || size > MAX_SHIP_LENGTH {
            Some(CannotPlaceReason::InvalidSize)
        } else if !start.in_bounds() {
            Some(CannotPlaceReason::InvalidCoordinate)
        } else if !self.enough_place(size, start, axis) {
            Some(CannotPlaceReason::InsufficientSpace)
        } else {
            None
        };
        if let Some(reason) = reason {
            debug!("rejected placement {:?}: {}", placement, reason);
            return Err(PlaceError::new(reason, placement));
        }

        // Sizes below MIN_SHIP_LENGTH were rejected above.
        let ship = Ship::new(size).expect("validated ship size was zero");
        let id = ShipId::new(self.next_id);
        self.next_id += 1;
        self.ships.insert(id, ship);
        // Already ensured that every position is valid and not occupied.
        for coord in placement.coords() {
            self.grid[coord].ship = Some(id);
        }
        Ok(id)
    }

    /// Attack the cell at `coord`, marking it hit and damaging any ship there.
    pub fn receive_attack(&mut self, coord: Coordinate) -> Result<ShotOutcome, AttackError> {
        let hit_ship = match self.grid.get_mut(coord) {
            None => {
                return Err(AttackError::new(
                    CannotAttackReason::InvalidCoordinate,
                    coord,
                ))
            }
            Some(cell) if cell.hit => {
                return Err(AttackError::new(CannotAttackReason::AlreadyAttacked, coord))
            }
            Some(cell) => {
                cell.hit = true;
                cell.ship
            }
        };
        let id = match hit_ship {
            None => return Ok(ShotOutcome::Miss),
            Some(id) => id,
        };
        match self.ships.get_mut(&id) {
            Some(ship) => {
                ship.hit();
                Ok(if ship.is_sunk() {
                    ShotOutcome::Sunk(id)
                } else {
                    ShotOutcome::Hit(id)
                })
            }
            // Cells are only ever assigned IDs of registered ships.
            None => unreachable!("cell {} references unknown ship {}", coord, id),
        }
    }

    /// Returns true if every ship on this board has been sunk. A board without ships counts
    /// as all sunk.
    pub fn all_sunk(&self) -> bool {
        self.ships.values().all(Ship::is_sunk)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(row: usize, col: usize) -> Coordinate {
        Coordinate::new(row, col)
    }

    #[test]
    fn place_marks_contiguous_cells() {
        let mut board = Board::new();
        let id = board.place_ship(3, c(2, 4), Axis::Vertical).unwrap();
        for row in 2..5 {
            assert_eq!(board.grid()[c(row, 4)].ship(), Some(id));
        }
        assert!(board.grid()[c(5, 4)].is_empty());
        assert!(board.grid()[c(1, 4)].is_empty());
        assert_eq!(board.ships().len(), 1);
        assert_eq!(board.get_ship(id).map(Ship::length), Some(3));
    }

    #[test]
    fn ids_follow_placement_order() {
        let mut board = Board::new();
        let a = board.place_ship(2, c(0, 0), Axis::Horizontal).unwrap();
        let b = board.place_ship(2, c(5, 5), Axis::Horizontal).unwrap();
        assert_eq!(a.index(), 0);
        assert_eq!(b.index(), 1);
        let order: Vec<_> = board.ships().keys().copied().collect();
        assert_eq!(order, vec![a, b]);
    }

    #[test]
    fn size_checked_before_coordinate() {
        let mut board = Board::new();
        for &size in &[0, 6] {
            let err = board.place_ship(size, c(20, 20), Axis::Horizontal).unwrap_err();
            assert_eq!(err.reason(), CannotPlaceReason::InvalidSize);
        }
        let err = board.place_ship(2, c(10, 0), Axis::Horizontal).unwrap_err();
        assert_eq!(err.reason(), CannotPlaceReason::InvalidCoordinate);
        assert_eq!(board, Board::new());
    }

    #[test]
    fn off_edge_placement_is_insufficient_space() {
        let mut board = Board::new();
        let err = board.place_ship(2, c(9, 9), Axis::Horizontal).unwrap_err();
        assert_eq!(err.reason(), CannotPlaceReason::InsufficientSpace);
        assert_eq!(err.placement().start, c(9, 9));
        assert!(!board.enough_place(2, c(9, 9), Axis::Vertical));
        assert!(board.enough_place(1, c(9, 9), Axis::Vertical));
    }

    #[test]
    fn overlap_is_rejected_without_mutation() {
        let mut board = Board::new();
        board.place_ship(5, c(4, 0), Axis::Horizontal).unwrap();
        let before = board.clone();
        let err = board.place_ship(3, c(2, 2), Axis::Vertical).unwrap_err();
        assert_eq!(err.reason(), CannotPlaceReason::InsufficientSpace);
        assert_eq!(board, before);
    }

    #[test]
    fn sinking_only_ship_sinks_all() {
        let mut board = Board::new();
        let id = board.place_ship(5, c(0, 0), Axis::Horizontal).unwrap();
        for col in 0..4 {
            assert_eq!(board.receive_attack(c(0, col)), Ok(ShotOutcome::Hit(id)));
            assert!(!board.all_sunk());
        }
        assert_eq!(board.receive_attack(c(0, 4)), Ok(ShotOutcome::Sunk(id)));
        assert!(board.all_sunk());
    }

    #[test]
    fn repeated_attack_is_rejected() {
        let mut board = Board::new();
        let id = board.place_ship(2, c(3, 3), Axis::Horizontal).unwrap();
        assert_eq!(board.receive_attack(c(3, 3)), Ok(ShotOutcome::Hit(id)));
        let err = board.receive_attack(c(3, 3)).unwrap_err();
        assert_eq!(err.reason(), CannotAttackReason::AlreadyAttacked);
        assert_eq!(err.coord(), c(3, 3));
        assert_eq!(board.get_ship(id).map(Ship::hit_count), Some(1));

        assert_eq!(board.receive_attack(c(0, 0)), Ok(ShotOutcome::Miss));
        assert!(board.grid()[c(0, 0)].hit());
        let err = board.receive_attack(c(0, 0)).unwrap_err();
        assert_eq!(err.reason(), CannotAttackReason::AlreadyAttacked);
    }

    #[test]
    fn outcome_reports_ship_hit() {
        let mut board = Board::new();
        let id = board.place_ship(1, c(7, 7), Axis::Vertical).unwrap();
        let miss = board.receive_attack(c(0, 0)).unwrap();
        assert_eq!(miss.ship(), None);
        assert!(!miss.is_hit());
        let sunk = board.receive_attack(c(7, 7)).unwrap();
        assert_eq!(sunk, ShotOutcome::Sunk(id));
        assert_eq!(sunk.ship(), Some(id));
        assert_eq!(ShotOutcome::Hit(id).ship(), Some(id));
    }

    #[test]
    fn zero_size_never_reaches_ship_construction() {
        let mut board = Board::new();
        let err = board.place_ship(0, c(0, 0), Axis::Horizontal).unwrap_err();
        assert_eq!(err.reason(), CannotPlaceReason::InvalidSize);
        assert!(board.ships().is_empty());
    }

    #[test]
    fn off_board_attack_is_rejected() {
        let mut board = Board::new();
        let err = board.receive_attack(c(0, 10)).unwrap_err();
        assert_eq!(err.reason(), CannotAttackReason::InvalidCoordinate);
        assert_eq!(board, Board::new());
    }

    #[test]
    fn empty_board_is_all_sunk() {
        assert!(Board::new().all_sunk());
    }
}

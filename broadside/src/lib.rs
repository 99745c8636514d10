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
//! The board model and computer opponent for the classic game of Battleship, played on
//! a 10x10 grid.
//!
//! [`Board`] handles ship placement and resolves attacks. [`Player`] owns one board and
//! can either forward an externally chosen attack to an opponent or pick its own target
//! with a hunt/target/destroy search ([`player::Targeting`]). [`game::Game`] sequences
//! turns between two players and [`setup`] places fleets at random.
//!
//! ```
//! use broadside::{Axis, Coordinate, Player, ShotOutcome};
//!
//! let mut human = Player::seeded(1);
//! let mut computer = Player::seeded(2);
//! human
//!     .board_mut()
//!     .place_ship(2, Coordinate::new(4, 4), Axis::Vertical)
//!     .unwrap();
//! let ship = computer
//!     .board_mut()
//!     .place_ship(2, Coordinate::new(0, 0), Axis::Horizontal)
//!     .unwrap();
//!
//! assert_eq!(
//!     human.attack(&mut computer, Coordinate::new(0, 0)),
//!     Ok(ShotOutcome::Hit(ship))
//! );
//! let shot = computer.auto_attack(&mut human);
//! assert!(human.board().grid()[shot.coord].hit());
//! ```

pub mod board;
pub mod config;
pub mod game;
pub mod player;
pub mod setup;
pub mod ships;

pub use crate::{
    board::{Axis, Board, Cell, Coordinate, Orientation, ShotOutcome},
    player::{Player, Selector},
    ships::{Ship, ShipId},
};

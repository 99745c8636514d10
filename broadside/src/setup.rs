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
//! Random ship placement for computer-controlled boards.

use log::debug;
use rand::Rng;

use crate::{
    board::{Axis, Board, CannotPlaceReason, Coordinate, PlaceError, Placement},
    config::{BOARD_SIZE, FLEET, MAX_SHIP_LENGTH, MIN_SHIP_LENGTH},
    ships::ShipId,
};

/// Random positions tried for a single ship before giving up on it.
const MAX_ATTEMPTS: usize = 1000;

/// Place one ship of each of the given sizes at uniformly random positions. Ships placed
/// before a failure stay on the board.
pub fn place_randomly<R: Rng + ?Sized>(
    board: &mut Board,
    sizes: &[usize],
    rng: &mut R,
) -> Result<Vec<ShipId>, PlaceError> {
    sizes
        .iter()
        .map(|&size| place_one(board, size, rng))
        .collect()
}

/// Place the standard [`FLEET`] at random.
pub fn place_fleet<R: Rng + ?Sized>(
    board: &mut Board,
    rng: &mut R,
) -> Result<Vec<ShipId>, PlaceError> {
    let sizes: Vec<usize> = FLEET.iter().map(|class| class.length()).collect();
    place_randomly(board, &sizes, rng)
}

fn place_one<R: Rng + ?Sized>(
    board: &mut Board,
    size: usize,
    rng: &mut R,
) -> Result<ShipId, PlaceError> {
    let mut last = Placement::new(size, Coordinate::new(0, 0), Axis::Horizontal);
    if size < MIN_SHIP_LENGTH || size > MAX_SHIP_LENGTH {
        return Err(PlaceError::new(CannotPlaceReason::InvalidSize, last));
    }
    for _ in 0..MAX_ATTEMPTS {
        let start = Coordinate::new(rng.gen_range(0, BOARD_SIZE), rng.gen_range(0, BOARD_SIZE));
        let axis: Axis = rng.gen();
        if board.enough_place(size, start, axis) {
            return board.place_ship(size, start, axis);
        }
        last = Placement::new(size, start, axis);
    }
    debug!("gave up placing a ship of size {} after {} attempts", size, MAX_ATTEMPTS);
    Err(PlaceError::new(CannotPlaceReason::InsufficientSpace, last))
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    #[test]
    fn fleet_is_placed_without_overlap() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut board = Board::new();
        let ids = place_fleet(&mut board, &mut rng).unwrap();
        assert_eq!(ids.len(), FLEET.len());
        let occupied = board.grid().iter().filter(|(_, cell)| !cell.is_empty()).count();
        assert_eq!(occupied, 17);
        for (id, class) in ids.iter().zip(FLEET.iter()) {
            assert_eq!(board.get_ship(*id).map(|s| s.length()), Some(class.length()));
        }
    }

    #[test]
    fn invalid_size_is_reported() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut board = Board::new();
        let err = place_randomly(&mut board, &[2, 11, 3], &mut rng).unwrap_err();
        assert_eq!(err.reason(), CannotPlaceReason::InvalidSize);
        assert_eq!(board.ships().len(), 1);

        let err = place_randomly(&mut board, &[0], &mut rng).unwrap_err();
        assert_eq!(err.reason(), CannotPlaceReason::InvalidSize);
    }

    #[test]
    fn full_board_runs_out_of_space() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut board = Board::new();
        for row in 0..BOARD_SIZE {
            for col in (0..BOARD_SIZE).step_by(5) {
                board
                    .place_ship(5, Coordinate::new(row, col), Axis::Horizontal)
                    .unwrap();
            }
        }
        let err = place_randomly(&mut board, &[1], &mut rng).unwrap_err();
        assert_eq!(err.reason(), CannotPlaceReason::InsufficientSpace);
    }
}

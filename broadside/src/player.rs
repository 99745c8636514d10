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
//! A player: one board plus the autonomous targeting used against an opponent.

use rand::{rngs::StdRng, SeedableRng};

use crate::board::{AttackError, Board, Coordinate, ShotOutcome};

pub use self::{
    selector::{RngSelector, Selector},
    targeting::{Behavior, Shot, Targeting},
};

mod selector;
mod targeting;

/// A player owning a [`Board`], with a [`Selector`] supplying the randomness for
/// [`auto_attack`][Player::auto_attack].
#[derive(Debug, Clone)]
pub struct Player<S> {
    board: Board,
    targeting: Targeting,
    selector: S,
}

impl Player<RngSelector<StdRng>> {
    /// A player whose targeting is seeded from system entropy.
    pub fn new() -> Self {
        Self::with_selector(RngSelector::new(StdRng::from_entropy()))
    }

    /// A player whose targeting is reproducible from `seed`.
    pub fn seeded(seed: u64) -> Self {
        Self::with_selector(RngSelector::new(StdRng::seed_from_u64(seed)))
    }
}

impl Default for Player<RngSelector<StdRng>> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> Player<S> {
    /// A player with an empty board that targets using `selector`.
    pub fn with_selector(selector: S) -> Self {
        Self {
            board: Board::new(),
            targeting: Targeting::new(),
            selector,
        }
    }

    /// This player's own board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable access to this player's board, for placing ships.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// State of this player's targeting against its opponent.
    pub fn targeting(&self) -> &Targeting {
        &self.targeting
    }

    /// Attack `coord` on the opponent's board. Used for externally chosen moves.
    pub fn attack<T>(
        &self,
        opponent: &mut Player<T>,
        coord: Coordinate,
    ) -> Result<ShotOutcome, AttackError> {
        opponent.board.receive_attack(coord)
    }
}

impl<S: Selector> Player<S> {
    /// Take one autonomous shot at the opponent's board.
    ///
    /// # Panics
    ///
    /// Panics if targeting runs out of candidates, see [`Targeting::fire`]. This cannot
    /// happen while the opponent still has a ship afloat.
    pub fn auto_attack<T>(&mut self, opponent: &mut Player<T>) -> Shot {
        self.targeting.fire(&mut self.selector, &mut opponent.board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Axis;

    #[test]
    fn attack_delegates_to_opponent_board() {
        let me = Player::seeded(1);
        let mut them = Player::seeded(2);
        let id = them
            .board_mut()
            .place_ship(2, Coordinate::new(0, 0), Axis::Vertical)
            .unwrap();
        assert_eq!(
            me.attack(&mut them, Coordinate::new(1, 0)),
            Ok(ShotOutcome::Hit(id))
        );
        assert!(them.board().grid()[Coordinate::new(1, 0)].hit());
        assert!(!me.board().grid()[Coordinate::new(1, 0)].hit());
    }

    #[test]
    fn auto_attack_uses_the_selector() {
        let mut me = Player::with_selector(|_: usize| 0);
        let mut them = Player::seeded(2);
        let shot = me.auto_attack(&mut them);
        assert_eq!(shot.coord, Coordinate::new(0, 0));
        assert_eq!(shot.outcome, ShotOutcome::Miss);
        let shot = me.auto_attack(&mut them);
        assert_eq!(shot.coord, Coordinate::new(0, 1));
    }
}

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
//! Turn sequencing for a game between two players.
use log::info;
use thiserror::Error;

use crate::{
    board::{AttackError, Board, Coordinate, ShotOutcome},
    player::{Player, Selector, Shot},
};

/// Which of the two players.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Side {
    First,
    Second,
}

impl Side {
    /// Get the opponent of this side.
    pub fn opponent(self) -> Self {
        match self {
            Side::First => Side::Second,
            Side::Second => Side::First,
        }
    }
}

/// Reason why a shot could not be fired.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum FireError {
    /// The game is already over.
    #[error("the game is already over")]
    AlreadyOver,

    /// The target board rejected the attack.
    #[error(transparent)]
    Attack(#[from] AttackError),
}

/// A game in progress between two players, the first of which moves first.
#[derive(Debug, Clone)]
pub struct Game<A, B> {
    first: Player<A>,
    second: Player<B>,

    /// Side whose turn it is.
    current: Side,

    winner: Option<Side>,

    /// Successful shots fired by each side, indexed first then second.
    shots: [usize; 2],
}

impl<A: Selector, B: Selector> Game<A, B> {
    /// Start a game between two players whose ships are already placed.
    pub fn new(first: Player<A>, second: Player<B>) -> Self {
        Self {
            first,
            second,
            current: Side::First,
            winner: None,
            shots: [0, 0],
        }
    }

    /// Get the side whose turn it currently is.
    pub fn current(&self) -> Side {
        self.current
    }

    /// The winner, once every ship of the other side is sunk.
    pub fn winner(&self) -> Option<Side> {
        self.winner
    }

    /// The first player.
    pub fn first(&self) -> &Player<A> {
        &self.first
    }

    /// The second player.
    pub fn second(&self) -> &Player<B> {
        &self.second
    }

    /// Board belonging to `side`.
    pub fn board(&self, side: Side) -> &Board {
        match side {
            Side::First => self.first.board(),
            Side::Second => self.second.board(),
        }
    }

    /// Number of shots `side` has fired.
    pub fn shots(&self, side: Side) -> usize {
        self.shots[side as usize]
    }

    /// Fire the current side's shot at `coord` on the other side's board. A rejected
    /// coordinate leaves the turn with the same side.
    pub fn fire(&mut self, coord: Coordinate) -> Result<ShotOutcome, FireError> {
        self.check_running()?;
        let outcome = match self.current {
            Side::First => self.first.attack(&mut self.second, coord)?,
            Side::Second => self.second.attack(&mut self.first, coord)?,
        };
        self.end_turn();
        Ok(outcome)
    }

    /// Let the current side take an autonomous shot.
    pub fn fire_auto(&mut self) -> Result<Shot, FireError> {
        self.check_running()?;
        let shot = match self.current {
            Side::First => self.first.auto_attack(&mut self.second),
            Side::Second => self.second.auto_attack(&mut self.first),
        };
        self.end_turn();
        Ok(shot)
    }

    fn check_running(&self) -> Result<(), FireError> {
        match self.winner {
            Some(_) => Err(FireError::AlreadyOver),
            None => Ok(()),
        }
    }

    /// Record the shot just fired and either declare the winner or pass the turn.
    fn end_turn(&mut self) {
        self.shots[self.current as usize] += 1;
        if self.board(self.current.opponent()).all_sunk() {
            info!(
                "{:?} wins after {} shots",
                self.current,
                self.shots(self.current)
            );
            self.winner = Some(self.current);
        } else {
            self.current = self.current.opponent();
        }
    }
}

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
//! Autonomous targeting against an opponent's board.
//!
//! The computer works through three behaviors:
//!
//! - [`Behavior::Search`]: no ship is partially hit, so any unattacked cell is a
//!   candidate.
//! - [`Behavior::Target`]: the focused ship has one recorded hit, so the candidates are
//!   the cells around it.
//! - [`Behavior::Destroy`]: the focused ship has two or more hits, which fixes its
//!   [`Axis`]. Candidates are the cells just past either end of the run of hits until a
//!   miss reveals which way the ship extends, after which only that end is pursued.
//!
//! Ships hit while another ship is focused are queued and pursued, in the order they
//! were first hit, once the focused ship sinks.

use std::collections::{HashMap, VecDeque};

use log::{debug, trace};

use crate::{
    board::{Axis, Board, Coordinate, Orientation, ShotOutcome},
    player::Selector,
    ships::ShipId,
};

/// Phase of the targeting state machine.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Behavior {
    /// Hunting for any ship.
    Search,
    /// One hit on the focused ship; probing its neighbors.
    Target,
    /// Axis of the focused ship known; extending the run of hits.
    Destroy,
}

/// A shot fired by the targeting algorithm.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Shot {
    /// Cell that was attacked.
    pub coord: Coordinate,
    /// What the attack did.
    pub outcome: ShotOutcome,
}

/// Targeting state carried between shots.
#[derive(Debug, Clone)]
pub struct Targeting {
    behavior: Behavior,

    /// Partially hit ships, in the order they were first hit. The head is the focus.
    ships_hit: VecDeque<ShipId>,

    /// Recorded hits per ship, sorted along the ship's varying coordinate.
    hits: HashMap<ShipId, Vec<Coordinate>>,

    /// Candidates for the shot in progress. Empty between shots.
    potential_hits: Vec<Coordinate>,

    axis: Option<Axis>,
    focus: Option<ShipId>,

    /// Direction the focused ship extends in, once a miss has ruled out the other end.
    orientation: Option<Orientation>,
}

impl Targeting {
    /// Fresh targeting state in [`Behavior::Search`].
    pub fn new() -> Self {
        Self {
            behavior: Behavior::Search,
            ships_hit: VecDeque::new(),
            hits: HashMap::new(),
            potential_hits: Vec::new(),
            axis: None,
            focus: None,
            orientation: None,
        }
    }

    /// Current behavior.
    pub fn behavior(&self) -> Behavior {
        self.behavior
    }

    /// Ship currently being pursued.
    pub fn focus(&self) -> Option<ShipId> {
        self.focus
    }

    /// Axis of the focused ship, once two hits on it are known.
    pub fn axis(&self) -> Option<Axis> {
        self.axis
    }

    /// Inferred growth direction of the focused ship.
    pub fn orientation(&self) -> Option<Orientation> {
        self.orientation
    }

    /// Partially hit ships awaiting destruction, focus first.
    pub fn queued(&self) -> impl Iterator<Item = ShipId> + '_ {
        self.ships_hit.iter().copied()
    }

    /// Recorded hits on `ship`, sorted along its axis.
    pub fn hits(&self, ship: ShipId) -> &[Coordinate] {
        self.hits.get(&ship).map(Vec::as_slice).unwrap_or(&[])
    }

    /// The cells the next shot may target on `board`, given the current state. Every
    /// returned coordinate is on the board and not yet attacked.
    pub fn candidates(&self, board: &Board) -> Vec<Coordinate> {
        let raw = match self.behavior {
            Behavior::Search => {
                return board
                    .grid()
                    .iter()
                    .filter(|(_, cell)| !cell.hit())
                    .map(|(coord, _)| coord)
                    .collect()
            }
            Behavior::Target => self
                .focus_hits()
                .first()
                .map_or_else(Vec::new, |first| first.neighbors().collect()),
            Behavior::Destroy => self.destroy_candidates(),
        };
        raw.into_iter()
            .filter(|&coord| board.get_coord(coord).map_or(false, |cell| !cell.hit()))
            .collect()
    }

    /// Take one shot at `board`, choosing among the current candidates with `selector`,
    /// and update the state from the outcome.
    ///
    /// # Panics
    ///
    /// Panics if there is no candidate to choose from, if `selector` returns an index out
    /// of range, or if the board rejects the chosen cell. None of these can happen while
    /// the board is only attacked through this state; they indicate a defect.
    pub fn fire<S: Selector + ?Sized>(&mut self, selector: &mut S, board: &mut Board) -> Shot {
        self.potential_hits = self.candidates(board);
        trace!("{:?} candidates: {:?}", self.behavior, self.potential_hits);
        let count = self.potential_hits.len();
        assert!(
            count > 0,
            "no cell left to target while in {:?} (focus {:?}, hits {:?})",
            self.behavior,
            self.focus,
            self.focus_hits(),
        );
        let index = selector.select(count);
        assert!(
            index < count,
            "selector chose index {} of {} candidates",
            index,
            count
        );
        let coord = self.potential_hits[index];

        let outcome = match board.receive_attack(coord) {
            Ok(outcome) => outcome,
            Err(err) => panic!("targeting attacked an illegal cell: {}", err),
        };
        match outcome {
            ShotOutcome::Miss => self.record_miss(coord),
            ShotOutcome::Hit(ship) => self.record_hit(ship, coord, false),
            ShotOutcome::Sunk(ship) => self.record_hit(ship, coord, true),
        }
        self.potential_hits.clear();
        Shot { coord, outcome }
    }

    fn focus_hits(&self) -> &[Coordinate] {
        match self.focus {
            Some(ship) => self.hits(ship),
            None => &[],
        }
    }

    /// Candidates while the focused ship's axis is known.
    fn destroy_candidates(&self) -> Vec<Coordinate> {
        let hits = self.focus_hits();
        let (first, last, axis) = match (hits.first(), hits.last(), self.axis) {
            (Some(&first), Some(&last), Some(axis)) => (first, last, axis),
            _ => return Vec::new(),
        };

        // Unhit cells inside the run must belong to the ship, so fill those first.
        let gaps: Vec<_> = (axis.position(first) + 1..axis.position(last))
            .map(|pos| axis.at(first, pos))
            .filter(|coord| !hits.contains(coord))
            .collect();
        if !gaps.is_empty() {
            return gaps;
        }

        match self.orientation {
            None => vec![first.step(axis.low()), last.step(axis.high())]
                .into_iter()
                .flatten()
                .collect(),
            Some(dir) => {
                let end = if dir == axis.high() { last } else { first };
                end.step(dir).into_iter().collect()
            }
        }
    }

    fn record_hit(&mut self, ship: ShipId, coord: Coordinate, sunk: bool) {
        if !self.ships_hit.contains(&ship) {
            self.ships_hit.push_back(ship);
        }
        let hits = self.hits.entry(ship).or_insert_with(Vec::new);
        hits.push(coord);
        sort_along_run(hits);

        if sunk {
            debug!("ship {} sunk at {}", ship, coord);
            self.ships_hit.retain(|&queued| queued != ship);
            self.hits.remove(&ship);
        }
        match self.ships_hit.front().copied() {
            None => self.reset(),
            Some(next) => self.pursue(next),
        }
    }

    /// Focus on `ship` and pick the behavior its recorded hits call for.
    fn pursue(&mut self, ship: ShipId) {
        if self.focus != Some(ship) {
            self.focus = Some(ship);
            self.orientation = None;
        }
        let (count, axis) = {
            let hits = self.hits(ship);
            (hits.len(), run_axis(hits))
        };
        if count >= 2 {
            self.behavior = Behavior::Destroy;
            self.axis = axis;
        } else {
            self.behavior = Behavior::Target;
            self.axis = None;
        }
        debug!(
            "pursuing ship {} in {:?} (axis {:?}, orientation {:?})",
            ship, self.behavior, self.axis, self.orientation
        );
    }

    /// A miss just past one end of a run of three or more hits means the ship extends the
    /// other way.
    fn record_miss(&mut self, coord: Coordinate) {
        if self.behavior != Behavior::Destroy || self.orientation.is_some() {
            return;
        }
        let axis = match self.axis {
            Some(axis) => axis,
            None => return,
        };
        let hits = self.focus_hits();
        let (first, last) = match (hits.first(), hits.last()) {
            (Some(&first), Some(&last)) if hits.len() > 2 => (first, last),
            _ => return,
        };
        if axis.lane(coord) != axis.lane(first) {
            return;
        }
        let pos = axis.position(coord);
        self.orientation = if pos > axis.position(last) {
            Some(axis.low())
        } else if pos < axis.position(first) {
            Some(axis.high())
        } else {
            None
        };
        if let Some(dir) = self.orientation {
            debug!("miss at {} orients ship {:?} {:?}", coord, self.focus, dir);
        }
    }

    /// Forget everything and go back to searching.
    fn reset(&mut self) {
        self.behavior = Behavior::Search;
        self.ships_hit.clear();
        self.hits.clear();
        self.potential_hits.clear();
        self.axis = None;
        self.focus = None;
        self.orientation = None;
        debug!("no damaged ships left, searching");
    }
}

impl Default for Targeting {
    fn default() -> Self {
        Self::new()
    }
}

/// Sort hits on one ship by whichever coordinate varies between them.
fn sort_along_run(hits: &mut Vec<Coordinate>) {
    let row = hits[0].row;
    if hits.iter().all(|hit| hit.row == row) {
        hits.sort_by_key(|hit| hit.col);
    } else {
        hits.sort_by_key(|hit| hit.row);
    }
}

/// Axis of a sorted run of at least two hits.
fn run_axis(hits: &[Coordinate]) -> Option<Axis> {
    match (hits.first(), hits.last()) {
        (Some(&first), Some(&last)) => Axis::between(first, last),
        _ => None,
    }
}

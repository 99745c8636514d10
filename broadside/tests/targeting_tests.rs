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
use std::collections::HashSet;

use broadside::{
    config::BOARD_SIZE,
    game::{Game, Side},
    player::{Behavior, RngSelector},
    setup, Axis, Coordinate, Player, ShotOutcome,
};
use proptest::prelude::*;
use rand::{rngs::StdRng, SeedableRng};

fn c(row: usize, col: usize) -> Coordinate {
    Coordinate::new(row, col)
}

/// Selector that plays back a fixed list of indices.
fn scripted(indices: Vec<usize>) -> impl FnMut(usize) -> usize {
    let mut indices = indices.into_iter();
    move |count| {
        let index = indices.next().expect("script exhausted");
        assert!(index < count);
        index
    }
}

#[test]
fn hits_beside_each_other_fix_the_axis() {
    // (5,5) is index 55 in a fresh search; (5,6) is the last of its four neighbors.
    let mut me = Player::with_selector(scripted(vec![55, 3]));
    let mut them = Player::seeded(0);
    them.board_mut().place_ship(3, c(5, 4), Axis::Horizontal).unwrap();

    assert!(me.auto_attack(&mut them).outcome.is_hit());
    assert!(me.auto_attack(&mut them).outcome.is_hit());
    assert_eq!(me.targeting().behavior(), Behavior::Destroy);
    assert_eq!(me.targeting().axis(), Some(Axis::Horizontal));
    assert_eq!(me.targeting().candidates(them.board()), vec![c(5, 4), c(5, 7)]);
}

#[test]
fn miss_past_one_end_leaves_the_other() {
    let mut me = Player::with_selector(scripted(vec![55, 3, 1]));
    let mut them = Player::seeded(0);
    them.board_mut().place_ship(3, c(5, 4), Axis::Horizontal).unwrap();

    me.auto_attack(&mut them);
    me.auto_attack(&mut them);
    let shot = me.auto_attack(&mut them);
    assert_eq!(shot.coord, c(5, 7));
    assert_eq!(shot.outcome, ShotOutcome::Miss);
    assert_eq!(me.targeting().candidates(them.board()), vec![c(5, 4)]);
}

#[test]
fn ai_versus_ai_finishes() {
    let mut rng = StdRng::seed_from_u64(123);
    let mut first = Player::seeded(1);
    let mut second = Player::seeded(2);
    setup::place_fleet(first.board_mut(), &mut rng).unwrap();
    setup::place_fleet(second.board_mut(), &mut rng).unwrap();
    let mut game = Game::new(first, second);

    let mut turns = 0;
    while game.winner().is_none() {
        game.fire_auto().unwrap();
        turns += 1;
        assert!(turns < 2 * BOARD_SIZE * BOARD_SIZE, "game took too many turns");
    }
    let winner = game.winner().unwrap();
    assert!(game.board(winner.opponent()).all_sunk());
    assert!(!game.board(winner).all_sunk());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn single_ship_is_sunk_without_repeats(
        seed in any::<u64>(),
        size in 1..=5usize,
        row in 0..BOARD_SIZE,
        col in 0..BOARD_SIZE,
        vertical in any::<bool>(),
    ) {
        let axis = if vertical { Axis::Vertical } else { Axis::Horizontal };
        let mut them = Player::seeded(0);
        prop_assume!(them.board_mut().place_ship(size, c(row, col), axis).is_ok());
        let mut me = Player::with_selector(RngSelector::new(StdRng::seed_from_u64(seed)));

        let mut seen = HashSet::new();
        while !them.board().all_sunk() {
            let shot = me.auto_attack(&mut them);
            prop_assert!(seen.insert(shot.coord), "attacked {} twice", shot.coord);
            prop_assert!(seen.len() <= BOARD_SIZE * BOARD_SIZE);
        }
        prop_assert_eq!(me.targeting().behavior(), Behavior::Search);
    }

    #[test]
    fn fleet_is_destroyed_once_found(seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut them = Player::seeded(0);
        setup::place_fleet(them.board_mut(), &mut rng).unwrap();
        let mut me = Player::seeded(seed);

        let mut shots = 0;
        while !them.board().all_sunk() {
            me.auto_attack(&mut them);
            shots += 1;
        }
        prop_assert!(shots <= BOARD_SIZE * BOARD_SIZE);
        prop_assert_eq!(me.targeting().queued().count(), 0);
        prop_assert_eq!(me.targeting().focus(), None);
    }

    #[test]
    fn game_ends_within_board_capacity(seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut first = Player::seeded(seed);
        let mut second = Player::seeded(seed.wrapping_add(1));
        setup::place_fleet(first.board_mut(), &mut rng).unwrap();
        setup::place_fleet(second.board_mut(), &mut rng).unwrap();
        let mut game = Game::new(first, second);
        while game.winner().is_none() {
            game.fire_auto().unwrap();
        }
        let total = game.shots(Side::First) + game.shots(Side::Second);
        prop_assert!(total < 2 * BOARD_SIZE * BOARD_SIZE);
    }
}

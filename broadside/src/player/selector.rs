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
//! The source of randomness for autonomous targeting.

use rand::Rng;

/// Picks one of `count` candidate cells by index.
///
/// Targeting only ever calls this with `count > 0` and panics if the returned index is
/// not below `count`. Any `FnMut(usize) -> usize` closure is a selector, which lets tests
/// script exactly which candidate is attacked.
pub trait Selector {
    fn select(&mut self, count: usize) -> usize;
}

impl<F: FnMut(usize) -> usize> Selector for F {
    fn select(&mut self, count: usize) -> usize {
        self(count)
    }
}

/// Uniform selection driven by a random number generator.
#[derive(Debug, Clone)]
pub struct RngSelector<R> {
    rng: R,
}

impl<R: Rng> RngSelector<R> {
    /// Select uniformly using `rng`.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> Selector for RngSelector<R> {
    fn select(&mut self, count: usize) -> usize {
        self.rng.gen_range(0, count)
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    #[test]
    fn rng_selection_stays_in_range() {
        let mut selector = RngSelector::new(StdRng::seed_from_u64(7));
        for count in 1..50 {
            assert!(selector.select(count) < count);
        }
        assert_eq!(selector.select(1), 0);
    }

    #[test]
    fn closures_are_selectors() {
        let mut last = |count: usize| count - 1;
        assert_eq!(Selector::select(&mut last, 4), 3);
    }
}

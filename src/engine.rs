use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::color::Color;
use crate::container::{CAPACITY, Container};

pub const NUM_CONTAINERS: usize = 8;
pub const DEFAULT_SHUFFLE_SWAPS: usize = 15;

/// Interaction state of the selection machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    AwaitingTarget(usize),
}

/// Deals a new layout: one full container per palette color, two empty
/// containers, then `swaps` random single-slot swaps over all slots.
///
/// Containers are compacted after shuffling so every container starts packed.
pub fn deal<R: Rng + ?Sized>(rng: &mut R, swaps: usize) -> [Container; NUM_CONTAINERS] {
    let mut slots = [[Color::Empty; CAPACITY]; NUM_CONTAINERS];
    for (container, color) in slots.iter_mut().zip(Color::PALETTE) {
        *container = [color; CAPACITY];
    }

    for _ in 0..swaps {
        let (ci, si) = (rng.random_range(0..NUM_CONTAINERS), rng.random_range(0..CAPACITY));
        let (cj, sj) = (rng.random_range(0..NUM_CONTAINERS), rng.random_range(0..CAPACITY));
        let held = slots[ci][si];
        slots[ci][si] = slots[cj][sj];
        slots[cj][sj] = held;
    }

    slots.map(|s| {
        let mut container = Container::from_slots(s);
        container.compact();
        container
    })
}

/// Owns every container and turns container hits into transfers.
#[derive(Debug, Clone)]
pub struct PuzzleEngine {
    containers: [Container; NUM_CONTAINERS],
    phase: Phase,
    redraw: Vec<usize>,
}

impl PuzzleEngine {
    pub fn new<R: Rng + ?Sized>(rng: &mut R, swaps: usize) -> Self {
        let engine = Self::from_containers(deal(rng, swaps));
        log::info!("new deal with entropy {}", engine.entropy());
        engine
    }

    pub fn from_seed(seed: u64) -> Self {
        Self::new(&mut StdRng::seed_from_u64(seed), DEFAULT_SHUFFLE_SWAPS)
    }

    /// Starts from an explicit layout. Every container is reported for redraw.
    pub fn from_containers(mut containers: [Container; NUM_CONTAINERS]) -> Self {
        for container in &mut containers {
            container.set_selected(false);
        }
        Self {
            containers,
            phase: Phase::Idle,
            redraw: (0..NUM_CONTAINERS).collect(),
        }
    }

    pub fn containers(&self) -> &[Container; NUM_CONTAINERS] {
        &self.containers
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn selection(&self) -> Option<usize> {
        match self.phase {
            Phase::Idle => None,
            Phase::AwaitingTarget(index) => Some(index),
        }
    }

    /// Total disorder; zero means solved.
    pub fn entropy(&self) -> u32 {
        self.containers.iter().map(Container::entropy).sum()
    }

    /// Containers changed since the last call, in notification order.
    pub fn take_redraws(&mut self) -> Vec<usize> {
        std::mem::take(&mut self.redraw)
    }

    pub fn pending_redraws(&self) -> &[usize] {
        &self.redraw
    }

    /// Applies one click, `None` meaning the click hit no container.
    ///
    /// Contract:
    /// - Returns `true` when the click completed a selection pair, whether or
    ///   not the transfer was legal. The host should re-check [`entropy`](Self::entropy).
    /// - Returns `false` when the click only selected or cleared a selection.
    pub fn handle(&mut self, hit: Option<usize>) -> bool {
        log::debug!("click on {hit:?} in {:?}", self.phase);
        let hit = hit.filter(|&index| index < NUM_CONTAINERS);

        match (self.phase, hit) {
            (Phase::Idle, None) => false,
            (Phase::Idle, Some(index)) => {
                self.select(index, true);
                self.phase = Phase::AwaitingTarget(index);
                false
            }
            (Phase::AwaitingTarget(selected), None) => {
                self.select(selected, false);
                self.phase = Phase::Idle;
                false
            }
            (Phase::AwaitingTarget(selected), Some(index)) if index == selected => {
                self.select(selected, false);
                self.phase = Phase::Idle;
                true
            }
            (Phase::AwaitingTarget(selected), Some(index)) => {
                let (source, dest) = self.pair_mut(selected, index);
                match dest.transfer_from(source) {
                    Ok(moved) => log::debug!("moved {moved} blocks from {selected} to {index}"),
                    Err(err) => log::warn!("illegal move from {selected} to {index}: {err}"),
                }
                self.select(selected, false);
                self.redraw.push(index);
                self.phase = Phase::Idle;
                true
            }
        }
    }

    fn select(&mut self, index: usize, selected: bool) {
        self.containers[index].set_selected(selected);
        self.redraw.push(index);
    }

    /// Mutable access to two distinct containers, `(a, b)` in argument order.
    fn pair_mut(&mut self, a: usize, b: usize) -> (&mut Container, &mut Container) {
        debug_assert_ne!(a, b, "pair_mut requires distinct indices");
        if a < b {
            let (low, high) = self.containers.split_at_mut(b);
            (&mut low[a], &mut high[0])
        } else {
            let (low, high) = self.containers.split_at_mut(a);
            (&mut high[0], &mut low[b])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::NUM_COLORS;
    use crate::color::Color::{Blue, Empty, Green, Red, White};

    fn engine_with(overrides: &[(usize, [Color; CAPACITY])]) -> PuzzleEngine {
        let mut containers = [Container::new(); NUM_CONTAINERS];
        for &(index, slots) in overrides {
            containers[index] = Container::from_slots(slots);
        }
        let mut engine = PuzzleEngine::from_containers(containers);
        engine.take_redraws();
        engine
    }

    fn color_totals(engine: &PuzzleEngine) -> Vec<usize> {
        Color::PALETTE
            .iter()
            .map(|&c| engine.containers().iter().map(|k| k.count(c)).sum())
            .collect()
    }

    #[test]
    fn unshuffled_deal_is_six_full_and_two_empty() {
        let containers = deal(&mut StdRng::seed_from_u64(0), 0);

        for (container, color) in containers.iter().zip(Color::PALETTE) {
            assert_eq!(*container, Container::full(color));
        }
        assert!(containers[6].empty());
        assert!(containers[7].empty());
        assert_eq!(PuzzleEngine::from_containers(containers).entropy(), 0);
    }

    #[test]
    fn shuffled_deal_conserves_blocks_and_stays_packed() {
        for seed in 0..50 {
            let engine = PuzzleEngine::new(&mut StdRng::seed_from_u64(seed), 40);

            assert_eq!(engine.containers().len(), NUM_CONTAINERS);
            assert_eq!(color_totals(&engine), vec![CAPACITY; NUM_COLORS]);
            for container in engine.containers() {
                let free = container.free();
                assert!(container.slots()[free..].iter().all(|s| !s.is_empty()));
            }
        }
    }

    #[test]
    fn same_seed_deals_same_layout() {
        let a = PuzzleEngine::from_seed(7);
        let b = PuzzleEngine::from_seed(7);
        assert_eq!(a.containers(), b.containers());
    }

    #[test]
    fn miss_while_idle_is_a_no_op() {
        let mut engine = engine_with(&[(0, [Red; 4])]);

        assert!(!engine.handle(None));
        assert_eq!(engine.phase(), Phase::Idle);
        assert!(engine.take_redraws().is_empty());
    }

    #[test]
    fn hit_while_idle_selects_container() {
        let mut engine = engine_with(&[(2, [Red; 4])]);

        assert!(!engine.handle(Some(2)));

        assert_eq!(engine.phase(), Phase::AwaitingTarget(2));
        assert_eq!(engine.selection(), Some(2));
        assert!(engine.containers()[2].is_selected());
        assert_eq!(engine.take_redraws(), vec![2]);
    }

    #[test]
    fn miss_while_selected_clears_selection() {
        let mut engine = engine_with(&[(1, [Red; 4])]);
        engine.handle(Some(1));
        engine.take_redraws();

        assert!(!engine.handle(None));

        assert_eq!(engine.phase(), Phase::Idle);
        assert!(!engine.containers()[1].is_selected());
        assert_eq!(engine.take_redraws(), vec![1]);
    }

    #[test]
    fn full_container_moves_into_empty_one() {
        let mut engine = engine_with(&[(0, [Red; 4]), (1, [Blue; 4])]);
        let entropy = engine.entropy();

        assert!(!engine.handle(Some(0)));
        assert!(engine.handle(Some(6)));

        assert_eq!(engine.containers()[6], Container::full(Red));
        assert!(engine.containers()[0].empty());
        assert_eq!(engine.entropy(), entropy);
        assert_eq!(engine.phase(), Phase::Idle);
        assert!(engine.containers().iter().all(|c| !c.is_selected()));
        assert_eq!(engine.take_redraws(), vec![0, 0, 6]);
    }

    #[test]
    fn illegal_move_leaves_slots_untouched() {
        let mut engine = engine_with(&[(1, [Red, Red, Blue, Blue]), (2, [Empty, Empty, Empty, Green])]);
        let before = *engine.containers();

        engine.handle(Some(1));
        assert!(engine.handle(Some(2)));

        assert_eq!(engine.containers(), &before);
        assert_eq!(engine.selection(), None);
        assert!(!engine.containers()[1].is_selected());
    }

    #[test]
    fn transfer_into_lower_index_container() {
        let mut engine = engine_with(&[(3, [Empty, Empty, White, Green]), (5, [Empty, White, White, Blue])]);

        engine.handle(Some(5));
        assert!(engine.handle(Some(3)));

        assert_eq!(engine.containers()[3].slots(), &[White, White, White, Green]);
        assert_eq!(engine.containers()[5].slots(), &[Empty, Empty, Empty, Blue]);
    }

    #[test]
    fn clicking_selected_container_again_deselects() {
        let mut engine = engine_with(&[(4, [Empty, Empty, Red, Red])]);
        let before = *engine.containers();

        engine.handle(Some(4));
        assert!(engine.handle(Some(4)));

        assert_eq!(engine.phase(), Phase::Idle);
        assert_eq!(engine.containers(), &before);
    }

    #[test]
    fn out_of_range_hit_counts_as_miss() {
        let mut engine = engine_with(&[]);
        assert!(!engine.handle(Some(NUM_CONTAINERS)));
        assert_eq!(engine.phase(), Phase::Idle);
    }

    #[test]
    fn solving_moves_drive_entropy_to_zero() {
        let mut engine = engine_with(&[
            (0, [Empty, Empty, Red, Red]),
            (1, [Empty, Empty, Red, Red]),
        ]);
        assert_eq!(engine.entropy(), 2);

        engine.handle(Some(0));
        engine.handle(Some(1));

        assert_eq!(engine.containers()[1], Container::full(Red));
        assert_eq!(engine.entropy(), 0);
    }

    #[test]
    fn new_engine_reports_every_container_for_redraw() {
        let mut engine = PuzzleEngine::from_seed(1);
        assert_eq!(engine.pending_redraws().len(), NUM_CONTAINERS);
        assert_eq!(engine.take_redraws(), (0..NUM_CONTAINERS).collect::<Vec<_>>());
        assert!(engine.pending_redraws().is_empty());
    }
}

//! Random implementations.

use std::sync::Mutex;

use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};
use uuid::Uuid;

use crate::infrastructure::ports::RandomPort;

/// System random - uses real randomness.
pub struct SystemRandom;

impl SystemRandom {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SystemRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomPort for SystemRandom {
    fn next_f64(&self) -> f64 {
        rand::thread_rng().gen::<f64>()
    }

    fn gen_uuid(&self) -> Uuid {
        Uuid::new_v4()
    }
}

/// Seeded random - the same seed yields the same sequence of draws and IDs
/// for the life of the process.
pub struct SeededRandom {
    rng: Mutex<StdRng>,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    fn with_rng<T>(&self, f: impl FnOnce(&mut StdRng) -> T) -> T {
        // a panic mid-draw leaves the generator usable
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        f(&mut rng)
    }
}

impl RandomPort for SeededRandom {
    fn next_f64(&self) -> f64 {
        self.with_rng(|rng| rng.gen::<f64>())
    }

    fn gen_uuid(&self) -> Uuid {
        let mut bytes = [0u8; 16];
        self.with_rng(|rng| rng.fill_bytes(&mut bytes));
        uuid::Builder::from_random_bytes(bytes).into_uuid()
    }
}

/// Scripted random for testing: yields the given draws in order, then
/// repeats the last one.
#[cfg(test)]
pub struct ScriptedRandom {
    draws: Mutex<std::collections::VecDeque<f64>>,
    last: Mutex<f64>,
}

#[cfg(test)]
impl ScriptedRandom {
    pub fn new(draws: impl IntoIterator<Item = f64>) -> Self {
        Self {
            draws: Mutex::new(draws.into_iter().collect()),
            last: Mutex::new(0.0),
        }
    }
}

#[cfg(test)]
impl RandomPort for ScriptedRandom {
    fn next_f64(&self) -> f64 {
        let mut last = self.last.lock().unwrap();
        if let Some(next) = self.draws.lock().unwrap().pop_front() {
            *last = next;
        }
        *last
    }

    fn gen_uuid(&self) -> Uuid {
        Uuid::new_v4()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_draws() {
        let a = SeededRandom::new(42);
        let b = SeededRandom::new(42);

        let draws_a: Vec<f64> = (0..5).map(|_| a.next_f64()).collect();
        let draws_b: Vec<f64> = (0..5).map(|_| b.next_f64()).collect();

        assert_eq!(draws_a, draws_b);
        assert_eq!(a.gen_uuid(), b.gen_uuid());
    }

    #[test]
    fn draws_stay_in_unit_interval() {
        let random = SeededRandom::new(7);
        for _ in 0..1000 {
            let r = random.next_f64();
            assert!((0.0..1.0).contains(&r));
        }
    }

    #[test]
    fn seeded_uuids_are_v4() {
        let random = SeededRandom::new(1);
        assert_eq!(random.gen_uuid().get_version_num(), 4);
    }

    #[test]
    fn scripted_repeats_last_draw() {
        let random = ScriptedRandom::new([0.1, 0.9]);
        assert_eq!(random.next_f64(), 0.1);
        assert_eq!(random.next_f64(), 0.9);
        assert_eq!(random.next_f64(), 0.9);
    }
}

//! Base occupancy and runner advancement
//!
//! Home plate is never a slot: a runner who reaches it scores and leaves the
//! board, so "nobody stands on home" holds by construction. Bases are
//! addressed by the conventional numbers 1-3.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;
use crate::value_objects::PlayerName;

/// A base a runner can occupy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Base {
    First,
    Second,
    Third,
}

impl Base {
    /// All bases in order from first to third.
    pub const ALL: [Base; 3] = [Base::First, Base::Second, Base::Third];

    /// The conventional base number (1-3).
    pub fn number(self) -> u8 {
        match self {
            Base::First => 1,
            Base::Second => 2,
            Base::Third => 3,
        }
    }

    /// Base reached from base number `n`, if it is on the field.
    pub fn from_number(n: u8) -> Option<Self> {
        match n {
            1 => Some(Base::First),
            2 => Some(Base::Second),
            3 => Some(Base::Third),
            _ => None,
        }
    }

    fn slot(self) -> usize {
        usize::from(self.number() - 1)
    }
}

impl fmt::Display for Base {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Base::First => write!(f, "1B"),
            Base::Second => write!(f, "2B"),
            Base::Third => write!(f, "3B"),
        }
    }
}

/// Runners currently on first, second and third.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bases {
    slots: [Option<PlayerName>; 3],
}

impl Bases {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runner on the given base, if any.
    pub fn runner(&self, base: Base) -> Option<&PlayerName> {
        self.slots[base.slot()].as_ref()
    }

    pub fn is_occupied(&self, base: Base) -> bool {
        self.slots[base.slot()].is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// Number of runners on base.
    pub fn runner_count(&self) -> u32 {
        self.slots.iter().filter(|s| s.is_some()).count() as u32
    }

    /// Iterate occupied bases from first to third.
    pub fn occupied(&self) -> impl Iterator<Item = (Base, &PlayerName)> {
        Base::ALL
            .into_iter()
            .filter_map(move |base| self.runner(base).map(|runner| (base, runner)))
    }

    /// Put a runner directly on a base, replacing whoever stood there.
    pub fn place_runner(&mut self, base: Base, runner: PlayerName) {
        self.slots[base.slot()] = Some(runner);
    }

    /// Take the runner off a base (out on the bases, double play lead runner).
    pub fn remove_runner(&mut self, base: Base) -> Option<PlayerName> {
        self.slots[base.slot()].take()
    }

    /// Move every runner `n` bases, processing third base first so a runner
    /// never lands on a teammate who has not moved yet.
    ///
    /// Returns the number of runners who crossed home plate.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if `n` is zero or more than four.
    pub fn advance_runners(&mut self, n: u8) -> Result<u32, DomainError> {
        if !(1..=4).contains(&n) {
            return Err(DomainError::validation(format!(
                "Runners can advance 1 to 4 bases, got {}",
                n
            )));
        }

        let mut runs = 0;
        for base in Base::ALL.into_iter().rev() {
            let Some(runner) = self.remove_runner(base) else {
                continue;
            };
            match Base::from_number(base.number() + n) {
                Some(target) => self.place_runner(target, runner),
                None => runs += 1,
            }
        }
        Ok(runs)
    }

    /// Forced advance from first base: the runner on first moves up one base,
    /// pushing a runner on second, who pushes a runner on third home. Runners
    /// with an open base behind them stay put.
    ///
    /// Leaves first base empty and returns the number of runs forced in.
    pub fn force_runners(&mut self) -> u32 {
        if !self.is_occupied(Base::First) {
            return 0;
        }

        let mut runs = 0;
        if self.is_occupied(Base::Second) {
            if self.remove_runner(Base::Third).is_some() {
                runs += 1;
            }
            if let Some(runner) = self.remove_runner(Base::Second) {
                self.place_runner(Base::Third, runner);
            }
        }
        if let Some(runner) = self.remove_runner(Base::First) {
            self.place_runner(Base::Second, runner);
        }
        runs
    }

    /// Clear every base.
    pub fn reset(&mut self) {
        self.slots = Default::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(s: &str) -> PlayerName {
        PlayerName::new(s).unwrap()
    }

    fn bases_with(runners: &[(Base, &str)]) -> Bases {
        let mut bases = Bases::new();
        for (base, runner) in runners {
            bases.place_runner(*base, name(runner));
        }
        bases
    }

    #[test]
    fn runner_on_third_scores_on_single_base_advance() {
        let mut bases = bases_with(&[(Base::Third, "Park")]);

        let runs = bases.advance_runners(1).unwrap();

        assert_eq!(runs, 1);
        assert!(bases.is_empty());
    }

    #[test]
    fn advance_moves_runners_without_collisions() {
        let mut bases = bases_with(&[(Base::First, "A"), (Base::Second, "B")]);

        let runs = bases.advance_runners(1).unwrap();

        assert_eq!(runs, 0);
        assert!(!bases.is_occupied(Base::First));
        assert_eq!(bases.runner(Base::Second), Some(&name("A")));
        assert_eq!(bases.runner(Base::Third), Some(&name("B")));
    }

    #[test]
    fn advance_two_from_first_reaches_third() {
        let mut bases = bases_with(&[(Base::First, "A")]);

        assert_eq!(bases.advance_runners(2).unwrap(), 0);
        assert_eq!(bases.runner(Base::Third), Some(&name("A")));
    }

    #[test]
    fn advance_four_clears_the_bases() {
        let mut bases = bases_with(&[(Base::First, "A"), (Base::Second, "B"), (Base::Third, "C")]);

        assert_eq!(bases.advance_runners(4).unwrap(), 3);
        assert!(bases.is_empty());
    }

    #[test]
    fn advance_rejects_out_of_range() {
        let mut bases = bases_with(&[(Base::First, "A")]);
        assert!(bases.advance_runners(0).is_err());
        assert!(bases.advance_runners(5).is_err());
        assert!(bases.is_occupied(Base::First));
    }

    #[test]
    fn force_with_bases_loaded_scores_one() {
        let mut bases = bases_with(&[(Base::First, "A"), (Base::Second, "B"), (Base::Third, "C")]);

        let runs = bases.force_runners();

        assert_eq!(runs, 1);
        assert!(!bases.is_occupied(Base::First));
        assert_eq!(bases.runner(Base::Second), Some(&name("A")));
        assert_eq!(bases.runner(Base::Third), Some(&name("B")));
    }

    #[test]
    fn force_leaves_unforced_runner_on_third() {
        let mut bases = bases_with(&[(Base::First, "A"), (Base::Third, "C")]);

        let runs = bases.force_runners();

        assert_eq!(runs, 0);
        assert_eq!(bases.runner(Base::Second), Some(&name("A")));
        assert_eq!(bases.runner(Base::Third), Some(&name("C")));
    }

    #[test]
    fn force_without_runner_on_first_is_noop() {
        let mut bases = bases_with(&[(Base::Second, "B")]);

        assert_eq!(bases.force_runners(), 0);
        assert_eq!(bases.runner(Base::Second), Some(&name("B")));
    }

    #[test]
    fn reset_clears_everything() {
        let mut bases = bases_with(&[(Base::First, "A"), (Base::Third, "C")]);
        bases.reset();
        assert!(bases.is_empty());
        assert_eq!(bases.runner_count(), 0);
    }
}

//! The prize wheel.
//!
//! The wheel is the external actor that decides what a consonant round is
//! worth: a spin lands on a cash wedge (which becomes the pending award), a
//! Bankrupt wedge, or a Lose-a-Turn wedge. Wedge composition comes from the
//! config with a built-in default.

use rand::Rng;
use std::fmt;

/// A single wheel space.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Wedge {
    /// Award for a correct consonant guess this round.
    Cash(i64),
    /// Current player's balance drops to zero and the turn passes.
    Bankrupt,
    /// The turn passes with no guess.
    LoseTurn,
}

impl fmt::Display for Wedge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Wedge::Cash(amount) => write!(f, "${}", amount),
            Wedge::Bankrupt => write!(f, "BANKRUPT"),
            Wedge::LoseTurn => write!(f, "LOSE A TURN"),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Wheel {
    wedges: Vec<Wedge>,
}

impl Wheel {
    /// Build a wheel from explicit wedges. An empty list falls back to the
    /// default wheel so a spin always has somewhere to land.
    pub fn new(wedges: Vec<Wedge>) -> Self {
        if wedges.is_empty() {
            Self::default()
        } else {
            Self { wedges }
        }
    }

    /// Compose a wheel from config values: one wedge per cash amount plus
    /// the requested number of Bankrupt and Lose-a-Turn spaces.
    pub fn from_parts(cash: &[i64], bankrupts: usize, lose_turns: usize) -> Self {
        let mut wedges: Vec<Wedge> = cash.iter().copied().map(Wedge::Cash).collect();
        wedges.extend(std::iter::repeat(Wedge::Bankrupt).take(bankrupts));
        wedges.extend(std::iter::repeat(Wedge::LoseTurn).take(lose_turns));
        Self::new(wedges)
    }

    pub fn wedges(&self) -> &[Wedge] {
        &self.wedges
    }

    /// Land on a uniformly random wedge.
    pub fn spin<R: Rng>(&self, rng: &mut R) -> Wedge {
        self.wedges[rng.gen_range(0..self.wedges.len())]
    }
}

impl Default for Wheel {
    /// Six spaces: four cash values plus the two penalty wedges.
    fn default() -> Self {
        Self {
            wedges: vec![
                Wedge::Cash(100),
                Wedge::Cash(250),
                Wedge::Cash(500),
                Wedge::Cash(750),
                Wedge::Bankrupt,
                Wedge::LoseTurn,
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn from_parts_builds_requested_composition() {
        let wheel = Wheel::from_parts(&[100, 200], 1, 2);
        assert_eq!(wheel.wedges().len(), 5);
        assert_eq!(
            wheel
                .wedges()
                .iter()
                .filter(|w| matches!(w, Wedge::Cash(_)))
                .count(),
            2
        );
        assert_eq!(
            wheel
                .wedges()
                .iter()
                .filter(|w| **w == Wedge::LoseTurn)
                .count(),
            2
        );
    }

    #[test]
    fn empty_composition_falls_back_to_default() {
        let wheel = Wheel::from_parts(&[], 0, 0);
        assert_eq!(wheel.wedges().len(), 6);
    }

    #[test]
    fn spin_always_lands_on_a_wedge() {
        let wheel = Wheel::default();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let wedge = wheel.spin(&mut rng);
            assert!(wheel.wedges().contains(&wedge));
        }
    }

    #[test]
    fn wedge_display() {
        assert_eq!(Wedge::Cash(500).to_string(), "$500");
        assert_eq!(Wedge::Bankrupt.to_string(), "BANKRUPT");
        assert_eq!(Wedge::LoseTurn.to_string(), "LOSE A TURN");
    }
}

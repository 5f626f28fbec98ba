use crate::hands::hand::Hand;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::IndexedRandom;

/// Source of opponent hands.
///
/// The live dealer draws uniformly at random; tests substitute scripted
/// sequences so rounds are reproducible.
pub trait Dealer {
    /// Draw the opponent's next hand.
    fn deal(&mut self) -> Hand;
}

/// Uniform random dealer: each hand with probability 1/3, independent
/// across rounds. Drawing cannot fail.
#[derive(Debug)]
pub struct Uniform(SmallRng);

impl Uniform {
    pub fn new() -> Self {
        Self(SmallRng::from_os_rng())
    }
    /// Reproducible dealer from a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self(SmallRng::seed_from_u64(seed))
    }
}

impl Default for Uniform {
    fn default() -> Self {
        Self::new()
    }
}

impl Dealer for Uniform {
    fn deal(&mut self) -> Hand {
        let ref mut rng = self.0;
        *Hand::all()
            .choose(rng)
            .expect("three hands to choose from")
    }
}

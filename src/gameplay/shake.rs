use crate::dice::Roll;
use rand::rngs::SmallRng;
use rand::SeedableRng;

/// Source of fresh rolls. The engine never touches an RNG directly; it asks
/// its cup, which lets tests script exact dice sequences.
pub trait Shake {
    fn shake(&mut self, n: usize) -> Roll;
}

/// The real dice cup, backed by a small PRNG.
#[derive(Debug)]
pub struct Cup(SmallRng);

impl Cup {
    pub fn new() -> Self {
        Self(SmallRng::from_os_rng())
    }
    pub fn seeded(seed: u64) -> Self {
        Self(SmallRng::seed_from_u64(seed))
    }
}

impl Shake for Cup {
    fn shake(&mut self, n: usize) -> Roll {
        Roll::random(n, &mut self.0)
    }
}

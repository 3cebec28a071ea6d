//! Identifier sources for channels and publishers.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use uuid::Uuid;

/// Capability that hands out 128-bit identifiers.
pub trait IdSource {
    fn next_id(&mut self) -> Uuid;
}

/// Random v4 identifiers from the process randomness.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomIds;

impl IdSource for RandomIds {
    fn next_id(&mut self) -> Uuid {
        Uuid::new_v4()
    }
}

/// v4-shaped identifiers drawn from a seeded generator, so the same seed
/// yields the same identifier sequence.
#[derive(Debug, Clone)]
pub struct SeededIds {
    rng: StdRng,
}

impl SeededIds {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl IdSource for SeededIds {
    fn next_id(&mut self) -> Uuid {
        let bytes: [u8; 16] = self.rng.random();
        uuid::Builder::from_random_bytes(bytes).into_uuid()
    }
}

/// Counter-backed identifiers: 1, 2, 3, ...
#[derive(Debug, Default, Clone)]
pub struct SequentialIds {
    next: u128,
}

impl IdSource for SequentialIds {
    fn next_id(&mut self) -> Uuid {
        self.next += 1;
        Uuid::from_u128(self.next)
    }
}

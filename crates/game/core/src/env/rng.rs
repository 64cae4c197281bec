//! Injectable randomness for crits, dodges and enemy skill choice.
//!
//! An [`RngOracle`] is a pure function from a seed to a value. [`Dice`] turns
//! one oracle plus a game seed into a stream of independent rolls by mixing
//! a monotonically increasing nonce into every seed. Given the same oracle,
//! game seed and call sequence, a session replays exactly.

use std::sync::atomic::{AtomicUsize, Ordering};

/// Deterministic source of random values.
///
/// Implementations must produce the same value for the same seed.
pub trait RngOracle: Send + Sync {
    /// Generate a random u32 value from a seed.
    fn next_u32(&self, seed: u64) -> u32;

    /// Roll a d100 (1-100 inclusive).
    fn roll_d100(&self, seed: u64) -> u32 {
        (self.next_u32(seed) % 100) + 1
    }

    /// Pick an index in `0..len`. Returns 0 for empty or single-element ranges.
    fn index(&self, seed: u64, len: usize) -> usize {
        if len <= 1 {
            return 0;
        }
        self.next_u32(seed) as usize % len
    }
}

/// PCG-XSH-RR: 64-bit LCG state, 32-bit permuted output.
///
/// Stateless: the seed fully determines the output, which is what
/// lets [`Dice`] replay a session from `(game_seed, nonce)` alone.
#[derive(Clone, Copy, Debug, Default)]
pub struct PcgRng;

impl PcgRng {
    const MULTIPLIER: u64 = 6364136223846793005;
    const INCREMENT: u64 = 1442695040888963407;

    #[inline]
    fn step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    #[inline]
    fn output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl RngOracle for PcgRng {
    fn next_u32(&self, seed: u64) -> u32 {
        Self::output(Self::step(seed))
    }
}

/// Oracle that always returns the same raw value.
///
/// `FixedRng(99)` rolls 100 on every d100, so no percentage check below 100
/// ever succeeds: no crits, no dodges, no enemy skills. `FixedRng(0)` rolls 1,
/// so every non-zero chance succeeds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedRng(pub u32);

impl FixedRng {
    /// Every percentage roll fails.
    pub const NEVER: Self = Self(99);
    /// Every non-zero percentage roll succeeds.
    pub const ALWAYS: Self = Self(0);
}

impl RngOracle for FixedRng {
    fn next_u32(&self, _seed: u64) -> u32 {
        self.0
    }
}

/// Oracle that replays a fixed script of raw values, cycling at the end.
///
/// Ignores the seed; useful when a test needs a specific sequence of rolls.
#[derive(Debug)]
pub struct SequenceRng {
    values: Vec<u32>,
    cursor: AtomicUsize,
}

impl SequenceRng {
    pub fn new(values: impl Into<Vec<u32>>) -> Self {
        Self {
            values: values.into(),
            cursor: AtomicUsize::new(0),
        }
    }

    /// Script d100 results directly (1-100).
    pub fn d100(rolls: impl IntoIterator<Item = u32>) -> Self {
        Self::new(
            rolls
                .into_iter()
                .map(|roll| roll.clamp(1, 100) - 1)
                .collect::<Vec<_>>(),
        )
    }
}

impl RngOracle for SequenceRng {
    fn next_u32(&self, _seed: u64) -> u32 {
        if self.values.is_empty() {
            return 0;
        }
        let at = self.cursor.fetch_add(1, Ordering::Relaxed);
        self.values[at % self.values.len()]
    }
}

/// Mix a game seed and a roll nonce into a per-roll seed.
pub fn compute_seed(game_seed: u64, nonce: u64) -> u64 {
    let mut hash = game_seed;
    hash ^= nonce.wrapping_mul(0x9e3779b97f4a7c15);

    // SplitMix-style avalanche
    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xff51afd7ed558ccd);
    hash ^= hash >> 33;
    hash
}

/// The single shared random source of a session.
///
/// Every call consumes one nonce, so two rolls never share a seed.
pub struct Dice {
    oracle: Box<dyn RngOracle>,
    game_seed: u64,
    nonce: u64,
}

impl Dice {
    pub fn new(oracle: impl RngOracle + 'static, game_seed: u64) -> Self {
        Self {
            oracle: Box::new(oracle),
            game_seed,
            nonce: 0,
        }
    }

    /// PCG-backed dice for the given seed.
    pub fn seeded(game_seed: u64) -> Self {
        Self::new(PcgRng, game_seed)
    }

    /// Number of rolls made so far.
    pub fn nonce(&self) -> u64 {
        self.nonce
    }

    pub fn game_seed(&self) -> u64 {
        self.game_seed
    }

    fn next_seed(&mut self) -> u64 {
        let seed = compute_seed(self.game_seed, self.nonce);
        self.nonce += 1;
        seed
    }

    /// Roll a d100 (1-100 inclusive).
    pub fn roll_d100(&mut self) -> u32 {
        let seed = self.next_seed();
        self.oracle.roll_d100(seed)
    }

    /// Percentage check: succeeds when a d100 roll is at most `percent`.
    ///
    /// 0 never succeeds, 100 always does.
    pub fn chance(&mut self, percent: u32) -> bool {
        self.roll_d100() <= percent
    }

    /// Uniform index in `0..len`.
    pub fn pick(&mut self, len: usize) -> usize {
        let seed = self.next_seed();
        self.oracle.index(seed, len)
    }
}

impl std::fmt::Debug for Dice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dice")
            .field("game_seed", &self.game_seed)
            .field("nonce", &self.nonce)
            .finish_non_exhaustive()
    }
}

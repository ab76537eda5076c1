//! Seeded randomness for turn resolution.
//!
//! The engine never owns a stateful generator. Every roll is derived from a
//! battle seed, the turn nonce, the rolling side and a per-turn roll counter,
//! so the same inputs always replay the same outcome.

use std::cell::Cell;

use crate::state::Side;

/// Stateless random source: maps a seed to a value.
///
/// Implementations must be deterministic.
pub trait RngOracle: Send + Sync {
    fn next_u32(&self, seed: u64) -> u32;

    /// Uniform value in `[0, 100)`.
    fn roll_percent(&self, seed: u64) -> u32 {
        self.next_u32(seed) % 100
    }
}

/// PCG-XSH-RR output over a single LCG step.
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

/// Mixes the battle seed, turn nonce, rolling side and roll index into one
/// seed (SplitMix64-style finalizer).
pub fn compute_seed(battle_seed: u64, nonce: u64, side: u32, context: u32) -> u64 {
    let mut hash = battle_seed;
    hash ^= nonce.wrapping_mul(0x9e3779b97f4a7c15);
    hash ^= (side as u64).wrapping_mul(0x517cc1b727220a95);
    hash ^= (context as u64).wrapping_mul(0x85ebca6b);

    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xff51afd7ed558ccd);
    hash ^= hash >> 33;
    hash
}

static PCG: PcgRng = PcgRng;

/// Random rolls available to one turn resolution.
///
/// Each roll advances an internal counter, so successive rolls within the
/// same turn are independent while the whole turn stays reproducible from
/// `(seed, nonce)`.
pub struct TurnRng<'a> {
    oracle: &'a dyn RngOracle,
    seed: u64,
    nonce: u64,
    context: Cell<u32>,
}

impl<'a> TurnRng<'a> {
    pub fn new(oracle: &'a dyn RngOracle, seed: u64, nonce: u64) -> Self {
        Self {
            oracle,
            seed,
            nonce,
            context: Cell::new(0),
        }
    }

    /// Rolls from the built-in PCG generator.
    pub fn pcg(seed: u64, nonce: u64) -> TurnRng<'static> {
        TurnRng::new(&PCG, seed, nonce)
    }

    /// Uniform roll in `[0, 100)` on behalf of `side`.
    pub fn roll_percent(&self, side: Side) -> u32 {
        let context = self.context.get();
        self.context.set(context.wrapping_add(1));
        let seed = compute_seed(self.seed, self.nonce, side.index(), context);
        self.oracle.roll_percent(seed)
    }

    /// True with probability `percent / 100`. Chances of 0 and of 100 or more
    /// are decided without consuming a roll.
    pub fn chance(&self, side: Side, percent: u32) -> bool {
        match percent {
            0 => false,
            100.. => true,
            _ => self.roll_percent(side) < percent,
        }
    }

    /// Number of rolls taken so far.
    pub fn rolls(&self) -> u32 {
        self.context.get()
    }
}

impl core::fmt::Debug for TurnRng<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("TurnRng")
            .field("seed", &self.seed)
            .field("nonce", &self.nonce)
            .field("rolls", &self.context.get())
            .finish()
    }
}

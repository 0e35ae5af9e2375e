use std::collections::BTreeMap;

use anchor_lang::prelude::*;
use solana_keccak_hasher::hashv;

use crate::errors::AllowlistError;

/// Draw `count` distinct indices from `[0, population)` using `seed`.
///
/// This is a Fisher-Yates partial shuffle over a virtual array `0..population`.
/// Only slots that have been swapped are stored, so memory and work are
/// bounded by `count` no matter how large the population is.
///
/// Step `i` picks uniformly among the `population - i` slots not yet drawn:
/// 1. derive a value in `[0, population - i)` from `keccak256(seed || i || attempt)`
/// 2. the winner is whatever currently sits in that slot
/// 3. the slot is refilled with whatever sits in the last live slot
///
/// The output order is the draw order and is identical for identical inputs.
pub fn sample(seed: &[u8; 32], population: u32, count: u32) -> Result<Vec<u32>> {
    require!(count <= population, AllowlistError::CapacityExceeded);

    // slot -> occupant, for slots whose occupant is not the slot itself
    let mut swapped: BTreeMap<u32, u32> = BTreeMap::new();
    let mut winners = Vec::with_capacity(count as usize);

    for step in 0..count {
        let bound = population - step;
        let candidate = draw_below(seed, step, bound);
        let last = bound - 1;

        let picked = occupant(&swapped, candidate);
        let tail = occupant(&swapped, last);
        swapped.insert(candidate, tail);
        // `last` drops out of range for every later step
        swapped.remove(&last);

        winners.push(picked);
    }

    Ok(winners)
}

fn occupant(swapped: &BTreeMap<u32, u32>, slot: u32) -> u32 {
    swapped.get(&slot).copied().unwrap_or(slot)
}

/// Uniform value in `[0, bound)` for the given draw step.
///
/// Uses rejection sampling rather than a plain modulo: a 64-bit word is only
/// accepted when it falls below the largest multiple of `bound`, otherwise the
/// hash is recomputed with the next attempt counter. With `bound <= 2^32` a
/// rejection happens with probability below 2^-32.
fn draw_below(seed: &[u8; 32], step: u32, bound: u32) -> u32 {
    let mut attempt: u32 = 0;

    loop {
        let digest = hashv(&[seed, &step.to_le_bytes(), &attempt.to_le_bytes()]).0;

        let mut bytes = [0u8; 8];
        bytes.copy_from_slice(&digest[..8]);

        if let Some(value) = accept(u64::from_le_bytes(bytes), bound) {
            return value;
        }
        attempt = attempt.wrapping_add(1);
    }
}

/// Reduce `value` into `[0, bound)`, or `None` when it lands in the biased
/// tail above the acceptance limit.
fn accept(value: u64, bound: u32) -> Option<u32> {
    let bound = bound as u64;
    if value <= acceptance_limit(bound) {
        Some((value % bound) as u32)
    } else {
        None
    }
}

/// Largest accepted 64-bit value for `bound`: `2^64 - (2^64 mod bound) - 1`
fn acceptance_limit(bound: u64) -> u64 {
    let remainder = (u64::MAX % bound + 1) % bound;
    u64::MAX - remainder
}

use anchor_lang::prelude::*;
use anchor_lang::solana_program::log::sol_log_data;

use crate::state::{PopulationMode, Raffle};

#[event]
pub struct RaffleCreated {
    pub raffle_id: u64,
    pub name: String,
    pub winners_to_draw: u32,
    pub oracle: Pubkey,
    pub mode: PopulationMode,
}

#[event]
pub struct Registered {
    pub raffle_id: u64,
    pub identity: Pubkey,
    pub index: u32,
}

#[event]
pub struct RandomSeedInitialised {
    pub raffle_id: u64,
    pub seed: [u8; 32],
}

/// Published once per raffle. For commitment draws, anyone holding the
/// off-chain list can recompute its digest, compare it to `commitment`,
/// and map `winners` back to identities.
#[event]
#[derive(Debug)]
pub struct RaffleDrawn {
    pub raffle_id: u64,
    pub commitment: Option<Vec<u8>>,
    pub population: u32,
    pub winners: Vec<u32>,
}

impl RaffleDrawn {
    /// Event bytes for a drawn raffle, identical to what `emit!` logs for
    /// the owned event. Serializes straight from the stored winner set into
    /// an exactly sized buffer, since the program heap never frees.
    pub fn log_data(raffle: &Raffle) -> Result<Vec<u8>> {
        let result = raffle.result()?;
        let commitment_len = result.commitment.as_ref().map_or(0, |c| 4 + c.len());
        let len = Self::DISCRIMINATOR.len()
            + 8
            + (1 + commitment_len)
            + 4
            + (4 + 4 * result.indices.len());

        let mut data = Vec::with_capacity(len);
        data.extend_from_slice(Self::DISCRIMINATOR);
        raffle.raffle_id.serialize(&mut data)?;
        result.commitment.serialize(&mut data)?;
        result.population.serialize(&mut data)?;
        result.indices.serialize(&mut data)?;

        Ok(data)
    }

    pub fn emit(raffle: &Raffle) -> Result<()> {
        let data = Self::log_data(raffle)?;
        sol_log_data(&[&data]);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::MAX_WINNERS;
    use crate::eligibility::EligibilityRule;
    use std::alloc::{GlobalAlloc, Layout, System};
    use std::cell::Cell;
    use std::collections::BTreeSet;

    // 0x01701220c3c4733ec8affd06cf9e9ff50ffc6bcd2ec85a6170004bb709669c31de94391a
    const CID: [u8; 36] = [
        0x01, 0x70, 0x12, 0x20, 0xc3, 0xc4, 0x73, 0x3e, 0xc8, 0xaf, 0xfd, 0x06, 0xcf, 0x9e, 0x9f,
        0xf5, 0x0f, 0xfc, 0x6b, 0xcd, 0x2e, 0xc8, 0x5a, 0x61, 0x70, 0x00, 0x4b, 0xb7, 0x09, 0x66,
        0x9c, 0x31, 0xde, 0x94, 0x39, 0x1a,
    ];

    /// Program heap size on chain, without a requested heap frame
    const HEAP_SIZE: usize = 32 * 1024;

    thread_local! {
        static ALLOCATED: Cell<usize> = const { Cell::new(0) };
    }

    /// Counts every allocation and never credits frees, like the on-chain
    /// bump allocator. `realloc` falls back to alloc + copy + dealloc.
    struct BumpCounter;

    unsafe impl GlobalAlloc for BumpCounter {
        unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
            let _ = ALLOCATED.try_with(|total| total.set(total.get() + layout.size()));
            System.alloc(layout)
        }

        unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
            System.dealloc(ptr, layout)
        }
    }

    #[global_allocator]
    static ALLOCATOR: BumpCounter = BumpCounter;

    fn allocated() -> usize {
        ALLOCATED.with(|total| total.get())
    }

    fn seeded_raffle(winners_to_draw: u32) -> Raffle {
        let oracle = Pubkey::new_unique();
        let mut raffle = Raffle::new(
            1,
            "Oofbirds".to_string(),
            Pubkey::new_unique(),
            oracle,
            winners_to_draw,
            PopulationMode::Commitment,
            EligibilityRule::Open,
            255,
        )
        .unwrap();

        let mut seed = [0u8; 32];
        seed[24..].copy_from_slice(&69420u64.to_be_bytes());
        raffle.receive_randomness(&oracle, seed).unwrap();
        raffle
    }

    #[test]
    fn test_drawn_event_carries_commitment() {
        let mut raffle = seeded_raffle(1000);
        assert!(RaffleDrawn::log_data(&raffle).is_err());

        raffle.draw_from_commitment(CID.to_vec(), 5000).unwrap();

        let data = RaffleDrawn::log_data(&raffle).unwrap();
        assert_eq!(&data[..8], RaffleDrawn::DISCRIMINATOR);
        let event = RaffleDrawn::deserialize(&mut &data[8..]).unwrap();

        let unique: BTreeSet<u32> = event.winners.iter().copied().collect();
        assert_eq!(event.raffle_id, 1);
        assert_eq!(event.commitment, Some(CID.to_vec()));
        assert_eq!(event.population, 5000);
        assert_eq!(event.winners.len(), 1000);
        assert_eq!(unique.len(), 1000);
        assert!(event.winners.iter().all(|&w| w < 5000));
    }

    #[test]
    fn test_log_data_matches_emitted_event() {
        let mut raffle = seeded_raffle(25);
        raffle.draw_from_commitment(CID.to_vec(), 300).unwrap();
        let result = raffle.result().unwrap();

        let owned = RaffleDrawn {
            raffle_id: raffle.raffle_id,
            commitment: result.commitment.clone(),
            population: result.population,
            winners: result.indices.clone(),
        };
        let data = RaffleDrawn::log_data(&raffle).unwrap();
        assert_eq!(data, anchor_lang::Event::data(&owned));
        assert_eq!(data.len(), data.capacity());
    }

    #[test]
    fn test_largest_draw_leaves_heap_headroom() {
        let mut raffle = seeded_raffle(MAX_WINNERS);

        let before = allocated();
        raffle.draw_from_commitment(CID.to_vec(), 5000).unwrap();
        let data = RaffleDrawn::log_data(&raffle).unwrap();
        let used = allocated() - before;

        assert_eq!(raffle.winners().unwrap().len(), MAX_WINNERS as usize);
        assert!(!data.is_empty());
        // leave room for account and argument deserialization
        assert!(used <= HEAP_SIZE - 8 * 1024, "draw used {} heap bytes", used);
    }
}

use anchor_lang::prelude::*;
use anchor_lang::solana_program::program::MAX_RETURN_DATA;

/// Longest raffle display name, in bytes
pub const MAX_NAME_LEN: usize = 32;

/// Upper bound on winners per raffle. The winner set lives in the raffle
/// account, so this also caps its size.
///
/// A draw at this size uses roughly 21 KiB of the 32 KiB program heap.
/// Clients drawing near the cap should still prepend a `RequestHeapFrame`
/// compute-budget instruction.
#[constant]
pub const MAX_WINNERS: u32 = 1_000;

/// Most winner indices one `get_winners` page can return: a borsh
/// `Vec<u32>` (4-byte length + 4 bytes each) must fit in return data.
pub const WINNERS_PAGE_LEN: u32 = ((MAX_RETURN_DATA - 4) / 4) as u32;

/// Longest accepted commitment (an IPFS CIDv1 is 36 bytes)
pub const MAX_COMMITMENT_LEN: usize = 64;

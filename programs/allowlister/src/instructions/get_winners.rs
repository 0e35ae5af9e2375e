use anchor_lang::prelude::*;

use crate::state::{Participant, Raffle};

/// Paged read of the stored winner set. Return data is capped at 1 KiB,
/// so callers walk `offset` until an empty page comes back.
#[derive(Accounts)]
pub struct GetWinners<'info> {
    pub raffle: Account<'info, Raffle>,
}

impl<'info> GetWinners<'info> {
    pub fn get_winners(&self, offset: u32, limit: u32) -> Result<Vec<u32>> {
        Ok(self.raffle.winners_page(offset, limit)?.to_vec())
    }
}

/// Read path for winner-consuming modules: is this ledger entry a winner?
#[derive(Accounts)]
pub struct IsWinner<'info> {
    pub raffle: Account<'info, Raffle>,

    #[account(
        seeds = [Participant::SEED_PREFIX, raffle.key().as_ref(), participant.identity.as_ref()],
        bump = participant.bump,
        has_one = raffle
    )]
    pub participant: Account<'info, Participant>,
}

impl<'info> IsWinner<'info> {
    pub fn is_winner(&self) -> Result<bool> {
        let won = self.raffle.is_winner(self.participant.index)?;
        msg!(
            "Participant {} (index {}) winner: {}",
            self.participant.identity,
            self.participant.index,
            won
        );
        Ok(won)
    }
}

use anchor_lang::prelude::*;

use crate::errors::AllowlistError;
use crate::events::RaffleDrawn;
use crate::state::Raffle;

/// Commitment draw. The participant count is trusted input, so only the
/// raffle authority may supply it.
#[derive(Accounts)]
pub struct DrawCommitted<'info> {
    #[account(
        mut,
        seeds = [Raffle::SEED_PREFIX, raffle.authority.as_ref(), &raffle.raffle_id.to_le_bytes()],
        bump = raffle.bump,
        has_one = authority @ AllowlistError::Unauthorized
    )]
    pub raffle: Account<'info, Raffle>,

    pub authority: Signer<'info>,
}

impl<'info> DrawCommitted<'info> {
    pub fn draw_committed(&mut self, commitment: Vec<u8>, participant_count: u32) -> Result<()> {
        let raffle = &mut self.raffle;

        // 1. Validate state and commitment, sample, store
        raffle.draw_from_commitment(commitment, participant_count)?;

        // 2. Announce with the commitment so third parties can verify the list
        let result = raffle.result()?;
        msg!(
            "Raffle {} drawn: {} winners from {} committed participants",
            raffle.raffle_id,
            result.indices.len(),
            result.population
        );
        RaffleDrawn::emit(raffle)?;

        Ok(())
    }
}

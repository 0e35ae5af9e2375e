use anchor_lang::prelude::*;

use crate::events::RaffleDrawn;
use crate::state::Raffle;

/// Ledger draw. Anyone may crank it once the seed is in.
#[derive(Accounts)]
pub struct Draw<'info> {
    #[account(
        mut,
        seeds = [Raffle::SEED_PREFIX, raffle.authority.as_ref(), &raffle.raffle_id.to_le_bytes()],
        bump = raffle.bump
    )]
    pub raffle: Account<'info, Raffle>,

    pub caller: Signer<'info>,
}

impl<'info> Draw<'info> {
    pub fn draw(&mut self) -> Result<()> {
        let raffle = &mut self.raffle;

        // 1. Validate state and capacity, sample, store
        raffle.draw_from_ledger()?;

        // 2. Announce
        let result = raffle.result()?;
        msg!(
            "Raffle {} drawn: {} winners from {} participants",
            raffle.raffle_id,
            result.indices.len(),
            result.population
        );
        RaffleDrawn::emit(raffle)?;

        Ok(())
    }
}

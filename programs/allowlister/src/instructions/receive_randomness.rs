use anchor_lang::prelude::*;

use crate::events::RandomSeedInitialised;
use crate::state::Raffle;

#[derive(Accounts)]
pub struct ReceiveRandomness<'info> {
    #[account(
        mut,
        seeds = [Raffle::SEED_PREFIX, raffle.authority.as_ref(), &raffle.raffle_id.to_le_bytes()],
        bump = raffle.bump
    )]
    pub raffle: Account<'info, Raffle>,

    /// Must be the raffle's designated oracle, checked in the handler
    pub oracle: Signer<'info>,
}

impl<'info> ReceiveRandomness<'info> {
    pub fn receive_randomness(&mut self, seed: [u8; 32]) -> Result<()> {
        let raffle = &mut self.raffle;
        raffle.receive_randomness(&self.oracle.key(), seed)?;

        msg!("Random seed received for raffle {}", raffle.raffle_id);

        emit!(RandomSeedInitialised {
            raffle_id: raffle.raffle_id,
            seed,
        });

        Ok(())
    }
}

use anchor_lang::prelude::*;

use crate::events::Registered;
use crate::state::{Participant, Raffle};

#[derive(Accounts)]
pub struct Register<'info> {
    #[account(
        mut,
        seeds = [Raffle::SEED_PREFIX, raffle.authority.as_ref(), &raffle.raffle_id.to_le_bytes()],
        bump = raffle.bump
    )]
    pub raffle: Account<'info, Raffle>,

    /// Ledger entry; its address makes each identity unique per raffle
    #[account(
        init_if_needed,
        payer = registrant,
        space = 8 + Participant::INIT_SPACE,
        seeds = [Participant::SEED_PREFIX, raffle.key().as_ref(), registrant.key().as_ref()],
        bump
    )]
    pub participant: Account<'info, Participant>,

    #[account(mut)]
    pub registrant: Signer<'info>,

    pub system_program: Program<'info, System>,
}

impl<'info> Register<'info> {
    pub fn register(&mut self, proof: Vec<[u8; 32]>, bumps: &RegisterBumps) -> Result<u32> {
        let raffle_key = self.raffle.key();
        let identity = self.registrant.key();

        let index = self.raffle.register(
            raffle_key,
            &mut self.participant,
            identity,
            &proof,
            bumps.participant,
        )?;

        msg!("Registered {} at index {}", identity, index);

        emit!(Registered {
            raffle_id: self.raffle.raffle_id,
            identity,
            index,
        });

        Ok(index)
    }
}

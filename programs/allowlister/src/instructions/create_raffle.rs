use anchor_lang::prelude::*;

use crate::constants::MAX_WINNERS;
use crate::eligibility::EligibilityRule;
use crate::events::RaffleCreated;
use crate::state::{PopulationMode, Raffle};

#[derive(Accounts)]
#[instruction(raffle_id: u64, name: String, winners_to_draw: u32)]
pub struct CreateRaffle<'info> {
    #[account(
        init,
        payer = authority,
        space = Raffle::space(winners_to_draw.min(MAX_WINNERS)),
        seeds = [Raffle::SEED_PREFIX, authority.key().as_ref(), &raffle_id.to_le_bytes()],
        bump
    )]
    pub raffle: Account<'info, Raffle>,

    #[account(mut)]
    pub authority: Signer<'info>,

    pub system_program: Program<'info, System>,
}

impl<'info> CreateRaffle<'info> {
    #[allow(clippy::too_many_arguments)]
    pub fn create_raffle(
        &mut self,
        raffle_id: u64,
        name: String,
        winners_to_draw: u32,
        oracle: Pubkey,
        mode: PopulationMode,
        eligibility: EligibilityRule,
        bumps: &CreateRaffleBumps,
    ) -> Result<()> {
        self.raffle.set_inner(Raffle::new(
            raffle_id,
            name.clone(),
            self.authority.key(),
            oracle,
            winners_to_draw,
            mode,
            eligibility,
            bumps.raffle,
        )?);

        msg!("Raffle {} created: {}", raffle_id, name);
        msg!("Winners to draw: {}", winners_to_draw);
        msg!("Oracle: {}", oracle);

        emit!(RaffleCreated {
            raffle_id,
            name,
            winners_to_draw,
            oracle,
            mode,
        });

        Ok(())
    }
}

use anchor_lang::prelude::*;
use switchboard_on_demand::accounts::RandomnessAccountData;

use crate::errors::AllowlistError;
use crate::events::RandomSeedInitialised;
use crate::state::Raffle;

/// Seed delivery from a Switchboard On-Demand randomness account. The
/// raffle's oracle identity is the randomness account itself.
#[derive(Accounts)]
pub struct SettleSwitchboardRandomness<'info> {
    #[account(
        mut,
        seeds = [Raffle::SEED_PREFIX, raffle.authority.as_ref(), &raffle.raffle_id.to_le_bytes()],
        bump = raffle.bump
    )]
    pub raffle: Account<'info, Raffle>,

    /// CHECK: Key checked against the raffle oracle, data validated by Switchboard SDK
    pub randomness_account: AccountInfo<'info>,

    pub caller: Signer<'info>,
}

impl<'info> SettleSwitchboardRandomness<'info> {
    pub fn settle_switchboard_randomness(&mut self) -> Result<()> {
        let oracle = self.randomness_account.key();
        self.raffle.check_oracle(&oracle)?;

        let randomness =
            RandomnessAccountData::parse(self.randomness_account.data.borrow()).map_err(|_| {
                msg!("Randomness account {} is not Switchboard data", oracle);
                AllowlistError::InvalidRandomnessData
            })?;
        require!(
            randomness.reveal_slot != 0,
            AllowlistError::RandomnessNotRevealed
        );

        let slot = Clock::get().map_err(|_| AllowlistError::ClockError)?.slot;
        let seed = randomness.get_value(slot).map_err(|e| {
            msg!("Randomness for slot {} unavailable: {:?}", slot, e);
            AllowlistError::RandomnessNotResolved
        })?;
        let reveal_slot = randomness.reveal_slot;

        let raffle = &mut self.raffle;
        raffle.receive_randomness(&oracle, seed)?;

        msg!(
            "Switchboard seed received for raffle {} (revealed at slot {})",
            raffle.raffle_id,
            reveal_slot
        );

        emit!(RandomSeedInitialised {
            raffle_id: raffle.raffle_id,
            seed,
        });

        Ok(())
    }
}

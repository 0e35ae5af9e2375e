#![allow(unexpected_cfgs)]

use anchor_lang::prelude::*;

pub mod constants;
pub mod eligibility;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod sampler;
pub mod state;

use eligibility::EligibilityRule;
use instructions::*;
use state::PopulationMode;

declare_id!("7uCAyNirU6DSw4htmzimUFPXsoGFLjErRrdAcwYpsw7a");

#[program]
pub mod allowlister {
    use super::*;

    pub fn create_raffle(
        ctx: Context<CreateRaffle>,
        raffle_id: u64,
        name: String,
        winners_to_draw: u32,
        oracle: Pubkey,
        mode: PopulationMode,
        eligibility: EligibilityRule,
    ) -> Result<()> {
        ctx.accounts.create_raffle(
            raffle_id,
            name,
            winners_to_draw,
            oracle,
            mode,
            eligibility,
            &ctx.bumps,
        )
    }

    /// Register the signer; `proof` is only read by allowlist-gated raffles.
    /// Returns the assigned index.
    pub fn register(ctx: Context<Register>, proof: Vec<[u8; 32]>) -> Result<u32> {
        ctx.accounts.register(proof, &ctx.bumps)
    }

    /// Called by the designated oracle with the random seed
    pub fn receive_randomness(ctx: Context<ReceiveRandomness>, seed: [u8; 32]) -> Result<()> {
        ctx.accounts.receive_randomness(seed)
    }

    #[cfg(feature = "switchboard")]
    pub fn settle_switchboard_randomness(ctx: Context<SettleSwitchboardRandomness>) -> Result<()> {
        ctx.accounts.settle_switchboard_randomness()
    }

    pub fn draw(ctx: Context<Draw>) -> Result<()> {
        ctx.accounts.draw()
    }

    pub fn draw_committed(
        ctx: Context<DrawCommitted>,
        commitment: Vec<u8>,
        participant_count: u32,
    ) -> Result<()> {
        ctx.accounts.draw_committed(commitment, participant_count)
    }

    /// At most `WINNERS_PAGE_LEN` winners starting at `offset`
    pub fn get_winners(ctx: Context<GetWinners>, offset: u32, limit: u32) -> Result<Vec<u32>> {
        ctx.accounts.get_winners(offset, limit)
    }

    pub fn is_winner(ctx: Context<IsWinner>) -> Result<bool> {
        ctx.accounts.is_winner()
    }
}

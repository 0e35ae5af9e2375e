use anchor_lang::prelude::*;

use crate::constants::{MAX_COMMITMENT_LEN, MAX_NAME_LEN, MAX_WINNERS, WINNERS_PAGE_LEN};
use crate::eligibility::{EligibilityRule, RegistrationGate};
use crate::errors::AllowlistError;
use crate::sampler::sample;

/// Lifecycle of a raffle. Only ever moves forward.
#[derive(AnchorSerialize, AnchorDeserialize, InitSpace, Clone, Copy, PartialEq, Eq, Debug)]
pub enum RaffleStatus {
    /// Accepting registrations, waiting for the oracle
    Open,
    /// Seed delivered, registration closed
    Seeded,
    /// Winners written
    Drawn,
}

/// Where the population for the draw comes from
#[derive(AnchorSerialize, AnchorDeserialize, InitSpace, Clone, Copy, PartialEq, Eq, Debug)]
pub enum PopulationMode {
    /// Participants register on-chain and get sequential indices
    Ledger,
    /// Participant list is published off-chain; the draw receives its
    /// digest and size from the raffle authority
    Commitment,
}

/// Final draw result, written once
#[derive(AnchorSerialize, AnchorDeserialize, Clone, PartialEq, Eq, Debug)]
pub struct WinnerSet {
    /// Population size the indices were drawn from
    pub population: u32,
    /// Digest of the off-chain participant list (commitment mode only)
    pub commitment: Option<Vec<u8>>,
    /// Winner indices in draw order
    pub indices: Vec<u32>,
}

impl WinnerSet {
    /// population (4) + commitment (1 + 4 + max) + indices (4 + 4 * winners)
    pub fn space(winners: u32) -> usize {
        4 + (1 + 4 + MAX_COMMITMENT_LEN) + (4 + 4 * winners as usize)
    }
}

/// Raffle account: configuration, registration count, seed and result
#[account]
#[derive(Debug)]
pub struct Raffle {
    /// Caller-chosen id, part of the PDA seeds
    pub raffle_id: u64,
    /// Display name
    pub name: String,
    /// Creator; the only caller allowed to run a commitment draw
    pub authority: Pubkey,
    /// The only identity allowed to deliver the random seed
    pub oracle: Pubkey,
    /// Target winner count K
    pub winners_to_draw: u32,
    pub mode: PopulationMode,
    pub eligibility: EligibilityRule,
    /// Registered participants so far (ledger mode)
    pub participant_count: u32,
    pub status: RaffleStatus,
    /// Oracle seed, absent until delivered
    pub random_seed: Option<[u8; 32]>,
    /// Draw result, absent until drawn
    pub winner_set: Option<WinnerSet>,
    /// Bump seed for PDA
    pub bump: u8,
}

impl Raffle {
    pub const SEED_PREFIX: &'static [u8] = b"raffle";

    /// Account size for a raffle drawing `winners_to_draw` winners,
    /// discriminator included
    pub fn space(winners_to_draw: u32) -> usize {
        8 + 8
            + (4 + MAX_NAME_LEN)
            + 32
            + 32
            + 4
            + PopulationMode::INIT_SPACE
            + EligibilityRule::INIT_SPACE
            + 4
            + RaffleStatus::INIT_SPACE
            + (1 + 32)
            + (1 + WinnerSet::space(winners_to_draw))
            + 1
    }

    #[allow(clippy::too_many_arguments)]
    pub fn new(
        raffle_id: u64,
        name: String,
        authority: Pubkey,
        oracle: Pubkey,
        winners_to_draw: u32,
        mode: PopulationMode,
        eligibility: EligibilityRule,
        bump: u8,
    ) -> Result<Self> {
        require!(name.len() <= MAX_NAME_LEN, AllowlistError::NameTooLong);
        require!(
            winners_to_draw <= MAX_WINNERS,
            AllowlistError::ExceedWinnersCount
        );

        Ok(Self {
            raffle_id,
            name,
            authority,
            oracle,
            winners_to_draw,
            mode,
            eligibility,
            participant_count: 0,
            status: RaffleStatus::Open,
            random_seed: None,
            winner_set: None,
            bump,
        })
    }

    /// Append `identity` to the ledger and return its index
    pub fn register(
        &mut self,
        raffle_key: Pubkey,
        entry: &mut Participant,
        identity: Pubkey,
        evidence: &[[u8; 32]],
        bump: u8,
    ) -> Result<u32> {
        require!(
            self.status == RaffleStatus::Open,
            AllowlistError::InvalidState
        );
        require!(
            self.mode == PopulationMode::Ledger,
            AllowlistError::InvalidState
        );
        require!(!entry.registered, AllowlistError::AlreadyRegistered);
        require!(
            self.eligibility.authorize(&identity, evidence),
            AllowlistError::Unauthorized
        );

        let index = self.participant_count;
        let next = index
            .checked_add(1)
            .ok_or(AllowlistError::CapacityExceeded)?;

        entry.set(raffle_key, identity, index, bump);
        self.participant_count = next;

        Ok(index)
    }

    /// Fails `Unauthorized` unless `caller` is the designated oracle
    pub fn check_oracle(&self, caller: &Pubkey) -> Result<()> {
        require_keys_eq!(*caller, self.oracle, AllowlistError::Unauthorized);
        Ok(())
    }

    /// Store the oracle seed and close registration
    pub fn receive_randomness(&mut self, caller: &Pubkey, seed: [u8; 32]) -> Result<()> {
        self.check_oracle(caller)?;
        require!(self.random_seed.is_none(), AllowlistError::AlreadySeeded);
        require!(
            self.status == RaffleStatus::Open,
            AllowlistError::InvalidState
        );

        self.random_seed = Some(seed);
        self.status = RaffleStatus::Seeded;

        Ok(())
    }

    /// Draw from the registered participants. Needs K <= N.
    pub fn draw_from_ledger(&mut self) -> Result<()> {
        require!(
            self.status == RaffleStatus::Seeded,
            AllowlistError::InvalidState
        );
        require!(
            self.mode == PopulationMode::Ledger,
            AllowlistError::InvalidState
        );
        require!(
            self.winners_to_draw <= self.participant_count,
            AllowlistError::CapacityExceeded
        );

        self.record_draw(self.participant_count, self.winners_to_draw, None)
    }

    /// Draw from an off-chain list identified by `commitment`.
    ///
    /// `participant_count` is trusted as given. K is clamped to it.
    pub fn draw_from_commitment(
        &mut self,
        commitment: Vec<u8>,
        participant_count: u32,
    ) -> Result<()> {
        require!(
            self.status == RaffleStatus::Seeded,
            AllowlistError::InvalidState
        );
        require!(
            self.mode == PopulationMode::Commitment,
            AllowlistError::InvalidState
        );
        require!(
            !commitment.is_empty() && commitment.len() <= MAX_COMMITMENT_LEN,
            AllowlistError::InvalidCommitment
        );
        require!(
            participant_count > 0 || self.winners_to_draw == 0,
            AllowlistError::CapacityExceeded
        );

        let count = self.winners_to_draw.min(participant_count);
        self.record_draw(participant_count, count, Some(commitment))
    }

    fn record_draw(
        &mut self,
        population: u32,
        count: u32,
        commitment: Option<Vec<u8>>,
    ) -> Result<()> {
        let seed = self.random_seed.ok_or(AllowlistError::InvalidState)?;
        let indices = sample(&seed, population, count)?;

        self.winner_set = Some(WinnerSet {
            population,
            commitment,
            indices,
        });
        self.status = RaffleStatus::Drawn;

        Ok(())
    }

    pub fn result(&self) -> Result<&WinnerSet> {
        match (&self.status, &self.winner_set) {
            (RaffleStatus::Drawn, Some(winner_set)) => Ok(winner_set),
            _ => err!(AllowlistError::InvalidState),
        }
    }

    pub fn winners(&self) -> Result<&[u32]> {
        Ok(self.result()?.indices.as_slice())
    }

    /// Up to `limit` winners starting at `offset`, capped at
    /// `WINNERS_PAGE_LEN`. Empty once `offset` passes the end.
    pub fn winners_page(&self, offset: u32, limit: u32) -> Result<&[u32]> {
        let winners = self.winners()?;
        let start = (offset as usize).min(winners.len());
        let len = (limit.min(WINNERS_PAGE_LEN) as usize).min(winners.len() - start);
        Ok(&winners[start..start + len])
    }

    pub fn is_winner(&self, index: u32) -> Result<bool> {
        Ok(self.winners()?.contains(&index))
    }
}

/// Ledger entry for one registered identity
#[account]
#[derive(InitSpace, Default)]
pub struct Participant {
    pub raffle: Pubkey,
    pub identity: Pubkey,
    /// Sequential 0-based index assigned at registration
    pub index: u32,
    pub registered: bool,
    pub bump: u8,
}

impl Participant {
    pub const SEED_PREFIX: &'static [u8] = b"participant";

    fn set(&mut self, raffle: Pubkey, identity: Pubkey, index: u32, bump: u8) {
        self.raffle = raffle;
        self.identity = identity;
        self.index = index;
        self.registered = true;
        self.bump = bump;
    }
}

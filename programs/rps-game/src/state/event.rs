use anchor_lang::prelude::*;

use crate::{GlobalStateUpdate, RoundStatus};

#[event]
pub struct InitializeGlobalStateEvent {
    pub owner: Pubkey,
    pub fee: u64,
}

#[event]
pub struct UpdateGlobalStateEvent {
    pub owner_at_time_of_update: Pubkey,
    pub update: GlobalStateUpdate,
}

#[event]
pub struct CreateRoundEvent {
    pub round: Pubkey,
    pub round_index: u32,
    pub creator: Pubkey,
    pub deposit_amount: u64,
}

#[event]
pub struct JoinRoundEvent {
    pub round: Pubkey,
    pub opponent: Pubkey,
}

/// The move itself is left out, only the fact that a side has played.
#[event]
pub struct PlayEvent {
    pub round: Pubkey,
    pub player: Pubkey,
    pub is_creator: bool,
    pub status: RoundStatus,
}

#[event]
pub struct ClaimEvent {
    pub round: Pubkey,
    pub claimed_by: Pubkey,
    pub status: RoundStatus,
    pub winner: Option<Pubkey>,
    pub payout: u64,
    pub fee: u64,
    pub creator_refund: u64,
    pub opponent_refund: u64,
}

use anchor_lang::prelude::*;

use crate::{FEE_DENOMINATOR, MAX_FEE, RpsError};

#[account]
#[derive(InitSpace)]
pub struct GlobalState {
    /// - Owner: They control the global state and receive the fee taken from
    /// every decisive round
    pub owner: Pubkey,
    pub fee: u64, // In tenths of a percent
    pub bump: u8,
    pub vault_bump: u8,
    /// Set once by `initialize`, independent of who the owner is.
    pub initialized: bool,
}

impl GlobalState {

    pub fn new(
        owner: Pubkey,
        fee: u64,
        bump: u8,
        vault_bump: u8,
    ) -> Self {
        Self {
            owner,
            fee,
            bump,
            vault_bump,
            initialized: true,
        }
    }

    /// A freshly allocated account is zeroed, so the flag reads false until
    /// `initialize` has run.
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn is_owner(&self, owner:&Pubkey)->bool{
        self.owner.eq(owner)
    }

    pub fn get_bump(&self) -> u8 {
        self.bump
    }

    pub fn get_vault_bump(&self) -> u8 {
        self.vault_bump
    }
}

pub fn validate_fee(fee:u64) -> Result<()> {
    require_gte!(MAX_FEE, fee, RpsError::InvalidFee);
    Ok(())
}

/// The owner receives fees, the default key cannot sign for them.
pub fn validate_owner(owner:&Pubkey) -> Result<()> {
    require_keys_neq!(*owner, Pubkey::default(), RpsError::InvalidOwner);
    Ok(())
}

/// Fee taken from a pot, rounded down.
pub fn fee_for(total_pot:u64, fee:u64) -> Result<u64> {
    Ok(total_pot.
        checked_mul(fee).
        ok_or(RpsError::MathOverflow)?/FEE_DENOMINATOR)
}

#[derive(AnchorDeserialize, AnchorSerialize, Clone, Debug, PartialEq)]
pub enum GlobalStateUpdate {
    Owner(Pubkey),
    Fee(u64),
}

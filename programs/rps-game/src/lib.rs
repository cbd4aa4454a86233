use anchor_lang::prelude::*;

declare_id!("4S5kqHKSoJEPMutUhUhzcKzC3k7tFsyVnUUMHtyPXxzq");

pub mod instructions;
pub use instructions::*;

pub mod state;
pub use state::*;

pub mod utils;
pub use utils::*;

#[program]
pub mod rps_game {
    use super::*;

    /// Initializes the global program state.
    /// This makes the caller the owner, sets the fee and creates the vault that
    /// holds every deposit.
    pub fn initialize(
        ctx: Context<InitializeGlobalStateAccounts>,
        args: InitializeGlobalStateArgs
    ) -> Result<()> {
        initialize_global_state_handler(ctx, args)
    }

    /// Hands the program over to a new owner (owner only).
    pub fn update_owner(
        ctx: Context<UpdateGlobalStateAccounts>,
        new_owner: Pubkey,
    ) -> Result<()> {
        update_global_state_handler(ctx, GlobalStateUpdate::Owner(new_owner))
    }

    /// Changes the fee taken from decisive rounds (owner only), rounds settled
    /// from then on use the new fee.
    pub fn update_fee(
        ctx: Context<UpdateGlobalStateAccounts>,
        new_fee: u64,
    ) -> Result<()> {
        update_global_state_handler(ctx, GlobalStateUpdate::Fee(new_fee))
    }

    /// Opens a round and moves the creator's stake into the vault.
    pub fn create_round(
        ctx: Context<CreateRoundAccounts>,
        args: CreateRoundArgs,
    ) -> Result<()> {
        create_round_handler(ctx, args)
    }

    /// Joins an open round, matching the creator's stake.
    pub fn join_round(
        ctx: Context<JoinRoundAccounts>,
        args: JoinRoundArgs,
    ) -> Result<()> {
        join_round_handler(ctx, args)
    }

    /// Records a player's move, each side can play exactly once.
    pub fn play(
        ctx: Context<PlayAccounts>,
        args: PlayArgs,
    ) -> Result<()> {
        play_handler(ctx, args)
    }

    /// Settles a round, paying the winner and the fee, or refunding the stakes
    /// on a tie or once the round has timed out. A round settles only once.
    pub fn claim(
        ctx: Context<ClaimAccounts>,
        args: ClaimArgs,
    ) -> Result<()> {
        claim_handler(ctx, args)
    }
}

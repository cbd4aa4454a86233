use anchor_lang::prelude::*;
use crate::{
    GLOBAL_STATE_SEED, GlobalState, InitializeGlobalStateEvent, RpsError, VAULT_SEED, validate_fee
};


/// Arguments for initializing the global state.
/// - fee: The cut taken from the pot of every decisive round, in tenths of a
///   percent (25 => 2.5%), it can be changed later by the owner.
#[derive(AnchorDeserialize, AnchorSerialize, Clone)]
pub struct InitializeGlobalStateArgs {
    pub fee: u64,
}

#[derive(Accounts)]
#[instruction(args: InitializeGlobalStateArgs)]
pub struct InitializeGlobalStateAccounts<'info> {
    // Loaded if it already exists so a second call can be rejected with
    // a proper error in the checks.
    #[account(
        init_if_needed,
        payer = owner,
        space = 8 + GlobalState::INIT_SPACE,
        seeds = [GLOBAL_STATE_SEED],
        bump
    )]
    pub global_state: Account<'info, GlobalState>,

    /// The initializer becomes the owner of the program.
    #[account(
        mut
    )]
    pub owner: Signer<'info>,

    /// CHECK: The vault holding every deposit, it has no data.
    #[account(
        init_if_needed,
        space = 0,
        payer = owner,
        seeds = [VAULT_SEED],
        bump
    )]
    pub vault: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
}

#[inline(always)]
fn checks(
    ctx: &Context<InitializeGlobalStateAccounts>,
    args: &InitializeGlobalStateArgs,
)->Result<()>{
    require!(
        !ctx.accounts.global_state.is_initialized(),
        RpsError::AlreadyInitialized
    );

    validate_fee(args.fee)?;

    Ok(())
}


pub fn initialize_global_state_handler(
    ctx: Context<InitializeGlobalStateAccounts>,
    args: InitializeGlobalStateArgs
) -> Result<()> {

    checks(&ctx, &args)?;

    let global_state = &mut ctx.accounts.global_state;

    global_state.set_inner(GlobalState::new(
        ctx.accounts.owner.key(),
        args.fee,
        ctx.bumps.global_state,
        ctx.bumps.vault,
    ));

    emit!(
        InitializeGlobalStateEvent{
            owner:ctx.accounts.owner.key(),
            fee:args.fee
        }
    );

    Ok(())
}

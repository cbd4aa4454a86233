use anchor_lang::prelude::*;

use crate::{GLOBAL_STATE_SEED, GlobalState, GlobalStateUpdate, RpsError, UpdateGlobalStateEvent, validate_fee, validate_owner};


#[derive(Accounts)]
pub struct UpdateGlobalStateAccounts<'info> {
    #[account(
        mut,
        seeds = [GLOBAL_STATE_SEED],
        bump = global_state.get_bump()
    )]
    pub global_state: Account<'info, GlobalState>,

    /// Only the owner can update the global state.
    pub owner: Signer<'info>,
}

#[inline(always)]
fn checks(
    ctx: &Context<UpdateGlobalStateAccounts>,
    update: &GlobalStateUpdate,
)->Result<()>{
    // Only the current owner can update the global state.
    require!(
        ctx.accounts.global_state.is_owner(ctx.accounts.owner.key),
        RpsError::Unauthorized
    );

    match update {
        GlobalStateUpdate::Owner(new_owner) => validate_owner(new_owner)?,
        GlobalStateUpdate::Fee(new_fee) => validate_fee(*new_fee)?,
    }

    Ok(())
}

pub fn update_global_state_handler(
    ctx: Context<UpdateGlobalStateAccounts>,
    update: GlobalStateUpdate,
) -> Result<()> {

    checks(&ctx, &update)?;

    let global_state = &mut ctx.accounts.global_state;

    match update {
        GlobalStateUpdate::Owner(new_owner) => {
            global_state.owner = new_owner;
        }
        GlobalStateUpdate::Fee(new_fee) => {
            global_state.fee = new_fee;
        }
    }

    emit!(
        UpdateGlobalStateEvent{
            owner_at_time_of_update:ctx.accounts.owner.key(),
            update
        }
    );

    Ok(())
}

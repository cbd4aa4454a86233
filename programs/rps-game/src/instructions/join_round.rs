use anchor_lang::{
    prelude::*,
    system_program::{
        Transfer,
        transfer
    }
};

use crate::{
    GLOBAL_STATE_SEED, GlobalState, JoinRoundEvent, ROUND_SEED, Round, RpsError, VAULT_SEED
};

#[derive(AnchorDeserialize, AnchorSerialize, Clone, Default)]
pub struct JoinRoundArgs {
    pub round_index: u32,
}

#[derive(Accounts)]
#[instruction(args: JoinRoundArgs)]
pub struct JoinRoundAccounts<'info> {
    #[account(
        mut,
        seeds = [ROUND_SEED, args.round_index.to_le_bytes().as_ref(), creator.key().as_ref()],
        bump = round.bump
    )]
    pub round: Account<'info, Round>,

    /// CHECK: Only used to derive the round's address.
    pub creator: UncheckedAccount<'info>,

    #[account(
        mut
    )]
    pub opponent: Signer<'info>,

    /// CHECK: This is the global vault account.
    #[account(
        mut,
        seeds = [VAULT_SEED],
        bump = global_state.get_vault_bump()
    )]
    pub vault: UncheckedAccount<'info>,

    #[account(
        seeds = [GLOBAL_STATE_SEED],
        bump = global_state.get_bump()
    )]
    pub global_state: Account<'info, GlobalState>,

    pub system_program: Program<'info, System>,
}

#[inline(always)]
fn checks(ctx: &Context<JoinRoundAccounts>)->Result<()>{
    require!(
        ctx.accounts.round.is_created_by(ctx.accounts.creator.key),
        RpsError::RoundNotFound
    );

    Ok(())
}

pub fn join_round_handler(
    ctx: Context<JoinRoundAccounts>,
    _args: JoinRoundArgs,
) -> Result<()> {

    checks(&ctx)?;

    let now = Clock::get()?.unix_timestamp;

    // Validates the status and that the creator is not joining themselves.
    ctx.accounts.round.join(ctx.accounts.opponent.key(), now)?;

    // The opponent matches the creator's stake, it is never chosen by them.
    transfer(
        CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            Transfer{
                from: ctx.accounts.opponent.to_account_info(),
                to: ctx.accounts.vault.to_account_info()
            }
        ),
        ctx.accounts.round.deposit_amount
    )?;

    emit!(
        JoinRoundEvent{
            round:ctx.accounts.round.key(),
            opponent:ctx.accounts.opponent.key()
        }
    );

    Ok(())
}

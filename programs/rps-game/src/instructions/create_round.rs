use anchor_lang::{
    prelude::*,
    system_program::{
        Transfer,
        transfer
    }
};

use crate::{
    CreateRoundEvent, GLOBAL_STATE_SEED, GlobalState, ROUND_SEED, Round, RpsError, VAULT_SEED
};

/// Arguments for opening a new round.
/// - round_index: Picked by the creator, together with the creator's key it
///   identifies the round.
/// - deposit_amount: The stake in lamports, the opponent has to match it.
#[derive(AnchorDeserialize, AnchorSerialize, Clone, Default)]
pub struct CreateRoundArgs {
    pub round_index: u32,
    pub deposit_amount: u64,
}


#[derive(Accounts)]
#[instruction(args: CreateRoundArgs)]
pub struct CreateRoundAccounts<'info> {
    // Loaded if it already exists so that reusing an index is reported as such.
    #[account(
        init_if_needed,
        payer = creator,
        space = 8 + Round::INIT_SPACE,
        seeds = [ROUND_SEED, args.round_index.to_le_bytes().as_ref(), creator.key().as_ref()],
        bump
    )]
    pub round: Account<'info, Round>,

    #[account(
        mut
    )]
    pub creator: Signer<'info>,

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
fn checks(
    ctx: &Context<CreateRoundAccounts>,
    args: &CreateRoundArgs,
)-> Result<()>{

    require!(
        !ctx.accounts.round.exists(),
        RpsError::RoundAlreadyExists
    );

    require_gt!(
        args.deposit_amount,
        0,
        RpsError::InvalidDepositAmount
    );

    Ok(())
}

pub fn create_round_handler(
    ctx: Context<CreateRoundAccounts>,
    args: CreateRoundArgs,
) -> Result<()> {

    checks(&ctx, &args)?;

    let now = Clock::get()?.unix_timestamp;

    ctx.accounts.round.set_inner(Round::new(
        args.round_index,
        ctx.accounts.creator.key(),
        args.deposit_amount,
        now,
        ctx.bumps.round,
    ));

    transfer(
        CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            Transfer{
                from: ctx.accounts.creator.to_account_info(),
                to: ctx.accounts.vault.to_account_info()
            }
        ),
        args.deposit_amount
    )?;

    emit!(
        CreateRoundEvent{
            round:ctx.accounts.round.key(),
            round_index:args.round_index,
            creator:ctx.accounts.creator.key(),
            deposit_amount:args.deposit_amount
        }
    );

    Ok(())
}

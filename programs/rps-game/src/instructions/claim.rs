use anchor_lang::prelude::*;

use crate::{
    ClaimEvent, GLOBAL_STATE_SEED, GlobalState, ROUND_SEED, Round, RpsError, VAULT_SEED, transfer_from_vault
};

/// Arguments for settling a round.
/// - round_index: The index the creator opened the round with.
/// - is_creator_claiming: Which side of the round the signer is on, either
///   side can settle and the funds go to whoever they are owed to.
#[derive(AnchorDeserialize, AnchorSerialize, Clone, Default)]
pub struct ClaimArgs {
    pub round_index:u32,
    pub is_creator_claiming:bool
}

#[derive(Accounts)]
#[instruction(args: ClaimArgs)]
pub struct ClaimAccounts<'info> {
    #[account(
        mut,
        seeds = [ROUND_SEED, args.round_index.to_le_bytes().as_ref(), creator.key().as_ref()],
        bump = round.bump
    )]
    pub round: Account<'info, Round>,

    pub claimer: Signer<'info>,

    /// CHECK: The round's creator, it is part of the round's seeds.
    #[account(
        mut
    )]
    pub creator: UncheckedAccount<'info>,

    /// CHECK: The round's opponent, checked against the round, omitted when
    /// nobody joined the round.
    #[account(
        mut
    )]
    pub opponent: Option<UncheckedAccount<'info>>,

    /// CHECK: Receives the fee, it must be the current owner.
    #[account(
        mut,
        address = global_state.owner @ RpsError::Unauthorized
    )]
    pub owner: UncheckedAccount<'info>,

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
}

impl<'info> ClaimAccounts<'info> {
    fn opponent_info(&self) -> Result<AccountInfo<'info>> {
        self.opponent.
            as_ref().
            map(|opponent| opponent.to_account_info()).
            ok_or(RpsError::InvalidParticipantAccount.into())
    }
}

#[inline(always)]
fn checks(
    ctx: &Context<ClaimAccounts>,
    args: &ClaimArgs,
)->Result<()>{
    let round = &ctx.accounts.round;

    require!(
        round.is_created_by(ctx.accounts.creator.key),
        RpsError::RoundNotFound
    );

    // Every later call lands here, whoever makes it.
    require!(
        !round.settled,
        RpsError::AlreadySettled
    );

    require!(
        round.is_participant(ctx.accounts.claimer.key, args.is_creator_claiming),
        RpsError::Unauthorized
    );

    // Once joined the opponent may be owed funds so their account has to be
    // the one on record.
    if let Some(opponent) = round.opponent {
        let opponent_account = ctx.accounts.opponent.
            as_ref().
            ok_or(RpsError::InvalidParticipantAccount)?;

        require_keys_eq!(
            opponent,
            opponent_account.key(),
            RpsError::InvalidParticipantAccount
        );
    }

    Ok(())
}

pub fn claim_handler(
    ctx:Context<ClaimAccounts>,
    args:ClaimArgs
)->Result<()>{

    checks(&ctx, &args)?;

    let now = Clock::get()?.unix_timestamp;

    let settlement = ctx.accounts.round.settlement(ctx.accounts.global_state.fee, now)?;

    // The vault has no data, anything above the rent for an empty account
    // is escrowed stake.
    let rent_minimum = Rent::get()?.minimum_balance(0);

    let vault = ctx.accounts.vault.to_account_info();

    require_gte!(
        vault.lamports().saturating_sub(rent_minimum),
        settlement.total()?,
        RpsError::InsufficientVaultBalance
    );

    let creator = ctx.accounts.creator.to_account_info();

    transfer_from_vault(&vault, &creator, settlement.creator_refund, rent_minimum)?;

    if settlement.opponent_refund > 0 {
        transfer_from_vault(&vault, &ctx.accounts.opponent_info()?, settlement.opponent_refund, rent_minimum)?;
    }

    if let Some(winner) = settlement.winner {
        let winner_info = if winner.eq(creator.key) {
            creator.clone()
        } else {
            ctx.accounts.opponent_info()?
        };

        transfer_from_vault(&vault, &winner_info, settlement.payout, rent_minimum)?;

        transfer_from_vault(&vault, &ctx.accounts.owner.to_account_info(), settlement.fee, rent_minimum)?;
    }

    ctx.accounts.round.settle(&settlement)?;

    msg!(
        "Round {} settled as {:?}",
        ctx.accounts.round.round_index,
        settlement.status
    );

    emit!(
        ClaimEvent{
            round:ctx.accounts.round.key(),
            claimed_by:ctx.accounts.claimer.key(),
            status:settlement.status,
            winner:settlement.winner,
            payout:settlement.payout,
            fee:settlement.fee,
            creator_refund:settlement.creator_refund,
            opponent_refund:settlement.opponent_refund
        }
    );

    Ok(())
}

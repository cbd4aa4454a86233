use anchor_lang::prelude::*;

use crate::{PlayEvent, ROUND_SEED, Round, RpsError};

/// - is_creator: Which side of the round the signer is playing.
/// - player_move: 1 (rock), 2 (paper) or 3 (scissors).
#[derive(AnchorDeserialize, AnchorSerialize, Clone, Default)]
pub struct PlayArgs{
    pub round_index:u32,
    pub is_creator:bool,
    pub player_move:u8
}

#[derive(Accounts)]
#[instruction(args: PlayArgs)]
pub struct PlayAccounts<'info>{
    #[account(
        mut,
        seeds = [ROUND_SEED, args.round_index.to_le_bytes().as_ref(), creator.key().as_ref()],
        bump = round.bump
    )]
    pub round:Account<'info, Round>,

    /// CHECK: Only used to derive the round's address.
    pub creator:UncheckedAccount<'info>,

    pub player:Signer<'info>,
}

#[inline(always)]
fn checks(ctx:&Context<PlayAccounts>)->Result<()>{

    require!(
        ctx.accounts.round.is_created_by(ctx.accounts.creator.key),
        RpsError::RoundNotFound
    );

    Ok(())
}


pub fn play_handler(ctx:Context<PlayAccounts>, args:PlayArgs)->Result<()>{
    checks(&ctx)?;

    let now = Clock::get()?.unix_timestamp;

    // The move slot can only be written once, the round checks the player,
    // the move and the play window.
    ctx.accounts.round.play(
        ctx.accounts.player.key,
        args.is_creator,
        args.player_move,
        now
    )?;

    emit!(
        PlayEvent{
            round:ctx.accounts.round.key(),
            player:ctx.accounts.player.key(),
            is_creator:args.is_creator,
            status:ctx.accounts.round.status
        }
    );

    Ok(())
}

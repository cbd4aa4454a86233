use anchor_lang::prelude::*;

use crate::{ROUND_TIMEOUT, RpsError, fee_for};


#[derive(AnchorDeserialize, AnchorSerialize, InitSpace, Clone, Copy, PartialEq, Eq, Debug)]
pub enum Move{
    Rock,
    Paper,
    Scissors
}

impl Move{
    /// Rock beats scissors, scissors beats paper, paper beats rock.
    pub fn beats(self, other:Move)->bool{
        matches!(
            (self, other),
            (Move::Rock, Move::Scissors) |
            (Move::Scissors, Move::Paper) |
            (Move::Paper, Move::Rock)
        )
    }
}

impl TryFrom<u8> for Move{
    type Error = Error;

    fn try_from(value:u8)->Result<Self>{
        match value{
            1 => Ok(Move::Rock),
            2 => Ok(Move::Paper),
            3 => Ok(Move::Scissors),
            _ => Err(RpsError::InvalidMove.into())
        }
    }
}

#[derive(AnchorDeserialize, AnchorSerialize, InitSpace, Clone, Copy, PartialEq, Eq, Debug)]
pub enum RoundStatus{
    Created,
    Joined,
    CreatorPlayed,
    OpponentPlayed,
    BothPlayed,
    Resolved,
    Refunded
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Outcome{
    CreatorWins,
    OpponentWins,
    Tie
}

impl Outcome{
    pub fn of(creator_move:Move, opponent_move:Move)->Self{
        if creator_move.beats(opponent_move){
            Outcome::CreatorWins
        } else if opponent_move.beats(creator_move){
            Outcome::OpponentWins
        } else {
            Outcome::Tie
        }
    }
}

/// The transfers a claim performs out of the vault, all computed from a
/// single round.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Settlement{
    pub status:RoundStatus,
    pub winner:Option<Pubkey>,
    /// Paid to the winner on a decisive outcome.
    pub payout:u64,
    /// Paid to the owner on a decisive outcome.
    pub fee:u64,
    pub creator_refund:u64,
    pub opponent_refund:u64,
}

impl Settlement{
    pub fn total(&self)->Result<u64>{
        [self.fee, self.creator_refund, self.opponent_refund].iter().
            try_fold(self.payout, |acc, amount| acc.checked_add(*amount)).
            ok_or(RpsError::MathOverflow.into())
    }
}

#[account]
#[derive(InitSpace, Debug)]
/// Represents a single wagered match between a creator and an opponent.
pub struct Round{
    pub round_index:u32,
    pub creator:Pubkey,
    /// Unset until someone joins the round
    pub opponent:Option<Pubkey>,
    /// The stake each player puts into the vault.
    pub deposit_amount:u64,
    pub creator_move:Option<Move>,
    pub opponent_move:Option<Move>,
    pub status:RoundStatus,
    pub created_at:i64,
    pub joined_at:i64,
    /// Flips once, in the same instruction that moves the funds out of the vault.
    pub settled:bool,
    /// Set on a decisive outcome, kept as a receipt.
    pub winner:Option<Pubkey>,
    pub bump:u8,
}

impl Round{
    pub fn new(
        round_index:u32,
        creator:Pubkey,
        deposit_amount:u64,
        now:i64,
        bump:u8,
    ) -> Self{
        Self{
            round_index,
            creator,
            opponent:None,
            deposit_amount,
            creator_move:None,
            opponent_move:None,
            status:RoundStatus::Created,
            created_at:now,
            joined_at:0,
            settled:false,
            winner:None,
            bump,
        }
    }

    /// A freshly allocated round is zeroed, so the default creator marks it
    /// as not yet created.
    pub fn exists(&self)->bool{
        self.creator.ne(&Pubkey::default())
    }

    pub fn is_created_by(&self, creator:&Pubkey)->bool{
        self.exists() && self.creator.eq(creator)
    }

    /// The identity on record for the given side, if any.
    pub fn participant(&self, is_creator:bool)->Option<Pubkey>{
        if is_creator{
            Some(self.creator)
        } else {
            self.opponent
        }
    }

    pub fn is_participant(&self, player:&Pubkey, is_creator:bool)->bool{
        self.participant(is_creator).is_some_and(|participant| participant.eq(player))
    }

    pub fn is_playable(&self)->bool{
        matches!(
            self.status,
            RoundStatus::Joined | RoundStatus::CreatorPlayed | RoundStatus::OpponentPlayed
        )
    }

    fn timeout_from(&self)->i64{
        if self.status == RoundStatus::Created{
            self.created_at
        } else {
            self.joined_at
        }
    }

    pub fn has_timed_out(&self, now:i64)->bool{
        now.gt(&self.timeout_from().saturating_add(ROUND_TIMEOUT))
    }

    pub fn join(&mut self, opponent:Pubkey, now:i64)->Result<()>{
        require!(
            self.status == RoundStatus::Created && self.opponent.is_none(),
            RpsError::RoundNotJoinable
        );

        require_keys_neq!(
            self.creator,
            opponent,
            RpsError::CannotJoinOwnRound
        );

        self.opponent = Some(opponent);
        self.joined_at = now;
        self.status = RoundStatus::Joined;
        Ok(())
    }

    pub fn play(
        &mut self,
        player:&Pubkey,
        is_creator:bool,
        player_move:u8,
        now:i64,
    )->Result<()>{
        require!(
            self.is_participant(player, is_creator),
            RpsError::Unauthorized
        );

        let player_move = Move::try_from(player_move)?;

        let slot = if is_creator{
            &self.creator_move
        } else {
            &self.opponent_move
        };

        // Checked ahead of the status so a resubmission is always reported as
        // such, whatever the round has moved on to.
        require!(slot.is_none(), RpsError::AlreadyPlayed);

        require!(self.is_playable(), RpsError::RoundNotPlayable);

        require!(!self.has_timed_out(now), RpsError::PlayWindowClosed);

        if is_creator{
            self.creator_move = Some(player_move);
        } else {
            self.opponent_move = Some(player_move);
        }

        self.status = match (self.creator_move, self.opponent_move){
            (Some(_), Some(_)) => RoundStatus::BothPlayed,
            (Some(_), None) => RoundStatus::CreatorPlayed,
            (None, Some(_)) => RoundStatus::OpponentPlayed,
            // One of the slots was just written
            (None, None) => return Err(RpsError::RoundNotPlayable.into()),
        };

        Ok(())
    }

    /// Works out who is owed what, without touching the round.
    pub fn settlement(&self, fee:u64, now:i64)->Result<Settlement>{
        require!(!self.settled, RpsError::AlreadySettled);

        match (self.status, self.creator_move, self.opponent_move, self.opponent){
            (RoundStatus::BothPlayed, Some(creator_move), Some(opponent_move), Some(opponent)) => {
                let winner = match Outcome::of(creator_move, opponent_move){
                    Outcome::CreatorWins => self.creator,
                    Outcome::OpponentWins => opponent,
                    Outcome::Tie => return Ok(Settlement{
                        status:RoundStatus::Resolved,
                        winner:None,
                        payout:0,
                        fee:0,
                        creator_refund:self.deposit_amount,
                        opponent_refund:self.deposit_amount,
                    }),
                };

                let total_pot = self.deposit_amount.
                    checked_mul(2).
                    ok_or(RpsError::MathOverflow)?;

                let fee = fee_for(total_pot, fee)?;

                let payout = total_pot.
                    checked_sub(fee).
                    ok_or(RpsError::MathOverflow)?;

                Ok(Settlement{
                    status:RoundStatus::Resolved,
                    winner:Some(winner),
                    payout,
                    fee,
                    creator_refund:0,
                    opponent_refund:0,
                })
            },

            (RoundStatus::Created, ..) => {
                require!(self.has_timed_out(now), RpsError::TooSoonToClaim);

                Ok(Settlement{
                    status:RoundStatus::Refunded,
                    winner:None,
                    payout:0,
                    fee:0,
                    creator_refund:self.deposit_amount,
                    opponent_refund:0,
                })
            },

            (RoundStatus::Joined | RoundStatus::CreatorPlayed | RoundStatus::OpponentPlayed, ..) => {
                require!(self.has_timed_out(now), RpsError::TooSoonToClaim);

                // Both stakes are in the vault once the round is joined, whoever
                // did or did not play gets their own stake back.
                Ok(Settlement{
                    status:RoundStatus::Refunded,
                    winner:None,
                    payout:0,
                    fee:0,
                    creator_refund:self.deposit_amount,
                    opponent_refund:self.deposit_amount,
                })
            },

            _ => Err(RpsError::TooSoonToClaim.into())
        }
    }

    pub fn settle(&mut self, settlement:&Settlement)->Result<()>{
        require!(!self.settled, RpsError::AlreadySettled);

        self.status = settlement.status;
        self.winner = settlement.winner;
        self.settled = true;
        Ok(())
    }
}

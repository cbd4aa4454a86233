use anchor_lang::prelude::*;

use crate::{GLOBAL_STATE_SEED, ROUND_SEED, VAULT_SEED};

/// Seeds for a round, the creator's key and the index form the key so no two
/// creators can collide on an index.
pub fn round_seeds<'a>(round_index_bytes:&'a [u8;4], creator:&'a Pubkey)->[&'a [u8];3]{
    [ROUND_SEED, round_index_bytes.as_ref(), creator.as_ref()]
}

pub fn global_state_address()->(Pubkey, u8){
    Pubkey::find_program_address(&[GLOBAL_STATE_SEED], &crate::ID)
}

pub fn vault_address()->(Pubkey, u8){
    Pubkey::find_program_address(&[VAULT_SEED], &crate::ID)
}

pub fn round_address(round_index:u32, creator:&Pubkey)->(Pubkey, u8){
    let round_index_bytes = round_index.to_le_bytes();

    Pubkey::find_program_address(&round_seeds(&round_index_bytes, creator), &crate::ID)
}

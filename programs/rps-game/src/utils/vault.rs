use anchor_lang::prelude::*;

use crate::RpsError;

/// Moves lamports out of the program owned vault, the vault must keep its
/// rent exempt minimum so only the balance above it can be paid out.
pub fn transfer_from_vault<'info>(
    vault:&AccountInfo<'info>,
    to:&AccountInfo<'info>,
    amount:u64,
    rent_minimum:u64,
)->Result<()>{
    if amount == 0 {
        return Ok(());
    }

    let available = vault.lamports().saturating_sub(rent_minimum);

    require_gte!(
        available,
        amount,
        RpsError::InsufficientVaultBalance
    );

    **vault.try_borrow_mut_lamports()? -= amount;

    let balance = to.lamports().
        checked_add(amount).
        ok_or(RpsError::MathOverflow)?;

    **to.try_borrow_mut_lamports()? = balance;

    Ok(())
}

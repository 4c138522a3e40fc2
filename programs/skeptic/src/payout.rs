use anchor_lang::prelude::*;

use crate::errors::SkepticError;

/// How a resolved lobby's vault is split.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settlement {
    /// Paid to each verified member (their stake plus a share of the forfeits).
    pub payout_per_winner: u64,
    /// Paid once to the charity wallet.
    pub charity_amount: u64,
}

/// Parimutuel split: forfeited stakes are halved between charity and the
/// verified members. Rounding dust goes to charity so the vault empties.
pub fn settle(entry_fee: u64, member_count: u16, verified_count: u16) -> Result<Settlement> {
    require!(verified_count <= member_count, SkepticError::MathOverflow);

    let losers = member_count
        .checked_sub(verified_count)
        .ok_or(SkepticError::MathOverflow)?;
    let forfeited = (losers as u64)
        .checked_mul(entry_fee)
        .ok_or(SkepticError::MathOverflow)?;

    if verified_count == 0 {
        return Ok(Settlement {
            payout_per_winner: 0,
            charity_amount: forfeited,
        });
    }

    let charity_half = forfeited / 2;
    let reward_pool = forfeited
        .checked_sub(charity_half)
        .ok_or(SkepticError::MathOverflow)?;
    let bonus = reward_pool / verified_count as u64;
    let dust = reward_pool % verified_count as u64;

    Ok(Settlement {
        payout_per_winner: entry_fee
            .checked_add(bonus)
            .ok_or(SkepticError::MathOverflow)?,
        charity_amount: charity_half
            .checked_add(dust)
            .ok_or(SkepticError::MathOverflow)?,
    })
}

use anchor_lang::prelude::*;

use crate::errors::SkepticError;
use crate::events::MarketResolved;
use crate::payout;
use crate::state::Lobby;

#[derive(Accounts)]
pub struct ResolveMarket<'info> {
    #[account(
        mut,
        seeds = [Lobby::SEED, lobby.authority.as_ref(), lobby.lobby_id.to_le_bytes().as_ref()],
        bump = lobby.bump,
        constraint = !lobby.resolved @ SkepticError::AlreadyResolved,
    )]
    pub lobby: Account<'info, Lobby>,

    /// Anyone can resolve once the market closes (permissionless).
    pub caller: Signer<'info>,
}

pub fn handler(ctx: Context<ResolveMarket>) -> Result<()> {
    let clock = Clock::get()?;
    let lobby = &mut ctx.accounts.lobby;

    require!(
        !lobby.is_open(clock.unix_timestamp),
        SkepticError::MarketNotClosed
    );

    let settlement = payout::settle(lobby.entry_fee, lobby.member_count, lobby.verified_count)?;
    lobby.resolved = true;

    msg!("Market resolved. Total pot: {}", lobby.total_pot);

    emit!(MarketResolved {
        lobby: lobby.key(),
        total_pot: lobby.total_pot,
        member_count: lobby.member_count,
        verified_count: lobby.verified_count,
        payout_per_winner: settlement.payout_per_winner,
        charity_amount: settlement.charity_amount,
    });

    Ok(())
}

use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::errors::SkepticError;
use crate::events::WinningsClaimed;
use crate::payout;
use crate::state::{Lobby, PlayerStatus};

#[derive(Accounts)]
pub struct ClaimWinnings<'info> {
    #[account(
        mut,
        seeds = [Lobby::SEED, lobby.authority.as_ref(), lobby.lobby_id.to_le_bytes().as_ref()],
        bump = lobby.bump,
        constraint = lobby.resolved @ SkepticError::NotResolved,
    )]
    pub lobby: Account<'info, Lobby>,

    #[account(
        mut,
        seeds = [PlayerStatus::SEED, lobby.key().as_ref(), player.key().as_ref()],
        bump = player_status.bump,
        constraint = player_status.is_verified @ SkepticError::NotVerified,
        constraint = !player_status.has_claimed @ SkepticError::AlreadyClaimed,
    )]
    pub player_status: Account<'info, PlayerStatus>,

    #[account(
        mut,
        constraint = vault.key() == lobby.vault,
    )]
    pub vault: Account<'info, TokenAccount>,

    /// Winner's stake token account.
    #[account(
        mut,
        constraint = player_token_account.owner == player.key(),
        constraint = player_token_account.mint == vault.mint,
    )]
    pub player_token_account: Account<'info, TokenAccount>,

    pub player: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

pub fn handler(ctx: Context<ClaimWinnings>) -> Result<()> {
    let lobby = &ctx.accounts.lobby;
    let settlement = payout::settle(lobby.entry_fee, lobby.member_count, lobby.verified_count)?;

    // Lobby PDA signs for its vault.
    let lobby_id_bytes = lobby.lobby_id.to_le_bytes();
    let bump_bytes = [lobby.bump];
    let signer_seeds: &[&[&[u8]]] = &[&[
        Lobby::SEED,
        lobby.authority.as_ref(),
        &lobby_id_bytes,
        &bump_bytes,
    ]];

    let transfer_to_winner = CpiContext::new_with_signer(
        ctx.accounts.token_program.to_account_info(),
        Transfer {
            from: ctx.accounts.vault.to_account_info(),
            to: ctx.accounts.player_token_account.to_account_info(),
            authority: ctx.accounts.lobby.to_account_info(),
        },
        signer_seeds,
    );
    token::transfer(transfer_to_winner, settlement.payout_per_winner)?;

    let lobby_key = ctx.accounts.lobby.key();
    let lobby = &mut ctx.accounts.lobby;
    lobby.claimed_count = lobby
        .claimed_count
        .checked_add(1)
        .ok_or(SkepticError::MathOverflow)?;
    ctx.accounts.player_status.has_claimed = true;

    msg!("Payout claimed: {}", settlement.payout_per_winner);

    emit!(WinningsClaimed {
        lobby: lobby_key,
        player: ctx.accounts.player.key(),
        payout: settlement.payout_per_winner,
    });

    Ok(())
}

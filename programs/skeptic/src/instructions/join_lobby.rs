use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::errors::SkepticError;
use crate::events::PlayerJoined;
use crate::state::{Lobby, PlayerStatus};

#[derive(Accounts)]
pub struct JoinLobby<'info> {
    #[account(
        mut,
        seeds = [Lobby::SEED, lobby.authority.as_ref(), lobby.lobby_id.to_le_bytes().as_ref()],
        bump = lobby.bump,
    )]
    pub lobby: Account<'info, Lobby>,

    /// One status per (lobby, player); `init` rejects a second join.
    #[account(
        init,
        payer = player,
        space = 8 + PlayerStatus::INIT_SPACE,
        seeds = [PlayerStatus::SEED, lobby.key().as_ref(), player.key().as_ref()],
        bump,
    )]
    pub player_status: Account<'info, PlayerStatus>,

    /// Player's stake token account.
    #[account(
        mut,
        constraint = player_token_account.owner == player.key(),
        constraint = player_token_account.mint == vault.mint,
    )]
    pub player_token_account: Account<'info, TokenAccount>,

    #[account(
        mut,
        constraint = vault.key() == lobby.vault,
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(mut)]
    pub player: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<JoinLobby>) -> Result<()> {
    let clock = Clock::get()?;
    let lobby = &mut ctx.accounts.lobby;

    require!(lobby.is_open(clock.unix_timestamp), SkepticError::MarketClosed);

    let transfer_ctx = CpiContext::new(
        ctx.accounts.token_program.to_account_info(),
        Transfer {
            from: ctx.accounts.player_token_account.to_account_info(),
            to: ctx.accounts.vault.to_account_info(),
            authority: ctx.accounts.player.to_account_info(),
        },
    );
    token::transfer(transfer_ctx, lobby.entry_fee)?;

    lobby.total_pot = lobby
        .total_pot
        .checked_add(lobby.entry_fee)
        .ok_or(SkepticError::MathOverflow)?;
    lobby.member_count = lobby
        .member_count
        .checked_add(1)
        .ok_or(SkepticError::LobbyFull)?;

    let status = &mut ctx.accounts.player_status;
    status.player = ctx.accounts.player.key();
    status.lobby = lobby.key();
    status.has_deposited = true;
    status.is_verified = false;
    status.has_claimed = false;
    status.joined_at = clock.unix_timestamp;
    status.bump = ctx.bumps.player_status;

    emit!(PlayerJoined {
        lobby: lobby.key(),
        player: status.player,
        amount: lobby.entry_fee,
        total_pot: lobby.total_pot,
    });

    Ok(())
}

use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::errors::SkepticError;
use crate::events::LobbyCreated;
use crate::state::Lobby;

#[derive(Accounts)]
#[instruction(lobby_id: u64)]
pub struct CreateLobby<'info> {
    #[account(
        init,
        payer = authority,
        space = 8 + Lobby::INIT_SPACE,
        seeds = [Lobby::SEED, authority.key().as_ref(), lobby_id.to_le_bytes().as_ref()],
        bump,
    )]
    pub lobby: Account<'info, Lobby>,

    /// Stake vault owned by the lobby PDA.
    #[account(
        init,
        payer = authority,
        seeds = [Lobby::VAULT_SEED, lobby.key().as_ref()],
        bump,
        token::mint = stake_mint,
        token::authority = lobby,
    )]
    pub vault: Account<'info, TokenAccount>,

    /// Stake mint (USDC on devnet or mainnet).
    pub stake_mint: Account<'info, Mint>,

    #[account(mut)]
    pub authority: Signer<'info>,

    /// CHECK: Charity wallet that receives half of the forfeited stakes.
    pub charity_wallet: UncheckedAccount<'info>,

    /// CHECK: Verification agent allowed to call `verify_task`.
    pub verifier: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
    pub token_program: Program<'info, Token>,
}

pub fn handler(
    ctx: Context<CreateLobby>,
    lobby_id: u64,
    task_description: String,
    entry_fee: u64,
    market_close: i64,
) -> Result<()> {
    require!(entry_fee > 0, SkepticError::InvalidEntryFee);
    require!(
        !task_description.trim().is_empty(),
        SkepticError::TaskDescriptionEmpty
    );
    require!(
        task_description.len() <= Lobby::MAX_TASK_LEN,
        SkepticError::TaskDescriptionTooLong
    );

    let clock = Clock::get()?;
    require!(
        market_close > clock.unix_timestamp,
        SkepticError::MarketCloseInPast
    );

    let lobby = &mut ctx.accounts.lobby;
    lobby.authority = ctx.accounts.authority.key();
    lobby.lobby_id = lobby_id;
    lobby.task_description = task_description;
    lobby.entry_fee = entry_fee;
    lobby.charity_wallet = ctx.accounts.charity_wallet.key();
    lobby.verifier = ctx.accounts.verifier.key();
    lobby.vault = ctx.accounts.vault.key();
    lobby.market_close = market_close;
    lobby.total_pot = 0;
    lobby.member_count = 0;
    lobby.verified_count = 0;
    lobby.claimed_count = 0;
    lobby.resolved = false;
    lobby.charity_released = false;
    lobby.bump = ctx.bumps.lobby;

    emit!(LobbyCreated {
        lobby: lobby.key(),
        authority: lobby.authority,
        lobby_id,
        entry_fee,
        market_close,
    });

    Ok(())
}

use anchor_lang::prelude::*;

use crate::errors::SkepticError;
use crate::events::TaskVerified;
use crate::state::{Lobby, PlayerStatus};

#[derive(Accounts)]
pub struct VerifyTask<'info> {
    #[account(
        mut,
        seeds = [Lobby::SEED, lobby.authority.as_ref(), lobby.lobby_id.to_le_bytes().as_ref()],
        bump = lobby.bump,
        has_one = verifier @ SkepticError::UnauthorizedVerifier,
    )]
    pub lobby: Account<'info, Lobby>,

    #[account(
        mut,
        seeds = [PlayerStatus::SEED, lobby.key().as_ref(), player.key().as_ref()],
        bump = player_status.bump,
    )]
    pub player_status: Account<'info, PlayerStatus>,

    /// CHECK: Player whose proof was accepted; only used for the PDA seeds.
    pub player: UncheckedAccount<'info>,

    /// Verification agent (backend signer).
    pub verifier: Signer<'info>,
}

pub fn handler(ctx: Context<VerifyTask>) -> Result<()> {
    let lobby = &mut ctx.accounts.lobby;
    let status = &mut ctx.accounts.player_status;

    require!(!lobby.resolved, SkepticError::AlreadyResolved);
    require!(status.has_deposited, SkepticError::NotJoined);
    require!(!status.is_verified, SkepticError::AlreadyVerified);

    status.is_verified = true;
    lobby.verified_count = lobby
        .verified_count
        .checked_add(1)
        .ok_or(SkepticError::MathOverflow)?;

    msg!("Player verified for task: {}", lobby.task_description);

    emit!(TaskVerified {
        lobby: lobby.key(),
        player: status.player,
        verified_count: lobby.verified_count,
    });

    Ok(())
}

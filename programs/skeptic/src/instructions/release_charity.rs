use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::errors::SkepticError;
use crate::events::CharityReleased;
use crate::payout;
use crate::state::Lobby;

#[derive(Accounts)]
pub struct ReleaseCharity<'info> {
    #[account(
        mut,
        seeds = [Lobby::SEED, lobby.authority.as_ref(), lobby.lobby_id.to_le_bytes().as_ref()],
        bump = lobby.bump,
        constraint = lobby.resolved @ SkepticError::NotResolved,
        constraint = !lobby.charity_released @ SkepticError::CharityAlreadyReleased,
    )]
    pub lobby: Account<'info, Lobby>,

    #[account(
        mut,
        constraint = vault.key() == lobby.vault,
    )]
    pub vault: Account<'info, TokenAccount>,

    /// Charity's stake token account.
    #[account(
        mut,
        constraint = charity_token_account.owner == lobby.charity_wallet @ SkepticError::InvalidCharityAccount,
        constraint = charity_token_account.mint == vault.mint,
    )]
    pub charity_token_account: Account<'info, TokenAccount>,

    /// Anyone can push the charity share out (permissionless).
    pub caller: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

pub fn handler(ctx: Context<ReleaseCharity>) -> Result<()> {
    let lobby = &ctx.accounts.lobby;
    let settlement = payout::settle(lobby.entry_fee, lobby.member_count, lobby.verified_count)?;

    if settlement.charity_amount > 0 {
        let lobby_id_bytes = lobby.lobby_id.to_le_bytes();
        let bump_bytes = [lobby.bump];
        let signer_seeds: &[&[&[u8]]] = &[&[
            Lobby::SEED,
            lobby.authority.as_ref(),
            &lobby_id_bytes,
            &bump_bytes,
        ]];

        let transfer_to_charity = CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.vault.to_account_info(),
                to: ctx.accounts.charity_token_account.to_account_info(),
                authority: ctx.accounts.lobby.to_account_info(),
            },
            signer_seeds,
        );
        token::transfer(transfer_to_charity, settlement.charity_amount)?;
    }

    let lobby = &mut ctx.accounts.lobby;
    lobby.charity_released = true;

    emit!(CharityReleased {
        lobby: lobby.key(),
        charity_wallet: lobby.charity_wallet,
        amount: settlement.charity_amount,
    });

    Ok(())
}

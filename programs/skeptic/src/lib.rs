use anchor_lang::prelude::*;

pub mod errors;
pub mod events;
pub mod instructions;
pub mod payout;
pub mod state;

use instructions::*;

declare_id!("FWe7tP6KvmJUM2CaTJbYw9GFsiZckSt8CkjjddjCK5pG");

#[program]
pub mod skeptic {
    use super::*;

    /// Open a lobby with a task, an entry fee and a deadline.
    pub fn create_lobby(
        ctx: Context<CreateLobby>,
        lobby_id: u64,
        task_description: String,
        entry_fee: u64,
        market_close: i64,
    ) -> Result<()> {
        instructions::create_lobby::handler(ctx, lobby_id, task_description, entry_fee, market_close)
    }

    /// Player stakes the entry fee into the lobby vault.
    pub fn join_lobby(ctx: Context<JoinLobby>) -> Result<()> {
        instructions::join_lobby::handler(ctx)
    }

    /// Verifier agent marks a player's proof as accepted.
    pub fn verify_task(ctx: Context<VerifyTask>) -> Result<()> {
        instructions::verify_task::handler(ctx)
    }

    /// Close the market once the deadline passed. Permissionless.
    pub fn resolve_market(ctx: Context<ResolveMarket>) -> Result<()> {
        instructions::resolve_market::handler(ctx)
    }

    /// Verified player withdraws their stake plus their share of the forfeits.
    pub fn claim_winnings(ctx: Context<ClaimWinnings>) -> Result<()> {
        instructions::claim_winnings::handler(ctx)
    }

    /// Send the charity share of the forfeited stakes. Permissionless.
    pub fn release_charity(ctx: Context<ReleaseCharity>) -> Result<()> {
        instructions::release_charity::handler(ctx)
    }
}

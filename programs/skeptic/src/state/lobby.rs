use anchor_lang::prelude::*;

#[account]
#[derive(InitSpace)]
pub struct Lobby {
    /// Wallet that created the lobby.
    pub authority: Pubkey,
    /// Per-authority lobby identifier.
    pub lobby_id: u64,
    /// What members commit to doing ("Go to the gym").
    #[max_len(200)]
    pub task_description: String,
    /// Stake per member in the vault mint's base units.
    pub entry_fee: u64,
    /// Wallet that receives half of the forfeited stakes.
    pub charity_wallet: Pubkey,
    /// Agent key allowed to mark proofs as verified.
    pub verifier: Pubkey,
    /// PDA-owned token account holding the stakes.
    pub vault: Pubkey,
    /// Unix timestamp after which nobody can join and payouts open.
    pub market_close: i64,
    /// Total deposited.
    pub total_pot: u64,
    /// Members who deposited.
    pub member_count: u16,
    /// Members whose proof was accepted.
    pub verified_count: u16,
    /// Winners who already claimed.
    pub claimed_count: u16,
    /// Set once by `resolve_market`.
    pub resolved: bool,
    /// Set once the charity share left the vault.
    pub charity_released: bool,
    /// PDA bump seed.
    pub bump: u8,
}

impl Lobby {
    pub const SEED: &'static [u8] = b"lobby";
    pub const VAULT_SEED: &'static [u8] = b"vault";
    pub const MAX_TASK_LEN: usize = 200;

    pub fn is_open(&self, now: i64) -> bool {
        now < self.market_close
    }
}

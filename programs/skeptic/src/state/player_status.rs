use anchor_lang::prelude::*;

#[account]
#[derive(InitSpace)]
pub struct PlayerStatus {
    /// Member wallet.
    pub player: Pubkey,
    /// Lobby this status belongs to.
    pub lobby: Pubkey,
    pub has_deposited: bool,
    pub is_verified: bool,
    pub has_claimed: bool,
    /// Unix timestamp of the deposit.
    pub joined_at: i64,
    /// PDA bump seed.
    pub bump: u8,
}

impl PlayerStatus {
    pub const SEED: &'static [u8] = b"player";
}

use anchor_lang::prelude::*;

#[event]
pub struct LobbyCreated {
    pub lobby: Pubkey,
    pub authority: Pubkey,
    pub lobby_id: u64,
    pub entry_fee: u64,
    pub market_close: i64,
}

#[event]
pub struct PlayerJoined {
    pub lobby: Pubkey,
    pub player: Pubkey,
    pub amount: u64,
    pub total_pot: u64,
}

#[event]
pub struct TaskVerified {
    pub lobby: Pubkey,
    pub player: Pubkey,
    pub verified_count: u16,
}

#[event]
pub struct MarketResolved {
    pub lobby: Pubkey,
    pub total_pot: u64,
    pub member_count: u16,
    pub verified_count: u16,
    pub payout_per_winner: u64,
    pub charity_amount: u64,
}

#[event]
pub struct WinningsClaimed {
    pub lobby: Pubkey,
    pub player: Pubkey,
    pub payout: u64,
}

#[event]
pub struct CharityReleased {
    pub lobby: Pubkey,
    pub charity_wallet: Pubkey,
    pub amount: u64,
}

pub mod claim_winnings;
pub mod create_lobby;
pub mod join_lobby;
pub mod release_charity;
pub mod resolve_market;
pub mod verify_task;

pub use claim_winnings::*;
pub use create_lobby::*;
pub use join_lobby::*;
pub use release_charity::*;
pub use resolve_market::*;
pub use verify_task::*;

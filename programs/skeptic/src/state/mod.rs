pub mod lobby;
pub mod player_status;

pub use lobby::*;
pub use player_status::*;

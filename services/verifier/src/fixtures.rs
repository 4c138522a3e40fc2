//! In-memory demo dataset
//!
//! Nothing here is persisted or cross-checked; counts and pots are display
//! values only.

use chrono::{DateTime, Duration, Utc};

use crate::models::{
    HistoryItem, HistoryResult, Lobby, LobbyStatus, LobbyWithPlayers, Player, UserStats,
};

/// Read-only snapshot served by the lobby endpoints.
#[derive(Debug, Clone)]
pub struct DemoData {
    pub lobbies: Vec<LobbyWithPlayers>,
    pub history: Vec<HistoryItem>,
    pub stats: UserStats,
    pub current_user: Player,
}

impl DemoData {
    /// Build the dataset with deadlines and dates relative to `now`.
    pub fn seeded(now: DateTime<Utc>) -> Self {
        let players = players();

        let lobbies = vec![
            lobby(LobbySeed {
                id: "1",
                name: "Morning Gym Squad",
                task: "Go to the gym",
                entry_fee: 10,
                charity: "charity1.sol",
                deadline: now + Duration::hours(24),
                total_pot: 70,
                verified: 3,
                members: 7,
                icon: "🏋️",
                players: &players,
            }),
            lobby(LobbySeed {
                id: "2",
                name: "Study Group",
                task: "Go to class",
                entry_fee: 5,
                charity: "charity2.sol",
                deadline: now + Duration::hours(12),
                total_pot: 25,
                verified: 3,
                members: 5,
                icon: "📚",
                players: &players[..5],
            }),
            lobby(LobbySeed {
                id: "3",
                name: "Early Birds",
                task: "Wake up before 7am",
                entry_fee: 20,
                charity: "charity1.sol",
                deadline: now + Duration::hours(8),
                total_pot: 80,
                verified: 2,
                members: 4,
                icon: "🌅",
                players: &players[..4],
            }),
        ];

        let history = vec![
            history_item(HistorySeed {
                id: "1",
                lobby_name: "Study Group",
                task: "Go to class",
                icon: "📚",
                result: HistoryResult::Win,
                amount: 6,
                date: now - Duration::hours(24),
                verified: 3,
                members: 5,
            }),
            history_item(HistorySeed {
                id: "2",
                lobby_name: "Morning Gym Squad",
                task: "Go to the gym",
                icon: "🏋️",
                result: HistoryResult::Loss,
                amount: -10,
                date: now - Duration::hours(48),
                verified: 6,
                members: 7,
            }),
            history_item(HistorySeed {
                id: "3",
                lobby_name: "Meditation Circle",
                task: "Meditate for 10 minutes",
                icon: "🧘",
                result: HistoryResult::Win,
                amount: 15,
                date: now - Duration::hours(72),
                verified: 2,
                members: 5,
            }),
        ];

        Self {
            lobbies,
            history,
            stats: UserStats {
                total_winnings: 200,
                weekly_winnings: 10,
                active_markets: 3,
                win_rate: 67,
            },
            current_user: player("current", "0xYOUR...WALLET", "You", false, "#ff6b35"),
        }
    }

    pub fn lobby(&self, id: &str) -> Option<&LobbyWithPlayers> {
        self.lobbies.iter().find(|l| l.lobby.id == id)
    }

    /// History ordered newest first.
    pub fn history(&self) -> Vec<HistoryItem> {
        let mut items = self.history.clone();
        items.sort_by(|a, b| b.date.cmp(&a.date));
        items
    }
}

struct LobbySeed<'a> {
    id: &'a str,
    name: &'a str,
    task: &'a str,
    entry_fee: u64,
    charity: &'a str,
    deadline: DateTime<Utc>,
    total_pot: u64,
    verified: u32,
    members: u32,
    icon: &'a str,
    players: &'a [Player],
}

fn lobby(seed: LobbySeed<'_>) -> LobbyWithPlayers {
    LobbyWithPlayers {
        lobby: Lobby {
            id: seed.id.to_string(),
            name: seed.name.to_string(),
            task_description: seed.task.to_string(),
            entry_fee: seed.entry_fee,
            charity_wallet: seed.charity.to_string(),
            deadline: seed.deadline,
            total_pot: seed.total_pot,
            verified_count: seed.verified,
            total_members: seed.members,
            icon: seed.icon.to_string(),
            status: LobbyStatus::Active,
        },
        players: seed.players.to_vec(),
    }
}

fn players() -> Vec<Player> {
    vec![
        verified(player("1", "0x1234...5678", "Alice", true, "#ff6b35")),
        verified(player("2", "0x2345...6789", "Bob", true, "#4ade80")),
        player("3", "0x3456...7890", "Cathy", true, "#60a5fa"),
        player("4", "0x4567...8901", "Dan", true, "#f472b6"),
        verified(player("5", "0x5678...9012", "Emma", true, "#a78bfa")),
    ]
}

fn player(id: &str, address: &str, name: &str, deposited: bool, color: &str) -> Player {
    Player {
        id: id.to_string(),
        address: address.to_string(),
        name: name.to_string(),
        has_deposited: deposited,
        is_verified: false,
        has_claimed: false,
        avatar_color: Some(color.to_string()),
    }
}

fn verified(mut player: Player) -> Player {
    player.is_verified = true;
    player
}

struct HistorySeed<'a> {
    id: &'a str,
    lobby_name: &'a str,
    task: &'a str,
    icon: &'a str,
    result: HistoryResult,
    amount: i64,
    date: DateTime<Utc>,
    verified: u32,
    members: u32,
}

fn history_item(seed: HistorySeed<'_>) -> HistoryItem {
    HistoryItem {
        id: seed.id.to_string(),
        lobby_name: seed.lobby_name.to_string(),
        task_description: seed.task.to_string(),
        icon: seed.icon.to_string(),
        result: seed.result,
        amount: seed.amount,
        date: seed.date,
        verified_count: seed.verified,
        total_members: seed.members,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data() -> DemoData {
        DemoData::seeded(DateTime::<Utc>::UNIX_EPOCH + Duration::days(365))
    }

    #[test]
    fn three_active_lobbies() {
        let data = data();
        assert_eq!(data.lobbies.len(), 3);
        assert!(data
            .lobbies
            .iter()
            .all(|l| l.lobby.status == LobbyStatus::Active));
    }

    #[test]
    fn lobby_lookup_by_id() {
        let data = data();
        let study = data.lobby("2").unwrap();
        assert_eq!(study.lobby.name, "Study Group");
        assert_eq!(study.players.len(), 5);
        assert_eq!(data.lobby("3").unwrap().players.len(), 4);
        assert!(data.lobby("42").is_none());
    }

    #[test]
    fn deadlines_are_relative_to_now() {
        let now = Utc::now();
        let data = DemoData::seeded(now);
        assert_eq!(data.lobby("3").unwrap().lobby.deadline - now, Duration::hours(8));
    }

    #[test]
    fn history_is_newest_first() {
        let history = data().history();
        assert_eq!(history[0].lobby_name, "Study Group");
        assert_eq!(history[2].lobby_name, "Meditation Circle");
        assert_eq!(history[1].amount, -10);
        assert_eq!(history[1].result, HistoryResult::Loss);
        assert_eq!(history[1].verified_count, 6);
        assert_eq!(history[1].total_members, 7);
        assert_eq!(history[2].task_description, "Meditate for 10 minutes");
    }

    #[test]
    fn current_user_has_not_joined() {
        let data = data();
        assert!(!data.current_user.has_deposited);
        assert_eq!(data.current_user.name, "You");
    }
}

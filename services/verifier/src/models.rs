//! Wire types shared by the HTTP handlers

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

/// Body of `POST /api/verify`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyRequest {
    /// Data URL (`data:image/jpeg;base64,...`) or remote image URL.
    pub image: String,
    pub task_description: String,
}

/// Outcome of a proof check, whether it came from the vision model or a mock.
///
/// Fields beyond the three required ones are kept in `extra` so a model
/// verdict is returned to the caller as the model wrote it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Verdict {
    pub verified: bool,
    /// 0-100, integral or fractional.
    pub confidence: Number,
    pub reason: String,
    #[serde(flatten, default, skip_serializing_if = "Map::is_empty")]
    pub extra: Map<String, Value>,
}

impl Verdict {
    pub const PROCESSING_ERROR: &'static str = "Error processing image. Please try again.";

    pub fn new(verified: bool, confidence: u8, reason: impl Into<String>) -> Self {
        Self {
            verified,
            confidence: Number::from(confidence),
            reason: reason.into(),
            extra: Map::new(),
        }
    }

    /// Fixed response for requests the handler could not process at all.
    pub fn processing_error() -> Self {
        Self::new(false, 0, Self::PROCESSING_ERROR)
    }

    /// Whether `confidence` is a number in 0..=100.
    pub fn has_valid_confidence(&self) -> bool {
        self.confidence
            .as_f64()
            .is_some_and(|c| (0.0..=100.0).contains(&c))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LobbyStatus {
    Active,
    Resolved,
    Pending,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lobby {
    pub id: String,
    pub name: String,
    pub task_description: String,
    pub entry_fee: u64,
    pub charity_wallet: String,
    pub deadline: DateTime<Utc>,
    pub total_pot: u64,
    pub verified_count: u32,
    pub total_members: u32,
    pub icon: String,
    pub status: LobbyStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: String,
    pub address: String,
    pub name: String,
    pub has_deposited: bool,
    pub is_verified: bool,
    pub has_claimed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_color: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LobbyWithPlayers {
    #[serde(flatten)]
    pub lobby: Lobby,
    pub players: Vec<Player>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HistoryResult {
    Win,
    Loss,
    Pending,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryItem {
    pub id: String,
    pub lobby_name: String,
    pub task_description: String,
    pub icon: String,
    pub result: HistoryResult,
    /// Net change for the user; negative on a loss.
    pub amount: i64,
    pub date: DateTime<Utc>,
    pub verified_count: u32,
    pub total_members: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStats {
    pub total_winnings: u64,
    pub weekly_winnings: u64,
    pub active_markets: u32,
    /// Percentage, 0-100.
    pub win_rate: u8,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn verify_request_uses_camel_case() {
        let req: VerifyRequest = serde_json::from_value(json!({
            "image": "data:image/png;base64,AAAA",
            "taskDescription": "Go to the gym",
        }))
        .unwrap();
        assert_eq!(req.task_description, "Go to the gym");
    }

    #[test]
    fn verify_request_requires_task_description() {
        let res = serde_json::from_value::<VerifyRequest>(json!({ "image": "x" }));
        assert!(res.is_err());
    }

    #[test]
    fn verdict_keeps_unknown_fields() {
        let raw = json!({
            "verified": false,
            "confidence": 12.5,
            "reason": "no gym visible",
            "objects": ["sofa", "tv"],
        });
        let verdict: Verdict = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(verdict.confidence.as_f64(), Some(12.5));
        assert!(verdict.has_valid_confidence());
        assert_eq!(serde_json::to_value(&verdict).unwrap(), raw);
    }

    #[test]
    fn verdict_confidence_bounds() {
        assert!(Verdict::new(true, 100, "x").has_valid_confidence());
        assert!(!Verdict::new(true, 101, "x").has_valid_confidence());
        let negative: Verdict =
            serde_json::from_value(json!({ "verified": true, "confidence": -1, "reason": "x" }))
                .unwrap();
        assert!(!negative.has_valid_confidence());
    }

    #[test]
    fn processing_error_serializes_without_extras() {
        assert_eq!(
            serde_json::to_value(Verdict::processing_error()).unwrap(),
            json!({
                "verified": false,
                "confidence": 0,
                "reason": "Error processing image. Please try again.",
            })
        );
    }

    #[test]
    fn lobby_with_players_is_flat() {
        let lobby = LobbyWithPlayers {
            lobby: Lobby {
                id: "9".into(),
                name: "Readers".into(),
                task_description: "Read 20 pages".into(),
                entry_fee: 3,
                charity_wallet: "charity.sol".into(),
                deadline: DateTime::<Utc>::UNIX_EPOCH,
                total_pot: 9,
                verified_count: 1,
                total_members: 3,
                icon: "📖".into(),
                status: LobbyStatus::Pending,
            },
            players: vec![],
        };
        let value = serde_json::to_value(&lobby).unwrap();
        assert_eq!(value["taskDescription"], "Read 20 pages");
        assert_eq!(value["status"], "pending");
        assert!(value["players"].as_array().unwrap().is_empty());
        assert!(value.get("lobby").is_none());
    }
}

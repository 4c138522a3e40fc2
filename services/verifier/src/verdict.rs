//! Stand-in verdicts for when the vision model is unavailable

use rand::Rng;

use crate::models::Verdict;

pub const MOCK_APPROVED_CONFIDENCE: u8 = 85;
pub const MOCK_REJECTED_CONFIDENCE: u8 = 30;

/// Why a mock verdict is being produced; only changes the wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockReason {
    /// No vision credential configured.
    NoCredential,
    /// The vision call failed or returned something unusable.
    UpstreamFailed,
}

/// Coin-flip verdict approving with probability `approval_rate`.
pub fn mock_verdict<R: Rng>(
    rng: &mut R,
    task_description: &str,
    approval_rate: f64,
    reason: MockReason,
) -> Verdict {
    let verified = rng.gen_bool(approval_rate.clamp(0.0, 1.0));
    let confidence = if verified {
        MOCK_APPROVED_CONFIDENCE
    } else {
        MOCK_REJECTED_CONFIDENCE
    };
    let prefix = match (reason, verified) {
        (MockReason::NoCredential, _) => "",
        (MockReason::UpstreamFailed, true) => "✓ Mock verification: ",
        (MockReason::UpstreamFailed, false) => "✗ Mock verification: ",
    };

    let body = if verified {
        format!("Image appears to show evidence of completing: {task_description}")
    } else {
        format!(
            "Could not verify task completion: {task_description}. Please upload a clearer image."
        )
    };

    Verdict::new(verified, confidence, format!("{prefix}{body}"))
}

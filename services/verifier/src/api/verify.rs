//! Proof verification handler

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::Json;
use tracing::{error, info, warn};

use crate::error::ApiError;
use crate::models::{Verdict, VerifyRequest};
use crate::state::AppState;
use crate::verdict::{mock_verdict, MockReason};

/// POST /api/verify
///
/// Never fails because of the vision model: a missing credential, an error
/// status or an unreadable reply all produce a mock verdict. Only a request
/// that cannot be read yields the fixed 500 response. The body is parsed as
/// JSON whatever its content type.
pub async fn verify(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<Verdict>, ApiError> {
    let req: VerifyRequest = serde_json::from_slice(&body).map_err(|e| {
        error!("Verification error: {}", e);
        ApiError::from(e)
    })?;

    let verdict = match &state.vision {
        None => {
            tokio::time::sleep(state.config.mock_delay).await;
            mock(&state, &req.task_description, MockReason::NoCredential)
        }
        Some(vision) => match vision.assess(&req.image, &req.task_description).await {
            Ok(verdict) => verdict,
            Err(e) => {
                warn!("{}, falling back to mock verification", e);
                tokio::time::sleep(state.config.fallback_delay).await;
                mock(&state, &req.task_description, MockReason::UpstreamFailed)
            }
        },
    };

    info!(
        verified = verdict.verified,
        confidence = %verdict.confidence,
        "Proof checked for task: {}",
        req.task_description
    );

    Ok(Json(verdict))
}

fn mock(state: &AppState, task_description: &str, reason: MockReason) -> Verdict {
    mock_verdict(
        &mut rand::thread_rng(),
        task_description,
        state.config.mock_approval_rate,
        reason,
    )
}

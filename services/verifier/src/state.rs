//! Shared application state

use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use crate::config::VerifierConfig;
use crate::error::VisionError;
use crate::fixtures::DemoData;
use crate::vision::{OpenAiVision, VisionClient};

pub struct AppState {
    pub config: VerifierConfig,
    /// `None` when no credential is configured; every proof gets a mock verdict.
    pub vision: Option<Arc<dyn VisionClient>>,
    pub demo: DemoData,
}

impl AppState {
    pub fn new(config: VerifierConfig) -> Result<Self, VisionError> {
        let vision: Option<Arc<dyn VisionClient>> = match &config.api_key {
            Some(key) => {
                info!(
                    "Live vision verification via {} ({})",
                    config.vision_base_url, config.vision_model
                );
                Some(Arc::new(OpenAiVision::new(&config, key.clone())?) as Arc<dyn VisionClient>)
            }
            None => {
                info!("No {} found, using mock verification", crate::config::ENV_API_KEY);
                None
            }
        };

        Ok(Self::with_vision(config, vision))
    }

    pub fn with_vision(config: VerifierConfig, vision: Option<Arc<dyn VisionClient>>) -> Self {
        Self {
            config,
            vision,
            demo: DemoData::seeded(Utc::now()),
        }
    }

    pub fn mode(&self) -> &'static str {
        if self.vision.is_some() {
            "live"
        } else {
            "mock"
        }
    }
}

//! Vision model client
//!
//! Talks to an OpenAI-compatible `chat/completions` endpoint. The model gets
//! the task text plus the image URL and must reply with a bare JSON verdict.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::debug;

use crate::config::VerifierConfig;
use crate::error::VisionError;
use crate::models::Verdict;

const SYSTEM_PROMPT: &str = "You are a task verification assistant. Analyze images to determine \
if they show evidence of completing a specific task. Be reasonably lenient but require clear \
evidence. Return JSON only.";

/// Anything that can judge a proof image.
#[async_trait]
pub trait VisionClient: Send + Sync {
    async fn assess(&self, image: &str, task_description: &str) -> Result<Verdict, VisionError>;
}

pub struct OpenAiVision {
    http: reqwest::Client,
    endpoint: String,
    api_key: String,
    model: String,
    max_tokens: u32,
}

impl OpenAiVision {
    pub fn new(config: &VerifierConfig, api_key: String) -> Result<Self, VisionError> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()?;
        Ok(Self {
            http,
            endpoint: format!("{}/chat/completions", config.vision_base_url),
            api_key,
            model: config.vision_model.clone(),
            max_tokens: config.max_tokens,
        })
    }

    fn request_body(&self, image: &str, task_description: &str) -> Value {
        json!({
            "model": self.model,
            "messages": [
                { "role": "system", "content": SYSTEM_PROMPT },
                {
                    "role": "user",
                    "content": [
                        { "type": "text", "text": user_prompt(task_description) },
                        { "type": "image_url", "image_url": { "url": image } },
                    ],
                },
            ],
            "max_tokens": self.max_tokens,
        })
    }
}

#[async_trait]
impl VisionClient for OpenAiVision {
    async fn assess(&self, image: &str, task_description: &str) -> Result<Verdict, VisionError> {
        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&self.request_body(image, task_description))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(VisionError::Status {
                status: status.as_u16(),
            });
        }

        let completion: ChatCompletion = response.json().await?;
        let content = completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or(VisionError::EmptyResponse)?;

        debug!("vision reply: {}", content);
        parse_verdict(&content)
    }
}

#[derive(Debug, Deserialize)]
struct ChatCompletion {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

fn user_prompt(task_description: &str) -> String {
    format!(
        "Analyze this image. Does it show evidence of completing the task: \"{task_description}\"?\n\n\
         Return ONLY a JSON object in this exact format, no other text:\n\
         {{\"verified\": true/false, \"confidence\": 0-100, \"reason\": \"brief explanation\"}}"
    )
}

/// Parse the model's reply, tolerating a Markdown code fence around it.
pub fn parse_verdict(content: &str) -> Result<Verdict, VisionError> {
    let trimmed = strip_code_fence(content.trim());
    let verdict: Verdict = serde_json::from_str(trimmed)
        .map_err(|e| VisionError::MalformedVerdict(e.to_string()))?;
    if !verdict.has_valid_confidence() {
        return Err(VisionError::MalformedVerdict(format!(
            "confidence {} outside 0-100",
            verdict.confidence
        )));
    }
    Ok(verdict)
}

fn strip_code_fence(text: &str) -> &str {
    let Some(rest) = text.strip_prefix("```") else {
        return text;
    };
    // Drop the info string ("json") on the opening fence line.
    let body = rest.split_once('\n').map_or("", |(_, body)| body);
    body.trim_end().strip_suffix("```").unwrap_or(body).trim()
}


#[cfg(test)]
mod tests {
    use super::*;

    fn client_for(base_url: String, api_key: &str) -> OpenAiVision {
        let config = VerifierConfig {
            vision_base_url: base_url,
            ..VerifierConfig::default()
        };
        OpenAiVision::new(&config, api_key.to_string()).unwrap()
    }

    fn client() -> OpenAiVision {
        client_for("http://localhost:9/v1".to_string(), "sk-test")
    }

    async fn assess_via(prefix: &str) -> Result<Verdict, VisionError> {
        let base = upstream::spawn().await;
        client_for(format!("{base}/{prefix}"), upstream::API_KEY)
            .assess("https://img.example/gym.jpg", "Go to the gym")
            .await
    }

    #[test]
    fn parses_bare_json() {
        let v = parse_verdict(r#"{"verified": true, "confidence": 92, "reason": "Gym mirror selfie"}"#)
            .unwrap();
        assert_eq!(v, Verdict::new(true, 92, "Gym mirror selfie"));
    }

    #[test]
    fn parses_fenced_json() {
        let content = "```json\n{\"verified\": false, \"confidence\": 10, \"reason\": \"blurry\"}\n```";
        let v = parse_verdict(content).unwrap();
        assert!(!v.verified);
        assert_eq!(v.reason, "blurry");
    }

    #[test]
    fn accepts_fractional_confidence() {
        let v = parse_verdict(r#"{"verified": false, "confidence": 12.5, "reason": "no gym visible"}"#)
            .unwrap();
        assert!(!v.verified);
        assert_eq!(v.confidence.as_f64(), Some(12.5));
    }

    #[test]
    fn rejects_prose() {
        let err = parse_verdict("Sure! The image shows a gym.").unwrap_err();
        assert!(matches!(err, VisionError::MalformedVerdict(_)));
    }

    #[test]
    fn rejects_incomplete_object() {
        assert!(parse_verdict(r#"{"verified": true}"#).is_err());
    }

    #[test]
    fn rejects_confidence_above_hundred() {
        let err = parse_verdict(r#"{"verified": true, "confidence": 250, "reason": "x"}"#).unwrap_err();
        assert!(matches!(err, VisionError::MalformedVerdict(_)));
        assert!(parse_verdict(r#"{"verified": true, "confidence": 100.5, "reason": "x"}"#).is_err());
    }

    #[test]
    fn rejects_negative_confidence() {
        assert!(parse_verdict(r#"{"verified": true, "confidence": -3, "reason": "x"}"#).is_err());
    }

    #[test]
    fn request_carries_task_and_image() {
        let body = client().request_body("data:image/png;base64,AAAA", "Go to the gym");
        assert_eq!(body["model"], "gpt-4o");
        assert_eq!(body["max_tokens"], 300);
        assert_eq!(body["messages"][0]["role"], "system");
        let parts = &body["messages"][1]["content"];
        assert!(parts[0]["text"]
            .as_str()
            .unwrap()
            .contains("\"Go to the gym\""));
        assert_eq!(parts[1]["image_url"]["url"], "data:image/png;base64,AAAA");
    }

    #[test]
    fn endpoint_is_joined_onto_base_url() {
        assert_eq!(client().endpoint, "http://localhost:9/v1/chat/completions");
    }

    #[tokio::test]
    async fn live_call_returns_model_verdict() {
        let v = assess_via("echo").await.unwrap();
        assert!(!v.verified);
        assert_eq!(v.confidence.as_f64(), Some(12.5));
        assert_eq!(v.reason, "no gym visible in https://img.example/gym.jpg");
        assert_eq!(v.extra["model"], "gpt-4o");
    }

    #[tokio::test]
    async fn live_call_sends_bearer_token() {
        let base = upstream::spawn().await;
        let err = client_for(format!("{base}/echo"), "sk-wrong")
            .assess("https://img.example/gym.jpg", "Go to the gym")
            .await
            .unwrap_err();
        assert!(matches!(err, VisionError::Status { status: 401 }));
    }

    #[tokio::test]
    async fn live_call_accepts_fenced_reply() {
        assert_eq!(
            assess_via("fenced").await.unwrap(),
            Verdict::new(true, 90, "gym selfie")
        );
    }

    #[tokio::test]
    async fn live_call_reports_error_status() {
        let err = assess_via("limited").await.unwrap_err();
        assert!(matches!(err, VisionError::Status { status: 429 }));
    }

    #[tokio::test]
    async fn live_call_reports_missing_content() {
        assert!(matches!(
            assess_via("empty").await.unwrap_err(),
            VisionError::EmptyResponse
        ));
        assert!(matches!(
            assess_via("null").await.unwrap_err(),
            VisionError::EmptyResponse
        ));
    }

    #[tokio::test]
    async fn live_call_reports_non_json_body() {
        assert!(matches!(
            assess_via("html").await.unwrap_err(),
            VisionError::Transport(_)
        ));
    }

    #[tokio::test]
    async fn live_call_rejects_out_of_range_confidence() {
        assert!(matches!(
            assess_via("overconfident").await.unwrap_err(),
            VisionError::MalformedVerdict(_)
        ));
    }
}

//! Text generator contract and Gemini-backed implementation.
//!
//! # Invariants
//! - `generate_or_fallback` never fails; any generator error maps to the
//!   prompt kind's fixed fallback string.

use crate::genai::prompt::PromptKind;
use log::warn;
use serde_json::{json, Value};
use std::error::Error;
use std::fmt::{Display, Formatter};

const GEMINI_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Default generation model, matching the persisted app configuration.
pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";

/// Generation failure causes. All of them collapse to a fallback string at
/// the `generate_or_fallback` boundary.
#[derive(Debug)]
pub enum GenError {
    Http(String),
    MalformedResponse(String),
    EmptyResponse,
}

impl Display for GenError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Http(message) => write!(f, "generation request failed: {message}"),
            Self::MalformedResponse(message) => {
                write!(f, "generation response was malformed: {message}")
            }
            Self::EmptyResponse => write!(f, "generation response contained no text"),
        }
    }
}

impl Error for GenError {}

/// Request/response contract for generated text.
pub trait TextGenerator {
    /// Generates text for one prompt kind with optional short context.
    fn generate(&self, kind: PromptKind, context: &str) -> Result<String, GenError>;
}

/// Gemini `generateContent` client over plain HTTP.
pub struct GeminiGenerator {
    api_key: String,
    model: String,
}

impl GeminiGenerator {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }
}

impl TextGenerator for GeminiGenerator {
    fn generate(&self, kind: PromptKind, context: &str) -> Result<String, GenError> {
        let url = format!("{GEMINI_ENDPOINT}/{}:generateContent", self.model);
        let body = json!({
            "contents": [{ "parts": [{ "text": kind.build_prompt(context) }] }]
        });

        let response = ureq::post(&url)
            .set("x-goog-api-key", &self.api_key)
            .send_json(body)
            .map_err(|err| GenError::Http(err.to_string()))?;

        let payload: Value = response
            .into_json()
            .map_err(|err| GenError::MalformedResponse(err.to_string()))?;

        let text = payload["candidates"][0]["content"]["parts"][0]["text"]
            .as_str()
            .unwrap_or_default()
            .trim()
            .to_string();

        if text.is_empty() {
            return Err(GenError::EmptyResponse);
        }

        Ok(text)
    }
}

/// Generates text for the prompt kind, collapsing any failure to the
/// kind's fixed fallback string.
pub fn generate_or_fallback(
    generator: &dyn TextGenerator,
    kind: PromptKind,
    context: &str,
) -> String {
    match generator.generate(kind, context) {
        Ok(text) => text,
        Err(err) => {
            warn!(
                "event=generate_text module=genai status=fallback kind={} error={err}",
                kind.as_str()
            );
            kind.fallback_text().to_string()
        }
    }
}

//! Itinerary generation via the Groq chat-completion API
//!
//! Builds a natural-language prompt from the validated trip parameters and
//! submits a single chat-completion request configured for JSON output.
//! The response payload is parsed into typed itinerary structures; an
//! unusable payload surfaces as an error rather than an empty plan.

use crate::TripWeaverError;
use crate::config::LlmConfig;
use crate::models::{Itinerary, ItineraryResponse};
use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::Client;
use std::time::{Duration, Instant};
use tracing::{error, info, instrument, warn};

/// Source of generated itineraries
///
/// The web handlers hold this as a trait object so tests can substitute a
/// mock without touching the network.
#[async_trait]
pub trait ItineraryGenerator: Send + Sync {
    /// Generate a multi-day itinerary for a supported city
    async fn generate(
        &self,
        city: &str,
        day_count: u32,
        start_date: NaiveDate,
    ) -> Result<Itinerary>;
}

/// Chat-completion client for the Groq API
pub struct GroqClient {
    /// HTTP client
    client: Client,
    /// API configuration
    config: LlmConfig,
    /// Bearer token for the chat-completion endpoint
    api_key: String,
}

impl GroqClient {
    /// Create a new chat-completion client
    pub fn new(config: LlmConfig) -> Result<Self> {
        let api_key = config
            .api_key
            .clone()
            .ok_or_else(|| TripWeaverError::config("Missing Groq API key"))?;

        let timeout = Duration::from_secs(config.timeout_seconds.into());

        let client = Client::builder()
            .timeout(timeout)
            .user_agent("TripWeaver/0.1.0")
            .build()
            .with_context(|| "Failed to create HTTP client")?;

        Ok(Self {
            client,
            config,
            api_key,
        })
    }
}

#[async_trait]
impl ItineraryGenerator for GroqClient {
    #[instrument(skip(self, start_date))]
    async fn generate(
        &self,
        city: &str,
        day_count: u32,
        start_date: NaiveDate,
    ) -> Result<Itinerary> {
        info!("Generating {}-day itinerary for {}", day_count, city);
        let start_time = Instant::now();

        let body = groq::ChatCompletionRequest {
            model: self.config.model.clone(),
            messages: vec![groq::ChatMessage {
                role: "user".to_string(),
                content: build_prompt(city, day_count, start_date),
            }],
            temperature: self.config.temperature,
            max_tokens: self.config.max_tokens,
            response_format: groq::ResponseFormat {
                format_type: "json_object".to_string(),
            },
        };

        let response = self
            .client
            .post(format!("{}/chat/completions", self.config.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                error!("Chat-completion request failed: {}", e);
                TripWeaverError::api(format!("Network error: {e}"))
            })?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            error!("Chat-completion request returned HTTP {}: {}", status, text);
            return Err(TripWeaverError::api(format!("HTTP {status}: {text}")).into());
        }

        let completion: groq::ChatCompletionResponse = response.json().await.map_err(|e| {
            error!("Failed to parse chat-completion response: {}", e);
            TripWeaverError::invalid_response("Malformed chat-completion response body")
        })?;

        let content = completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| {
                error!("Chat completion carried no message content");
                TripWeaverError::invalid_response("Chat completion carried no message content")
            })?;

        let itinerary = parse_itinerary(&content)?;

        // The day list is rendered verbatim; a count mismatch is worth
        // noticing but does not fail the request.
        if itinerary.days.len() != day_count as usize {
            warn!(
                "Model returned {} day(s) for a {}-day request",
                itinerary.days.len(),
                day_count
            );
        }

        info!(
            "Generated itinerary with {} day(s) and {} tip(s) in {:.3}s",
            itinerary.days.len(),
            itinerary.tips.len(),
            start_time.elapsed().as_secs_f64()
        );

        Ok(itinerary)
    }
}

/// Build the deterministic generation prompt
///
/// Embeds the city, a human-formatted start date, the day count, the fixed
/// season/weather/event instruction block, and the required JSON shape.
fn build_prompt(city: &str, day_count: u32, start_date: NaiveDate) -> String {
    let formatted_date = start_date.format("%B %-d, %Y");

    format!(
        r#"Create a detailed {day_count}-day itinerary for {city} starting from {formatted_date}. Consider the time of year, typical weather patterns, and seasonal events for this specific date in {city}.

For each day, include 4-5 specific activities for morning (7AM to 12PM), afternoon (12PM to 5PM), and evening (5PM to 11:30PM), with exact locations, timing suggestions, and brief descriptions. The itinerary should be highly specific to this time of year, considering:

1. Weather conditions typical for {city} during {formatted_date}
2. Seasonal festivals, events, or cultural celebrations happening around this time
3. Natural phenomena (e.g., cherry blossoms, autumn foliage, etc.) if applicable
4. Seasonal food specialties and local delicacies
5. Indoor/outdoor activity balance based on typical weather
6. Opening hours and seasonal closures of attractions
7. Seasonal transportation considerations

Format as JSON matching this type:
{{
  "itinerary": {{
    "days": [
      {{
        "morning": string[],
        "afternoon": string[],
        "evening": string[]
      }}
    ],
    "tips": string[]
  }}
}}

Make activities detailed and specific, including:
- Time-appropriate activities for this specific date
- Exact locations and venue names
- Suggested timing for each activity
- Brief descriptions of what to expect
- Local food recommendations where appropriate
- Transportation suggestions between locations
- Cultural context where relevant
- Seasonal specialties and unique experiences"#
    )
}

/// Parse the model's text payload into a typed itinerary
fn parse_itinerary(content: &str) -> Result<Itinerary> {
    let response: ItineraryResponse = serde_json::from_str(content).map_err(|e| {
        error!("Model payload failed schema parse: {}", e);
        TripWeaverError::invalid_response(format!("Payload did not match itinerary shape: {e}"))
    })?;

    if response.itinerary.days.is_empty() {
        return Err(TripWeaverError::invalid_response("Itinerary contained no days").into());
    }

    Ok(response.itinerary)
}

/// Groq chat-completion wire structures
mod groq {
    use serde::{Deserialize, Serialize};

    /// Request body for the chat-completion endpoint
    #[derive(Debug, Serialize)]
    pub struct ChatCompletionRequest {
        pub model: String,
        pub messages: Vec<ChatMessage>,
        pub temperature: f32,
        pub max_tokens: u32,
        pub response_format: ResponseFormat,
    }

    #[derive(Debug, Serialize)]
    pub struct ChatMessage {
        pub role: String,
        pub content: String,
    }

    /// Forces JSON-formatted output from the model
    #[derive(Debug, Serialize)]
    pub struct ResponseFormat {
        #[serde(rename = "type")]
        pub format_type: String,
    }

    #[derive(Debug, Deserialize)]
    pub struct ChatCompletionResponse {
        pub choices: Vec<Choice>,
    }

    #[derive(Debug, Deserialize)]
    pub struct Choice {
        pub message: ResponseMessage,
    }

    #[derive(Debug, Deserialize)]
    pub struct ResponseMessage {
        pub content: Option<String>,
    }
}

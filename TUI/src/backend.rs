// Backend communication with the sentiment analysis API over HTTP/JSON

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::error::{ApiError, ErrorKind};

/// Which input field is active. Exactly one is submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Url,
    Text,
}

impl InputMode {
    pub fn toggled(self) -> Self {
        match self {
            InputMode::Url => InputMode::Text,
            InputMode::Text => InputMode::Url,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            InputMode::Url => "Tweet URL",
            InputMode::Text => "Tweet Text",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Positive,
    Neutral,
    Negative,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Positive, Category::Neutral, Category::Negative];

    pub fn label(self) -> &'static str {
        match self {
            Category::Positive => "Positive",
            Category::Neutral => "Neutral",
            Category::Negative => "Negative",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq)]
pub struct SentimentTriple {
    #[serde(default)]
    pub positive: f64,
    #[serde(default)]
    pub neutral: f64,
    #[serde(default)]
    pub negative: f64,
}

impl SentimentTriple {
    pub fn new(positive: f64, neutral: f64, negative: f64) -> Self {
        Self { positive, neutral, negative }
    }

    /// Values in fixed chart order: Positive, Neutral, Negative.
    pub fn slices(&self) -> [(Category, f64); 3] {
        [
            (Category::Positive, self.positive),
            (Category::Neutral, self.neutral),
            (Category::Negative, self.negative),
        ]
    }

    /// Shares of the whole, or `None` when nothing positive is left to draw.
    /// Negative and non-finite inputs count as zero.
    pub fn fractions(&self) -> Option<[f64; 3]> {
        let clean = self.slices().map(|(_, v)| if v.is_finite() && v > 0.0 { v } else { 0.0 });
        let total: f64 = clean.iter().sum();
        if total <= 0.0 {
            return None;
        }
        Some(clean.map(|v| v / total))
    }

    /// Largest category; ties go to the earlier one in chart order.
    pub fn dominant(&self) -> Option<Category> {
        let fractions = self.fractions()?;
        let best = (1..3).fold(0, |best, i| if fractions[i] > fractions[best] { i } else { best });
        Some(Category::ALL[best])
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct GeminiSentiment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_sentiment: Option<SentimentTriple>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AnalysisResult {
    #[serde(default)]
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub local_sentiment: Option<SentimentTriple>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub local_overall_sentiment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gemini_sentiment: Option<GeminiSentiment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gemini_overall_sentiment: Option<String>,
}

/// Outbound request body. Serializes to exactly the wire shape.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum AnalyzeRequest {
    Url {
        #[serde(rename = "tweetUrl")]
        tweet_url: String,
    },
    Text {
        #[serde(rename = "tweetText")]
        tweet_text: String,
    },
}

impl AnalyzeRequest {
    pub fn endpoint(&self) -> &'static str {
        match self {
            AnalyzeRequest::Url { .. } => "/analyze",
            AnalyzeRequest::Text { .. } => "/analyze-text",
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    kind: Option<String>,
}

/// Turn a non-success HTTP response into an `ApiError`.
///
/// The recovery kind comes from the body's `kind` tag when present, otherwise
/// from the status code. A body without an `error` string (a proxy's HTML
/// page, an empty 429) carries no server message but keeps the status kind.
pub fn classify_error_response(status: u16, body: &str) -> ApiError {
    let status_kind = ErrorKind::from_status(status);
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(ErrorBody { error: Some(message), kind }) => {
            let kind = kind.as_deref().and_then(ErrorKind::from_tag).unwrap_or(status_kind);
            ApiError::Server { status, message, kind }
        }
        _ => ApiError::Server {
            status,
            message: String::new(),
            kind: status_kind,
        },
    }
}

#[async_trait]
pub trait SentimentApi: Send + Sync {
    async fn analyze(&self, request: &AnalyzeRequest) -> Result<AnalysisResult, ApiError>;
}

pub struct HttpSentimentApi {
    http: reqwest::Client,
    base_url: String,
}

impl HttpSentimentApi {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url_for(&self, request: &AnalyzeRequest) -> String {
        format!("{}{}", self.base_url, request.endpoint())
    }
}

#[async_trait]
impl SentimentApi for HttpSentimentApi {
    async fn analyze(&self, request: &AnalyzeRequest) -> Result<AnalysisResult, ApiError> {
        let url = self.url_for(request);
        tracing::debug!(%url, "posting analysis request");

        let response = self.http.post(&url).json(request).send().await.map_err(|e| {
            let err = ApiError::from(e);
            tracing::warn!(%url, error = %err, "analysis request failed");
            err
        })?;

        let status = response.status();
        if !status.is_success() {
            // A body read that times out is still a client-side timeout
            let body = response.text().await.map_err(|e| {
                let err = ApiError::from(e);
                tracing::warn!(%url, status = status.as_u16(), error = %err, "error body unreadable");
                err
            })?;
            let err = classify_error_response(status.as_u16(), &body);
            tracing::warn!(%url, status = status.as_u16(), error = %err, "analysis rejected");
            return Err(err);
        }

        let result = response.json::<AnalysisResult>().await.map_err(ApiError::from)?;
        tracing::debug!(
            local = result.local_sentiment.is_some(),
            gemini = result.gemini_sentiment.is_some(),
            "analysis received"
        );
        Ok(result)
    }
}

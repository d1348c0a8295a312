//! Minimal `NutrisenseClient` trait, wire types, and a reqwest-based implementation.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod config;
pub mod http_client;
pub mod retry;

#[derive(Debug, Error)]
pub enum NutrisenseError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("authentication failed: {0}")]
    Auth(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("unexpected status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("configuration error: {0}")]
    Config(String),
}

impl NutrisenseError {
    /// Map an HTTP status and body snippet to the matching error variant.
    pub fn from_status(status: u16, body: String) -> Self {
        match status {
            401 | 403 => Self::Auth(body),
            404 => Self::NotFound(body),
            400 | 422 => Self::InvalidInput(body),
            _ => Self::Status { status, body },
        }
    }

    /// Whether retrying the request might succeed: transport failures and
    /// server-side (5xx) responses only.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Http(_) => true,
            Self::Status { status, .. } => *status >= 500,
            _ => false,
        }
    }
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub email: String,
}

/// Result of a successful login. The bearer token is kept secret; the
/// profile is what consumers display.
#[derive(Clone, Debug)]
pub struct AuthSession {
    pub access_token: secrecy::SecretString,
    pub user: UserProfile,
}

/// One daily wellness submission.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct WellnessEntry {
    pub age: u32,
    pub height_cm: f64,
    pub disease: String,
    pub breakfast: String,
    pub lunch: String,
    pub dinner: String,
    pub snacks: String,
    pub sleep_hours: f64,
    pub exercise_hours: f64,
    pub water_intake_liters: f64,
    pub mood: String,
    /// Entry date as YYYY-MM-DD. The backend stamps `created_at` itself, but
    /// the date chosen in the form is what history bucketing uses.
    pub date: Option<String>,
}

/// Server response to a wellness submission.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct WellnessOutcome {
    pub wellness_score: f64,
    pub prediction: String,
    #[serde(default)]
    pub recommendations: Vec<String>,
    pub created_at: Option<String>,
}

/// The `input` block echoed back inside a history item. Everything is
/// optional: old records predate some fields.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct WellnessEntryInput {
    pub date: Option<String>,
    pub sleep_hours: Option<f64>,
    pub exercise_hours: Option<f64>,
    pub mood: Option<String>,
    pub height_cm: Option<f64>,
}

/// One stored wellness log as the API returns it. Field names drifted over
/// time (`score` vs `wellness_score`, `category` vs `prediction`,
/// `created_at` vs `createdAt`), so decoding is deliberately tolerant and
/// never fails on absent fields.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct WellnessHistoryItem {
    pub id: Option<String>,
    #[serde(alias = "wellness_score")]
    pub score: Option<f64>,
    pub category: Option<String>,
    pub prediction: Option<String>,
    #[serde(alias = "createdAt")]
    pub created_at: Option<String>,
    pub input: Option<WellnessEntryInput>,
    #[serde(default)]
    pub recommendations: Vec<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct PredictRequest {
    /// Age in months.
    pub age: u32,
    pub gender: String,
    pub height: f64,
    pub food_text: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct PredictOutcome {
    pub nutrition_status: String,
    pub food_category: String,
    pub recommendation: String,
}

#[async_trait]
pub trait NutrisenseClient: Send + Sync + 'static {
    async fn signup(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<UserProfile, NutrisenseError>;

    /// Authenticate and keep the bearer token for subsequent requests.
    async fn login(&self, email: &str, password: &str) -> Result<AuthSession, NutrisenseError>;

    async fn me(&self) -> Result<UserProfile, NutrisenseError>;

    /// Invalidate the server-side token and drop the local copy.
    async fn logout(&self) -> Result<(), NutrisenseError>;

    async fn submit_wellness(
        &self,
        entry: &WellnessEntry,
    ) -> Result<WellnessOutcome, NutrisenseError>;

    /// All wellness logs for the authenticated user, newest first as the
    /// server sends them. Period filtering happens on the caller's side.
    async fn wellness_history(&self) -> Result<Vec<WellnessHistoryItem>, NutrisenseError>;

    async fn predict(&self, request: &PredictRequest) -> Result<PredictOutcome, NutrisenseError>;
}

use crate::NutrisenseError;
use secrecy::SecretString;

#[derive(Clone, Debug)]
pub struct Config {
    pub base_url: String,
    /// Pre-issued bearer token; when absent, credentials must be present so
    /// the caller can log in.
    pub token: Option<SecretString>,
    pub email: Option<String>,
    pub password: Option<SecretString>,
}

impl Config {
    pub fn from_env() -> Result<Self, NutrisenseError> {
        Self::from_env_with(|k| std::env::var(k).ok())
    }

    /// Testable helper that reads configuration values using the provided
    /// function. This avoids mutating global environment in tests and keeps
    /// `from_env()` small and safe.
    pub fn from_env_with<F>(mut get: F) -> Result<Self, NutrisenseError>
    where
        F: FnMut(&str) -> Option<String>,
    {
        let base_url = get("NUTRISENSE_BASE_URL")
            .unwrap_or_else(|| "https://nutrisense-ai.onrender.com".into());
        let token = get("NUTRISENSE_TOKEN").map(|t| SecretString::new(t.into()));
        let email = get("NUTRISENSE_EMAIL");
        let password = get("NUTRISENSE_PASSWORD").map(|p| SecretString::new(p.into()));
        if token.is_none() && (email.is_none() || password.is_none()) {
            return Err(NutrisenseError::Config(
                "NUTRISENSE_TOKEN or NUTRISENSE_EMAIL/NUTRISENSE_PASSWORD missing".into(),
            ));
        }
        Ok(Self {
            base_url,
            token,
            email,
            password,
        })
    }
}

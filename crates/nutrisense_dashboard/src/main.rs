use std::sync::Arc;

use chrono::{Datelike, Utc};
use nutrisense_client::config::Config;
use nutrisense_client::http_client::ReqwestNutrisenseClient;

use nutrisense_dashboard::render::render_text;
use nutrisense_dashboard::{DashboardError, DashboardService};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Configure logging from `NUTRISENSE_LOG_LEVEL` (or fallback to `RUST_LOG`, default `info`).
    let log_env = std::env::var("NUTRISENSE_LOG_LEVEL")
        .or_else(|_| std::env::var("RUST_LOG"))
        .unwrap_or_else(|_| "info".to_string());
    let env_filter = tracing_subscriber::EnvFilter::try_new(&log_env)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .compact()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .with_env_filter(env_filter)
        .init();

    let config = Config::from_env()?;
    let client = match &config.token {
        Some(token) => ReqwestNutrisenseClient::with_token(&config.base_url, token.clone()),
        None => ReqwestNutrisenseClient::new(&config.base_url),
    };
    let service = DashboardService::new(Arc::new(client));

    // Log session transitions as they happen.
    let mut session_rx = service.session().subscribe();
    tokio::spawn(async move {
        while session_rx.changed().await.is_ok() {
            let authenticated = session_rx.borrow().is_authenticated();
            tracing::debug!(authenticated, "session state changed");
        }
    });

    if let (Some(email), Some(password)) = (&config.email, &config.password) {
        use secrecy::ExposeSecret;
        let user = service.sign_in(email, password.expose_secret()).await?;
        tracing::info!(name = %user.name, "signed in");
    }

    let today = Utc::now().date_naive();
    let year = env_number("NUTRISENSE_YEAR", today.year())?;
    let month = env_number("NUTRISENSE_MONTH", today.month())?;
    if !(1..=12).contains(&month) {
        return Err(DashboardError::Config(format!("NUTRISENSE_MONTH out of range: {month}")).into());
    }

    let summary = service.monthly_dashboard(year, month, today).await?;

    let as_json = std::env::var("NUTRISENSE_OUTPUT").is_ok_and(|v| v.eq_ignore_ascii_case("json"));
    if as_json {
        match &summary {
            Some(data) => println!("{}", serde_json::to_string_pretty(data)?),
            None => println!("null"),
        }
    } else {
        print!("{}", render_text(summary.as_ref(), year, month));
    }

    Ok(())
}

fn env_number<T>(key: &str, default: T) -> Result<T, DashboardError>
where
    T: std::str::FromStr,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .parse()
            .map_err(|_| DashboardError::Config(format!("{key} is not a number: {raw}"))),
        Err(_) => Ok(default),
    }
}

//! Glue between the API client, the session context, and the aggregation
//! pipeline.

use std::sync::Arc;

use chrono::NaiveDate;
use nutrisense_client::retry::RetryPolicy;
use nutrisense_client::{NutrisenseClient, UserProfile};

use crate::aggregate::{DashboardSummary, dashboard_summary};
use crate::error::DashboardResult;
use crate::period::filter_month;
use crate::record::WellnessRecord;
use crate::session::SessionContext;

pub struct DashboardService {
    client: Arc<dyn NutrisenseClient>,
    session: SessionContext,
    retry: RetryPolicy,
}

impl DashboardService {
    pub fn new(client: Arc<dyn NutrisenseClient>) -> Self {
        Self {
            client,
            session: SessionContext::new(),
            retry: RetryPolicy::default(),
        }
    }

    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    pub fn session(&self) -> &SessionContext {
        &self.session
    }

    pub async fn sign_in(&self, email: &str, password: &str) -> DashboardResult<UserProfile> {
        let auth = self.client.login(email, password).await?;
        self.session.login(auth.user.clone(), auth.access_token);
        Ok(auth.user)
    }

    pub async fn sign_out(&self) -> DashboardResult<()> {
        self.client.logout().await?;
        self.session.logout();
        Ok(())
    }

    /// Fetch the full history (retrying transient failures), normalize the
    /// records, filter to the requested month, and aggregate. `Ok(None)`
    /// means there is no data for that month.
    pub async fn monthly_dashboard(
        &self,
        year: i32,
        month: u32,
        today: NaiveDate,
    ) -> DashboardResult<Option<DashboardSummary>> {
        let client = self.client.clone();
        let items = self
            .retry
            .retry_async(
                move || {
                    let client = client.clone();
                    async move { client.wellness_history().await }
                },
                |e| e.is_transient(),
            )
            .await?;

        let records: Vec<WellnessRecord> = items.into_iter().map(WellnessRecord::from).collect();
        let month_records = filter_month(&records, year, month);
        tracing::debug!(
            total = records.len(),
            in_month = month_records.len(),
            year,
            month,
            "aggregating month"
        );
        Ok(dashboard_summary(&month_records, today))
    }
}

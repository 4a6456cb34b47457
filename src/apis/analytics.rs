use crate::{
    client::AdminClient,
    envelope::ApiResponse,
    models::{AnalyticsQuery, DashboardStats, Listing},
};
use log::info;
use serde_json::Value;

/// Dashboard and analytics API operations
pub struct AnalyticsApi<'a> {
    client: &'a AdminClient,
}

impl<'a> AnalyticsApi<'a> {
    pub fn new(client: &'a AdminClient) -> Self {
        Self { client }
    }

    /// Headline counters for the dashboard
    pub async fn get_dashboard_stats(&self) -> ApiResponse<DashboardStats> {
        info!("Getting dashboard stats");
        self.client.get("/dashboard/stats", Vec::new()).await
    }

    /// Time-bucketed analytics over an optional date range
    pub async fn get_analytics(&self, query: &AnalyticsQuery) -> ApiResponse<Value> {
        info!("Getting analytics");
        self.client.get("/analytics", query.to_pairs()).await
    }

    /// Latest console activity, newest first
    pub async fn get_recent_activity(&self, limit: Option<u32>) -> ApiResponse<Listing<Value>> {
        info!("Getting recent activity");
        let query = limit
            .map(|limit| vec![("limit".to_string(), limit.to_string())])
            .unwrap_or_default();
        self.client
            .get_listing("/dashboard/activity", "activities", query)
            .await
    }
}

use async_trait::async_trait;
use serde::Deserialize;

use crate::modules::stats::application::ports::outgoing::StatsGateway;
use crate::modules::stats::domain::entities::DashboardStats;
use crate::shared::http::{ApiClient, ApiFailure};

/// REST adapter for `GET /statistics`, which wraps the counts in `{stats}`.
pub struct StatsGatewayHttp {
    api: ApiClient,
}

impl StatsGatewayHttp {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

#[derive(Debug, Deserialize)]
struct StatsBody {
    stats: StatsDto,
}

#[derive(Debug, Deserialize)]
struct StatsDto {
    #[serde(default)]
    applications: u64,
    #[serde(default)]
    services: u64,
    #[serde(default)]
    careers: u64,
}

#[async_trait]
impl StatsGateway for StatsGatewayHttp {
    async fn fetch(&self) -> Result<DashboardStats, ApiFailure> {
        let response = self.api.send(self.api.get("/statistics")).await?;
        let body: StatsBody = response.json().await?;
        Ok(DashboardStats {
            applications: body.stats.applications,
            services: body.stats.services,
            careers: body.stats.careers,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_body_unwraps_and_defaults_missing_counts() {
        let body: StatsBody =
            serde_json::from_str(r#"{"stats": {"applications": 12, "careers": 7}}"#).unwrap();
        assert_eq!(body.stats.applications, 12);
        assert_eq!(body.stats.services, 0);
        assert_eq!(body.stats.careers, 7);
    }
}

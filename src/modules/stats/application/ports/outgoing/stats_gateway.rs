use async_trait::async_trait;

use crate::modules::stats::domain::entities::DashboardStats;
use crate::shared::http::ApiFailure;

#[async_trait]
pub trait StatsGateway: Send + Sync {
    async fn fetch(&self) -> Result<DashboardStats, ApiFailure>;
}

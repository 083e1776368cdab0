use std::sync::Arc;

use tracing::error;

use crate::modules::stats::application::ports::outgoing::StatsGateway;
use crate::modules::stats::domain::entities::DashboardStats;
use crate::shared::notify::Notifier;

/// Dashboard landing page: one fetch for the stat cards. A failure notifies
/// and renders zeroed cards rather than breaking the page.
pub struct DashboardOverview<G: StatsGateway> {
    gateway: Arc<G>,
    notifier: Arc<dyn Notifier>,
}

impl<G: StatsGateway> DashboardOverview<G> {
    pub fn new(gateway: Arc<G>, notifier: Arc<dyn Notifier>) -> Self {
        Self { gateway, notifier }
    }

    pub async fn load(&self) -> DashboardStats {
        match self.gateway.fetch().await {
            Ok(stats) => stats,
            Err(failure) => {
                error!(error = %failure, "statistics fetch failed");
                self.notifier.error("Failed to load dashboard statistics");
                DashboardStats::default()
            }
        }
    }
}

use async_trait::async_trait;
use serde_json::json;

use crate::modules::applications::adapter::outgoing::rest_model::{
    ApplicationBody, ApplicationListBody,
};
use crate::modules::applications::application::ports::outgoing::ApplicationGateway;
use crate::modules::applications::domain::entities::{Application, ApplicationStatus};
use crate::shared::domain::EntityId;
use crate::shared::http::{ApiClient, ApiFailure};
use crate::shared::listing::{CollectionGateway, ResourceLabels};

/// REST adapter for `/applications`.
pub struct ApplicationGatewayHttp {
    api: ApiClient,
}

impl ApplicationGatewayHttp {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

#[async_trait]
impl CollectionGateway for ApplicationGatewayHttp {
    type Entity = Application;

    fn labels(&self) -> ResourceLabels {
        ResourceLabels {
            singular: "Application",
            plural: "applications",
        }
    }

    async fn list(&self) -> Result<Vec<Application>, ApiFailure> {
        let response = self.api.send(self.api.get("/applications")).await?;
        let body: ApplicationListBody = response.json().await?;
        Ok(body
            .applications
            .into_iter()
            .map(Application::from)
            .collect())
    }

    async fn delete(&self, id: &EntityId) -> Result<(), ApiFailure> {
        self.api
            .send(self.api.delete(&format!("/applications/{id}")))
            .await?;
        Ok(())
    }
}

#[async_trait]
impl ApplicationGateway for ApplicationGatewayHttp {
    async fn get(&self, id: &EntityId) -> Result<Application, ApiFailure> {
        let response = self
            .api
            .send(self.api.get(&format!("/applications/{id}")))
            .await?;
        let body: ApplicationBody = response.json().await?;
        Ok(Application::from(body.application))
    }

    async fn list_for_career(&self, career_id: &EntityId) -> Result<Vec<Application>, ApiFailure> {
        let response = self
            .api
            .send(self.api.get(&format!("/applications/byjob/{career_id}")))
            .await?;
        let body: ApplicationListBody = response.json().await?;
        Ok(body
            .applications
            .into_iter()
            .map(Application::from)
            .collect())
    }

    async fn update_status(
        &self,
        id: &EntityId,
        status: ApplicationStatus,
    ) -> Result<Application, ApiFailure> {
        let body = json!({ "status": status.as_str() });
        let response = self
            .api
            .send(
                self.api
                    .patch(&format!("/applications/{id}/status"))
                    .json(&body),
            )
            .await?;
        let body: ApplicationBody = response.json().await?;
        Ok(Application::from(body.application))
    }
}

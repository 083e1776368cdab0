use async_trait::async_trait;
use serde_json::json;

use crate::modules::careers::adapter::outgoing::rest_model::{
    CareerBody, CareerListBody, CareerPayloadDto,
};
use crate::modules::careers::application::ports::outgoing::{CareerGateway, CareerPayload};
use crate::modules::careers::domain::entities::Career;
use crate::shared::domain::EntityId;
use crate::shared::http::{ApiClient, ApiFailure};
use crate::shared::listing::{BulkDeleteGateway, CollectionGateway, ResourceLabels};

/// REST adapter for `/careers`.
pub struct CareerGatewayHttp {
    api: ApiClient,
}

impl CareerGatewayHttp {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

#[async_trait]
impl CollectionGateway for CareerGatewayHttp {
    type Entity = Career;

    fn labels(&self) -> ResourceLabels {
        ResourceLabels {
            singular: "Career",
            plural: "careers",
        }
    }

    async fn list(&self) -> Result<Vec<Career>, ApiFailure> {
        let response = self.api.send(self.api.get("/careers")).await?;
        let body: CareerListBody = response.json().await?;
        Ok(body.into_careers().into_iter().map(Career::from).collect())
    }

    async fn delete(&self, id: &EntityId) -> Result<(), ApiFailure> {
        self.api
            .send(self.api.delete(&format!("/careers/{id}")))
            .await?;
        Ok(())
    }
}

#[async_trait]
impl BulkDeleteGateway for CareerGatewayHttp {
    async fn bulk_delete(&self, ids: &[EntityId]) -> Result<(), ApiFailure> {
        let body = json!({ "ids": ids });
        self.api
            .send(self.api.post("/careers/bulk-delete").json(&body))
            .await?;
        Ok(())
    }
}

#[async_trait]
impl CareerGateway for CareerGatewayHttp {
    async fn get(&self, id: &EntityId) -> Result<Career, ApiFailure> {
        let response = self
            .api
            .send(self.api.get(&format!("/careers/one/{id}")))
            .await?;
        let body: CareerBody = response.json().await?;
        Ok(Career::from(body.into_career()))
    }

    async fn create(&self, payload: &CareerPayload) -> Result<Career, ApiFailure> {
        let dto = CareerPayloadDto::from(payload);
        let response = self
            .api
            .send(self.api.post("/careers/create").json(&dto))
            .await?;
        let body: CareerBody = response.json().await?;
        Ok(Career::from(body.into_career()))
    }

    async fn update(&self, id: &EntityId, payload: &CareerPayload) -> Result<Career, ApiFailure> {
        let dto = CareerPayloadDto::from(payload);
        let response = self
            .api
            .send(self.api.put(&format!("/careers/{id}")).json(&dto))
            .await?;
        let body: CareerBody = response.json().await?;
        Ok(Career::from(body.into_career()))
    }

    async fn toggle_status(&self, id: &EntityId) -> Result<(), ApiFailure> {
        self.api
            .send(self.api.patch(&format!("/careers/{id}/toggle")))
            .await?;
        Ok(())
    }
}

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use serde_json::json;

use crate::modules::services::adapter::outgoing::rest_model::{
    ItemMutationBody, SectionBody, SectionListBody,
};
use crate::modules::services::application::ports::outgoing::{
    ItemPayload, SectionPayload, ServiceGateway,
};
use crate::modules::services::domain::entities::ServiceSection;
use crate::shared::domain::{EntityId, ImageUpload};
use crate::shared::http::{ApiClient, ApiFailure};
use crate::shared::listing::{BulkDeleteGateway, CollectionGateway, ResourceLabels};

/// REST adapter for `/services`. Sections and items may carry an image, so
/// both travel as multipart forms; the backend expects the header fields
/// under bracketed keys (`header[title_en]`).
pub struct ServiceGatewayHttp {
    api: ApiClient,
}

impl ServiceGatewayHttp {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

fn section_form(payload: &SectionPayload) -> Result<Form, ApiFailure> {
    let mut form = Form::new()
        .text("header[title_en]", payload.title.en.clone())
        .text("header[title_ar]", payload.title.ar.clone())
        .text("header[sub_title_en]", payload.sub_title.en.clone())
        .text("header[sub_title_ar]", payload.sub_title.ar.clone())
        .text("header[description_en]", payload.description.en.clone())
        .text("header[description_ar]", payload.description.ar.clone())
        .text("isActive", payload.is_active.to_string());
    if let Some(image) = &payload.image {
        form = form.part("image", image_part(image)?);
    }
    Ok(form)
}

fn item_form(payload: &ItemPayload) -> Result<Form, ApiFailure> {
    let mut form = Form::new()
        .text("title_en", payload.title.en.clone())
        .text("title_ar", payload.title.ar.clone())
        .text("category_en", payload.category.en.clone())
        .text("category_ar", payload.category.ar.clone())
        .text("description_en", payload.description.en.clone())
        .text("description_ar", payload.description.ar.clone())
        .text("order", payload.order.to_string());
    if let Some(image) = &payload.image {
        form = form.part("image", image_part(image)?);
    }
    Ok(form)
}

fn image_part(image: &ImageUpload) -> Result<Part, ApiFailure> {
    Ok(Part::bytes(image.bytes.clone())
        .file_name(image.file_name.clone())
        .mime_str(&image.content_type)?)
}

#[async_trait]
impl CollectionGateway for ServiceGatewayHttp {
    type Entity = ServiceSection;

    fn labels(&self) -> ResourceLabels {
        ResourceLabels {
            singular: "Service section",
            plural: "services",
        }
    }

    async fn list(&self) -> Result<Vec<ServiceSection>, ApiFailure> {
        let response = self.api.send(self.api.get("/services")).await?;
        let body: SectionListBody = response.json().await?;
        Ok(body
            .into_sections()
            .into_iter()
            .map(ServiceSection::from)
            .collect())
    }

    async fn delete(&self, id: &EntityId) -> Result<(), ApiFailure> {
        self.api
            .send(self.api.delete(&format!("/services/{id}")))
            .await?;
        Ok(())
    }
}

#[async_trait]
impl BulkDeleteGateway for ServiceGatewayHttp {
    async fn bulk_delete(&self, ids: &[EntityId]) -> Result<(), ApiFailure> {
        let body = json!({ "ids": ids });
        self.api
            .send(self.api.post("/services/multy").json(&body))
            .await?;
        Ok(())
    }
}

#[async_trait]
impl ServiceGateway for ServiceGatewayHttp {
    async fn get(&self, id: &EntityId) -> Result<ServiceSection, ApiFailure> {
        let response = self
            .api
            .send(self.api.get(&format!("/services/{id}")))
            .await?;
        let body: SectionBody = response.json().await?;
        Ok(ServiceSection::from(body.into_section()))
    }

    async fn create(&self, payload: &SectionPayload) -> Result<ServiceSection, ApiFailure> {
        let form = section_form(payload)?;
        let response = self
            .api
            .send(self.api.post("/services/add").multipart(form))
            .await?;
        let body: SectionBody = response.json().await?;
        Ok(ServiceSection::from(body.into_section()))
    }

    async fn update(
        &self,
        id: &EntityId,
        payload: &SectionPayload,
    ) -> Result<ServiceSection, ApiFailure> {
        let form = section_form(payload)?;
        let response = self
            .api
            .send(self.api.put(&format!("/services/{id}")).multipart(form))
            .await?;
        let body: SectionBody = response.json().await?;
        Ok(ServiceSection::from(body.into_section()))
    }

    async fn add_item(
        &self,
        section_id: &EntityId,
        payload: &ItemPayload,
    ) -> Result<ServiceSection, ApiFailure> {
        let form = item_form(payload)?;
        let response = self
            .api
            .send(
                self.api
                    .post(&format!("/services/{section_id}/items"))
                    .multipart(form),
            )
            .await?;
        let body: ItemMutationBody = response.json().await?;
        Ok(ServiceSection::from(body.data))
    }

    async fn update_item(
        &self,
        section_id: &EntityId,
        item_id: &EntityId,
        payload: &ItemPayload,
    ) -> Result<ServiceSection, ApiFailure> {
        let form = item_form(payload)?;
        let response = self
            .api
            .send(
                self.api
                    .put(&format!("/services/{section_id}/items/{item_id}"))
                    .multipart(form),
            )
            .await?;
        let body: ItemMutationBody = response.json().await?;
        Ok(ServiceSection::from(body.data))
    }

    async fn delete_item(
        &self,
        section_id: &EntityId,
        item_id: &EntityId,
    ) -> Result<ServiceSection, ApiFailure> {
        let response = self
            .api
            .send(
                self.api
                    .delete(&format!("/services/{section_id}/items/{item_id}")),
            )
            .await?;
        let body: ItemMutationBody = response.json().await?;
        Ok(ServiceSection::from(body.data))
    }
}

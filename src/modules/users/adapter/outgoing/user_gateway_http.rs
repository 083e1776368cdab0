use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use serde_json::json;

use crate::modules::users::adapter::outgoing::rest_model::{UserBody, UserListBody};
use crate::modules::users::application::ports::outgoing::{UserGateway, UserPayload};
use crate::modules::users::domain::entities::User;
use crate::shared::domain::{EntityId, ImageUpload};
use crate::shared::http::{ApiClient, ApiFailure};
use crate::shared::listing::{BulkDeleteGateway, CollectionGateway, ResourceLabels};

/// REST adapter for `/users`. Create and update go out as multipart because
/// an avatar may ride along; the password field is only appended when the
/// payload carries one.
pub struct UserGatewayHttp {
    api: ApiClient,
}

impl UserGatewayHttp {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

fn user_form(payload: &UserPayload) -> Result<Form, ApiFailure> {
    let mut form = Form::new()
        .text("userName", payload.user_name.clone())
        .text("email", payload.email.clone())
        .text("role", payload.role.as_str().to_string())
        .text("isActive", payload.is_active.to_string());
    if let Some(password) = &payload.password {
        form = form.text("password", password.clone());
    }
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
impl CollectionGateway for UserGatewayHttp {
    type Entity = User;

    fn labels(&self) -> ResourceLabels {
        ResourceLabels {
            singular: "User",
            plural: "users",
        }
    }

    async fn list(&self) -> Result<Vec<User>, ApiFailure> {
        let response = self.api.send(self.api.get("/users")).await?;
        let body: UserListBody = response.json().await?;
        Ok(body.users.into_iter().map(User::from).collect())
    }

    async fn delete(&self, id: &EntityId) -> Result<(), ApiFailure> {
        self.api
            .send(self.api.delete(&format!("/users/{id}")))
            .await?;
        Ok(())
    }
}

#[async_trait]
impl BulkDeleteGateway for UserGatewayHttp {
    async fn bulk_delete(&self, ids: &[EntityId]) -> Result<(), ApiFailure> {
        let body = json!({ "ids": ids });
        self.api
            .send(self.api.post("/users/multy").json(&body))
            .await?;
        Ok(())
    }
}

#[async_trait]
impl UserGateway for UserGatewayHttp {
    async fn get(&self, id: &EntityId) -> Result<User, ApiFailure> {
        let response = self.api.send(self.api.get(&format!("/users/{id}"))).await?;
        let body: UserBody = response.json().await?;
        Ok(User::from(body.user))
    }

    async fn create(&self, payload: &UserPayload) -> Result<User, ApiFailure> {
        let form = user_form(payload)?;
        let response = self
            .api
            .send(self.api.post("/users/add").multipart(form))
            .await?;
        let body: UserBody = response.json().await?;
        Ok(User::from(body.user))
    }

    async fn update(&self, id: &EntityId, payload: &UserPayload) -> Result<User, ApiFailure> {
        let form = user_form(payload)?;
        let response = self
            .api
            .send(self.api.put(&format!("/users/{id}")).multipart(form))
            .await?;
        let body: UserBody = response.json().await?;
        Ok(User::from(body.user))
    }
}

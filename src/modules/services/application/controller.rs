use std::sync::Arc;

use tracing::error;

use crate::modules::services::application::forms::{ItemForm, SectionForm};
use crate::modules::services::application::ports::outgoing::ServiceGateway;
use crate::modules::services::application::queries::{section_counts, SectionCounts};
use crate::modules::services::domain::entities::ServiceSection;
use crate::shared::domain::EntityId;
use crate::shared::forms::SubmitOutcome;
use crate::shared::listing::{ListController, PendingDelete};
use crate::shared::notify::Notifier;

/// Services page: sections plus the manage-items dialog. Item mutations are
/// scoped under a parent section and, like everything else, end in a refetch
/// of the whole collection rather than patching the returned section in.
pub struct ServicesController<G: ServiceGateway> {
    gateway: Arc<G>,
    notifier: Arc<dyn Notifier>,
    list: ListController<G>,
}

impl<G: ServiceGateway> ServicesController<G> {
    pub fn new(gateway: Arc<G>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            list: ListController::new(gateway.clone(), notifier.clone()),
            gateway,
            notifier,
        }
    }

    pub async fn mount(&mut self) {
        self.list.fetch_data().await;
    }

    pub fn sections(&self) -> &[ServiceSection] {
        self.list.entities()
    }

    pub fn is_loading(&self) -> bool {
        self.list.is_loading()
    }

    pub fn counts(&self) -> SectionCounts {
        section_counts(self.list.entities())
    }

    pub fn section(&self, id: &EntityId) -> Option<&ServiceSection> {
        self.list.entities().iter().find(|section| &section.id == id)
    }

    pub fn toggle_selected(&mut self, id: &EntityId) -> bool {
        self.list.selection_mut().toggle(id)
    }

    pub fn request_delete(&self, id: &EntityId) -> Option<PendingDelete> {
        self.list.request_delete(id)
    }

    pub async fn confirm_delete(&mut self, pending: PendingDelete) {
        self.list.confirm_delete(pending).await;
    }

    /// The services table has no filter dimensions, so the confirmation-time
    /// view is the full collection.
    pub async fn confirm_bulk_delete(&mut self) {
        let view = self.list.ids();
        self.list.confirm_bulk_delete(&view).await;
    }

    pub async fn submit_section(&mut self, form: &SectionForm) -> SubmitOutcome {
        let payload = match form.validate() {
            Ok(payload) => payload,
            Err(errors) => return SubmitOutcome::Invalid(errors),
        };

        let result = match form.editing() {
            Some(id) => self.gateway.update(id, &payload).await,
            None => self.gateway.create(&payload).await,
        };

        match result {
            Ok(_) => {
                self.notifier.success(if form.editing().is_some() {
                    "Service updated"
                } else {
                    "Service created"
                });
                self.list.fetch_data().await;
                SubmitOutcome::Saved
            }
            Err(failure) => {
                error!(error = %failure, "section save failed");
                self.notifier.error(&failure.user_message());
                SubmitOutcome::Rejected
            }
        }
    }

    pub async fn submit_item(&mut self, section_id: &EntityId, form: &ItemForm) -> SubmitOutcome {
        let payload = match form.validate() {
            Ok(payload) => payload,
            Err(errors) => return SubmitOutcome::Invalid(errors),
        };

        let result = match form.editing() {
            Some(item_id) => {
                self.gateway
                    .update_item(section_id, item_id, &payload)
                    .await
            }
            None => self.gateway.add_item(section_id, &payload).await,
        };

        match result {
            Ok(_) => {
                self.notifier.success(if form.editing().is_some() {
                    "Item updated successfully"
                } else {
                    "Item added successfully"
                });
                self.list.fetch_data().await;
                SubmitOutcome::Saved
            }
            Err(failure) => {
                error!(section = %section_id, error = %failure, "item save failed");
                self.notifier.error(&failure.user_message());
                SubmitOutcome::Rejected
            }
        }
    }

    pub async fn delete_item(&mut self, section_id: &EntityId, item_id: &EntityId) {
        match self.gateway.delete_item(section_id, item_id).await {
            Ok(_) => {
                self.notifier.success("Item deleted");
                self.list.fetch_data().await;
            }
            Err(failure) => {
                error!(section = %section_id, item = %item_id, error = %failure, "item delete failed");
                self.notifier.error("Failed to delete item");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use async_trait::async_trait;
    use chrono::Utc;
    use std::sync::Mutex;

    use crate::modules::services::application::ports::outgoing::{ItemPayload, SectionPayload};
    use crate::modules::services::domain::entities::{SectionHeader, ServiceItem};
    use crate::shared::domain::{ImageUpload, Localized};
    use crate::shared::http::ApiFailure;
    use crate::shared::listing::{BulkDeleteGateway, CollectionGateway, ResourceLabels};
    use crate::shared::notify::testing::RecordingNotifier;

    fn section(id: &str, title: &str) -> ServiceSection {
        ServiceSection {
            id: EntityId::from(id),
            header: SectionHeader {
                title: Localized::new(title.to_string(), String::new()),
                sub_title: Localized::new("Sub".to_string(), "فرعي".to_string()),
                description: Localized::new("Desc".to_string(), "وصف".to_string()),
                image: None,
            },
            services: vec![ServiceItem {
                id: Some(EntityId::from("item1")),
                title: Localized::new("Item".to_string(), "عنصر".to_string()),
                category: Localized::new("HVAC".to_string(), "تكييف".to_string()),
                description: Localized::new("Text".to_string(), "نص".to_string()),
                image: None,
                custom_id: None,
                order: 1,
            }],
            is_active: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[derive(Default)]
    struct MockServiceGateway {
        rows: Mutex<Vec<ServiceSection>>,
        list_calls: Mutex<usize>,
        created: Mutex<Vec<SectionPayload>>,
        item_adds: Mutex<Vec<(EntityId, ItemPayload)>>,
        item_updates: Mutex<Vec<(EntityId, EntityId, ItemPayload)>>,
        item_deletes: Mutex<Vec<(EntityId, EntityId)>>,
    }

    #[async_trait]
    impl CollectionGateway for MockServiceGateway {
        type Entity = ServiceSection;

        fn labels(&self) -> ResourceLabels {
            ResourceLabels {
                singular: "Service section",
                plural: "services",
            }
        }

        async fn list(&self) -> Result<Vec<ServiceSection>, ApiFailure> {
            *self.list_calls.lock().unwrap() += 1;
            Ok(self.rows.lock().unwrap().clone())
        }

        async fn delete(&self, id: &EntityId) -> Result<(), ApiFailure> {
            self.rows.lock().unwrap().retain(|section| &section.id != id);
            Ok(())
        }
    }

    #[async_trait]
    impl BulkDeleteGateway for MockServiceGateway {
        async fn bulk_delete(&self, ids: &[EntityId]) -> Result<(), ApiFailure> {
            self.rows
                .lock()
                .unwrap()
                .retain(|section| !ids.contains(&section.id));
            Ok(())
        }
    }

    #[async_trait]
    impl ServiceGateway for MockServiceGateway {
        async fn get(&self, _id: &EntityId) -> Result<ServiceSection, ApiFailure> {
            unimplemented!("not used in controller tests")
        }

        async fn create(&self, payload: &SectionPayload) -> Result<ServiceSection, ApiFailure> {
            self.created.lock().unwrap().push(payload.clone());
            let created = section("new", &payload.title.en);
            self.rows.lock().unwrap().push(created.clone());
            Ok(created)
        }

        async fn update(
            &self,
            id: &EntityId,
            payload: &SectionPayload,
        ) -> Result<ServiceSection, ApiFailure> {
            let mut rows = self.rows.lock().unwrap();
            let row = rows.iter_mut().find(|section| &section.id == id).unwrap();
            row.header.title = payload.title.clone();
            Ok(row.clone())
        }

        async fn add_item(
            &self,
            section_id: &EntityId,
            payload: &ItemPayload,
        ) -> Result<ServiceSection, ApiFailure> {
            self.item_adds
                .lock()
                .unwrap()
                .push((section_id.clone(), payload.clone()));
            Ok(self.rows.lock().unwrap()[0].clone())
        }

        async fn update_item(
            &self,
            section_id: &EntityId,
            item_id: &EntityId,
            payload: &ItemPayload,
        ) -> Result<ServiceSection, ApiFailure> {
            self.item_updates.lock().unwrap().push((
                section_id.clone(),
                item_id.clone(),
                payload.clone(),
            ));
            Ok(self.rows.lock().unwrap()[0].clone())
        }

        async fn delete_item(
            &self,
            section_id: &EntityId,
            item_id: &EntityId,
        ) -> Result<ServiceSection, ApiFailure> {
            self.item_deletes
                .lock()
                .unwrap()
                .push((section_id.clone(), item_id.clone()));
            Ok(self.rows.lock().unwrap()[0].clone())
        }
    }

    fn controller_with(
        gateway: Arc<MockServiceGateway>,
    ) -> (ServicesController<MockServiceGateway>, Arc<RecordingNotifier>) {
        let notifier = Arc::new(RecordingNotifier::default());
        let controller = ServicesController::new(gateway, notifier.clone());
        (controller, notifier)
    }

    fn valid_section_form() -> SectionForm {
        let mut form = SectionForm::new();
        form.title_en = "Water Insulation".to_string();
        form.title_ar = "عزل المياه".to_string();
        form.sub_title_en = "Roofs and tanks".to_string();
        form.sub_title_ar = "أسطح وخزانات".to_string();
        form.description_en = "Full insulation works".to_string();
        form.description_ar = "أعمال العزل".to_string();
        form
    }

    fn valid_item_form(section: &ServiceSection) -> ItemForm {
        let mut form = ItemForm::new(section);
        form.title_en = "Roof Insulation".to_string();
        form.title_ar = "عزل الأسطح".to_string();
        form.category_en = "Insulation".to_string();
        form.category_ar = "عزل".to_string();
        form.description_en = "Membrane works".to_string();
        form.description_ar = "أعمال الأغشية".to_string();
        form
    }

    #[tokio::test]
    async fn test_section_create_without_image_succeeds() {
        let gateway = Arc::new(MockServiceGateway::default());
        let (mut controller, notifier) = controller_with(gateway.clone());
        controller.mount().await;

        let outcome = controller.submit_section(&valid_section_form()).await;

        assert!(outcome.is_saved());
        let created = gateway.created.lock().unwrap();
        assert_eq!(created.len(), 1);
        assert!(created[0].image.is_none());
        drop(created);
        assert_eq!(
            notifier.successes.lock().unwrap().as_slice(),
            ["Service created"]
        );
    }

    #[tokio::test]
    async fn test_new_item_without_image_fails_locally_with_zero_calls() {
        let gateway = Arc::new(MockServiceGateway {
            rows: Mutex::new(vec![section("s1", "Hard Services")]),
            ..MockServiceGateway::default()
        });
        let (mut controller, _) = controller_with(gateway.clone());
        controller.mount().await;

        let parent = controller.section(&EntityId::from("s1")).unwrap().clone();
        let form = valid_item_form(&parent);
        let outcome = controller.submit_item(&parent.id, &form).await;

        let SubmitOutcome::Invalid(errors) = outcome else {
            panic!("expected local validation failure");
        };
        assert_eq!(errors.message_for("image"), Some("Image is required"));
        assert!(gateway.item_adds.lock().unwrap().is_empty());
        assert_eq!(*gateway.list_calls.lock().unwrap(), 1, "no refetch either");
    }

    #[tokio::test]
    async fn test_new_item_with_image_posts_and_refetches() {
        let gateway = Arc::new(MockServiceGateway {
            rows: Mutex::new(vec![section("s1", "Hard Services")]),
            ..MockServiceGateway::default()
        });
        let (mut controller, _) = controller_with(gateway.clone());
        controller.mount().await;

        let parent = controller.section(&EntityId::from("s1")).unwrap().clone();
        let mut form = valid_item_form(&parent);
        form.select_image(ImageUpload::new("roof.jpg", "image/jpeg", vec![1, 2, 3]));

        let outcome = controller.submit_item(&parent.id, &form).await;

        assert!(outcome.is_saved());
        assert_eq!(gateway.item_adds.lock().unwrap().len(), 1);
        assert_eq!(*gateway.list_calls.lock().unwrap(), 2);
    }

    #[tokio::test]
    async fn test_item_edit_goes_through_update_item() {
        let gateway = Arc::new(MockServiceGateway {
            rows: Mutex::new(vec![section("s1", "Hard Services")]),
            ..MockServiceGateway::default()
        });
        let (mut controller, _) = controller_with(gateway.clone());
        controller.mount().await;

        let parent = controller.section(&EntityId::from("s1")).unwrap().clone();
        let form = ItemForm::seed(&parent.services[0]);
        let outcome = controller.submit_item(&parent.id, &form).await;

        assert!(outcome.is_saved());
        let updates = gateway.item_updates.lock().unwrap();
        assert_eq!(updates.len(), 1);
        assert_eq!(updates[0].1, EntityId::from("item1"));
    }

    #[tokio::test]
    async fn test_delete_item_notifies_and_refetches() {
        let gateway = Arc::new(MockServiceGateway {
            rows: Mutex::new(vec![section("s1", "Hard Services")]),
            ..MockServiceGateway::default()
        });
        let (mut controller, notifier) = controller_with(gateway.clone());
        controller.mount().await;

        controller
            .delete_item(&EntityId::from("s1"), &EntityId::from("item1"))
            .await;

        assert_eq!(
            gateway.item_deletes.lock().unwrap().as_slice(),
            [(EntityId::from("s1"), EntityId::from("item1"))]
        );
        assert_eq!(*gateway.list_calls.lock().unwrap(), 2);
        assert_eq!(
            notifier.successes.lock().unwrap().as_slice(),
            ["Item deleted"]
        );
    }

    #[tokio::test]
    async fn test_bulk_delete_covers_whole_unfiltered_view() {
        let gateway = Arc::new(MockServiceGateway {
            rows: Mutex::new(vec![section("s1", "Hard"), section("s2", "Soft")]),
            ..MockServiceGateway::default()
        });
        let (mut controller, _) = controller_with(gateway.clone());
        controller.mount().await;

        controller.toggle_selected(&EntityId::from("s2"));
        controller.confirm_bulk_delete().await;

        assert_eq!(controller.sections().len(), 1);
        assert_eq!(controller.sections()[0].id, EntityId::from("s1"));
    }
}

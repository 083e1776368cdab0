use std::sync::Arc;

use tracing::error;

use crate::modules::users::application::form::UserForm;
use crate::modules::users::application::ports::outgoing::UserGateway;
use crate::modules::users::application::queries::{user_counts, UserCounts};
use crate::modules::users::domain::entities::User;
use crate::shared::domain::EntityId;
use crate::shared::forms::SubmitOutcome;
use crate::shared::listing::{ListController, PendingDelete};
use crate::shared::notify::Notifier;

/// Users page.
pub struct UsersController<G: UserGateway> {
    gateway: Arc<G>,
    notifier: Arc<dyn Notifier>,
    list: ListController<G>,
}

impl<G: UserGateway> UsersController<G> {
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

    pub fn users(&self) -> &[User] {
        self.list.entities()
    }

    pub fn is_loading(&self) -> bool {
        self.list.is_loading()
    }

    pub fn counts(&self) -> UserCounts {
        user_counts(self.list.entities())
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

    /// No filter dimensions on this table; the confirmation-time view is the
    /// full collection.
    pub async fn confirm_bulk_delete(&mut self) {
        let view = self.list.ids();
        self.list.confirm_bulk_delete(&view).await;
    }

    pub async fn submit(&mut self, form: &UserForm) -> SubmitOutcome {
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
                    "User updated successfully"
                } else {
                    "User created successfully"
                });
                self.list.fetch_data().await;
                SubmitOutcome::Saved
            }
            Err(failure) => {
                error!(error = %failure, "user save failed");
                self.notifier.error(&failure.user_message());
                SubmitOutcome::Rejected
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

    use crate::modules::users::application::ports::outgoing::UserPayload;
    use crate::modules::users::domain::entities::UserRole;
    use crate::shared::http::ApiFailure;
    use crate::shared::listing::{BulkDeleteGateway, CollectionGateway, ResourceLabels};
    use crate::shared::notify::testing::RecordingNotifier;

    fn user(id: &str, name: &str) -> User {
        User {
            id: EntityId::from(id),
            user_name: name.to_string(),
            email: format!("{name}@macc.example"),
            role: UserRole::User,
            is_active: true,
            image: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[derive(Default)]
    struct MockUserGateway {
        rows: Mutex<Vec<User>>,
        list_calls: Mutex<usize>,
        created: Mutex<Vec<UserPayload>>,
        updated: Mutex<Vec<(EntityId, UserPayload)>>,
        bulk_calls: Mutex<Vec<Vec<EntityId>>>,
    }

    #[async_trait]
    impl CollectionGateway for MockUserGateway {
        type Entity = User;

        fn labels(&self) -> ResourceLabels {
            ResourceLabels {
                singular: "User",
                plural: "users",
            }
        }

        async fn list(&self) -> Result<Vec<User>, ApiFailure> {
            *self.list_calls.lock().unwrap() += 1;
            Ok(self.rows.lock().unwrap().clone())
        }

        async fn delete(&self, id: &EntityId) -> Result<(), ApiFailure> {
            self.rows.lock().unwrap().retain(|user| &user.id != id);
            Ok(())
        }
    }

    #[async_trait]
    impl BulkDeleteGateway for MockUserGateway {
        async fn bulk_delete(&self, ids: &[EntityId]) -> Result<(), ApiFailure> {
            self.bulk_calls.lock().unwrap().push(ids.to_vec());
            self.rows.lock().unwrap().retain(|user| !ids.contains(&user.id));
            Ok(())
        }
    }

    #[async_trait]
    impl UserGateway for MockUserGateway {
        async fn get(&self, _id: &EntityId) -> Result<User, ApiFailure> {
            unimplemented!("not used in controller tests")
        }

        async fn create(&self, payload: &UserPayload) -> Result<User, ApiFailure> {
            self.created.lock().unwrap().push(payload.clone());
            let created = user("new", &payload.user_name);
            self.rows.lock().unwrap().push(created.clone());
            Ok(created)
        }

        async fn update(&self, id: &EntityId, payload: &UserPayload) -> Result<User, ApiFailure> {
            self.updated.lock().unwrap().push((id.clone(), payload.clone()));
            let mut rows = self.rows.lock().unwrap();
            let row = rows.iter_mut().find(|user| &user.id == id).unwrap();
            row.user_name = payload.user_name.clone();
            Ok(row.clone())
        }
    }

    fn controller_with(
        gateway: Arc<MockUserGateway>,
    ) -> (UsersController<MockUserGateway>, Arc<RecordingNotifier>) {
        let notifier = Arc::new(RecordingNotifier::default());
        let controller = UsersController::new(gateway, notifier.clone());
        (controller, notifier)
    }

    fn create_form() -> UserForm {
        let mut form = UserForm::new();
        form.user_name = "site.admin".to_string();
        form.email = "admin@macc.example".to_string();
        form.password = "secret123".to_string();
        form
    }

    #[tokio::test]
    async fn test_create_sends_password_and_refetches() {
        let gateway = Arc::new(MockUserGateway::default());
        let (mut controller, notifier) = controller_with(gateway.clone());
        controller.mount().await;

        let outcome = controller.submit(&create_form()).await;
        assert!(outcome.is_saved());

        let created = gateway.created.lock().unwrap();
        assert_eq!(created[0].password.as_deref(), Some("secret123"));
        drop(created);
        assert_eq!(*gateway.list_calls.lock().unwrap(), 2);
        assert_eq!(
            notifier.successes.lock().unwrap().as_slice(),
            ["User created successfully"]
        );
    }

    #[tokio::test]
    async fn test_edit_without_password_keeps_it_out_of_the_payload() {
        let gateway = Arc::new(MockUserGateway {
            rows: Mutex::new(vec![user("u1", "hr.lead")]),
            ..MockUserGateway::default()
        });
        let (mut controller, _) = controller_with(gateway.clone());
        controller.mount().await;

        let mut form = UserForm::seed(&controller.users()[0]);
        form.user_name = "hr.manager".to_string();

        let outcome = controller.submit(&form).await;
        assert!(outcome.is_saved());

        let updated = gateway.updated.lock().unwrap();
        assert_eq!(updated.len(), 1);
        assert!(updated[0].1.password.is_none());
        drop(updated);
        assert_eq!(controller.users()[0].user_name, "hr.manager");
    }

    #[tokio::test]
    async fn test_missing_password_on_create_stays_local() {
        let gateway = Arc::new(MockUserGateway::default());
        let (mut controller, _) = controller_with(gateway.clone());
        controller.mount().await;

        let mut form = create_form();
        form.password = String::new();

        let outcome = controller.submit(&form).await;
        assert!(matches!(outcome, SubmitOutcome::Invalid(_)));
        assert!(gateway.created.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_bulk_delete_selected_users() {
        let gateway = Arc::new(MockUserGateway {
            rows: Mutex::new(vec![user("u1", "one"), user("u2", "two"), user("u3", "three")]),
            ..MockUserGateway::default()
        });
        let (mut controller, _) = controller_with(gateway.clone());
        controller.mount().await;

        controller.toggle_selected(&EntityId::from("u1"));
        controller.toggle_selected(&EntityId::from("u3"));
        controller.confirm_bulk_delete().await;

        let calls = gateway.bulk_calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0], vec![EntityId::from("u1"), EntityId::from("u3")]);
        drop(calls);
        assert_eq!(controller.users().len(), 1);
    }
}

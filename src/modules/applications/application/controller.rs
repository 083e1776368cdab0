use std::sync::Arc;

use tracing::error;

use crate::modules::applications::application::ports::outgoing::ApplicationGateway;
use crate::modules::applications::application::queries::{
    filter_applications, status_counts, ApplicationFilter, StatusCounts,
};
use crate::modules::applications::domain::entities::{Application, ApplicationStatus};
use crate::shared::domain::EntityId;
use crate::shared::listing::{ListController, PendingDelete};
use crate::shared::notify::Notifier;

/// Applications page. Mutations are status moves and deletes; both refetch on
/// success so the table always shows server truth.
pub struct ApplicationsController<G: ApplicationGateway> {
    gateway: Arc<G>,
    notifier: Arc<dyn Notifier>,
    list: ListController<G>,
    filter: ApplicationFilter,
}

impl<G: ApplicationGateway> ApplicationsController<G> {
    pub fn new(gateway: Arc<G>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            list: ListController::new(gateway.clone(), notifier.clone()),
            gateway,
            notifier,
            filter: ApplicationFilter::default(),
        }
    }

    pub async fn mount(&mut self) {
        self.list.fetch_data().await;
    }

    /// Scoped variant of the page: only applications for one posting. Runs
    /// through the same loading lifecycle as the full fetch.
    pub async fn mount_for_career(&mut self, career_id: &EntityId) {
        self.list.begin_loading();
        let result = self.gateway.list_for_career(career_id).await;
        self.list.finish_with(result);
    }

    pub fn applications(&self) -> &[Application] {
        self.list.entities()
    }

    pub fn is_loading(&self) -> bool {
        self.list.is_loading()
    }

    pub fn filter(&self) -> &ApplicationFilter {
        &self.filter
    }

    pub fn set_filter(&mut self, filter: ApplicationFilter) {
        self.filter = filter;
    }

    pub fn filtered(&self) -> Vec<&Application> {
        filter_applications(self.list.entities(), &self.filter)
    }

    pub fn counts(&self) -> StatusCounts {
        status_counts(self.list.entities())
    }

    pub async fn set_status(&mut self, id: &EntityId, status: ApplicationStatus) {
        match self.gateway.update_status(id, status).await {
            Ok(_) => {
                self.notifier
                    .success(&format!("Application status updated to {status}"));
                self.list.fetch_data().await;
            }
            Err(failure) => {
                error!(application = %id, error = %failure, "status update failed");
                self.notifier.error(&failure.user_message());
            }
        }
    }

    pub fn request_delete(&self, id: &EntityId) -> Option<PendingDelete> {
        self.list.request_delete(id)
    }

    pub async fn confirm_delete(&mut self, pending: PendingDelete) {
        self.list.confirm_delete(pending).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use async_trait::async_trait;
    use chrono::Utc;
    use reqwest::StatusCode;
    use std::sync::Mutex;

    use crate::modules::applications::domain::entities::{CareerRef, CvFile};
    use crate::shared::http::ApiFailure;
    use crate::shared::listing::{CollectionGateway, ResourceLabels};
    use crate::shared::notify::testing::RecordingNotifier;

    fn application(id: &str, career_id: &str, status: ApplicationStatus) -> Application {
        Application {
            id: EntityId::from(id),
            career: CareerRef::Unresolved(EntityId::from(career_id)),
            full_name: "Applicant".to_string(),
            email: format!("{id}@example.com"),
            phone: "+966500000000".to_string(),
            cv: CvFile {
                file_url: "https://cdn.example.com/cv.pdf".to_string(),
                public_id: "cvs/cv".to_string(),
            },
            status,
            created_at: Utc::now(),
        }
    }

    #[derive(Default)]
    struct MockApplicationGateway {
        rows: Mutex<Vec<Application>>,
        list_calls: Mutex<usize>,
        byjob_calls: Mutex<Vec<EntityId>>,
        status_calls: Mutex<Vec<(EntityId, &'static str)>>,
        fail_status: bool,
    }

    #[async_trait]
    impl CollectionGateway for MockApplicationGateway {
        type Entity = Application;

        fn labels(&self) -> ResourceLabels {
            ResourceLabels {
                singular: "Application",
                plural: "applications",
            }
        }

        async fn list(&self) -> Result<Vec<Application>, ApiFailure> {
            *self.list_calls.lock().unwrap() += 1;
            Ok(self.rows.lock().unwrap().clone())
        }

        async fn delete(&self, id: &EntityId) -> Result<(), ApiFailure> {
            self.rows
                .lock()
                .unwrap()
                .retain(|application| &application.id != id);
            Ok(())
        }
    }

    #[async_trait]
    impl ApplicationGateway for MockApplicationGateway {
        async fn get(&self, _id: &EntityId) -> Result<Application, ApiFailure> {
            unimplemented!("not used in controller tests")
        }

        async fn list_for_career(
            &self,
            career_id: &EntityId,
        ) -> Result<Vec<Application>, ApiFailure> {
            self.byjob_calls.lock().unwrap().push(career_id.clone());
            Ok(self
                .rows
                .lock()
                .unwrap()
                .iter()
                .filter(|application| application.career.id() == career_id)
                .cloned()
                .collect())
        }

        async fn update_status(
            &self,
            id: &EntityId,
            status: ApplicationStatus,
        ) -> Result<Application, ApiFailure> {
            if self.fail_status {
                return Err(ApiFailure::Status {
                    status: StatusCode::BAD_REQUEST,
                    message: "Invalid status value".to_string(),
                });
            }
            self.status_calls
                .lock()
                .unwrap()
                .push((id.clone(), status.as_str()));
            let mut rows = self.rows.lock().unwrap();
            let row = rows
                .iter_mut()
                .find(|application| &application.id == id)
                .unwrap();
            row.status = status;
            Ok(row.clone())
        }
    }

    fn controller_with(
        gateway: Arc<MockApplicationGateway>,
    ) -> (
        ApplicationsController<MockApplicationGateway>,
        Arc<RecordingNotifier>,
    ) {
        let notifier = Arc::new(RecordingNotifier::default());
        let controller = ApplicationsController::new(gateway, notifier.clone());
        (controller, notifier)
    }

    #[tokio::test]
    async fn test_each_status_word_patches_once_and_refetches_once() {
        for status in ApplicationStatus::ALL {
            let gateway = Arc::new(MockApplicationGateway {
                rows: Mutex::new(vec![application("a", "job1", ApplicationStatus::Pending)]),
                ..MockApplicationGateway::default()
            });
            let (mut controller, notifier) = controller_with(gateway.clone());
            controller.mount().await;

            controller.set_status(&EntityId::from("a"), status).await;

            let calls = gateway.status_calls.lock().unwrap();
            assert_eq!(calls.as_slice(), [(EntityId::from("a"), status.as_str())]);
            drop(calls);

            // one mount fetch + exactly one post-mutation refetch
            assert_eq!(*gateway.list_calls.lock().unwrap(), 2);
            assert_eq!(controller.applications()[0].status, status);
            assert_eq!(
                notifier.successes.lock().unwrap().as_slice(),
                [format!("Application status updated to {}", status.as_str())]
            );
        }
    }

    #[tokio::test]
    async fn test_failed_status_update_surfaces_server_message() {
        let gateway = Arc::new(MockApplicationGateway {
            rows: Mutex::new(vec![application("a", "job1", ApplicationStatus::Pending)]),
            fail_status: true,
            ..MockApplicationGateway::default()
        });
        let (mut controller, notifier) = controller_with(gateway.clone());
        controller.mount().await;

        controller
            .set_status(&EntityId::from("a"), ApplicationStatus::Accepted)
            .await;

        assert_eq!(*gateway.list_calls.lock().unwrap(), 1);
        assert_eq!(controller.applications()[0].status, ApplicationStatus::Pending);
        assert_eq!(
            notifier.errors.lock().unwrap().as_slice(),
            ["Invalid status value"]
        );
    }

    #[tokio::test]
    async fn test_mount_for_career_scopes_the_collection() {
        let gateway = Arc::new(MockApplicationGateway {
            rows: Mutex::new(vec![
                application("a", "job1", ApplicationStatus::Pending),
                application("b", "job2", ApplicationStatus::Pending),
            ]),
            ..MockApplicationGateway::default()
        });
        let (mut controller, _) = controller_with(gateway.clone());

        controller.mount_for_career(&EntityId::from("job1")).await;

        assert_eq!(controller.applications().len(), 1);
        assert_eq!(
            gateway.byjob_calls.lock().unwrap().as_slice(),
            [EntityId::from("job1")]
        );
        assert!(!controller.is_loading());
    }

    #[tokio::test]
    async fn test_delete_requires_confirmation_then_refetches() {
        let gateway = Arc::new(MockApplicationGateway {
            rows: Mutex::new(vec![application("a", "job1", ApplicationStatus::Pending)]),
            ..MockApplicationGateway::default()
        });
        let (mut controller, notifier) = controller_with(gateway.clone());
        controller.mount().await;

        let pending = controller.request_delete(&EntityId::from("a")).unwrap();
        controller.confirm_delete(pending).await;

        assert!(controller.applications().is_empty());
        assert_eq!(
            notifier.successes.lock().unwrap().as_slice(),
            ["Application deleted"]
        );
    }
}

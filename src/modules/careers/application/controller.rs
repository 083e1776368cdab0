use std::sync::Arc;

use tracing::error;

use crate::modules::careers::application::form::CareerForm;
use crate::modules::careers::application::ports::outgoing::CareerGateway;
use crate::modules::careers::application::queries::{
    career_counts, filter_careers, CareerCounts, CareerFilter,
};
use crate::modules::careers::domain::entities::Career;
use crate::shared::domain::EntityId;
use crate::shared::forms::SubmitOutcome;
use crate::shared::listing::{ListController, PendingDelete};
use crate::shared::notify::Notifier;

/// Careers page: owns the authoritative collection plus the filter state and
/// drives every mutation through call → notify → refetch.
pub struct CareersController<G: CareerGateway> {
    gateway: Arc<G>,
    notifier: Arc<dyn Notifier>,
    list: ListController<G>,
    filter: CareerFilter,
}

impl<G: CareerGateway> CareersController<G> {
    pub fn new(gateway: Arc<G>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            list: ListController::new(gateway.clone(), notifier.clone()),
            gateway,
            notifier,
            filter: CareerFilter::default(),
        }
    }

    /// Page mount: the collection starts empty and is fetched fresh.
    pub async fn mount(&mut self) {
        self.list.fetch_data().await;
    }

    pub fn careers(&self) -> &[Career] {
        self.list.entities()
    }

    pub fn is_loading(&self) -> bool {
        self.list.is_loading()
    }

    pub fn filter(&self) -> &CareerFilter {
        &self.filter
    }

    pub fn set_filter(&mut self, filter: CareerFilter) {
        self.filter = filter;
    }

    /// The rendered view: recomputed from the authoritative collection on
    /// every call, never cached.
    pub fn filtered(&self) -> Vec<&Career> {
        filter_careers(self.list.entities(), &self.filter)
    }

    pub fn filtered_ids(&self) -> Vec<EntityId> {
        self.filtered().iter().map(|career| career.id.clone()).collect()
    }

    pub fn counts(&self) -> CareerCounts {
        career_counts(self.list.entities())
    }

    pub fn toggle_selected(&mut self, id: &EntityId) -> bool {
        self.list.selection_mut().toggle(id)
    }

    pub fn selected_count(&self) -> usize {
        self.list.selection().len()
    }

    pub async fn toggle_status(&mut self, id: &EntityId) {
        match self.gateway.toggle_status(id).await {
            Ok(()) => {
                self.notifier.success("Status updated");
                self.list.fetch_data().await;
            }
            Err(failure) => {
                error!(career = %id, error = %failure, "status toggle failed");
                self.notifier.error("Failed to update status");
            }
        }
    }

    pub fn request_delete(&self, id: &EntityId) -> Option<PendingDelete> {
        self.list.request_delete(id)
    }

    pub async fn confirm_delete(&mut self, pending: PendingDelete) {
        self.list.confirm_delete(pending).await;
    }

    /// Bulk delete resolves the selection against the filtered view as it
    /// stands right now, then issues one batched call.
    pub async fn confirm_bulk_delete(&mut self) {
        let view = self.filtered_ids();
        self.list.confirm_bulk_delete(&view).await;
    }

    /// Submit the post/edit dialog. An invalid draft never reaches the
    /// gateway; a rejected one stays open with the draft intact.
    pub async fn submit(&mut self, form: &CareerForm) -> SubmitOutcome {
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
                    "Career updated"
                } else {
                    "Career posted"
                });
                self.list.fetch_data().await;
                SubmitOutcome::Saved
            }
            Err(failure) => {
                error!(error = %failure, "career save failed");
                self.notifier.error(&failure.user_message());
                SubmitOutcome::Rejected
            }
        }
    }
}

use std::sync::Arc;

use tracing::error;

use crate::shared::domain::EntityId;
use crate::shared::http::ApiFailure;
use crate::shared::listing::gateway::{BulkDeleteGateway, CollectionGateway, HasId};
use crate::shared::listing::selection::Selection;
use crate::shared::notify::Notifier;

/// A delete that has been requested but not yet confirmed. Destructive calls
/// are only ever issued from [`ListController::confirm_delete`], so a row
/// action can never delete anything without the confirmation step.
#[must_use = "a pending delete does nothing until confirmed"]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingDelete {
    id: EntityId,
}

impl PendingDelete {
    pub fn id(&self) -> &EntityId {
        &self.id
    }
}

/// Page-level owner of one resource's authoritative collection.
///
/// The lifecycle per page is `Loading -> Ready`: a fetch replaces the
/// collection wholesale on success and swallows a failure into an empty
/// collection plus an error notification. Every successful mutation refetches
/// instead of patching locally, so the rendered collection always reflects
/// server truth after an action; a failed mutation changes nothing.
pub struct ListController<G: CollectionGateway> {
    gateway: Arc<G>,
    notifier: Arc<dyn Notifier>,
    entities: Vec<G::Entity>,
    loading: bool,
    selection: Selection,
}

impl<G: CollectionGateway> ListController<G> {
    pub fn new(gateway: Arc<G>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            gateway,
            notifier,
            entities: Vec::new(),
            loading: false,
            selection: Selection::default(),
        }
    }

    pub fn entities(&self) -> &[G::Entity] {
        &self.entities
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn selection_mut(&mut self) -> &mut Selection {
        &mut self.selection
    }

    pub fn ids(&self) -> Vec<EntityId> {
        self.entities.iter().map(|entity| entity.id().clone()).collect()
    }

    /// Replace the collection with whatever the backend currently holds.
    pub async fn fetch_data(&mut self) {
        self.begin_loading();
        let result = self.gateway.list().await;
        self.finish_with(result);
    }

    /// Enter the loading state ahead of a list call. Paired with
    /// [`Self::finish_with`]; split out so page controllers can run scoped
    /// list variants (e.g. applications for one career) through the same
    /// lifecycle.
    pub fn begin_loading(&mut self) {
        self.loading = true;
    }

    /// Leave the loading state with the outcome of a list call. The loading
    /// flag clears on every path.
    pub fn finish_with(&mut self, result: Result<Vec<G::Entity>, ApiFailure>) {
        let labels = self.gateway.labels();
        match result {
            Ok(entities) => {
                self.selection.retain_known(entities.iter().map(HasId::id));
                self.entities = entities;
            }
            Err(failure) => {
                error!(resource = labels.plural, error = %failure, "list fetch failed");
                self.notifier
                    .error(&format!("Failed to fetch {}", labels.plural));
                self.entities = Vec::new();
            }
        }
        self.loading = false;
    }

    /// Open the confirmation step for one row. Returns `None` when the id is
    /// not in the current collection.
    pub fn request_delete(&self, id: &EntityId) -> Option<PendingDelete> {
        self.entities
            .iter()
            .any(|entity| entity.id() == id)
            .then(|| PendingDelete { id: id.clone() })
    }

    /// Issue the confirmed delete, then refetch. A failure surfaces one
    /// notification and leaves the collection untouched.
    pub async fn confirm_delete(&mut self, pending: PendingDelete) {
        let labels = self.gateway.labels();
        match self.gateway.delete(pending.id()).await {
            Ok(()) => {
                self.notifier.success(&format!("{} deleted", labels.singular));
                self.fetch_data().await;
            }
            Err(failure) => {
                error!(resource = labels.singular, error = %failure, "delete failed");
                self.notifier.error(&failure.user_message());
            }
        }
    }
}

impl<G: BulkDeleteGateway> ListController<G> {
    /// Delete every selected row still present in `view`, the filtered view
    /// as it stands at confirmation time, not as it stood when rows were
    /// selected. One batched call; on success the selection clears and the
    /// collection refetches, on failure one notification and no state change.
    pub async fn confirm_bulk_delete(&mut self, view: &[EntityId]) {
        let ids = self.selection.resolve(view);
        if ids.is_empty() {
            return;
        }

        let labels = self.gateway.labels();
        match self.gateway.bulk_delete(&ids).await {
            Ok(()) => {
                self.selection.clear();
                self.notifier
                    .success(&format!("Deleted {} {}", ids.len(), labels.plural));
                self.fetch_data().await;
            }
            Err(failure) => {
                error!(resource = labels.plural, error = %failure, "bulk delete failed");
                self.notifier.error(&failure.user_message());
            }
        }
    }
}

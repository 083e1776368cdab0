pub mod controller;
pub mod filtering;
pub mod gateway;
pub mod selection;

pub use controller::{ListController, PendingDelete};
pub use filtering::{distinct_non_empty, FilterChoice};
pub use gateway::{BulkDeleteGateway, CollectionGateway, HasId, ResourceLabels};
pub use selection::Selection;

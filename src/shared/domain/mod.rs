pub mod id;
pub mod image;
pub mod localized;

pub use id::EntityId;
pub use image::{ImageRef, ImageUpload};
pub use localized::Localized;

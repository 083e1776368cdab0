use crate::modules::services::application::ports::outgoing::{ItemPayload, SectionPayload};
use crate::modules::services::domain::entities::{ServiceItem, ServiceSection};
use crate::shared::domain::{EntityId, ImageRef, ImageUpload, Localized};
use crate::shared::forms::FormErrors;

/// Draft state of the add/edit-section dialog. The image slot holds a local
/// selection that is only uploaded when the draft submits; a section without
/// an image is valid on both create and edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionForm {
    pub title_en: String,
    pub title_ar: String,
    pub sub_title_en: String,
    pub sub_title_ar: String,
    pub description_en: String,
    pub description_ar: String,
    pub is_active: bool,
    pub image: Option<ImageUpload>,
    existing_image: Option<ImageRef>,
    editing: Option<EntityId>,
}

impl Default for SectionForm {
    fn default() -> Self {
        Self {
            title_en: String::new(),
            title_ar: String::new(),
            sub_title_en: String::new(),
            sub_title_ar: String::new(),
            description_en: String::new(),
            description_ar: String::new(),
            is_active: true,
            image: None,
            existing_image: None,
            editing: None,
        }
    }
}

impl SectionForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seed(section: &ServiceSection) -> Self {
        Self {
            title_en: section.header.title.en.clone(),
            title_ar: section.header.title.ar.clone(),
            sub_title_en: section.header.sub_title.en.clone(),
            sub_title_ar: section.header.sub_title.ar.clone(),
            description_en: section.header.description.en.clone(),
            description_ar: section.header.description.ar.clone(),
            is_active: section.is_active,
            image: None,
            existing_image: section.header.image.clone(),
            editing: Some(section.id.clone()),
        }
    }

    pub fn editing(&self) -> Option<&EntityId> {
        self.editing.as_ref()
    }

    /// The image shown in the dialog: the fresh local selection wins over the
    /// stored one.
    pub fn preview(&self) -> Option<&str> {
        if let Some(upload) = &self.image {
            return Some(upload.file_name.as_str());
        }
        self.existing_image.as_ref().map(|image| image.image_link.as_str())
    }

    pub fn select_image(&mut self, upload: ImageUpload) {
        self.image = Some(upload);
    }

    pub fn validate(&self) -> Result<SectionPayload, FormErrors> {
        let mut errors = FormErrors::default();

        errors.check_min("title_en", &self.title_en, 2, "Title (EN) is required");
        errors.check_min("title_ar", &self.title_ar, 2, "Title (AR) is required");
        errors.check_min(
            "sub_title_en",
            &self.sub_title_en,
            2,
            "Subtitle (EN) is required",
        );
        errors.check_min(
            "sub_title_ar",
            &self.sub_title_ar,
            2,
            "Subtitle (AR) is required",
        );
        errors.check_min(
            "description_en",
            &self.description_en,
            2,
            "Description (EN) is required",
        );
        errors.check_min(
            "description_ar",
            &self.description_ar,
            2,
            "Description (AR) is required",
        );

        errors.into_result(SectionPayload {
            title: Localized::new(self.title_en.clone(), self.title_ar.clone()),
            sub_title: Localized::new(self.sub_title_en.clone(), self.sub_title_ar.clone()),
            description: Localized::new(self.description_en.clone(), self.description_ar.clone()),
            is_active: self.is_active,
            image: self.image.clone(),
        })
    }
}

/// Draft state of the item editor inside the manage-items dialog. Items
/// require an image: a new item with no local selection fails validation
/// before any network traffic, while an edit may keep the stored image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemForm {
    pub title_en: String,
    pub title_ar: String,
    pub category_en: String,
    pub category_ar: String,
    pub description_en: String,
    pub description_ar: String,
    pub order: i32,
    pub image: Option<ImageUpload>,
    existing_image: Option<ImageRef>,
    editing: Option<EntityId>,
}

impl Default for ItemForm {
    fn default() -> Self {
        Self {
            title_en: String::new(),
            title_ar: String::new(),
            category_en: String::new(),
            category_ar: String::new(),
            description_en: String::new(),
            description_ar: String::new(),
            order: 0,
            image: None,
            existing_image: None,
            editing: None,
        }
    }
}

impl ItemForm {
    /// Empty template for a new item; `order` defaults to the end of the
    /// section's current list.
    pub fn new(section: &ServiceSection) -> Self {
        Self {
            order: section.services.len() as i32 + 1,
            ..Self::default()
        }
    }

    pub fn seed(item: &ServiceItem) -> Self {
        Self {
            title_en: item.title.en.clone(),
            title_ar: item.title.ar.clone(),
            category_en: item.category.en.clone(),
            category_ar: item.category.ar.clone(),
            description_en: item.description.en.clone(),
            description_ar: item.description.ar.clone(),
            order: item.order,
            image: None,
            existing_image: item.image.clone(),
            editing: item.id.clone(),
        }
    }

    pub fn editing(&self) -> Option<&EntityId> {
        self.editing.as_ref()
    }

    /// The image shown in the editor: a fresh local selection wins over the
    /// stored one.
    pub fn preview(&self) -> Option<&str> {
        if let Some(upload) = &self.image {
            return Some(upload.file_name.as_str());
        }
        self.existing_image.as_ref().map(|image| image.image_link.as_str())
    }

    pub fn select_image(&mut self, upload: ImageUpload) {
        self.image = Some(upload);
    }

    pub fn validate(&self) -> Result<ItemPayload, FormErrors> {
        let mut errors = FormErrors::default();

        errors.check_min("title_en", &self.title_en, 2, "Title (EN) is required");
        errors.check_min("title_ar", &self.title_ar, 2, "Title (AR) is required");
        errors.check_min(
            "category_en",
            &self.category_en,
            2,
            "Category (EN) is required",
        );
        errors.check_min(
            "category_ar",
            &self.category_ar,
            2,
            "Category (AR) is required",
        );
        errors.check_min(
            "description_en",
            &self.description_en,
            2,
            "Description (EN) is required",
        );
        errors.check_min(
            "description_ar",
            &self.description_ar,
            2,
            "Description (AR) is required",
        );

        if self.order < 1 {
            errors.push("order", "Order must be at least 1");
        }

        // a brand-new item has no stored image to fall back on
        if self.editing.is_none() && self.image.is_none() {
            errors.push("image", "Image is required");
        }

        errors.into_result(ItemPayload {
            title: Localized::new(self.title_en.clone(), self.title_ar.clone()),
            category: Localized::new(self.category_en.clone(), self.category_ar.clone()),
            description: Localized::new(self.description_en.clone(), self.description_ar.clone()),
            order: self.order,
            image: self.image.clone(),
        })
    }
}

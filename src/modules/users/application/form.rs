use email_address::EmailAddress;

use crate::modules::users::application::ports::outgoing::UserPayload;
use crate::modules::users::domain::entities::{User, UserRole};
use crate::shared::domain::{EntityId, ImageRef, ImageUpload};
use crate::shared::forms::FormErrors;

/// Draft state of the add/edit-user dialog. The password box is never
/// pre-filled on edit; leaving it blank there means "keep the current
/// password", while creating an account requires one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserForm {
    pub user_name: String,
    pub email: String,
    pub password: String,
    pub role: UserRole,
    pub is_active: bool,
    pub image: Option<ImageUpload>,
    existing_image: Option<ImageRef>,
    editing: Option<EntityId>,
}

impl Default for UserForm {
    fn default() -> Self {
        Self {
            user_name: String::new(),
            email: String::new(),
            password: String::new(),
            role: UserRole::Admin,
            is_active: true,
            image: None,
            existing_image: None,
            editing: None,
        }
    }
}

impl UserForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seed(user: &User) -> Self {
        Self {
            user_name: user.user_name.clone(),
            email: user.email.clone(),
            password: String::new(),
            role: user.role,
            is_active: user.is_active,
            image: None,
            existing_image: user.image.clone(),
            editing: Some(user.id.clone()),
        }
    }

    pub fn editing(&self) -> Option<&EntityId> {
        self.editing.as_ref()
    }

    /// The avatar shown in the dialog: a fresh local selection wins over the
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

    pub fn validate(&self) -> Result<UserPayload, FormErrors> {
        let mut errors = FormErrors::default();

        errors.check_min(
            "userName",
            &self.user_name,
            2,
            "Username must be at least 2 characters",
        );

        if !EmailAddress::is_valid(self.email.trim()) {
            errors.push("email", "Invalid email address");
        }

        let password = self.password.trim();
        if self.editing.is_none() && password.is_empty() {
            errors.push("password", "Password is required when creating a new user");
        }

        errors.into_result(UserPayload {
            user_name: self.user_name.trim().to_string(),
            email: self.email.trim().to_string(),
            password: if password.is_empty() {
                None
            } else {
                Some(password.to_string())
            },
            role: self.role,
            is_active: self.is_active,
            image: self.image.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use chrono::Utc;

    fn sample_user() -> User {
        User {
            id: EntityId::from("u1"),
            user_name: "hr.lead".to_string(),
            email: "hr@macc.example".to_string(),
            role: UserRole::Hr,
            is_active: true,
            image: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn filled_form() -> UserForm {
        UserForm {
            user_name: "site.admin".to_string(),
            email: "admin@macc.example".to_string(),
            password: "secret123".to_string(),
            ..UserForm::new()
        }
    }

    #[test]
    fn test_create_requires_a_password() {
        let mut form = filled_form();
        form.password = String::new();

        let errors = form.validate().unwrap_err();
        assert_eq!(
            errors.message_for("password"),
            Some("Password is required when creating a new user")
        );
    }

    #[test]
    fn test_seed_previews_the_stored_avatar() {
        let mut user = sample_user();
        user.image = Some(ImageRef {
            image_link: "https://cdn.example.com/a.png".to_string(),
            public_id: "avatars/a".to_string(),
        });

        let mut form = UserForm::seed(&user);
        assert_eq!(form.preview(), Some("https://cdn.example.com/a.png"));

        form.select_image(ImageUpload::new("new.png", "image/png", vec![1]));
        assert_eq!(form.preview(), Some("new.png"), "local selection wins");
    }

    #[test]
    fn test_blank_password_on_edit_means_unchanged() {
        let form = UserForm::seed(&sample_user());
        assert_eq!(form.password, "", "password is never pre-filled");

        let payload = form.validate().unwrap();
        assert!(payload.password.is_none());
        assert_eq!(payload.role, UserRole::Hr);
    }

    #[test]
    fn test_edit_with_new_password_sends_it() {
        let mut form = UserForm::seed(&sample_user());
        form.password = "rotated-secret".to_string();

        let payload = form.validate().unwrap();
        assert_eq!(payload.password.as_deref(), Some("rotated-secret"));
    }

    #[test]
    fn test_email_shape_is_checked() {
        let mut form = filled_form();
        form.email = "not-an-email".to_string();

        let errors = form.validate().unwrap_err();
        assert_eq!(errors.message_for("email"), Some("Invalid email address"));
    }

    #[test]
    fn test_short_username_is_rejected() {
        let mut form = filled_form();
        form.user_name = "a".to_string();

        let errors = form.validate().unwrap_err();
        assert_eq!(
            errors.message_for("userName"),
            Some("Username must be at least 2 characters")
        );
    }

    #[test]
    fn test_valid_create_produces_full_payload() {
        let payload = filled_form().validate().unwrap();
        assert_eq!(payload.user_name, "site.admin");
        assert_eq!(payload.password.as_deref(), Some("secret123"));
        assert_eq!(payload.role, UserRole::Admin);
        assert!(payload.is_active);
    }
}

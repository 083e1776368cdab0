use crate::modules::users::domain::entities::{User, UserRole};

/// Header-card counts for the users page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserCounts {
    pub total: usize,
    pub admins: usize,
    pub active: usize,
}

pub fn user_counts(users: &[User]) -> UserCounts {
    UserCounts {
        total: users.len(),
        admins: users
            .iter()
            .filter(|user| user.role == UserRole::Admin)
            .count(),
        active: users.iter().filter(|user| user.is_active).count(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use chrono::Utc;

    use crate::shared::domain::EntityId;

    fn user(id: &str, role: UserRole, active: bool) -> User {
        User {
            id: EntityId::from(id),
            user_name: format!("user-{id}"),
            email: format!("{id}@macc.example"),
            role,
            is_active: active,
            image: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_counts_tally_roles_and_activity() {
        let users = vec![
            user("a", UserRole::Admin, true),
            user("b", UserRole::Hr, true),
            user("c", UserRole::Admin, false),
            user("d", UserRole::User, false),
        ];

        assert_eq!(
            user_counts(&users),
            UserCounts {
                total: 4,
                admins: 2,
                active: 2
            }
        );
    }
}

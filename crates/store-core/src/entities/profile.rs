//! Profile entity - public data of an authenticated user

use chrono::{DateTime, Utc};

use crate::value_objects::UserId;

/// User profile
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub id: UserId,
    pub username: Option<String>,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl Profile {
    /// Create a new Profile
    pub fn new(id: UserId, username: Option<String>, email: String) -> Self {
        Self {
            id,
            username,
            email,
            created_at: Utc::now(),
        }
    }

    /// Username when set and non-blank, otherwise the email
    pub fn display_name(&self) -> &str {
        match self.username.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => name,
            _ => &self.email,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_prefers_username() {
        let p = Profile::new(UserId::generate(), Some("ana".into()), "ana@example.com".into());
        assert_eq!(p.display_name(), "ana");
    }

    #[test]
    fn test_display_name_falls_back_to_email() {
        let p = Profile::new(UserId::generate(), None, "bob@example.com".into());
        assert_eq!(p.display_name(), "bob@example.com");

        let p = Profile::new(UserId::generate(), Some("  ".into()), "carl@example.com".into());
        assert_eq!(p.display_name(), "carl@example.com");
    }
}

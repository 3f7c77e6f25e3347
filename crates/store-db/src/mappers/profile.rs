//! Profile entity <-> model mapper

use uuid::Uuid;

use store_core::entities::Profile;
use store_core::value_objects::UserId;

use crate::models::ProfileModel;

/// Convert ProfileModel to Profile entity
impl From<ProfileModel> for Profile {
    fn from(model: ProfileModel) -> Self {
        Profile {
            id: UserId::new(model.id),
            username: model.username,
            email: model.email,
            created_at: model.created_at,
        }
    }
}

/// Profile entity values for insertion
pub struct ProfileInsert<'a> {
    pub id: Uuid,
    pub username: Option<&'a str>,
    pub email: &'a str,
}

impl<'a> ProfileInsert<'a> {
    pub fn new(profile: &'a Profile) -> Self {
        Self {
            id: profile.id.into_inner(),
            username: profile.username.as_deref(),
            email: &profile.email,
        }
    }
}

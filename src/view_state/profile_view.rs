//! Projection of the current session into the profile screen's fields.

use crate::auth::User;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileViewState {
    pub title: String,
    pub username: String,
    pub email: String,
}

impl ProfileViewState {
    pub fn project(user: Option<&User>) -> Self {
        Self {
            title: "Profile".to_string(),
            username: user.map(|u| u.name.clone()).unwrap_or_else(|| "-".to_string()),
            email: user.map(|u| u.email.clone()).unwrap_or_else(|| "-".to_string()),
        }
    }
}

//! User model.

use serde::{Deserialize, Serialize};

use super::common::Image;

/// Public or current-user profile.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct User {
    /// Spotify user ID.
    pub id: String,

    /// Name shown on the profile; the API sends null when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    /// Profile pictures.
    #[serde(default)]
    pub images: Vec<Image>,
}

impl User {
    /// Display name, falling back to the user ID.
    pub fn name(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.id)
    }
}

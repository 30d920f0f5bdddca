//! User hydration.

use serde_json::Value;

use super::image::image_list;
use super::source::{optional_str, required_id};
use super::{Hydrate, Hydrator};
use crate::error::Result;
use crate::models::User;

/// Copy user scalars: `id`, `display_name`.
pub fn base(source: &Value, user: &mut User) -> Result<()> {
    user.id = required_id(source, "id")?;
    user.display_name = optional_str(source, "display_name")?;
    Ok(())
}

impl Hydrate for User {
    const HYDRATORS: &'static [Hydrator<Self>] = &[base, image_list::<User>];
}

/// Read an embedded user object under `key`, if present.
pub fn user_ref(source: &Value, key: &str) -> Result<Option<User>> {
    super::source::optional_object(source, key)?
        .map(User::from_json)
        .transpose()
}

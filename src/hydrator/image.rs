//! Image list hydration, shared by every entity that carries pictures.

use serde_json::Value;

use super::source::{optional_array, optional_u32, required_str};
use crate::error::Result;
use crate::models::{Album, Artist, Image, Playlist, User};

/// Entity with an image list.
pub trait HasImages {
    fn images_mut(&mut self) -> &mut Vec<Image>;
}

impl HasImages for Album {
    fn images_mut(&mut self) -> &mut Vec<Image> {
        &mut self.images
    }
}

impl HasImages for Artist {
    fn images_mut(&mut self) -> &mut Vec<Image> {
        &mut self.images
    }
}

impl HasImages for User {
    fn images_mut(&mut self) -> &mut Vec<Image> {
        &mut self.images
    }
}

impl HasImages for Playlist {
    fn images_mut(&mut self) -> &mut Vec<Image> {
        &mut self.images
    }
}

/// Parse a single image object. `url` is required.
pub fn parse_image(json: &Value) -> Result<Image> {
    Ok(Image {
        url: required_str(json, "url")?,
        width: optional_u32(json, "width")?,
        height: optional_u32(json, "height")?,
    })
}

/// Read the `images` array. An absent array yields no images.
pub fn image_list<T: HasImages>(source: &Value, target: &mut T) -> Result<()> {
    let images = optional_array(source, "images")?
        .iter()
        .map(parse_image)
        .collect::<Result<Vec<_>>>()?;

    *target.images_mut() = images;
    Ok(())
}

//! Common types shared across all models.

use serde::{Deserialize, Serialize};

/// Image with URL and optional dimensions.
///
/// Dimensions are missing for user-uploaded images.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Image {
    /// URL to the image.
    pub url: String,

    /// Width in pixels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,

    /// Height in pixels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
}

impl Image {
    /// Create a new image.
    pub fn new<S: Into<String>>(url: S, width: Option<u32>, height: Option<u32>) -> Self {
        Self {
            url: url.into(),
            width,
            height,
        }
    }

    /// Pixel area, zero when a dimension is unknown.
    pub fn area(&self) -> u64 {
        self.width.unwrap_or(0) as u64 * self.height.unwrap_or(0) as u64
    }
}

/// Pick the largest image by pixel area.
pub fn largest_image(images: &[Image]) -> Option<&Image> {
    images.iter().max_by_key(|img| img.area())
}

/// One slice of a larger result set.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Pagination<T> {
    /// Items in the order the API returned them.
    pub items: Vec<T>,

    /// Size of the whole result set.
    pub total: u32,

    /// Page size requested.
    pub limit: u32,

    /// Index of the first item of this page.
    pub offset: u32,

    /// Offset of the following page, if there is one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_offset: Option<u32>,
}

impl<T> Default for Pagination<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            total: 0,
            limit: 0,
            offset: 0,
            next_offset: None,
        }
    }
}

impl<T> Pagination<T> {
    /// Whether another page can be requested.
    pub fn has_next(&self) -> bool {
        self.next_offset.is_some()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Non-paginated batch result, as returned by multi-id lookups.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Collection<T> {
    pub items: Vec<T>,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T> Collection<T> {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_largest_image_ignores_unknown_dimensions() {
        let images = vec![
            Image::new("http://example.com/unknown.jpg", None, None),
            Image::new("http://example.com/640.jpg", Some(640), Some(640)),
            Image::new("http://example.com/300.jpg", Some(300), Some(300)),
        ];

        let largest = largest_image(&images).unwrap();
        assert_eq!(largest.url, "http://example.com/640.jpg");
    }

    #[test]
    fn test_largest_image_empty() {
        assert!(largest_image(&[]).is_none());
    }

    #[test]
    fn test_pagination_has_next() {
        let mut page: Pagination<u32> = Pagination::default();
        assert!(!page.has_next());
        assert!(page.is_empty());

        page.next_offset = Some(20);
        assert!(page.has_next());
    }
}

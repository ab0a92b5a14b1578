// SPDX-License-Identifier: MPL-2.0
//! Media value objects without presentation dependencies.

use std::sync::Arc;

/// A decoded preview frame as tightly packed RGBA pixels.
///
/// This type carries no presentation handle; the view layer builds its own
/// image handle from the bytes.
///
/// # Example
///
/// ```
/// use seek_overlay::domain::media::PreviewImage;
///
/// let pixels = vec![255u8; 16 * 9 * 4];
/// let image = PreviewImage::from_rgba(16, 9, pixels).unwrap();
///
/// assert_eq!(image.width(), 16);
/// assert_eq!(image.height(), 9);
/// assert!(PreviewImage::from_rgba(16, 9, vec![0u8; 3]).is_none());
/// ```
#[derive(Debug, Clone)]
pub struct PreviewImage {
    /// Image width in pixels.
    width: u32,
    /// Image height in pixels.
    height: u32,
    /// RGBA pixel data (4 bytes per pixel).
    rgba_bytes: Arc<Vec<u8>>,
}

impl PreviewImage {
    /// Creates a preview from dimensions and owned RGBA pixel data.
    ///
    /// Returns `None` if the data length doesn't match `width * height * 4`
    /// or if either dimension is zero.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, rgba_bytes: Vec<u8>) -> Option<Self> {
        let expected_len = (width as usize) * (height as usize) * 4;
        if expected_len == 0 || rgba_bytes.len() != expected_len {
            return None;
        }

        Some(Self {
            width,
            height,
            rgba_bytes: Arc::new(rgba_bytes),
        })
    }

    /// Returns the image width in pixels.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the image height in pixels.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns a reference to the RGBA pixel data.
    #[must_use]
    pub fn rgba_bytes(&self) -> &[u8] {
        &self.rgba_bytes
    }

    /// Returns an owned copy of the pixel data, for handing to a renderer.
    #[must_use]
    pub fn to_rgba_vec(&self) -> Vec<u8> {
        self.rgba_bytes.as_ref().clone()
    }
}

impl PartialEq for PreviewImage {
    fn eq(&self, other: &Self) -> bool {
        self.width == other.width
            && self.height == other.height
            && self.rgba_bytes == other.rgba_bytes
    }
}

impl Eq for PreviewImage {}

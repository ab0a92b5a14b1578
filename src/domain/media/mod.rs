// SPDX-License-Identifier: MPL-2.0
//! Media domain types: preview frames and display titles.

pub mod title;
pub mod types;

pub use title::{display_name, FALLBACK_TITLE};
pub use types::PreviewImage;

// SPDX-License-Identifier: MPL-2.0
//! User interface for the overlay demo.
//!
//! - [`input`] - Native touch and mouse events to overlay messages
//! - [`overlay_view`] - Banners, time labels, seek bar and preview
//! - [`styles`] - Container styles for the overlay widgets
//! - [`design_tokens`] - Colors, spacing and sizes

pub mod design_tokens;
pub mod input;
pub mod overlay_view;
pub mod styles;

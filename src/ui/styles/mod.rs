// SPDX-License-Identifier: MPL-2.0
//! Styles for the overlay widgets.

pub mod overlay;

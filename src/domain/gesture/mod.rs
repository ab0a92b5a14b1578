// SPDX-License-Identifier: MPL-2.0
//! Gesture domain types.
//!
//! Geometry and tuning values shared by the classifier and the seek
//! pipeline, free of any presentation concerns.

pub mod newtypes;
pub mod point;

pub use newtypes::{HoldDuration, ScrubRate, SwipeDistance, ThrottleInterval};
pub use point::{Direction, Point};

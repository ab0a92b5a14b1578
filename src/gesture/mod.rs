// SPDX-License-Identifier: MPL-2.0
//! Gesture disambiguation.
//!
//! A touch starts [`Gesture::Pending`] and becomes at most one of long-tap,
//! horizontal scrub or vertical quick seek. Releasing a touch that never
//! became anything is a tap if it was short enough.

mod classify;
mod session;

pub use classify::{classify, Swipe, SwipeThresholds};
pub use session::{Gesture, Release, TouchSession};

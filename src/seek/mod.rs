// SPDX-License-Identifier: MPL-2.0
//! Throttled real-time seek pipeline.
//!
//! Drag positions become seek targets through [`ScrubMapping`]; targets
//! reach the engine through [`SeekThrottle`], which forwards at most one
//! command per interval and always delivers the final one.

mod mapping;
mod scrub;
mod throttle;

pub use mapping::{clamp_target, ScrubMapping};
pub use scrub::{ScrubProgress, ScrubSession};
pub use throttle::SeekThrottle;

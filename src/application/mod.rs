// SPDX-License-Identifier: MPL-2.0
//! Application layer - Ports the overlay talks through.
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure layer implements application layer ports
//! - The overlay and presentation layers only see the traits
//!
//! # Example
//!
//! ```ignore
//! use seek_overlay::application::port::{PlaybackEngine, SeekCommand};
//!
//! // Infrastructure implements the port trait
//! struct MpvEngine { /* ... */ }
//! impl PlaybackEngine for MpvEngine { /* ... */ }
//!
//! // The overlay drives any engine through the trait
//! engine.seek(SeekCommand::Absolute { target_secs: 120.0 });
//! ```

pub mod port;

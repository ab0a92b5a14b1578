// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the overlay.
//!
//! Banner texts and notifications are Fluent messages embedded from
//! `assets/i18n/`. The locale comes from the `--lang` flag, then the
//! `[general] language` setting, then the system locale, and finally
//! falls back to `en-US`.

pub mod fluent;

pub use fluent::{resolve_locale, I18n, DEFAULT_LOCALE};

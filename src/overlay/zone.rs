// SPDX-License-Identifier: MPL-2.0
//! Hit testing of presses against the overlay layout.

use crate::config::defaults::{
    EDGE_STRIP_FRACTION, SEEK_BAR_HEIGHT_PX, SEEK_BAR_INSET_PX, TOP_IGNORE_FRACTION,
};
use crate::domain::gesture::Point;

/// Region a press lands in. The press stays with its region until release.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Zone {
    /// Top strip reserved for system gestures.
    Ignored,
    /// Left or right strip; a tap toggles the video info.
    EdgeStrip,
    /// The visible progress bar.
    SeekBar,
    /// Everything else feeds the gesture classifier.
    Gestures,
}

/// Overlay dimensions in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    pub width: f32,
    pub height: f32,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 720.0,
        }
    }
}

impl Layout {
    /// Width of the draggable progress bar.
    #[must_use]
    pub fn bar_width(&self) -> f32 {
        (self.width - 2.0 * SEEK_BAR_INSET_PX).max(0.0)
    }

    /// Zone under `point`. The seek bar only exists while visible.
    #[must_use]
    pub fn zone_at(&self, point: Point, seek_bar_visible: bool) -> Zone {
        if seek_bar_visible
            && point.y >= self.height - SEEK_BAR_HEIGHT_PX
            && point.x >= SEEK_BAR_INSET_PX
            && point.x <= self.width - SEEK_BAR_INSET_PX
        {
            return Zone::SeekBar;
        }
        if point.y < self.height * TOP_IGNORE_FRACTION {
            return Zone::Ignored;
        }
        let strip = self.width * EDGE_STRIP_FRACTION;
        if point.x < strip || point.x > self.width - strip {
            return Zone::EdgeStrip;
        }
        Zone::Gestures
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LAYOUT: Layout = Layout {
        width: 1000.0,
        height: 600.0,
    };

    #[test]
    fn top_strip_is_ignored() {
        assert_eq!(LAYOUT.zone_at(Point::new(500.0, 10.0), true), Zone::Ignored);
        assert_eq!(LAYOUT.zone_at(Point::new(20.0, 29.0), true), Zone::Ignored);
    }

    #[test]
    fn side_strips_are_edges() {
        assert_eq!(LAYOUT.zone_at(Point::new(49.0, 300.0), true), Zone::EdgeStrip);
        assert_eq!(LAYOUT.zone_at(Point::new(951.0, 300.0), true), Zone::EdgeStrip);
        assert_eq!(LAYOUT.zone_at(Point::new(50.0, 300.0), true), Zone::Gestures);
    }

    #[test]
    fn centre_feeds_gestures() {
        assert_eq!(LAYOUT.zone_at(Point::new(500.0, 300.0), false), Zone::Gestures);
    }

    #[test]
    fn seek_bar_only_when_visible() {
        let on_bar = Point::new(500.0, 580.0);
        assert_eq!(LAYOUT.zone_at(on_bar, true), Zone::SeekBar);
        assert_eq!(LAYOUT.zone_at(on_bar, false), Zone::Gestures);
    }

    #[test]
    fn bar_insets_fall_back_to_other_zones() {
        assert_eq!(LAYOUT.zone_at(Point::new(55.0, 580.0), true), Zone::Gestures);
        assert_eq!(LAYOUT.zone_at(Point::new(30.0, 580.0), true), Zone::EdgeStrip);
    }

    #[test]
    fn bar_width_excludes_insets() {
        assert_eq!(LAYOUT.bar_width(), 880.0);
        let narrow = Layout {
            width: 100.0,
            height: 100.0,
        };
        assert_eq!(narrow.bar_width(), 0.0);
    }
}

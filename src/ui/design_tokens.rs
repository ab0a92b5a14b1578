// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Visual constants shared by the overlay view.

## Organization

- **Palette**: Base colors
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Overlay element sizes
- **Typography**: Font size scale
- **Radius**: Border radii

## Examples

```
use seek_overlay::ui::design_tokens::{palette, opacity};
use iced::Color;

let banner_bg = Color {
    a: opacity::OVERLAY_STRONG,
    ..palette::BLACK
};
assert!(banner_bg.a < 1.0);
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);

    pub const PRIMARY_400: Color = Color::from_rgb(0.4, 0.7, 1.0);
    pub const PRIMARY_500: Color = Color::from_rgb(0.3, 0.6, 0.9);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const OPAQUE: f32 = 1.0;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    use crate::config::defaults::{PREVIEW_HEIGHT, PREVIEW_WIDTH};

    /// Height of the drawn progress track.
    pub const TIMELINE_TRACK: f32 = 4.0;

    /// Width of the time labels on each side of the track.
    pub const TIME_LABEL_WIDTH: f32 = 72.0;

    /// Displayed preview thumbnail size.
    #[allow(clippy::cast_precision_loss)]
    pub const PREVIEW_W: f32 = PREVIEW_WIDTH as f32;
    #[allow(clippy::cast_precision_loss)]
    pub const PREVIEW_H: f32 = PREVIEW_HEIGHT as f32;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Banner text in the middle of the screen.
    pub const BANNER: f32 = 30.0;

    /// Video title.
    pub const TITLE_MD: f32 = 20.0;

    /// Time labels.
    pub const BODY: f32 = 14.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > spacing::XXS);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::OVERLAY_MEDIUM > opacity::OVERLAY_SUBTLE);
    assert!(opacity::OVERLAY_STRONG > opacity::OVERLAY_MEDIUM);

    assert!(typography::BANNER > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::BODY);

    assert!(radius::MD > radius::SM);
};

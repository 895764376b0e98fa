/*
 *  icons.rs
 *
 *  printstat - machine controller status screen
 *
 *  Heater and bed bitmaps plus the strategy that picks between them
 *
 *  This program is free software: you can redistribute it and/or modify
 *  it under the terms of the GNU General Public License as published by
 *  the Free Software Foundation, either version 3 of the License, or
 *  (at your option) any later version.
 *
 *  This program is distributed in the hope that it will be useful,
 *  but WITHOUT ANY WARRANTY; without even the implied warranty of
 *  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 *  GNU General Public License for more details.
 *
 *  See <http://www.gnu.org/licenses/> to get a copy of the GNU General
 *  Public License.
 *
 */

use embedded_graphics::geometry::Size;
use serde::{Deserialize, Serialize};

/// Hotend with heat wiggles, 8x19
pub const GLYPH_HOTEND_HEATING: [u8; 19] = [
    0x24, 0x48, 0x24, 0x12, 0x24, 0x00, 0x00, 0xfe, 0x82, 0xba,
    0x82, 0xfe, 0x7c, 0x7c, 0x38, 0x38, 0x10, 0x10, 0x00,
];
/// Plain hotend, 8x19
pub const GLYPH_HOTEND_IDLE: [u8; 19] = [
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xfe, 0x82, 0xba,
    0x82, 0xfe, 0x7c, 0x7c, 0x38, 0x38, 0x10, 0x10, 0x00,
];
/// Bed with heat wiggles, 8x12
pub const GLYPH_BED_HEATING: [u8; 12] = [
    0x24, 0x12, 0x24, 0x48, 0x24, 0x12, 0x24, 0x00, 0x00, 0x00, 0x00, 0xff,
];
/// Bare bed plate, 8x1
pub const GLYPH_BED_IDLE: [u8; 1] = [0xff];

/// Bitmaps the status screen can place
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    HotendIdle,
    HotendHeating,
    BedIdle,
    BedHeating,
}

impl Icon {
    /// Row-major, MSB-first bitmap, one byte per row
    pub fn bitmap(self) -> &'static [u8] {
        match self {
            Icon::HotendIdle => &GLYPH_HOTEND_IDLE,
            Icon::HotendHeating => &GLYPH_HOTEND_HEATING,
            Icon::BedIdle => &GLYPH_BED_IDLE,
            Icon::BedHeating => &GLYPH_BED_HEATING,
        }
    }

    pub fn size(self) -> Size {
        Size::new(8, self.bitmap().len() as u32)
    }
}

/// Icon presentation options, resolved once at start-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IconStyle {
    /// Swap to the "heating" bitmap while a heater is active.
    /// When off the idle bitmap stays and a small dot marks heating.
    pub animated: bool,
    /// Swap the two bitmaps.
    pub inverted: bool,
    /// Draw a heat-percent bar next to active heaters.
    pub heat_percent: bool,
}

impl Default for IconStyle {
    fn default() -> Self {
        Self {
            animated: true,
            inverted: false,
            heat_percent: false,
        }
    }
}

/// Picks heater bitmaps according to an [`IconStyle`].
#[derive(Debug, Clone, Copy, Default)]
pub struct IconSelector {
    style: IconStyle,
}

impl IconSelector {
    pub fn new(style: IconStyle) -> Self {
        Self { style }
    }

    pub fn style(&self) -> IconStyle {
        self.style
    }

    fn lit(&self, heating: bool) -> bool {
        (self.style.animated && heating) != self.style.inverted
    }

    pub fn hotend(&self, heating: bool) -> Icon {
        if self.lit(heating) { Icon::HotendHeating } else { Icon::HotendIdle }
    }

    pub fn bed(&self, heating: bool) -> Icon {
        if self.lit(heating) { Icon::BedHeating } else { Icon::BedIdle }
    }

    /// Static icons get a dot instead of a bitmap swap.
    pub fn heat_dot(&self, heating: bool) -> bool {
        !self.style.animated && heating
    }

    pub fn heat_percent(&self, heating: bool) -> bool {
        self.style.heat_percent && heating
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_animated_icons_follow_heating() {
        let icons = IconSelector::new(IconStyle::default());
        assert_eq!(icons.hotend(true), Icon::HotendHeating);
        assert_eq!(icons.hotend(false), Icon::HotendIdle);
        assert_eq!(icons.bed(true), Icon::BedHeating);
        assert_eq!(icons.bed(false), Icon::BedIdle);
        assert!(!icons.heat_dot(true));
    }

    #[test]
    fn test_inverted_icons_swap() {
        let icons = IconSelector::new(IconStyle { inverted: true, ..Default::default() });
        assert_eq!(icons.hotend(true), Icon::HotendIdle);
        assert_eq!(icons.hotend(false), Icon::HotendHeating);
    }

    #[test]
    fn test_static_icons_use_dot() {
        let icons = IconSelector::new(IconStyle { animated: false, ..Default::default() });
        assert_eq!(icons.hotend(true), Icon::HotendIdle);
        assert!(icons.heat_dot(true));
        assert!(!icons.heat_dot(false));
    }

    #[test]
    fn test_icon_sizes() {
        assert_eq!(Icon::HotendHeating.size(), Size::new(8, 19));
        assert_eq!(Icon::BedHeating.size(), Size::new(8, 12));
        assert_eq!(Icon::BedIdle.size(), Size::new(8, 1));
    }
}

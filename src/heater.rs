/*
 *  heater.rs
 *
 *  printstat - machine controller status screen
 *
 *  Hotend and bed panel: icons, temperatures, heat-percent bars
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

use core::fmt::Write;

use arrayvec::ArrayString;
use embedded_graphics::geometry::{Point, Size};
use embedded_graphics::primitives::Rectangle;

use crate::canvas::Canvas;
use crate::constants::HEAT_BAR_AMBIENT;
use crate::icons::{Icon, IconSelector};
use crate::layout::HeaterLayout;
use crate::telemetry::HeaterReading;

/// Whole-degree temperature plus degree sign, e.g. `"200°"`
pub type TempText = ArrayString<8>;

/// Text and left edge for a temperature centred on `center_x`.
///
/// The value is right-justified in three columns and only the significant
/// columns are drawn, shifted left by half their width.
pub fn centered_temp(temp: f32, center_x: i32, font_width: i32) -> (TempText, i32) {
    let mut padded = ArrayString::<8>::new();
    let _ = write!(&mut padded, "{:>3}", temp as i16);

    let bytes = padded.as_bytes();
    let len = if bytes[0] != b' ' {
        padded.len()
    } else if bytes[1] != b' ' {
        2
    } else {
        1
    };

    let mut text = TempText::new();
    let _ = text.try_push_str(&padded[padded.len() - len..]);
    let _ = text.try_push('°');
    (text, center_x - len as i32 * font_width / 2 + 1)
}

/// Rows of the heat-percent bar.
///
/// Progress is measured from ambient (20 C) toward the target and stays 0
/// until the heater is past ambient with a target above it.
pub fn heat_bar_height(reading: &HeaterReading, bar_tall: u32) -> u32 {
    let span = reading.target - HEAT_BAR_AMBIENT;
    let perc = if span > 0.0 && reading.actual >= HEAT_BAR_AMBIENT {
        (reading.actual - HEAT_BAR_AMBIENT) / span
    } else {
        0.0
    };
    ((perc * bar_tall as f32 + 0.5) as u32).min(bar_tall)
}

/// Renders the hotend and bed icons with their temperatures
#[derive(Debug, Clone, Copy)]
pub struct HeaterPanel {
    layout: HeaterLayout,
    icons: IconSelector,
    font_width: i32,
}

impl HeaterPanel {
    pub fn new(layout: HeaterLayout, icons: IconSelector, font_width: i32) -> Self {
        Self { layout, icons, font_width }
    }

    fn bed_origin(&self, icon: Icon) -> Point {
        match icon {
            Icon::BedHeating => self.layout.bed_icon_heating,
            _ => self.layout.bed_icon_idle,
        }
    }

    fn temp<C: Canvas>(&self, canvas: &mut C, temp: f32, y: i32) -> Result<(), C::Error> {
        let (text, x) = centered_temp(temp, self.layout.text_x, self.font_width);
        canvas.text(Point::new(x, y), &text)
    }

    /// Frame right of the icon with a vertical fill line growing upward
    fn heat_bar<C: Canvas>(
        &self,
        canvas: &mut C,
        top: i32,
        height: u32,
        reading: &HeaterReading,
    ) -> Result<(), C::Error> {
        let bx = self.layout.heat_bar_x;
        canvas.frame(Rectangle::new(
            Point::new(bx, top),
            Size::new(self.layout.heat_bar_width, height),
        ))?;
        let tall = heat_bar_height(reading, height.saturating_sub(2));
        if tall > 0 {
            let ph = (height - 1 - tall) as i32;
            canvas.line(
                Point::new(bx + 1, top + ph),
                Point::new(bx + 1, top + ph + tall as i32 - 1),
            )?;
        }
        Ok(())
    }

    pub fn render<C: Canvas>(
        &self,
        canvas: &mut C,
        hotend: &HeaterReading,
        bed: &HeaterReading,
    ) -> Result<(), C::Error> {
        let l = &self.layout;
        let hotend_heating = hotend.is_heating();
        let bed_heating = bed.is_heating();

        let hotend_icon = self.icons.hotend(hotend_heating);
        canvas.icon(l.hotend_icon, hotend_icon)?;
        let bed_icon = self.icons.bed(bed_heating);
        canvas.icon(self.bed_origin(bed_icon), bed_icon)?;

        if self.icons.heat_percent(hotend_heating) {
            self.heat_bar(canvas, l.hotend_icon.y, hotend_icon.size().height, hotend)?;
        }
        if self.icons.heat_percent(bed_heating) {
            let top = l.bed_icon_heating.y;
            let height = Icon::BedHeating.size().height;
            self.heat_bar(canvas, top, height, bed)?;
        }

        self.temp(canvas, hotend.actual, l.hotend_actual_y)?;
        self.temp(canvas, hotend.target, l.hotend_target_y)?;
        self.temp(canvas, bed.actual, l.bed_actual_y)?;
        self.temp(canvas, bed.target, l.bed_target_y)?;

        if self.icons.heat_dot(hotend_heating) {
            canvas.erase_box(Rectangle::new(
                Point::new(l.text_x, l.heat_dot_y),
                Size::new(2, 2),
            ))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::{DrawOp, RecordingCanvas};
    use crate::icons::IconStyle;

    #[test]
    fn test_centered_temp_widths() {
        assert_eq!(centered_temp(200.0, 18, 6), (TempText::from("200°").unwrap(), 10));
        assert_eq!(centered_temp(60.7, 18, 6), (TempText::from("60°").unwrap(), 13));
        assert_eq!(centered_temp(5.0, 18, 6), (TempText::from("5°").unwrap(), 16));
        assert_eq!(centered_temp(-12.0, 18, 6), (TempText::from("-12°").unwrap(), 10));
    }

    #[test]
    fn test_heat_bar_height() {
        let bar = 17;
        assert_eq!(heat_bar_height(&HeaterReading::new(15.0, 200.0), bar), 0);
        assert_eq!(heat_bar_height(&HeaterReading::new(20.0, 200.0), bar), 0);
        assert_eq!(heat_bar_height(&HeaterReading::new(110.0, 200.0), bar), 9);
        assert_eq!(heat_bar_height(&HeaterReading::new(200.0, 200.0), bar), 17);
        assert_eq!(heat_bar_height(&HeaterReading::new(250.0, 200.0), bar), 17);
        assert_eq!(heat_bar_height(&HeaterReading::new(30.0, 10.0), bar), 0);
    }

    #[test]
    fn test_panel_picks_icons_and_positions() {
        let panel = HeaterPanel::new(HeaterLayout::default(), IconSelector::default(), 6);
        let mut canvas = RecordingCanvas::new();
        panel
            .render(&mut canvas, &HeaterReading::new(25.0, 210.0), &HeaterReading::new(60.0, 60.0))
            .unwrap();

        let ops = canvas.ops();
        assert_eq!(ops[0], DrawOp::Icon(Point::new(0, 2), Icon::HotendHeating));
        assert_eq!(ops[1], DrawOp::Icon(Point::new(0, 39), Icon::BedIdle));
        assert!(ops.contains(&DrawOp::Text(Point::new(13, 20), "25°".into())));
        assert!(ops.contains(&DrawOp::Text(Point::new(10, 11), "210°".into())));
        assert!(ops.contains(&DrawOp::Text(Point::new(13, 43), "60°".into())));
        assert!(!ops.iter().any(|op| matches!(op, DrawOp::EraseBox(_))));
    }

    #[test]
    fn test_static_icon_gets_heat_dot() {
        let icons = IconSelector::new(IconStyle { animated: false, ..Default::default() });
        let panel = HeaterPanel::new(HeaterLayout::default(), icons, 6);
        let mut canvas = RecordingCanvas::new();
        panel
            .render(&mut canvas, &HeaterReading::new(25.0, 210.0), &HeaterReading::default())
            .unwrap();

        assert!(canvas.ops().contains(&DrawOp::EraseBox(Rectangle::new(
            Point::new(18, 17),
            Size::new(2, 2)
        ))));
    }

    #[test]
    fn test_heat_percent_overlay() {
        let icons = IconSelector::new(IconStyle { heat_percent: true, ..Default::default() });
        let panel = HeaterPanel::new(HeaterLayout::default(), icons, 6);
        let mut canvas = RecordingCanvas::new();
        panel
            .render(&mut canvas, &HeaterReading::new(110.0, 200.0), &HeaterReading::default())
            .unwrap();

        let ops = canvas.ops();
        assert!(ops.contains(&DrawOp::Frame(Rectangle::new(Point::new(9, 2), Size::new(3, 19)))));
        // 9 rows ending on the last row inside the frame
        assert!(ops.contains(&DrawOp::Line(Point::new(10, 2 + 9), Point::new(10, 2 + 17))));
    }
}

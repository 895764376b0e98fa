/*
 *  position.rs
 *
 *  printstat - machine controller status screen
 *
 *  Z height bar and XY head-position plot
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

use embedded_graphics::geometry::{Point, Size};
use embedded_graphics::primitives::Rectangle;
use serde::{Deserialize, Serialize};

use crate::canvas::Canvas;
use crate::constants::{X_MAX_POS, Y_MAX_POS, Z_MAX_POS};
use crate::layout::PositionLayout;
use crate::telemetry::Position;

/// Machine travel per axis, mm
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Bounds {
    pub x_max: f32,
    pub y_max: f32,
    pub z_max: f32,
}

impl Default for Bounds {
    fn default() -> Self {
        Self {
            x_max: X_MAX_POS,
            y_max: Y_MAX_POS,
            z_max: Z_MAX_POS,
        }
    }
}

/// Renders the Z bar and the XY plot.
///
/// Coordinates are expected inside `0..=bound`; anything outside lands
/// outside the frames and is drawn there unclamped.
#[derive(Debug, Clone, Copy)]
pub struct PositionIndicator {
    layout: PositionLayout,
    bounds: Bounds,
}

impl PositionIndicator {
    pub fn new(layout: PositionLayout, bounds: Bounds) -> Self {
        Self { layout, bounds }
    }

    /// Filled rows of the Z bar, `round(z * bar_height / z_max)`
    pub fn z_fill_height(&self, z: f32) -> i32 {
        if self.bounds.z_max <= 0.0 {
            return 0;
        }
        (z * self.layout.z_bar_height as f32 / self.bounds.z_max).round() as i32
    }

    /// Fill rectangle anchored on the bar's bottom row, `None` when empty
    pub fn z_fill(&self, z: f32) -> Option<Rectangle> {
        let h = self.z_fill_height(z);
        if h <= 0 {
            return None;
        }
        let l = &self.layout;
        Some(Rectangle::new(
            Point::new(l.z_fill_x, l.z_fill_bottom - h + 1),
            Size::new(l.z_fill_width, h as u32),
        ))
    }

    /// Plot pixel for the head, truncated toward zero
    pub fn xy_point(&self, x: f32, y: f32) -> Point {
        let l = &self.layout;
        let px = l.xy_origin.x as f32 + x * l.xy_scale / self.bounds.x_max;
        let py = l.xy_origin.y as f32 - y * l.xy_scale / self.bounds.y_max;
        Point::new(px as i32, py as i32)
    }

    pub fn render<C: Canvas>(&self, canvas: &mut C, position: Position) -> Result<(), C::Error> {
        canvas.frame(self.layout.z_frame)?;
        if let Some(fill) = self.z_fill(position.z) {
            canvas.filled_box(fill)?;
        }

        canvas.frame(self.layout.xy_frame)?;
        canvas.pixel(self.xy_point(position.x, position.y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::{DrawOp, RecordingCanvas};

    fn indicator() -> PositionIndicator {
        PositionIndicator::new(PositionLayout::default(), Bounds::default())
    }

    #[test]
    fn test_z_fill_height() {
        let ind = indicator();
        assert_eq!(ind.z_fill_height(0.0), 0);
        assert_eq!(ind.z_fill_height(200.0), 36);
        assert_eq!(ind.z_fill_height(100.0), 18);
        // 3 * 36 / 200 = 0.54 -> 1
        assert_eq!(ind.z_fill_height(3.0), 1);
    }

    #[test]
    fn test_z_fill_is_monotonic() {
        let ind = indicator();
        let mut last = 0;
        for step in 0..=400 {
            let h = ind.z_fill_height(step as f32 * 0.5);
            assert!(h >= last);
            last = h;
        }
        assert_eq!(last, 36);
    }

    #[test]
    fn test_z_fill_rect_grows_upward_from_bottom() {
        let ind = indicator();
        assert_eq!(ind.z_fill(0.0), None);

        let full = ind.z_fill(200.0).unwrap();
        assert_eq!(full.top_left, Point::new(81, 63 - 36 + 1));
        assert_eq!(full.size, Size::new(7, 36));
        assert_eq!(full.bottom_right(), Some(Point::new(87, 63)));
    }

    #[test]
    fn test_xy_point_corners() {
        let ind = indicator();
        assert_eq!(ind.xy_point(0.0, 0.0), Point::new(91, 62));
        assert_eq!(ind.xy_point(200.0, 200.0), Point::new(127, 26));
        assert_eq!(ind.xy_point(100.0, 100.0), Point::new(109, 44));
    }

    #[test]
    fn test_xy_point_not_clamped() {
        let ind = indicator();
        assert_eq!(ind.xy_point(400.0, 0.0), Point::new(163, 62));
    }

    #[test]
    fn test_render_draws_single_point() {
        let mut canvas = RecordingCanvas::new();
        indicator()
            .render(&mut canvas, Position::new(50.0, 50.0, 100.0))
            .unwrap();

        assert_eq!(canvas.pixels(), vec![Point::new(100, 53)]);
        let fills = canvas
            .ops()
            .iter()
            .filter(|op| matches!(op, DrawOp::FilledBox(_)))
            .count();
        assert_eq!(fills, 1);
    }
}

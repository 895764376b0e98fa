/*
 *  gauge.rs
 *
 *  printstat - machine controller status screen
 *
 *  Semicircular fan-duty dial with needle
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

use core::f32::consts::PI;
use core::fmt::Write;

use arrayvec::ArrayString;
use embedded_graphics::geometry::Point;

use crate::canvas::{Canvas, Quadrant};
use crate::layout::GaugeLayout;

/// Fan duty dial: two upper quadrant arcs and a needle from the pivot.
#[derive(Debug, Clone, Copy)]
pub struct FanGauge {
    layout: GaugeLayout,
}

impl FanGauge {
    pub fn new(layout: GaugeLayout) -> Self {
        Self { layout }
    }

    /// Needle tip for `percent` (clamped to 0..=100).
    ///
    /// x and y deliberately use different angles:
    /// `x = cx - cos((p*PI - PI)/100) * r`, `y = cy - sin(p*PI/100) * r`.
    /// The tip is rounded to the nearest pixel, which puts 0% on
    /// `(cx - r, cy)` and 100% on `(cx + r, cy)`.
    pub fn needle_tip(&self, percent: u8) -> Point {
        let p = f32::from(percent.min(100));
        let r = self.layout.needle_radius;
        let c = self.layout.center;
        let x = c.x as f32 - ((p * PI - PI) / 100.0).cos() * r;
        let y = c.y as f32 - (p * PI / 100.0).sin() * r;
        Point::new(x.round() as i32, y.round() as i32)
    }

    /// Three columns, right-justified
    pub fn percent_text(percent: u8) -> ArrayString<4> {
        let mut buf = ArrayString::new();
        let _ = write!(&mut buf, "{:>3}", percent.min(100));
        buf
    }

    pub fn render<C: Canvas>(&self, canvas: &mut C, percent: u8) -> Result<(), C::Error> {
        let l = &self.layout;
        canvas.text(l.label, "Fan")?;
        canvas.text(l.percent, &Self::percent_text(percent))?;
        canvas.text(l.percent_sign, "%")?;

        canvas.arc(l.center, l.radius, Quadrant::UpperRight)?;
        canvas.arc(l.center, l.radius, Quadrant::UpperLeft)?;
        canvas.line(l.center, self.needle_tip(percent))
    }
}

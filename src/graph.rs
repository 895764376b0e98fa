/*
 *  graph.rs
 *
 *  printstat - machine controller status screen
 *
 *  Dot-plot of a temperature history window
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

use embedded_graphics::geometry::Point;

use crate::canvas::Canvas;
use crate::history::{Channel, HistoryBuffer};
use crate::layout::GraphLayout;
use crate::scale::ScaleRange;

/// One temperature graph.
///
/// History slot `i` is drawn in pixel column `x_origin + i`, so graphs built
/// from the same [`GraphLayout`] line up in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TempGraph {
    pub x_origin: i32,
    pub baseline: i32,
    pub height: i32,
}

impl TempGraph {
    pub fn for_channel(layout: &GraphLayout, channel: Channel) -> Self {
        let baseline = match channel {
            Channel::Heater => layout.heater_baseline,
            Channel::Bed => layout.bed_baseline,
        };
        Self {
            x_origin: layout.x_origin,
            baseline,
            height: layout.height,
        }
    }

    /// Actual then target point for every populated slot, oldest first.
    pub fn points<'a>(
        &'a self,
        buffer: &'a HistoryBuffer,
        range: ScaleRange,
    ) -> impl Iterator<Item = Point> + 'a {
        buffer.populated().flat_map(move |(i, s)| {
            let x = self.x_origin + i as i32;
            [s.actual, s.target]
                .map(|v| Point::new(x, range.row(v, self.baseline, self.height)))
        })
    }

    pub fn render<C: Canvas>(
        &self,
        canvas: &mut C,
        buffer: &HistoryBuffer,
        range: ScaleRange,
    ) -> Result<(), C::Error> {
        for p in self.points(buffer, range) {
            canvas.pixel(p)?;
        }
        Ok(())
    }

    /// Vertical rule just left of slot 0, spanning the graph
    pub fn render_border<C: Canvas>(&self, canvas: &mut C) -> Result<(), C::Error> {
        let x = self.x_origin - 1;
        canvas.line(
            Point::new(x, self.baseline - self.height),
            Point::new(x, self.baseline),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::{DrawOp, RecordingCanvas};
    use crate::history::Sample;

    #[test]
    fn test_points_per_populated_slot() {
        let graph = TempGraph::for_channel(&GraphLayout::default(), Channel::Heater);
        let mut buf = HistoryBuffer::new(46);
        buf.push(Sample::new(20, 200));
        buf.push(Sample::new(110, 200));
        let range = ScaleRange::of(&buf).unwrap();

        let pts: Vec<Point> = graph.points(&buf, range).collect();
        // den = 200 - 20 + 2 = 182
        assert_eq!(
            pts,
            vec![
                Point::new(33 + 44, 21 - 21 / 182),
                Point::new(33 + 44, 21 - 181 * 21 / 182),
                Point::new(33 + 45, 21 - 91 * 21 / 182),
                Point::new(33 + 45, 21 - 181 * 21 / 182),
            ]
        );
    }

    #[test]
    fn test_render_emits_pixels() {
        let graph = TempGraph::for_channel(&GraphLayout::default(), Channel::Bed);
        let mut buf = HistoryBuffer::new(46);
        for t in [20, 30, 40] {
            buf.push(Sample::new(t, 60));
        }
        let range = ScaleRange::of(&buf).unwrap();

        let mut canvas = RecordingCanvas::new();
        graph.render(&mut canvas, &buf, range).unwrap();
        let pixels = canvas.pixels();
        assert_eq!(pixels.len(), 6);
        assert!(pixels.iter().all(|p| (76..=78).contains(&p.x)));
        assert!(pixels.iter().all(|p| p.y <= 44 && p.y > 23));
    }

    #[test]
    fn test_border_lines() {
        let layout = GraphLayout::default();
        let mut canvas = RecordingCanvas::new();
        TempGraph::for_channel(&layout, Channel::Heater).render_border(&mut canvas).unwrap();
        TempGraph::for_channel(&layout, Channel::Bed).render_border(&mut canvas).unwrap();
        assert_eq!(
            canvas.ops(),
            &[
                DrawOp::Line(Point::new(32, 0), Point::new(32, 21)),
                DrawOp::Line(Point::new(32, 23), Point::new(32, 44)),
            ]
        );
    }
}

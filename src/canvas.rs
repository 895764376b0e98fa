/*
 *  canvas.rs
 *
 *  printstat - machine controller status screen
 *
 *  Pixel-primitive interface the renderers draw through
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

use core::convert::Infallible;

use embedded_graphics::{
    image::{Image, ImageRaw},
    mono_font::{iso_8859_1::FONT_6X10, MonoTextStyle},
    pixelcolor::BinaryColor,
    prelude::*,
    primitives::{Arc, Line, PrimitiveStyle, PrimitiveStyleBuilder, Rectangle, StrokeAlignment},
    text::{Baseline, Text},
};

use crate::icons::Icon;

/// Circle quadrant selector for [`Canvas::arc`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quadrant {
    UpperRight,
    UpperLeft,
}

impl Quadrant {
    /// Start angle in degrees, clockwise from 3 o'clock
    fn start_deg(self) -> f32 {
        match self {
            Quadrant::UpperRight => -90.0,
            Quadrant::UpperLeft => 180.0,
        }
    }
}

/// Write-only drawing surface used by every status screen renderer.
///
/// Coordinates are screen pixels, origin top-left. Text is positioned by
/// its left edge on the alphabetic baseline.
pub trait Canvas {
    type Error;

    fn pixel(&mut self, at: Point) -> Result<(), Self::Error>;

    fn line(&mut self, start: Point, end: Point) -> Result<(), Self::Error>;

    fn filled_box(&mut self, area: Rectangle) -> Result<(), Self::Error>;

    /// One pixel outline around `area`
    fn frame(&mut self, area: Rectangle) -> Result<(), Self::Error>;

    /// Fill `area` with the background colour
    fn erase_box(&mut self, area: Rectangle) -> Result<(), Self::Error>;

    fn arc(&mut self, center: Point, radius: u32, quadrant: Quadrant) -> Result<(), Self::Error>;

    fn text(&mut self, baseline_left: Point, text: &str) -> Result<(), Self::Error>;

    fn icon(&mut self, top_left: Point, icon: Icon) -> Result<(), Self::Error>;
}

/// [`Canvas`] over any monochrome embedded-graphics target
pub struct EgCanvas<'a, D> {
    target: &'a mut D,
}

impl<'a, D> EgCanvas<'a, D>
where
    D: DrawTarget<Color = BinaryColor>,
{
    pub fn new(target: &'a mut D) -> Self {
        Self { target }
    }

    fn fill(&mut self, area: Rectangle, color: BinaryColor) -> Result<(), D::Error> {
        area.into_styled(PrimitiveStyle::with_fill(color))
            .draw(self.target)
    }
}

impl<D> Canvas for EgCanvas<'_, D>
where
    D: DrawTarget<Color = BinaryColor>,
{
    type Error = D::Error;

    fn pixel(&mut self, at: Point) -> Result<(), Self::Error> {
        Pixel(at, BinaryColor::On).draw(self.target)
    }

    fn line(&mut self, start: Point, end: Point) -> Result<(), Self::Error> {
        Line::new(start, end)
            .into_styled(PrimitiveStyle::with_stroke(BinaryColor::On, 1))
            .draw(self.target)
    }

    fn filled_box(&mut self, area: Rectangle) -> Result<(), Self::Error> {
        self.fill(area, BinaryColor::On)
    }

    fn frame(&mut self, area: Rectangle) -> Result<(), Self::Error> {
        area.into_styled(
            PrimitiveStyleBuilder::new()
                .stroke_color(BinaryColor::On)
                .stroke_width(1)
                .stroke_alignment(StrokeAlignment::Inside)
                .build(),
        )
        .draw(self.target)
    }

    fn erase_box(&mut self, area: Rectangle) -> Result<(), Self::Error> {
        self.fill(area, BinaryColor::Off)
    }

    fn arc(&mut self, center: Point, radius: u32, quadrant: Quadrant) -> Result<(), Self::Error> {
        Arc::with_center(center, radius * 2 + 1, quadrant.start_deg().deg(), 90.0f32.deg())
            .into_styled(PrimitiveStyle::with_stroke(BinaryColor::On, 1))
            .draw(self.target)
    }

    fn text(&mut self, baseline_left: Point, text: &str) -> Result<(), Self::Error> {
        let style = MonoTextStyle::new(&FONT_6X10, BinaryColor::On);
        Text::with_baseline(text, baseline_left, style, Baseline::Alphabetic)
            .draw(self.target)?;
        Ok(())
    }

    fn icon(&mut self, top_left: Point, icon: Icon) -> Result<(), Self::Error> {
        let raw = ImageRaw::<BinaryColor>::new(icon.bitmap(), icon.size().width);
        Image::new(&raw, top_left).draw(self.target)
    }
}

/// One recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Pixel(Point),
    Line(Point, Point),
    FilledBox(Rectangle),
    Frame(Rectangle),
    EraseBox(Rectangle),
    Arc { center: Point, radius: u32, quadrant: Quadrant },
    Text(Point, String),
    Icon(Point, Icon),
}

/// [`Canvas`] that records every call instead of rasterising.
///
/// Lets tests assert on exact coordinates without going through a
/// framebuffer.
#[derive(Debug, Default, Clone)]
pub struct RecordingCanvas {
    ops: Vec<DrawOp>,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    pub fn clear(&mut self) {
        self.ops.clear();
    }

    pub fn pixels(&self) -> Vec<Point> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Pixel(p) => Some(*p),
                _ => None,
            })
            .collect()
    }

    /// Text drawn with its left edge at `x`, in draw order
    pub fn texts_at_x(&self, x: i32) -> Vec<(Point, &str)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text(p, s) if p.x == x => Some((*p, s.as_str())),
                _ => None,
            })
            .collect()
    }

    pub fn contains_text(&self, text: &str) -> bool {
        self.ops
            .iter()
            .any(|op| matches!(op, DrawOp::Text(_, s) if s == text))
    }
}

impl Canvas for RecordingCanvas {
    type Error = Infallible;

    fn pixel(&mut self, at: Point) -> Result<(), Self::Error> {
        self.ops.push(DrawOp::Pixel(at));
        Ok(())
    }

    fn line(&mut self, start: Point, end: Point) -> Result<(), Self::Error> {
        self.ops.push(DrawOp::Line(start, end));
        Ok(())
    }

    fn filled_box(&mut self, area: Rectangle) -> Result<(), Self::Error> {
        self.ops.push(DrawOp::FilledBox(area));
        Ok(())
    }

    fn frame(&mut self, area: Rectangle) -> Result<(), Self::Error> {
        self.ops.push(DrawOp::Frame(area));
        Ok(())
    }

    fn erase_box(&mut self, area: Rectangle) -> Result<(), Self::Error> {
        self.ops.push(DrawOp::EraseBox(area));
        Ok(())
    }

    fn arc(&mut self, center: Point, radius: u32, quadrant: Quadrant) -> Result<(), Self::Error> {
        self.ops.push(DrawOp::Arc { center, radius, quadrant });
        Ok(())
    }

    fn text(&mut self, baseline_left: Point, text: &str) -> Result<(), Self::Error> {
        self.ops.push(DrawOp::Text(baseline_left, text.to_string()));
        Ok(())
    }

    fn icon(&mut self, top_left: Point, icon: Icon) -> Result<(), Self::Error> {
        self.ops.push(DrawOp::Icon(top_left, icon));
        Ok(())
    }
}

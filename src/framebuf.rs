/*
 *  framebuf.rs
 *
 *  printstat - machine controller status screen
 *
 *  Runtime-sized monochrome framebuffer with text and PBM dumps
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
use std::io::{self, Write};

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;

/// One `BinaryColor` per pixel, row-major.
#[derive(Debug, Clone)]
pub struct MonoFrameBuf {
    buf: Vec<BinaryColor>,
    w: usize,
    h: usize,
}

impl MonoFrameBuf {
    pub fn new(width: u32, height: u32) -> Self {
        let (w, h) = (width as usize, height as usize);
        Self { buf: vec![BinaryColor::Off; w * h], w, h }
    }

    pub fn width(&self) -> usize { self.w }
    pub fn height(&self) -> usize { self.h }

    pub fn as_slice(&self) -> &[BinaryColor] { &self.buf }

    pub fn clear_color(&mut self, color: BinaryColor) {
        self.buf.fill(color);
    }

    #[inline]
    fn idx(&self, x: i32, y: i32) -> Option<usize> {
        if x >= 0 && y >= 0 && (x as usize) < self.w && (y as usize) < self.h {
            Some(y as usize * self.w + x as usize)
        } else {
            None
        }
    }

    /// Off-screen coordinates read as unlit.
    pub fn is_on(&self, x: i32, y: i32) -> bool {
        self.idx(x, y)
            .map(|i| self.buf[i] == BinaryColor::On)
            .unwrap_or(false)
    }

    pub fn count_on(&self) -> usize {
        self.buf.iter().filter(|&&p| p == BinaryColor::On).count()
    }

    /// Lit pixels inside the given rows, inclusive
    pub fn count_on_rows(&self, top: usize, bottom: usize) -> usize {
        let bottom = bottom.min(self.h.saturating_sub(1));
        (top..=bottom)
            .flat_map(|y| self.buf[y * self.w..(y + 1) * self.w].iter())
            .filter(|&&p| p == BinaryColor::On)
            .count()
    }

    /// Two characters per pixel so the aspect survives a terminal
    pub fn to_ascii(&self) -> String {
        let mut out = String::with_capacity((self.w * 2 + 1) * self.h);
        for row in self.buf.chunks(self.w) {
            for &p in row {
                out.push_str(if p == BinaryColor::On { "##" } else { "  " });
            }
            out.push('\n');
        }
        out
    }

    /// Plain PBM (P1)
    pub fn write_pbm<W: Write>(&self, mut out: W) -> io::Result<()> {
        writeln!(out, "P1")?;
        writeln!(out, "{} {}", self.w, self.h)?;
        for row in self.buf.chunks(self.w) {
            let line: Vec<&str> = row
                .iter()
                .map(|&p| if p == BinaryColor::On { "1" } else { "0" })
                .collect();
            writeln!(out, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

impl OriginDimensions for MonoFrameBuf {
    fn size(&self) -> Size {
        Size::new(self.w as u32, self.h as u32)
    }
}

impl DrawTarget for MonoFrameBuf {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(p, c) in pixels {
            if let Some(i) = self.idx(p.x, p.y) {
                self.buf[i] = c;
            }
        }
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.clear_color(color);
        Ok(())
    }
}

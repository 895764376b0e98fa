/*
 *  lib.rs
 *
 *  printstat - machine controller status screen
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

//! Monochrome 128x64 status screen for a 3D-printer style machine
//! controller: heater panel, temperature history graphs, axis read-out,
//! Z bar, XY plot and fan gauge.

pub mod constants;
pub mod layout;
pub mod icons;
pub mod canvas;
pub mod framebuf;
pub mod telemetry;
pub mod history;
pub mod scale;
pub mod graph;
pub mod gauge;
pub mod position;
pub mod axis;
pub mod heater;
pub mod screen;
pub mod config;
pub mod sim;

pub use canvas::{Canvas, DrawOp, EgCanvas, RecordingCanvas};
pub use framebuf::MonoFrameBuf;
pub use screen::{ScreenConfig, StatusScreen};
pub use telemetry::{Telemetry, TelemetrySnapshot};

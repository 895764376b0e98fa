/*
 *  layout.rs
 *
 *  printstat - machine controller status screen
 *
 *  Named, overridable geometry for every status screen element
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

use crate::constants::*;

/// Layout configuration for the status screen
///
/// The defaults reproduce the stock 128x64 arrangement: heater panel on the
/// left, temperature graphs in the middle, axis read-out and position plots
/// on the right, fan gauge along the bottom.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenLayout {
    /// Display width in pixels
    pub width: u32,

    /// Display height in pixels
    pub height: u32,

    /// Advance width used when centring temperature text
    pub font_width: i32,

    pub graphs: GraphLayout,
    pub heaters: HeaterLayout,
    pub axes: AxisLayout,
    pub position: PositionLayout,
    pub gauge: GaugeLayout,
}

/// Temperature graph placement
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GraphLayout {
    /// Pixel column of history slot 0
    pub x_origin: i32,
    /// Graph height in pixels
    pub height: i32,
    /// Bottom row of the heater graph
    pub heater_baseline: i32,
    /// Bottom row of the bed graph
    pub bed_baseline: i32,
}

/// Heater and bed icons, temperatures and heat-percent bars
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeaterLayout {
    pub hotend_icon: Point,
    pub bed_icon_heating: Point,
    pub bed_icon_idle: Point,
    /// Centre column of the temperature text
    pub text_x: i32,
    pub hotend_target_y: i32,
    pub hotend_actual_y: i32,
    pub bed_target_y: i32,
    pub bed_actual_y: i32,
    pub heat_dot_y: i32,
    pub heat_bar_x: i32,
    pub heat_bar_width: u32,
}

/// Axis label/value columns and one baseline per axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisLayout {
    pub label_x: i32,
    pub value_x: i32,
    pub rows: [i32; 3],
}

/// Z bar and XY plot geometry
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionLayout {
    pub z_frame: Rectangle,
    pub z_fill_x: i32,
    pub z_fill_width: u32,
    /// Bottom pixel row of the z fill
    pub z_fill_bottom: i32,
    /// Fill height at `z == z_max`
    pub z_bar_height: u32,
    pub xy_frame: Rectangle,
    /// Pixel for machine (0, 0)
    pub xy_origin: Point,
    /// Pixels spanned by the full travel of X and Y
    pub xy_scale: f32,
}

/// Fan gauge geometry
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GaugeLayout {
    pub center: Point,
    /// Radius of the dial arcs
    pub radius: u32,
    /// Length of the needle
    pub needle_radius: f32,
    pub label: Point,
    pub percent: Point,
    pub percent_sign: Point,
}

impl Default for ScreenLayout {
    fn default() -> Self {
        Self {
            width: DISPLAY_WIDTH,
            height: DISPLAY_HEIGHT,
            font_width: INFO_FONT_WIDTH,
            graphs: GraphLayout::default(),
            heaters: HeaterLayout::default(),
            axes: AxisLayout::default(),
            position: PositionLayout::default(),
            gauge: GaugeLayout::default(),
        }
    }
}

impl Default for GraphLayout {
    fn default() -> Self {
        Self {
            x_origin: GRAPH_X_ORIGIN,
            height: GRAPH_HEIGHT,
            heater_baseline: HEATER_GRAPH_BASELINE,
            bed_baseline: BED_GRAPH_BASELINE,
        }
    }
}

impl Default for HeaterLayout {
    fn default() -> Self {
        Self {
            hotend_icon: Point::new(HOTEND_ICON_X, HOTEND_ICON_Y),
            bed_icon_heating: Point::new(HOTEND_ICON_X, BED_ICON_HEATING_Y),
            bed_icon_idle: Point::new(HOTEND_ICON_X, BED_ICON_IDLE_Y),
            text_x: TEMP_TEXT_X,
            hotend_target_y: HOTEND_TARGET_Y,
            hotend_actual_y: HOTEND_ACTUAL_Y,
            bed_target_y: BED_TARGET_Y,
            bed_actual_y: BED_ACTUAL_Y,
            heat_dot_y: HEAT_DOT_Y,
            heat_bar_x: HEAT_BAR_X,
            heat_bar_width: HEAT_BAR_WIDTH,
        }
    }
}

impl Default for AxisLayout {
    fn default() -> Self {
        Self {
            label_x: AXIS_LABEL_X,
            value_x: AXIS_VALUE_X,
            rows: AXIS_ROWS,
        }
    }
}

impl Default for PositionLayout {
    fn default() -> Self {
        Self {
            z_frame: Rectangle::new(
                Point::new(Z_FRAME_X, Z_FRAME_Y),
                Size::new(Z_FRAME_WIDTH, Z_FRAME_HEIGHT),
            ),
            z_fill_x: Z_FILL_X,
            z_fill_width: Z_FILL_WIDTH,
            z_fill_bottom: Z_FILL_BOTTOM,
            z_bar_height: Z_BAR_HEIGHT,
            xy_frame: Rectangle::new(
                Point::new(XY_FRAME_X, XY_FRAME_Y),
                Size::new(XY_FRAME_SIZE, XY_FRAME_SIZE),
            ),
            xy_origin: Point::new(XY_ORIGIN_X, XY_ORIGIN_Y),
            xy_scale: XY_SCALE,
        }
    }
}

impl Default for GaugeLayout {
    fn default() -> Self {
        Self {
            center: Point::new(GAUGE_CENTER_X, GAUGE_CENTER_Y),
            radius: GAUGE_RADIUS,
            needle_radius: GAUGE_NEEDLE_RADIUS,
            label: Point::new(FAN_LABEL_X, FAN_LABEL_Y),
            percent: Point::new(FAN_PERCENT_X, FAN_PERCENT_Y),
            percent_sign: Point::new(FAN_PERCENT_SIGN_X, FAN_PERCENT_Y),
        }
    }
}
